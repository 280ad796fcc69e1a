// Module declarations
pub mod aggregate;
pub mod cli;
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod dates;
pub mod error;
pub mod fetch;
pub mod formatting;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod publish;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use cli_context::{ReportContext, ReportContextBuilder};
pub use client::{ClubhouseClient, SheetAppender, SheetsClient, StoryApi};
pub use config::{Config, load_config, save_config};
pub use error::{ReportError, ReportResult};
pub use models::*;
