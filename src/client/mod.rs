pub mod clubhouse_client;
pub mod sheets_client;

pub use clubhouse_client::{ClubhouseClient, StoryApi};
pub use sheets_client::{SheetAppender, SheetsClient};
