pub mod auth;
pub mod stories;
pub mod teams;

pub use auth::handle_auth;
pub use stories::handle_stories;
pub use teams::handle_teams;
