pub mod points;
pub mod story;
pub mod team;

// Re-export commonly used types
pub use points::{PointsByTeam, TeamPoints, TypePoints};
pub use story::{Page, SearchPage, Story, StoryRecord, StoryType};
pub use team::Team;
