pub mod catalog;
pub mod item;
pub mod listing;
pub mod moderation;
pub mod profile;
pub mod redemption;
pub mod submission;
pub mod user;

pub use catalog::{BrowseState, Selection, ViewMode};
pub use listing::{Category, Condition, Listing};
pub use user::User;
