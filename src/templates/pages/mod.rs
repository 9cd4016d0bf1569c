pub mod add_item;
pub mod admin;
pub mod auth;
pub mod browse;
pub mod dashboard;
pub mod error;
pub mod home;
pub mod item;
pub mod not_found;
pub mod profile;

pub use add_item::{add_item_page, image_previews, AddItemVm};
pub use admin::{admin_page, AdminVm};
pub use auth::auth_page;
pub use browse::{browse_page, browse_results};
pub use dashboard::{dashboard_page, DashboardVm};
pub use error::error_page;
pub use home::home_page;
pub use item::{item_page, ItemVm};
pub use not_found::not_found_page;
pub use profile::{profile_page, profile_signed_out_page, ProfileVm};
