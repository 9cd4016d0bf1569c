pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::sign_in_form;
pub use layouts::desktop::{desktop_layout, Chrome};
