mod account_tests;
mod add_item_tests;
mod admin_tests;
mod browse_tests;
mod item_tests;
