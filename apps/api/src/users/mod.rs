pub mod display_name;
pub mod handlers;
