pub mod api;
pub mod blog;
pub mod home;
