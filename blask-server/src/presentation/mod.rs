pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod templates;
