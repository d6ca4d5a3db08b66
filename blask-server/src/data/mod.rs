pub mod memory;
pub mod post_repository;
