//! A small blog: post storage with validation, served as HTML pages and a
//! JSON API.

pub mod application;
pub mod data;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod server;
