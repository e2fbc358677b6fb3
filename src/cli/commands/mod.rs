//! CLI command implementations.

pub mod build;
pub mod catalog;
pub mod demo;
pub mod fetch;
pub mod price;
