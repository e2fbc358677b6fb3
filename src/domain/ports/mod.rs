//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the interfaces that adapters must implement:
//! - ProductSubject: product lookup by SKU
//! - Catalog: read-only catalog access
//! - ProductBuilder: step-wise catalog product construction

pub mod catalog;
pub mod product_builder;
pub mod product_subject;

pub use catalog::Catalog;
pub use product_builder::ProductBuilder;
pub use product_subject::ProductSubject;
