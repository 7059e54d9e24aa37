//! # Catalog Crate
//!
//! The data model the specification engine filters over.
//!
//! ## Main Components
//!
//! - **types**: `Product` and its closed attribute domains (`Color`, `Size`)
//! - **parser**: Parse `name::color::size` catalog text into products
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{load_products, Color};
//! use std::path::Path;
//!
//! let products = load_products(Path::new("catalog.txt"))?;
//! let green = products.iter().filter(|p| p.color == Color::Green).count();
//! ```

pub mod error;
pub mod parser;
pub mod types;

pub use error::{CatalogError, Result};
pub use parser::{load_products, parse_products};
pub use types::{demo_products, Color, Product, Size};
