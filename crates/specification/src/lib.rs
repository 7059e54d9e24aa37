//! Specification pattern over in-memory collections.
//!
//! This crate provides:
//! - The `Specification` trait and the `SpecificationExt` combinators
//! - Atomic product specifications (color, size) and composites
//!   (AND, OR, NOT, N-ary AND)
//! - `FilterEngine` and the `filter` / `par_filter` functions
//! - `NaiveFilter`, the per-attribute baseline the engine replaces
//!
//! ## Example Usage
//! ```ignore
//! use catalog::{demo_products, Color, Size};
//! use specification::specs::{ColorSpecification, SizeSpecification};
//! use specification::{FilterEngine, SpecificationExt};
//!
//! let products = demo_products();
//! let engine = FilterEngine::new().with_specification(
//!     ColorSpecification::new(Color::Green).and(SizeSpecification::new(Size::Large)),
//! );
//!
//! // [Melon]
//! let matches = engine.apply(&products)?;
//! ```

pub mod engine;
pub mod error;
pub mod naive;
pub mod specs;
pub mod traits;

// Re-export main types
pub use engine::{filter, par_filter, FilterEngine};
pub use error::{FilterError, Result};
pub use naive::NaiveFilter;
pub use traits::{Specification, SpecificationExt};
