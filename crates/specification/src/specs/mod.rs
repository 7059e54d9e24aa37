//! Specification implementations.
//!
//! Atomic specifications test one product attribute; composite
//! specifications combine already-built specifications of any item type.

pub mod color;
pub mod composite;
pub mod size;

// Re-export for convenience
pub use color::ColorSpecification;
pub use composite::{AllOf, AndSpecification, NotSpecification, OrSpecification};
pub use size::SizeSpecification;
