//! Specification matching a product's size.

use crate::traits::Specification;
use catalog::{Product, Size};

/// Keeps products whose size equals the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, product: &Product) -> bool {
        product.size == self.size
    }

    fn name(&self) -> String {
        format!("size={}", self.size)
    }
}
