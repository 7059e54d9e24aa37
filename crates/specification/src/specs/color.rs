//! Specification matching a product's color.

use crate::traits::Specification;
use catalog::{Color, Product};

/// Keeps products whose color equals the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, product: &Product) -> bool {
        product.color == self.color
    }

    fn name(&self) -> String {
        format!("color={}", self.color)
    }
}
