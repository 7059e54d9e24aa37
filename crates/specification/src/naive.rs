//! One hard-coded method per attribute.
//!
//! Every new criterion (size, color and size, name, ...) means another
//! method on this type, and every caller has to be rebuilt against it.
//! [`FilterEngine`](crate::FilterEngine) replaces it; this type is kept
//! only so the two can be compared.

use catalog::{Color, Product, Size};

#[derive(Debug, Default, Clone, Copy)]
pub struct NaiveFilter;

impl NaiveFilter {
    pub fn filter_by_color<'a>(&self, products: &'a [Product], color: Color) -> Vec<&'a Product> {
        let mut results = Vec::new();
        for product in products {
            if product.color == color {
                results.push(product);
            }
        }
        results
    }

    pub fn filter_by_size<'a>(&self, products: &'a [Product], size: Size) -> Vec<&'a Product> {
        let mut results = Vec::new();
        for product in products {
            if product.size == size {
                results.push(product);
            }
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::filter;
    use crate::specs::{ColorSpecification, SizeSpecification};
    use catalog::demo_products;

    #[test]
    fn test_naive_agrees_with_specifications() {
        let products = demo_products();
        let naive = NaiveFilter;

        for color in Color::ALL {
            assert_eq!(
                naive.filter_by_color(&products, color),
                filter(&products, &ColorSpecification::new(color))
            );
        }
        for size in Size::ALL {
            assert_eq!(
                naive.filter_by_size(&products, size),
                filter(&products, &SizeSpecification::new(size))
            );
        }
    }
}
