//! The filter engine evaluates one specification over a collection.
//!
//! The engine knows nothing about product attributes: it only calls
//! [`Specification::is_satisfied`], so new specifications never require
//! changes here.

use crate::error::{FilterError, Result};
use crate::traits::Specification;
use rayon::prelude::*;

/// Return references to the items satisfying `spec`, in input order.
///
/// One linear pass, one evaluation per item. The returned references
/// point into `items`; nothing is copied.
pub fn filter<'a, T>(items: &'a [T], spec: &dyn Specification<T>) -> Vec<&'a T> {
    items.iter().filter(|item| spec.is_satisfied(item)).collect()
}

/// Parallel variant of [`filter`].
///
/// Evaluation order across items is unspecified, but the result keeps the
/// input's relative order.
pub fn par_filter<'a, T: Sync>(items: &'a [T], spec: &dyn Specification<T>) -> Vec<&'a T> {
    items.par_iter().filter(|item| spec.is_satisfied(item)).collect()
}

/// Configurable filter engine.
///
/// ## Usage
/// ```ignore
/// let engine = FilterEngine::new()
///     .with_specification(ColorSpecification::new(Color::Green).and(SizeSpecification::new(Size::Large)))
///     .with_parallel_threshold(10_000);
///
/// let matches = engine.apply(&products)?;
/// ```
pub struct FilterEngine<T: ?Sized> {
    specification: Option<Box<dyn Specification<T>>>,
    parallel_threshold: usize,
}

impl<T: ?Sized> FilterEngine<T> {
    /// Create an engine with no specification and parallelism disabled.
    pub fn new() -> Self {
        Self {
            specification: None,
            parallel_threshold: usize::MAX,
        }
    }

    /// Set the specification (builder pattern).
    pub fn with_specification(mut self, spec: impl Specification<T> + 'static) -> Self {
        self.specification = Some(Box::new(spec));
        self
    }

    /// Collections with at least `threshold` items are scanned with rayon.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn specification(&self) -> Option<&dyn Specification<T>> {
        self.specification.as_deref()
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }
}

impl<T: Sync> FilterEngine<T> {
    /// Apply the configured specification to `items`.
    ///
    /// # Returns
    /// * `Ok(Vec<&T>)` - Matching items, in input order
    /// * `Err(FilterError::MissingSpecification)` - If no specification was set
    pub fn apply<'a>(&self, items: &'a [T]) -> Result<Vec<&'a T>> {
        let spec = self
            .specification
            .as_deref()
            .ok_or(FilterError::MissingSpecification)?;

        let parallel = items.len() >= self.parallel_threshold;
        tracing::debug!(
            "Applying specification: {} (input count: {}, parallel: {})",
            spec.name(),
            items.len(),
            parallel
        );

        let matches = if parallel {
            par_filter(items, spec)
        } else {
            filter(items, spec)
        };

        tracing::debug!(
            "Specification applied: {} (output count: {})",
            spec.name(),
            matches.len()
        );
        Ok(matches)
    }
}

impl<T: ?Sized> Default for FilterEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}
