//! Core traits for composable specifications.
//!
//! A specification is a side-effect-free boolean test over an item. New
//! attributes or composition rules are added by writing a new type that
//! implements [`Specification`]; nothing in the engine has to change.

use crate::specs::{AndSpecification, NotSpecification, OrSpecification};
use std::sync::Arc;

/// Core trait for testing a single item.
///
/// ## Design Note
/// - `Send + Sync` lets the engine evaluate one specification from many
///   rayon workers at once
/// - `is_satisfied` takes `&self`: evaluation must not mutate the
///   specification or the item
pub trait Specification<T: ?Sized>: Send + Sync {
    /// Returns true iff `item` satisfies this specification.
    fn is_satisfied(&self, item: &T) -> bool;

    /// Human readable name, used for logging.
    fn name(&self) -> String {
        short_type_name(std::any::type_name::<Self>())
    }
}

/// Strips module paths and generic arguments from a type name.
fn short_type_name(full: &str) -> String {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base).to_string()
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Arc<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

/// Combinators available on every owned specification.
///
/// ```ignore
/// let spec = ColorSpecification::new(Color::Green)
///     .and(SizeSpecification::new(Size::Large))
///     .or(ColorSpecification::new(Color::Red).not());
/// ```
pub trait SpecificationExt<T: ?Sized>: Specification<T> + Sized + 'static {
    fn and<S>(self, other: S) -> AndSpecification<T>
    where
        S: Specification<T> + 'static,
    {
        AndSpecification::new(self, other)
    }

    fn or<S>(self, other: S) -> OrSpecification<T>
    where
        S: Specification<T> + 'static,
    {
        OrSpecification::new(self, other)
    }

    fn not(self) -> NotSpecification<T> {
        NotSpecification::new(self)
    }
}

impl<T: ?Sized, S: Specification<T> + 'static> SpecificationExt<T> for S {}
