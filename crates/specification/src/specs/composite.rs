//! Composite specifications.
//!
//! Each composite exclusively owns its children as boxed trait objects and
//! never changes them after construction. Binary composites evaluate the
//! first child, then the second only if the result is still undecided.

use crate::traits::Specification;

/// Satisfied iff both children are.
pub struct AndSpecification<T: ?Sized> {
    first: Box<dyn Specification<T>>,
    second: Box<dyn Specification<T>>,
}

impl<T: ?Sized> AndSpecification<T> {
    pub fn new(
        first: impl Specification<T> + 'static,
        second: impl Specification<T> + 'static,
    ) -> Self {
        Self {
            first: Box::new(first),
            second: Box::new(second),
        }
    }
}

impl<T: ?Sized> Specification<T> for AndSpecification<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }

    fn name(&self) -> String {
        format!("({} AND {})", self.first.name(), self.second.name())
    }
}

/// Satisfied iff at least one child is.
pub struct OrSpecification<T: ?Sized> {
    first: Box<dyn Specification<T>>,
    second: Box<dyn Specification<T>>,
}

impl<T: ?Sized> OrSpecification<T> {
    pub fn new(
        first: impl Specification<T> + 'static,
        second: impl Specification<T> + 'static,
    ) -> Self {
        Self {
            first: Box::new(first),
            second: Box::new(second),
        }
    }
}

impl<T: ?Sized> Specification<T> for OrSpecification<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) || self.second.is_satisfied(item)
    }

    fn name(&self) -> String {
        format!("({} OR {})", self.first.name(), self.second.name())
    }
}

/// Plain boolean negation of its child.
pub struct NotSpecification<T: ?Sized> {
    inner: Box<dyn Specification<T>>,
}

impl<T: ?Sized> NotSpecification<T> {
    pub fn new(inner: impl Specification<T> + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }
}

impl<T: ?Sized> Specification<T> for NotSpecification<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        !self.inner.is_satisfied(item)
    }

    fn name(&self) -> String {
        format!("NOT {}", self.inner.name())
    }
}

/// N-ary conjunction, built with [`AllOf::with`].
///
/// Children are evaluated in insertion order and evaluation stops at the
/// first failure. An empty `AllOf` is satisfied by every item.
pub struct AllOf<T: ?Sized> {
    specs: Vec<Box<dyn Specification<T>>>,
}

impl<T: ?Sized> AllOf<T> {
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    /// Add a child (builder pattern).
    pub fn with(mut self, spec: impl Specification<T> + 'static) -> Self {
        self.specs.push(Box::new(spec));
        self
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<T: ?Sized> Default for AllOf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Specification<T> for AllOf<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.specs.iter().all(|spec| spec.is_satisfied(item))
    }

    fn name(&self) -> String {
        let names: Vec<String> = self.specs.iter().map(|spec| spec.name()).collect();
        format!("ALL[{}]", names.join(", "))
    }
}
