//! Calculator facade
//!
//! Forwards every operation unchanged to the held `Addition` or
//! `Subtraction` component.

use std::sync::Arc;

use super::{Addition, Subtraction};

/// Facade over one `Addition` and one `Subtraction`.
///
/// Components are held behind `Arc` so that callers who inject their own
/// instances can keep using them alongside the calculator. The facade is
/// `Send + Sync` and can be shared across threads as-is.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    addition: Arc<Addition>,
    subtraction: Arc<Subtraction>,
}

impl Calculator {
    /// Create a calculator with freshly constructed components.
    #[must_use]
    pub fn new() -> Self {
        Self::with_components(Arc::new(Addition::new()), Arc::new(Subtraction::new()))
    }

    /// Create a calculator around caller-supplied components.
    #[must_use]
    pub fn with_components(addition: Arc<Addition>, subtraction: Arc<Subtraction>) -> Self {
        Self {
            addition,
            subtraction,
        }
    }

    /// The addition component this calculator delegates to.
    #[must_use]
    pub fn addition(&self) -> &Arc<Addition> {
        &self.addition
    }

    /// The subtraction component this calculator delegates to.
    #[must_use]
    pub fn subtraction(&self) -> &Arc<Subtraction> {
        &self.subtraction
    }

    /// See [`Addition::add`].
    #[must_use]
    pub fn add(&self, a: i32, b: i32) -> i32 {
        self.addition.add(a, b)
    }

    /// See [`Subtraction::subtract`].
    #[must_use]
    pub fn subtract(&self, a: i32, b: i32) -> i32 {
        self.subtraction.subtract(a, b)
    }

    /// See [`Addition::add_multiple`].
    #[must_use]
    pub fn add_multiple(&self, numbers: &[i32]) -> i32 {
        self.addition.add_multiple(numbers)
    }

    /// See [`Subtraction::subtract_multiple`].
    #[must_use]
    pub fn subtract_multiple(&self, first: i32, numbers: &[i32]) -> i32 {
        self.subtraction.subtract_multiple(first, numbers)
    }
}
