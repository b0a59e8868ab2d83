//! Subtraction component

use tracing::debug;

/// Stateless provider of subtraction.
#[derive(Debug, Clone, Default)]
pub struct Subtraction;

impl Subtraction {
    /// Create a new subtraction component.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Subtract `b` from `a`.
    #[must_use]
    pub fn subtract(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "performing subtraction");
        a.wrapping_sub(b)
    }

    /// Subtract each number from `first` in order, so `(10, [2, 3, 4])`
    /// evaluates as `((10 - 2) - 3) - 4`.
    ///
    /// With no numbers the result is `first` unchanged.
    #[must_use]
    pub fn subtract_multiple(&self, first: i32, numbers: &[i32]) -> i32 {
        debug!(first, count = numbers.len(), "performing multiple subtraction");
        numbers
            .iter()
            .fold(first, |result, &n| result.wrapping_sub(n))
    }
}
