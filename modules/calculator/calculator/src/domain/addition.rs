//! Addition component
//!
//! Sums two integers or an arbitrary run of integers.

use tracing::debug;

/// Stateless provider of addition.
///
/// Arithmetic wraps on overflow, matching two's-complement `i32`.
#[derive(Debug, Clone, Default)]
pub struct Addition;

impl Addition {
    /// Create a new addition component.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Add two numbers and return the sum.
    #[must_use]
    pub fn add(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "performing addition");
        a.wrapping_add(b)
    }

    /// Sum every number left to right, starting from 0.
    ///
    /// An empty slice sums to 0.
    #[must_use]
    pub fn add_multiple(&self, numbers: &[i32]) -> i32 {
        debug!(count = numbers.len(), "performing multiple addition");
        numbers.iter().fold(0, |sum, &n| sum.wrapping_add(n))
    }
}
