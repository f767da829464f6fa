//! Width limits for exhaustive enumeration.

/// Limits applied when a table is enumerated over all of its inputs.
///
/// Completeness checking walks every one of the 2^n input combinations,
/// so the input width of a table has to be bounded by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of input bits per row.
    pub max_width: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_width: 16 }
    }
}

impl Limits {
    /// Create limits with a custom width.
    pub fn new(max_width: usize) -> Self {
        Self { max_width }
    }

    /// Permissive limits for testing.
    pub fn permissive() -> Self {
        Self { max_width: 24 }
    }

    /// Strict limits for untrusted tables.
    pub fn strict() -> Self {
        Self { max_width: 8 }
    }

    /// Check whether a table of `width` inputs may be enumerated.
    pub fn allows(&self, width: usize) -> bool {
        width <= self.max_width
    }
}
