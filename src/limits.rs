//! Resource limits for parsing.
//!
//! The parser is recursive, so nesting depth is bounded to keep hostile
//! input from exhausting the stack. The input size is checked before any
//! lexing happens.

/// The default maximum nesting depth (e.g., `[[[]]]`).
pub const DEFAULT_MAX_DEPTH: usize = 100;
/// The default maximum input size (10MB).
pub const MAX_JSON_SIZE_BYTES: usize = 10 * 1024 * 1024;

/// Limits applied by [`parse_with_limits`](crate::parse_with_limits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum source length in bytes.
    pub max_input_size: usize,
    /// Maximum number of arrays and objects open at once.
    pub max_depth: usize,
}

impl Limits {
    /// The limits used by [`parse`](crate::parse).
    pub const fn new() -> Self {
        Limits {
            max_input_size: MAX_JSON_SIZE_BYTES,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// No size or depth limit. Deeply nested input can overflow the stack.
    pub const fn unbounded() -> Self {
        Limits {
            max_input_size: usize::MAX,
            max_depth: usize::MAX,
        }
    }

    /// Returns a copy with a different depth limit.
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns a copy with a different size limit.
    pub const fn with_max_input_size(mut self, max_input_size: usize) -> Self {
        self.max_input_size = max_input_size;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_depth, 100);
        assert_eq!(limits.max_input_size, 10 * 1024 * 1024);
    }

    #[test]
    fn test_builders() {
        let limits = Limits::new().with_max_depth(2).with_max_input_size(16);
        assert_eq!(limits.max_depth, 2);
        assert_eq!(limits.max_input_size, 16);
        assert_eq!(Limits::unbounded().max_depth, usize::MAX);
    }
}
