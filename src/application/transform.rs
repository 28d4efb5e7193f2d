//! The pluggable per-item transform.

/// A pure, total, deterministic string transform.
///
/// Implementations must be free of I/O and must return the same output for
/// the same input across calls and across processes, since outputs are
/// memoized indefinitely under the input as key.
pub trait Transformer: Send + Sync {
    fn transform(&self, input: &str) -> String;
}

/// Reference transform: Unicode uppercasing.
///
/// This uses `str::to_uppercase`, so it goes beyond ASCII: `ß` becomes `SS`
/// and dotted/dotless I follows Unicode's locale-independent mapping, not the
/// Turkish one. Changing this mapping between deployments would desynchronize
/// previously cached outputs, so treat it as frozen.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uppercase;

impl Transformer for Uppercase {
    fn transform(&self, input: &str) -> String {
        input.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_ascii() {
        assert_eq!(Uppercase.transform("hello"), "HELLO");
    }

    #[test]
    fn total_over_empty_and_whitespace() {
        assert_eq!(Uppercase.transform(""), "");
        assert_eq!(Uppercase.transform("  \t"), "  \t");
    }

    #[test]
    fn handles_non_ascii() {
        assert_eq!(Uppercase.transform("straße"), "STRASSE");
        assert_eq!(Uppercase.transform("żółć"), "ŻÓŁĆ");
    }
}
