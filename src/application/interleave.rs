//! Positional interleaving of two transformed sequences.

const DELIMITER: &str = ", ";

/// Pair elements positionally and flatten:
/// `seq_1[0], seq_2[0], seq_1[1], seq_2[1], ...` joined with `", "`.
///
/// Stops at the shorter sequence; trailing unmatched elements of the longer
/// one are dropped. That zip-truncation is part of the service's contract
/// (ids of already-cached payloads were computed against it), so it must not
/// be "fixed" without a coordinated cache flush.
pub fn interleave<S: AsRef<str>>(seq_1: &[S], seq_2: &[S]) -> String {
    let mut parts = Vec::with_capacity(seq_1.len().min(seq_2.len()) * 2);
    for (a, b) in seq_1.iter().zip(seq_2.iter()) {
        parts.push(a.as_ref());
        parts.push(b.as_ref());
    }
    parts.join(DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_equal_length_sequences() {
        assert_eq!(
            interleave(&["A", "B", "C"], &["X", "Y", "Z"]),
            "A, X, B, Y, C, Z"
        );
    }

    #[test]
    fn truncates_to_shorter_sequence() {
        assert_eq!(interleave(&["A", "B", "C"], &["X", "Y"]), "A, X, B, Y");
        assert_eq!(interleave(&["A"], &["X", "Y", "Z"]), "A, X");
    }

    #[test]
    fn empty_inputs_yield_empty_string() {
        let none: [&str; 0] = [];
        assert_eq!(interleave(&none, &none), "");
        assert_eq!(interleave(&["A"], &none), "");
    }

    #[test]
    fn preserves_element_order() {
        assert_eq!(interleave(&["1", "2"], &["a", "b"]), "1, a, 2, b");
    }
}
