//! Output comparison
//!
//! Actual and expected outputs are compared as exact text after a small
//! normalization: absent values count as empty, surrounding whitespace is
//! trimmed, and CRLF line endings collapse to LF. No numeric tolerance, no
//! further whitespace folding.

/// Normalize an output payload for comparison
fn normalize(output: Option<&str>) -> String {
    output.unwrap_or("").trim().replace("\r\n", "\n")
}

/// Check whether an actual output matches the expected output
pub fn outputs_match(actual: Option<&str>, expected: Option<&str>) -> bool {
    normalize(actual) == normalize(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_newline_is_ignored() {
        assert!(outputs_match(Some("3\n"), Some("3")));
    }

    #[test]
    fn crlf_matches_lf() {
        assert!(outputs_match(Some("3\r\n4\r\n"), Some("3\n4\n")));
    }

    #[test]
    fn absent_output_equals_empty() {
        assert!(outputs_match(None, Some("")));
        assert!(outputs_match(None, None));
    }

    #[test]
    fn different_digits_do_not_match() {
        assert!(!outputs_match(Some("3"), Some("30")));
    }

    #[test]
    fn interior_whitespace_is_significant() {
        assert!(!outputs_match(Some("3 4"), Some("34")));
    }
}
