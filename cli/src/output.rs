//! Stdout contract for `retrieve`.
//!
//! Result documents are written on one line, joined by a fixed token that
//! the calling process splits on.

/// Token placed between result documents.
pub const CONTEXT_SEPARATOR: &str = "||--CONTEXT-SEPARATOR--||";

/// Join result documents for output.
pub fn join_context<S: AsRef<str>>(documents: &[S]) -> String {
    documents
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(CONTEXT_SEPARATOR)
}

/// Split `retrieve` output back into documents.
///
/// A trailing newline is ignored and empty output means no results.
pub fn split_context(output: &str) -> Vec<&str> {
    let output = output.strip_suffix('\n').unwrap_or(output);
    if output.is_empty() {
        return Vec::new();
    }
    output.split(CONTEXT_SEPARATOR).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_join_context() {
        let joined = join_context(&["first note", "second note"]);
        assert_eq!(joined, "first note||--CONTEXT-SEPARATOR--||second note");
    }

    #[test]
    fn test_join_single_and_empty() {
        assert_eq!(join_context(&["only"]), "only");
        assert_eq!(join_context::<&str>(&[]), "");
    }

    #[test]
    fn test_split_context() {
        let output = "a||--CONTEXT-SEPARATOR--||b||--CONTEXT-SEPARATOR--||c\n";
        assert_eq!(split_context(output), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_empty_output() {
        assert!(split_context("\n").is_empty());
        assert!(split_context("").is_empty());
    }
}
