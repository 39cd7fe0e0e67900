//! Workflow boundary: the matrix output and failure reporting.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Name of the workflow output the matrix is published under.
pub(crate) const MATRIX_OUTPUT: &str = "matrix";

/// Publish `value` as the `matrix` output.
///
/// With a path (normally `$GITHUB_OUTPUT`) the line `matrix=<value>` is
/// appended to that file; otherwise it is printed to stdout.
pub(crate) fn set_output(path: Option<&Path>, value: &str) -> std::io::Result<()> {
    let line = format!("{}={}", MATRIX_OUTPUT, value);
    match path {
        Some(path) => {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            writeln!(file, "{}", line)
        }
        None => {
            println!("{}", line);
            Ok(())
        }
    }
}

/// Workflow command that marks the job as failed with `message`.
pub(crate) fn failure_annotation(message: &str) -> String {
    // Annotation messages are single-line; newlines must be escaped.
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::error::{}", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_output_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("github_output");
        std::fs::write(&path, "other=1\n").unwrap();

        set_output(Some(&path), "{}").unwrap();
        set_output(Some(&path), r#"{"include":[]}"#).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "other=1\nmatrix={}\nmatrix={\"include\":[]}\n");
    }

    #[test]
    fn test_set_output_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new_output");
        set_output(Some(&path), "{}").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "matrix={}\n");
    }

    #[test]
    fn test_failure_annotation_escapes() {
        assert_eq!(failure_annotation("boom"), "::error::boom");
        assert_eq!(
            failure_annotation("line one\nline two 100%"),
            "::error::line one%0Aline two 100%25"
        );
    }
}
