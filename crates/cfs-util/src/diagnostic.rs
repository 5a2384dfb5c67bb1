//! Renders a [`CfsError`] into the user-visible string format from spec
//! §7: `<path>:<line>:<column>: <kind>: <message>`, with the position
//! segment dropped when unavailable.

use std::path::Path;

use crate::error::CfsError;

/// Formats `err` as it should be printed to standard error, given the
/// path of the file that was being compiled.
pub fn format(path: &Path, err: &CfsError) -> String {
    let path = path.display();
    match err.position() {
        Some(pos) => format!("{path}:{pos}: {}: {}", err.kind(), err.message()),
        None => format!("{path}: {}: {}", err.kind(), err.message()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Position;
    use std::path::PathBuf;

    #[test]
    fn formats_with_position() {
        let path = PathBuf::from("main.cfs");
        let err = CfsError::parse(Position::new(2, 5), "unexpected token '+'");
        assert_eq!(
            format(&path, &err),
            "main.cfs:2:5: parse error: unexpected token '+'"
        );
    }

    #[test]
    fn formats_without_position() {
        let path = PathBuf::from("main.cfs");
        let err = CfsError::usage("missing input file");
        assert_eq!(format(&path, &err), "main.cfs: usage error: missing input file");
    }
}
