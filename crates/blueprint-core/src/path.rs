//! # Field Paths
//!
//! Validation messages are prefixed with the location of the offending
//! value, written as a dotted/bracketed path: `data_sources[2].source_type`.
//! The path is a plain `String` accumulator threaded through recursion; the
//! helpers here are the only place the joining rules live.
//!
//! The empty path denotes the root of the document.

/// Label printed in place of the empty root path.
pub const ROOT_PATH_LABEL: &str = "(root)";

/// Append an object key to a path.
///
/// A key under the root is written bare (`name`, not `.name`).
pub fn join_key(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

/// Append an array index to a path.
pub fn join_index(path: &str, index: usize) -> String {
    format!("{path}[{index}]")
}

/// The path as it should appear at the head of a message.
pub fn display_path(path: &str) -> &str {
    if path.is_empty() {
        ROOT_PATH_LABEL
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_key_at_root_has_no_leading_dot() {
        assert_eq!(join_key("", "mission_name"), "mission_name");
    }

    #[test]
    fn join_key_nested() {
        assert_eq!(join_key("modules", "security"), "modules.security");
        assert_eq!(
            join_key("data_sources[2]", "source_type"),
            "data_sources[2].source_type"
        );
    }

    #[test]
    fn join_index_appends_brackets() {
        assert_eq!(join_index("data_sources", 2), "data_sources[2]");
        assert_eq!(join_index("", 0), "[0]");
        assert_eq!(join_index("a[1]", 3), "a[1][3]");
    }

    #[test]
    fn display_path_labels_root() {
        assert_eq!(display_path(""), ROOT_PATH_LABEL);
        assert_eq!(display_path("a.b"), "a.b");
    }
}
