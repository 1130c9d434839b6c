//! # JSON Pointer Helpers (RFC 6901)
//!
//! Data-pointer paths are plain `String`s: `""` is the document root and
//! each segment is prefixed with `/`. Reference tokens escape `~` as `~0`
//! and `/` as `~1`.

/// Escape a single reference token.
pub fn escape_segment(segment: &str) -> String {
    if !segment.contains(['~', '/']) {
        return segment.to_string();
    }
    segment.replace('~', "~0").replace('/', "~1")
}

/// Append an object key to a pointer, escaping it.
pub fn push_key(pointer: &str, key: &str) -> String {
    format!("{pointer}/{}", escape_segment(key))
}

/// Append an array index to a pointer.
pub fn push_index(pointer: &str, index: usize) -> String {
    format!("{pointer}/{index}")
}

/// The parent of a pointer, or `None` for the root.
pub fn parent(pointer: &str) -> Option<&str> {
    if pointer.is_empty() {
        return None;
    }
    pointer.rfind('/').map(|idx| &pointer[..idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_order_matters() {
        assert_eq!(escape_segment("a/b"), "a~1b");
        assert_eq!(escape_segment("m~n"), "m~0n");
        assert_eq!(escape_segment("~1"), "~01");
    }

    #[test]
    fn test_push_and_parent() {
        let p = push_key("", "users");
        let p = push_index(&p, 3);
        let p = push_key(&p, "a/b");
        assert_eq!(p, "/users/3/a~1b");
        assert_eq!(parent(&p), Some("/users/3"));
        assert_eq!(parent("/users"), Some(""));
        assert_eq!(parent(""), None);
    }
}
