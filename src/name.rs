//! Dotted logger names.
//!
//! # Responsibilities
//! - Split a dotted name into its ancestor chain, root first
//! - Locate a name's direct parent
//!
//! Splitting is purely syntactic: `"a..b"` yields the segment `""` between
//! the dots and is not collapsed.

/// Name of the root logger.
pub const ROOT_LOGGER_NAME: &str = "";

/// Separator between name segments.
pub const SEPARATOR: char = '.';

/// Every name from the root down to `name`, inclusive.
///
/// `"a.b.c"` becomes `["", "a", "a.b", "a.b.c"]`; the root alone becomes `[""]`.
pub fn ancestor_chain(name: &str) -> Vec<String> {
    let mut chain = vec![ROOT_LOGGER_NAME.to_string()];
    if name == ROOT_LOGGER_NAME {
        return chain;
    }

    let mut prefix = String::with_capacity(name.len());
    for (i, segment) in name.split(SEPARATOR).enumerate() {
        if i > 0 {
            prefix.push(SEPARATOR);
        }
        prefix.push_str(segment);
        chain.push(prefix.clone());
    }
    chain
}

/// The direct parent of `name`, or `None` for the root.
pub fn parent_name(name: &str) -> Option<&str> {
    if name == ROOT_LOGGER_NAME {
        return None;
    }
    match name.rfind(SEPARATOR) {
        Some(idx) => Some(&name[..idx]),
        None => Some(ROOT_LOGGER_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_of_nested_name() {
        assert_eq!(ancestor_chain("a.b.c"), vec!["", "a", "a.b", "a.b.c"]);
    }

    #[test]
    fn test_chain_of_root() {
        assert_eq!(ancestor_chain(""), vec![""]);
    }

    #[test]
    fn test_chain_of_single_segment() {
        assert_eq!(ancestor_chain("app"), vec!["", "app"]);
    }

    #[test]
    fn test_empty_segments_are_kept() {
        assert_eq!(ancestor_chain("a..b"), vec!["", "a", "a.", "a..b"]);
        assert_eq!(ancestor_chain(".x"), vec!["", "", ".x"]);
    }

    #[test]
    fn test_parent_name() {
        assert_eq!(parent_name(""), None);
        assert_eq!(parent_name("a"), Some(""));
        assert_eq!(parent_name("a.b.c"), Some("a.b"));
    }
}
