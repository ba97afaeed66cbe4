/// Canonical registry form of a distribution name: lowercase with runs of
/// `-`, `_` and `.` collapsed to a single `-`.
pub fn canonicalize_package_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut pending_separator = false;
    for ch in name.trim().chars() {
        if matches!(ch, '-' | '_' | '.') {
            pending_separator = true;
            continue;
        }
        if pending_separator && !normalized.is_empty() {
            normalized.push('-');
        }
        pending_separator = false;
        normalized.push(ch.to_ascii_lowercase());
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::canonicalize_package_name;

    #[test]
    fn lowercases_and_collapses_separators() {
        assert_eq!(canonicalize_package_name("A"), "a");
        assert_eq!(canonicalize_package_name("Zope.Interface"), "zope-interface");
        assert_eq!(canonicalize_package_name("typing__extensions"), "typing-extensions");
        assert_eq!(canonicalize_package_name("foo-_.bar"), "foo-bar");
    }
}
