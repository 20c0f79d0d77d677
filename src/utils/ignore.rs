//! Excluded path segment matching
//!
//! A path is excluded when one of the configured segments appears in it as a
//! whole run of components. Matching is done on the `/`-separated path
//! relative to the traversal root, wrapped in separators, so `build` matches
//! `build/Foo.java` and `app/build/Foo.java` but never `rebuild/Foo.java` or
//! `buildSrc/Foo.java`.

/// Check a relative Unix-style path against the excluded segments
///
/// Directories are checked with a trailing separator so that the directory
/// itself matches (and can be pruned) before any of its files are seen.
///
/// # Examples
///
/// ```rust
/// use code_harvester::utils::ignore::is_excluded_path;
///
/// let segments = vec!["build".to_string(), "gradle/wrapper".to_string()];
/// assert!(is_excluded_path("app/build/Gen.java", false, &segments));
/// assert!(is_excluded_path("gradle/wrapper", true, &segments));
/// assert!(!is_excluded_path("app/rebuild/Main.java", false, &segments));
/// ```
pub fn is_excluded_path(relative: &str, is_dir: bool, segments: &[String]) -> bool {
    if segments.is_empty() || relative.is_empty() {
        return false;
    }

    let mut probe = String::with_capacity(relative.len() + 2);
    probe.push('/');
    probe.push_str(relative.trim_matches('/'));
    if is_dir {
        probe.push('/');
    }

    segments
        .iter()
        .any(|segment| probe.contains(&format!("/{}/", segment)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_EXCLUDED_SEGMENTS;

    fn defaults() -> Vec<String> {
        DEFAULT_EXCLUDED_SEGMENTS
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_files_under_excluded_directories() {
        let segments = defaults();
        assert!(is_excluded_path("build/Gen.java", false, &segments));
        assert!(is_excluded_path("app/target/classes/A.java", false, &segments));
        assert!(is_excluded_path("src/generated/api.proto", false, &segments));
        assert!(is_excluded_path(
            "module/target/generated-sources/proto/B.java",
            false,
            &segments
        ));
        assert!(is_excluded_path(".git/hooks/x.java", false, &segments));
    }

    #[test]
    fn test_multi_component_segment() {
        let segments = defaults();
        assert!(is_excluded_path("gradle/wrapper/Wrapper.java", false, &segments));
        assert!(is_excluded_path("gradle/wrapper", true, &segments));
        assert!(
            !is_excluded_path("gradle/Plugin.java", false, &segments),
            "Only the wrapper directory is excluded"
        );
    }

    #[test]
    fn test_directory_matches_itself() {
        let segments = defaults();
        assert!(is_excluded_path("build", true, &segments));
        assert!(is_excluded_path("services/api/out", true, &segments));
        assert!(!is_excluded_path("services", true, &segments));
    }

    #[test]
    fn test_segment_word_boundaries() {
        let segments = defaults();
        assert!(!is_excluded_path("rebuild/Main.java", false, &segments));
        assert!(!is_excluded_path("buildSrc/Main.java", false, &segments));
        assert!(!is_excluded_path("src/outbound/Sender.java", false, &segments));
        assert!(!is_excluded_path("src/targets.proto", false, &segments));
    }

    #[test]
    fn test_file_named_like_segment_is_not_excluded() {
        let segments = defaults();
        assert!(!is_excluded_path("src/out", false, &segments));
    }

    #[test]
    fn test_no_segments() {
        assert!(!is_excluded_path("build/Gen.java", false, &[]));
    }
}
