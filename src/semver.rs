//! Recognizes release tags.
//!
//! A tag names a release when the whole string is a semantic version
//! (<https://semver.org>), optionally prefixed with a lowercase `v`.

/// Checks if a string adheres to Semantic Versioning, with an optional `v`
/// prefix.
///
/// # Example
///
/// ```
/// # use repo_scripts::semver::is_semver_tag;
/// assert!(is_semver_tag("v1.2.3-rc.1"));
/// assert!(!is_semver_tag("release-1.2.3"));
/// ```
pub fn is_semver_tag(tag: &str) -> bool {
    regex!(concat!(
        r"^v?(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)",
        r"(?:-((?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)",
        r"(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*))?",
        r"(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    ))
    .is_match(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_versions() {
        for tag in [
            "v1.2.3",
            "1.2.3",
            "0.0.0",
            "1.2.3-rc.1",
            "1.2.3+build.5",
            "v10.20.30-alpha-1.0.x+exp.sha.5114f85",
            "1.0.0-0A.is.legal",
        ] {
            assert!(is_semver_tag(tag), "{tag} should be accepted");
        }
    }

    #[test]
    fn rejects_non_versions() {
        for tag in [
            "1.2",
            "v1.2.3.4",
            "release-1.2.3",
            "1.02.3",
            "01.2.3",
            "V1.2.3",
            "1.2.3-01",
            "1.2.3-",
            "1.2.3+",
            "1.2.3-rc..1",
            "HEAD -> main",
            "",
        ] {
            assert!(!is_semver_tag(tag), "{tag} should be rejected");
        }
    }

    #[test]
    fn rejects_non_ascii_digits() {
        assert!(!is_semver_tag("١.2.3"));
    }
}
