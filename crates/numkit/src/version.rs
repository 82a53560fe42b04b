//! Version information.

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Get the full version string with target info.
#[must_use]
pub fn full_version() -> String {
    format!(
        "numkit {} ({}-{})",
        version(),
        std::env::consts::ARCH,
        std::env::consts::OS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_not_empty() {
        assert!(!version().is_empty());
    }

    #[test]
    fn full_version_contains_version() {
        let full = full_version();
        assert!(full.starts_with("numkit "));
        assert!(full.contains(version()));
    }
}
