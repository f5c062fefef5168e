//! Derived record features.

const REMOTE_MARKER: &str = "remote";

/// True when the location mentions remote work, ignoring case.
pub fn is_remote_location(location: Option<&str>) -> bool {
    location.is_some_and(|value| value.to_lowercase().contains(REMOTE_MARKER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_detection() {
        assert!(is_remote_location(Some("Remote")));
        assert!(is_remote_location(Some("London (REMOTE)")));
        assert!(!is_remote_location(Some("Leeds")));
        assert!(!is_remote_location(None));
    }
}
