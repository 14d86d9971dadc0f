/// Joins a path onto a base URL. Absolute URLs pass through unchanged.
pub fn absolute_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_normalizes_slashes() {
        assert_eq!(absolute_url("http://a/", "/b"), "http://a/b");
        assert_eq!(absolute_url("http://a", "b"), "http://a/b");
        assert_eq!(absolute_url("http://a", "https://b/c"), "https://b/c");
    }
}
