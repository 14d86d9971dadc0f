/// Builds an encoded query string from key/value pairs; empty input yields
/// an empty string (no dangling `?`).
pub fn build_query_string(pairs: &[(&str, &str)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let encoded: Vec<String> = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect();
    format!("?{}", encoded.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_and_joining() {
        assert_eq!(build_query_string(&[]), "");
        assert_eq!(build_query_string(&[("name", "web 01")]), "?name=web%2001");
        assert_eq!(
            build_query_string(&[("a", "1"), ("b", "2")]),
            "?a=1&b=2"
        );
    }
}
