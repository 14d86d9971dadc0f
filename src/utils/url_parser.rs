/// Extracts the bare hostname from a URL, tolerating missing schemes and
/// trailing paths.
pub fn hostname_from_url(url: &str) -> String {
    let without_scheme = match url.split_once("://") {
        Some((_, rest)) => rest,
        None => url,
    };
    without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or("")
        .split(':')
        .next()
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hostname_extraction() {
        assert_eq!(hostname_from_url("https://cloud.example.com/api"), "cloud.example.com");
        assert_eq!(hostname_from_url("http://10.0.0.1:5000"), "10.0.0.1");
        assert_eq!(hostname_from_url("cloud.example.com"), "cloud.example.com");
        assert_eq!(hostname_from_url(""), "");
    }
}
