use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

/// Renders a backend UTC timestamp in the server's local timezone.
/// The compute service emits both RFC 3339 (`...Z`) and bare
/// `%Y-%m-%dT%H:%M:%S.%f` forms; anything unparseable passes through.
pub fn to_local_time(raw: &str) -> String {
    if raw.is_empty() {
        return "-".to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Utc
            .from_utc_datetime(&naive)
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparseable_passes_through() {
        assert_eq!(to_local_time("soon"), "soon");
        assert_eq!(to_local_time(""), "-");
    }

    #[test]
    fn test_both_backend_forms_parse() {
        assert_ne!(to_local_time("2024-05-01T10:00:00Z"), "2024-05-01T10:00:00Z");
        assert_ne!(
            to_local_time("2024-05-01T10:00:00.000000"),
            "2024-05-01T10:00:00.000000"
        );
    }
}
