//! Display labels for network ports.

pub fn network_status(code: &str) -> Option<&'static str> {
    match code {
        "ACTIVE" => Some("Active"),
        "BUILD" => Some("Build"),
        "DOWN" => Some("Down"),
        "ERROR" => Some("Error"),
        "N/A" => Some("N/A"),
        _ => None,
    }
}

/// Port detail shows a dash when the backend reports an unknown status.
pub fn format_network_status(code: &str) -> String {
    network_status(code)
        .map(str::to_string)
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_map_to_labels() {
        assert_eq!(format_network_status("ACTIVE"), "Active");
        assert_eq!(format_network_status("DOWN"), "Down");
    }

    #[test]
    fn test_unknown_code_renders_dash() {
        assert_eq!(format_network_status("PENDING_WHATEVER"), "-");
    }
}
