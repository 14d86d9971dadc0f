use serde::Deserialize;

/// Launch-server form body. Optional fields arrive as empty strings from
/// the browser and are normalized with `none_if_blank`.
#[derive(Deserialize)]
pub struct LaunchForm {
    pub name: String,
    pub image_ref: String,
    pub flavor_ref: String,
    pub network_id: String,
    #[serde(default)]
    pub admin_password: String,
    #[serde(default)]
    pub user_data_script: String,
}

impl LaunchForm {
    pub fn password(&self) -> Option<&str> {
        none_if_blank(&self.admin_password)
    }

    pub fn script(&self) -> Option<&str> {
        none_if_blank(&self.user_data_script)
    }
}

fn none_if_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_become_none() {
        let form = LaunchForm {
            name: "vm1".into(),
            image_ref: "img".into(),
            flavor_ref: "m1".into(),
            network_id: "net".into(),
            admin_password: "   ".into(),
            user_data_script: "echo hi".into(),
        };
        assert_eq!(form.password(), None);
        assert_eq!(form.script(), Some("echo hi"));
    }
}
