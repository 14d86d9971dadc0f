/// Label/value row of a detail card. Preformatted rows render in a
/// monospace block (nested JSON structures).
#[derive(Clone, Debug)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
    pub preformatted: bool,
}

impl DetailRow {
    pub fn text(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            preformatted: false,
        }
    }

    pub fn pre(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            preformatted: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct DetailCard {
    pub title: String,
    pub rows: Vec<DetailRow>,
}

impl DetailCard {
    pub fn new(title: impl Into<String>, rows: Vec<DetailRow>) -> Self {
        Self {
            title: title.into(),
            rows,
        }
    }
}
