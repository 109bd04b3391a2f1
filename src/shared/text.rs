//! Trimming helpers for admin-submitted text.

/// Trimmed value, or `None` when blank.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn non_blank_opt(value: Option<String>) -> Option<String> {
    value.as_deref().and_then(non_blank)
}

/// Trims every entry and drops the blank ones, keeping order.
pub fn clean_list(values: Vec<String>) -> Vec<String> {
    values.iter().filter_map(|v| non_blank(v)).collect()
}
