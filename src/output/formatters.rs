//! Formatting utilities for terminal output

/// Format `part` as a percentage of `whole`, `"-"` when `whole` is zero
#[must_use]
pub fn percent(part: usize, whole: usize) -> String {
    if whole == 0 {
        "-".to_string()
    } else {
        format!("{:.1}%", part as f64 / whole as f64 * 100.0)
    }
}

/// Comma-separated board size labels, truncated after `limit`
#[must_use]
pub fn size_list<T: ToString>(sizes: &[T], limit: usize) -> String {
    let shown: Vec<String> = sizes.iter().take(limit).map(ToString::to_string).collect();
    let hidden = sizes.len().saturating_sub(limit);
    if hidden > 0 {
        format!("{}, … (+{hidden} more)", shown.join(", "))
    } else {
        shown.join(", ")
    }
}
