//! Field-kind descriptors and input coercion.
//!
//! Each leaf of a report carries exactly one of these kinds, and the
//! kind owns the rule for turning raw keystrokes into a stored value.
//! Coercion is total: malformed numeric input is normalized, never
//! rejected.

use crate::report::Count;

/// Supported leaf kinds across both record variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Non-negative integer; blank means "not entered".
    Count,
    /// Percentage kept as cleaned text (digits and one dot).
    Percent,
    Text,
    Choice(&'static [&'static str]),
    Flag,
}

/// A coerced leaf value ready to be patched into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Count(Count),
    Percent(Option<String>),
    Text(String),
    Flag(bool),
}

impl FieldKind {
    /// Normalizes raw input according to the leaf kind.
    pub fn coerce(&self, raw: &str) -> FieldValue {
        match self {
            FieldKind::Count => FieldValue::Count(coerce_count(raw)),
            FieldKind::Percent => FieldValue::Percent(coerce_percent(raw)),
            FieldKind::Text => FieldValue::Text(raw.to_string()),
            FieldKind::Choice(options) => FieldValue::Text(coerce_choice(raw, options)),
            FieldKind::Flag => FieldValue::Flag(coerce_flag(raw)),
        }
    }
}

/// Strips non-digit characters, maps blank to `None`, and saturates
/// anything beyond `u32::MAX`.
pub fn coerce_count(raw: &str) -> Count {
    let digits: String = raw.chars().filter(|ch| ch.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let mut value: u32 = 0;
    for ch in digits.chars() {
        let digit = ch as u32 - '0' as u32;
        value = match value.checked_mul(10).and_then(|v| v.checked_add(digit)) {
            Some(next) => next,
            None => return Some(u32::MAX),
        };
    }
    Some(value)
}

/// Keeps digits and the first decimal point; blank becomes `None`.
pub fn coerce_percent(raw: &str) -> Option<String> {
    let mut cleaned = String::new();
    let mut seen_dot = false;
    for ch in raw.trim().chars() {
        if ch.is_ascii_digit() {
            cleaned.push(ch);
        } else if ch == '.' && !seen_dot {
            cleaned.push(ch);
            seen_dot = true;
        }
    }
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

fn coerce_choice(raw: &str, options: &[&'static str]) -> String {
    let trimmed = raw.trim();
    options
        .iter()
        .find(|candidate| candidate.eq_ignore_ascii_case(trimmed))
        .map(|candidate| candidate.to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

fn coerce_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "true" | "1"
    )
}
