use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use once_cell::sync::Lazy;

use crate::errors::SurveyError;
use crate::report::Count;
use crate::schema::{coerce_count, coerce_percent};

static THEME: Lazy<ColorfulTheme> = Lazy::new(ColorfulTheme::default);

/// Shared prompt theme for the whole session.
pub fn theme() -> &'static ColorfulTheme {
    &THEME
}

fn prompt_error(err: dialoguer::Error) -> SurveyError {
    match err {
        dialoguer::Error::IO(io) => SurveyError::Io(io),
        #[allow(unreachable_patterns)]
        other => SurveyError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            other.to_string(),
        )),
    }
}

/// Free-form text. Blank input keeps the field blank; the current
/// value is offered for in-place editing.
pub fn prompt_text(label: &str, current: &str) -> Result<String, SurveyError> {
    Input::<String>::with_theme(theme())
        .with_prompt(label)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)
}

/// Count entry. Whatever the user types is normalized by the schema
/// rule: digits kept, blank means "not entered".
pub fn prompt_count(label: &str, current: Count) -> Result<Count, SurveyError> {
    let initial = current.map(|value| value.to_string()).unwrap_or_default();
    let raw = Input::<String>::with_theme(theme())
        .with_prompt(label)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;
    Ok(coerce_count(&raw))
}

/// Percentage entry, stored as cleaned text.
pub fn prompt_percent(label: &str, current: &Option<String>) -> Result<Option<String>, SurveyError> {
    let initial = current.clone().unwrap_or_default();
    let raw = Input::<String>::with_theme(theme())
        .with_prompt(label)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;
    Ok(coerce_percent(&raw))
}

/// Fixed-option choice; returns the canonical option text.
pub fn prompt_choice(
    label: &str,
    options: &[&str],
    current: &str,
) -> Result<String, SurveyError> {
    let default = options
        .iter()
        .position(|option| option.eq_ignore_ascii_case(current))
        .unwrap_or(0);
    let index = Select::with_theme(theme())
        .with_prompt(label)
        .items(options)
        .default(default)
        .interact()
        .map_err(prompt_error)?;
    Ok(options[index].to_string())
}

pub fn prompt_flag(label: &str, current: bool) -> Result<bool, SurveyError> {
    Confirm::with_theme(theme())
        .with_prompt(label)
        .default(current)
        .interact()
        .map_err(prompt_error)
}

/// Menu over arbitrary labels; returns the selected index.
pub fn prompt_menu(label: &str, items: &[String]) -> Result<usize, SurveyError> {
    Select::with_theme(theme())
        .with_prompt(label)
        .items(items)
        .default(0)
        .interact()
        .map_err(prompt_error)
}

pub fn confirm(label: &str, default: bool) -> Result<bool, SurveyError> {
    Confirm::with_theme(theme())
        .with_prompt(label)
        .default(default)
        .interact()
        .map_err(prompt_error)
}
