use std::fmt::Display;

/// Renders a value, or nothing at all when it is absent.
///
/// Used wherever "no data" has to stay visibly different from zero.
pub fn display_or_blank<T: Display>(value: Option<T>) -> String {
    value.map(|value| value.to_string()).unwrap_or_default()
}
