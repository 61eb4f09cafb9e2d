use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlInputElement, InputEvent};

use crate::types::SelectedFile;

pub fn now_millis() -> f64 {
    js_sys::Date::now()
}

/// Local wall-clock time for a millisecond timestamp, e.g. "3:04:05 PM".
pub fn format_clock(timestamp: f64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(timestamp));
    date.to_locale_time_string("default").into()
}

/// First letter of every word: "Dr. Sarah Johnson" -> "DSJ".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Byte count as megabytes with two decimals.
pub fn format_megabytes(bytes: f64) -> String {
    format!("{:.2} MB", bytes / 1024.0 / 1024.0)
}

/// First file chosen in a file input, if any.
pub fn selected_file(input: &HtmlInputElement) -> Option<SelectedFile> {
    let file = input.files()?.get(0)?;
    Some(SelectedFile {
        name: file.name(),
        size: file.size(),
    })
}

/// Current value of the input element an input event came from.
pub fn input_value(e: &InputEvent) -> Option<String> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    target
        .dyn_ref::<web_sys::HtmlTextAreaElement>()
        .map(|textarea| textarea.value())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Dr. Sarah Johnson"), "DSJ");
        assert_eq!(initials("AP Calculus Study Group"), "ACSG");
        assert_eq!(initials("  Alex   Chen "), "AC");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_format_megabytes() {
        assert_eq!(format_megabytes(0.0), "0.00 MB");
        assert_eq!(format_megabytes(1024.0 * 1024.0 * 2.5), "2.50 MB");
        assert_eq!(format_megabytes(1_500_000.0), "1.43 MB");
    }
}
