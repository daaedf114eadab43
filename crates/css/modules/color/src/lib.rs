//! CSS Color Module Level 4 — hex notations and the legacy `rgba()` form.
//! Spec: <https://www.w3.org/TR/css-color-4/>

#![forbid(unsafe_code)]

use csscolorparser::Color;

/// Convert a 6-digit hex color into a legacy `rgba()` string with the given
/// alpha, e.g. `hex_to_rgba("#3b82f6", 0.5)` -> `"rgba(59, 130, 246, 0.5)"`.
///
/// Only the `#rrggbb` form (leading `#` optional) is converted; any other
/// input — shorthand hex, hex-with-alpha, named colors, already-functional
/// notation — is returned verbatim. Color syntax is never validated here:
/// downstream serializers pass colors through to the output string as-is.
///
/// Spec: <https://www.w3.org/TR/css-color-4/#hex-notation>
/// Spec: <https://www.w3.org/TR/css-color-4/#funcdef-rgba>
pub fn hex_to_rgba(hex: &str, alpha: f32) -> String {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return hex.to_owned();
    }
    // Exactly six hex digits at this point, so the parse cannot fail.
    let Ok(parsed) = format!("#{digits}").parse::<Color>() else {
        return hex.to_owned();
    };
    let [red, green, blue, _] = parsed.to_rgba8();
    format!("rgba({red}, {green}, {blue}, {alpha})")
}
