// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use wardrobe_lite_core::LengthUnit;

/// Set panic hook for better error messages in the browser
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Parse a unit name as passed from JavaScript ("mm", "cm", "m").
pub fn parse_unit(name: &str) -> Option<LengthUnit> {
    match name.trim().to_ascii_lowercase().as_str() {
        "mm" | "millimeter" | "millimetre" => Some(LengthUnit::Millimeter),
        "cm" | "centimeter" | "centimetre" => Some(LengthUnit::Centimeter),
        "m" | "meter" | "metre" => Some(LengthUnit::Meter),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unit_names() {
        assert_eq!(parse_unit("mm"), Some(LengthUnit::Millimeter));
        assert_eq!(parse_unit(" Metre "), Some(LengthUnit::Meter));
        assert_eq!(parse_unit("cm"), Some(LengthUnit::Centimeter));
        assert_eq!(parse_unit("ft"), None);
    }
}
