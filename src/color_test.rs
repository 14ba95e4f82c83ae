use super::*;

// =============================================================
// parse_hex_rgb
// =============================================================

#[test]
fn default_shape_colors_parse() {
    assert_eq!(parse_hex_rgb("#1F1A17"), Some((31, 26, 23)));
    assert_eq!(parse_hex_rgb("#d94b4b"), Some((217, 75, 75)));
}

#[test]
fn three_digit_form_repeats_each_digit() {
    assert_eq!(parse_hex_rgb(" #f80 "), Some((255, 136, 0)));
}

#[test]
fn malformed_hex_is_rejected() {
    for raw in ["1F1A17", "#", "#1F", "#1F1A", "#1F1A17FF", "#zz0000", "#ééé"] {
        assert_eq!(parse_hex_rgb(raw), None, "{raw}");
    }
}

// =============================================================
// with_alpha
// =============================================================

#[test]
fn glow_shadow_color_gets_rgba() {
    assert_eq!(with_alpha("#D94B4B", 0.4), "rgba(217, 75, 75, 0.4)");
    assert_eq!(with_alpha("#fff", 1.0), "rgba(255, 255, 255, 1)");
}

#[test]
fn alpha_is_clamped_to_unit_range() {
    assert_eq!(with_alpha("#000000", 2.5), "rgba(0, 0, 0, 1)");
    assert_eq!(with_alpha("#000000", -0.5), "rgba(0, 0, 0, 0)");
}

#[test]
fn css_keywords_and_functions_pass_through() {
    assert_eq!(with_alpha(" rebeccapurple ", 0.5), "rebeccapurple");
    assert_eq!(with_alpha("rgb(1, 2, 3)", 0.5), "rgb(1, 2, 3)");
}
