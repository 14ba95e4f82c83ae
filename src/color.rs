//! Color helpers shared by stroke props and the canvas adapter.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

#[allow(clippy::cast_possible_truncation)]
fn nibble(c: u8) -> Option<u8> {
    char::from(c).to_digit(16).map(|d| d as u8)
}

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
#[must_use]
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?.as_bytes();
    match *hex {
        [r, g, b] => Some((nibble(r)? * 17, nibble(g)? * 17, nibble(b)? * 17)),
        [r1, r0, g1, g0, b1, b0] => Some((
            nibble(r1)? << 4 | nibble(r0)?,
            nibble(g1)? << 4 | nibble(g0)?,
            nibble(b1)? << 4 | nibble(b0)?,
        )),
        _ => None,
    }
}

/// Format a color with an alpha channel as a CSS `rgba()` string.
///
/// Non-hex inputs (named colors, existing `rgb()` strings) are returned
/// unchanged; the caller applies opacity through global alpha instead.
#[must_use]
pub fn with_alpha(color: &str, alpha: f64) -> String {
    match parse_hex_rgb(color) {
        Some((r, g, b)) => {
            let a = alpha.clamp(0.0, 1.0);
            format!("rgba({r}, {g}, {b}, {a})")
        }
        None => color.trim().to_owned(),
    }
}
