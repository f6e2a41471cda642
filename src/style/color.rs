//! Hex color parsing and mixing for faded foregrounds.

use crate::style::styles::Fade;

const WHITE: (u8, u8, u8) = (0xff, 0xff, 0xff);
const BLACK: (u8, u8, u8) = (0x00, 0x00, 0x00);

/// Parse `#rgb` or `#rrggbb` into channels.
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let expand = |i: usize| channel(hex[i..=i].repeat(2).as_str());
            Some((expand(0)?, expand(1)?, expand(2)?))
        }
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => None,
    }
}

/// Format channels as `#rrggbb`.
pub fn to_hex((r, g, b): (u8, u8, u8)) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Mix `color` toward `target` by `amount` (clamped to `0.0..=1.0`).
///
/// Returns `None` if `color` is not a hex color.
pub fn mix(color: &str, target: (u8, u8, u8), amount: f32) -> Option<String> {
    let (r, g, b) = parse_hex(color)?;
    let amount = amount.clamp(0.0, 1.0);
    let blend = |from: u8, to: u8| {
        let from = f32::from(from);
        (from + (f32::from(to) - from) * amount).round() as u8
    };
    Some(to_hex((
        blend(r, target.0),
        blend(g, target.1),
        blend(b, target.2),
    )))
}

/// Derive a faded foreground.
///
/// Named or otherwise unparseable colors cannot be mixed and are returned
/// unchanged. An explicit fade color always wins, even with no foreground.
pub fn fade(color: Option<&str>, fade: &Fade, amount: f32) -> Option<String> {
    match fade {
        Fade::Color(explicit) => Some(explicit.clone()),
        Fade::Lighten => color.map(|c| mix(c, WHITE, amount).unwrap_or_else(|| c.to_owned())),
        Fade::Darken => color.map(|c| mix(c, BLACK, amount).unwrap_or_else(|| c.to_owned())),
    }
}
