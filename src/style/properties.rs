//! Property parsing: declaration values → typed [`Style`] fields.

use crate::style::model::{Declaration, Value};
use crate::style::parser::{parse_declarations, ParseError};
use crate::style::scalar::{Border, Height};
use crate::style::styles::{Align, DisplayMode, Fade, Style};

/// Errors from property parsing.
#[derive(Debug, thiserror::Error)]
pub enum PropertyError {
    #[error("unknown property: {0}")]
    UnknownProperty(String),
    #[error("invalid value for {property}: {message}")]
    InvalidValue { property: String, message: String },
}

/// Errors from [`parse_style`]: either stage may fail.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Property(#[from] PropertyError),
}

/// Parse a declaration block straight into a [`Style`].
///
/// Later declarations of the same property override earlier ones.
pub fn parse_style(input: &str) -> Result<Style, StyleError> {
    let mut style = Style::new();
    for declaration in parse_declarations(input)? {
        apply_declaration(&mut style, &declaration)?;
    }
    Ok(style)
}

/// Apply one declaration to `style`.
pub fn apply_declaration(style: &mut Style, decl: &Declaration) -> Result<(), PropertyError> {
    let name = decl.property.as_str();
    let values = decl.values.as_slice();

    match name {
        "bgColor" => style.bg_color = Some(require_color(values, name)?),
        "color" => style.color = Some(require_color(values, name)?),
        "font" => style.font = Some(require_font(values, name)?),
        "fontSize" => {
            let size = require_number(values, name)?;
            if size <= 0.0 {
                return Err(invalid(name, format!("font size must be positive, got {size}")));
            }
            style.font_size = Some(size as f32);
        }
        "isFaded" => style.is_faded = Some(require_bool(values, name)?),
        "fadeWith" => style.fade_with = Some(parse_fade(values)?),
        "align" => style.align = Some(parse_align(values)?),
        "width" => match require_single(values, name)? {
            Value::Percent(p) => style.width = Some(f64::from(*p)),
            other => {
                return Err(invalid(name, format!("expected a percent string, got: {other:?}")));
            }
        },
        "height" => style.height = Some(parse_height(values)?),
        "marginTop" => style.margin_top = Some(require_units(values, name)?),
        "marginBottom" => style.margin_bottom = Some(require_units(values, name)?),
        "paddingTop" => style.padding_top = Some(require_units(values, name)?),
        "paddingBottom" => style.padding_bottom = Some(require_units(values, name)?),
        "borderTop" => style.border_top = Some(parse_border(values, name)?),
        "borderBottom" => style.border_bottom = Some(parse_border(values, name)?),
        "mode" => style.mode = Some(parse_mode(values)?),
        other => return Err(PropertyError::UnknownProperty(other.to_string())),
    }
    Ok(())
}

fn invalid(property: &str, message: impl Into<String>) -> PropertyError {
    PropertyError::InvalidValue {
        property: property.into(),
        message: message.into(),
    }
}

fn require_single<'a>(values: &'a [Value], property: &str) -> Result<&'a Value, PropertyError> {
    match values {
        [value] => Ok(value),
        _ => Err(invalid(property, format!("expected 1 value, got {}", values.len()))),
    }
}

fn require_ident<'a>(values: &'a [Value], property: &str) -> Result<&'a str, PropertyError> {
    match require_single(values, property)? {
        Value::Ident(name) => Ok(name.as_str()),
        other => Err(invalid(property, format!("expected identifier, got: {other:?}"))),
    }
}

fn require_number(values: &[Value], property: &str) -> Result<f64, PropertyError> {
    match require_single(values, property)? {
        Value::Number(n) => Ok(*n),
        other => Err(invalid(property, format!("expected number, got: {other:?}"))),
    }
}

/// A color value is a hex color or a named color.
fn color_value(value: &Value, property: &str) -> Result<String, PropertyError> {
    match value {
        Value::Color(hex) => Ok(hex.clone()),
        Value::Ident(name) => Ok(name.clone()),
        other => Err(invalid(
            property,
            format!("expected color name or hex color, got: {other:?}"),
        )),
    }
}

fn require_color(values: &[Value], property: &str) -> Result<String, PropertyError> {
    color_value(require_single(values, property)?, property)
}

fn require_font(values: &[Value], property: &str) -> Result<String, PropertyError> {
    match require_single(values, property)? {
        Value::Ident(name) | Value::Str(name) => Ok(name.clone()),
        other => Err(invalid(property, format!("expected font name, got: {other:?}"))),
    }
}

fn require_bool(values: &[Value], property: &str) -> Result<bool, PropertyError> {
    match require_ident(values, property)? {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(invalid(property, format!("expected true|false, got: {other}"))),
    }
}

/// Non-negative whole layout units.
fn unit_value(value: &Value, property: &str) -> Result<u32, PropertyError> {
    match value {
        Value::Number(n) if *n >= 0.0 && n.fract() == 0.0 && *n <= f64::from(u32::MAX) => {
            Ok(*n as u32)
        }
        Value::Number(n) => Err(invalid(
            property,
            format!("expected a non-negative whole number, got {n}"),
        )),
        other => Err(invalid(property, format!("expected number, got: {other:?}"))),
    }
}

fn require_units(values: &[Value], property: &str) -> Result<u32, PropertyError> {
    unit_value(require_single(values, property)?, property)
}

fn parse_height(values: &[Value]) -> Result<Height, PropertyError> {
    match require_single(values, "height")? {
        Value::Percent(p) => Ok(Height::Percent(*p)),
        value => unit_value(value, "height").map(Height::Units),
    }
}

fn parse_align(values: &[Value]) -> Result<Align, PropertyError> {
    match require_ident(values, "align")? {
        "left" => Ok(Align::Left),
        "center" => Ok(Align::Center),
        "right" => Ok(Align::Right),
        other => Err(invalid("align", format!("expected left|center|right, got: {other}"))),
    }
}

/// `lighten`, `darken`, or any color.
fn parse_fade(values: &[Value]) -> Result<Fade, PropertyError> {
    match require_single(values, "fadeWith")? {
        Value::Ident(name) if name == "lighten" => Ok(Fade::Lighten),
        Value::Ident(name) if name == "darken" => Ok(Fade::Darken),
        value => color_value(value, "fadeWith").map(Fade::Color),
    }
}

/// `fullscreen`/`normal`, or a boolean fullscreen flag.
fn parse_mode(values: &[Value]) -> Result<DisplayMode, PropertyError> {
    match require_ident(values, "mode")? {
        "fullscreen" | "true" => Ok(DisplayMode::Fullscreen),
        "normal" | "false" => Ok(DisplayMode::Normal),
        other => Err(invalid("mode", format!("expected fullscreen|normal, got: {other}"))),
    }
}

/// Border values: `<unit>`, `<unit> <color>`, or `[<unit>, <color>]`.
fn parse_border(values: &[Value], property: &str) -> Result<Border, PropertyError> {
    let parts: &[Value] = match values {
        [Value::List(items)] => items.as_slice(),
        _ => values,
    };

    match parts {
        [size] => Ok(Border::new(unit_value(size, property)?)),
        [size, color] => Ok(Border::new(unit_value(size, property)?)
            .with_color(color_value(color, property)?)),
        _ => Err(invalid(
            property,
            format!("expected <unit> or [<unit>, <color>], got {} values", parts.len()),
        )),
    }
}
