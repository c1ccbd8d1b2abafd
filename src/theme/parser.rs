//! Color parsing for theme files

use ratatui::style::Color;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error type for color parsing failures
#[derive(Debug, thiserror::Error)]
pub enum ColorParseError {
    #[error("Invalid hex color format: {0}")]
    InvalidHex(String),
    #[error("Unknown color name: {0}")]
    UnknownName(String),
    #[error("Invalid indexed color: {0}")]
    InvalidIndex(String),
}

/// Parse a color from a hex string (`#rrggbb`, `#rgb`), a color name or
/// `indexed_N`.
pub fn parse_color(input: &str) -> Result<Color, ColorParseError> {
    let input = input.trim();

    if input.starts_with('#') {
        return parse_hex_color(input);
    }
    if let Some(index) = input.strip_prefix("indexed_") {
        return index
            .parse::<u8>()
            .map(Color::Indexed)
            .map_err(|_| ColorParseError::InvalidIndex(input.to_string()));
    }

    parse_named_color(input)
}

/// Parse hex color in format #RRGGBB or #RGB
fn parse_hex_color(hex: &str) -> Result<Color, ColorParseError> {
    let invalid = || ColorParseError::InvalidHex(hex.to_string());
    let digits = hex.get(1..).ok_or_else(invalid)?;
    if !digits.is_ascii() {
        return Err(invalid());
    }
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .ok_or_else(invalid)
    };

    match digits.len() {
        6 => Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        // #RGB, each digit doubled
        3 => Ok(Color::Rgb(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        _ => Err(invalid()),
    }
}

/// Parse named color (case-insensitive)
fn parse_named_color(name: &str) -> Result<Color, ColorParseError> {
    match name.to_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "gray" | "grey" => Ok(Color::Gray),
        "white" => Ok(Color::White),
        "dark_gray" | "dark_grey" | "bright_black" => Ok(Color::DarkGray),
        "light_red" | "bright_red" => Ok(Color::LightRed),
        "light_green" | "bright_green" => Ok(Color::LightGreen),
        "light_yellow" | "bright_yellow" => Ok(Color::LightYellow),
        "light_blue" | "bright_blue" => Ok(Color::LightBlue),
        "light_magenta" | "bright_magenta" => Ok(Color::LightMagenta),
        "light_cyan" | "bright_cyan" => Ok(Color::LightCyan),
        "reset" => Ok(Color::Reset),
        _ => Err(ColorParseError::UnknownName(name.to_string())),
    }
}

/// Custom deserializer for Color that handles multiple formats
pub fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_color(&value).map_err(|e| D::Error::custom(format!("Failed to parse color: {e}")))
}

/// Wrapper for Color that implements serde traits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializableColor(pub Color);

impl SerializableColor {
    /// Shorthand for the `#rrggbb` colors of the built-in themes.
    pub const fn rgb(hex: u32) -> Self {
        SerializableColor(Color::Rgb(
            ((hex >> 16) & 0xff) as u8,
            ((hex >> 8) & 0xff) as u8,
            (hex & 0xff) as u8,
        ))
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        SerializableColor(color)
    }
}

impl From<SerializableColor> for Color {
    fn from(sc: SerializableColor) -> Self {
        sc.0
    }
}

impl<'de> Deserialize<'de> for SerializableColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let color = deserialize_color(deserializer)?;
        Ok(SerializableColor(color))
    }
}

impl Serialize for SerializableColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Color::Rgb(r, g, b) => {
                let hex = format!("#{r:02x}{g:02x}{b:02x}");
                serializer.serialize_str(&hex)
            }
            Color::Reset => serializer.serialize_str("reset"),
            Color::Black => serializer.serialize_str("black"),
            Color::Red => serializer.serialize_str("red"),
            Color::Green => serializer.serialize_str("green"),
            Color::Yellow => serializer.serialize_str("yellow"),
            Color::Blue => serializer.serialize_str("blue"),
            Color::Magenta => serializer.serialize_str("magenta"),
            Color::Cyan => serializer.serialize_str("cyan"),
            Color::Gray => serializer.serialize_str("gray"),
            Color::DarkGray => serializer.serialize_str("dark_gray"),
            Color::LightRed => serializer.serialize_str("light_red"),
            Color::LightGreen => serializer.serialize_str("light_green"),
            Color::LightYellow => serializer.serialize_str("light_yellow"),
            Color::LightBlue => serializer.serialize_str("light_blue"),
            Color::LightMagenta => serializer.serialize_str("light_magenta"),
            Color::LightCyan => serializer.serialize_str("light_cyan"),
            Color::White => serializer.serialize_str("white"),
            Color::Indexed(i) => serializer.serialize_str(&format!("indexed_{i}")),
        }
    }
}
