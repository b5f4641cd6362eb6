use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses hex notation (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`) at compile
    /// time. Returns `None` for anything else.
    #[must_use]
    pub const fn from_hex(input: &str) -> Option<Self> {
        let digits = match input.as_bytes() {
            [b'#', rest @ ..] => rest,
            _ => return None,
        };
        let (red, green, blue, alpha) = match digits {
            [r, g, b] => (
                hex_channel(*r, *r),
                hex_channel(*g, *g),
                hex_channel(*b, *b),
                Some(1.0),
            ),
            [r, g, b, a] => (
                hex_channel(*r, *r),
                hex_channel(*g, *g),
                hex_channel(*b, *b),
                hex_channel(*a, *a),
            ),
            [r1, r2, g1, g2, b1, b2] => (
                hex_channel(*r1, *r2),
                hex_channel(*g1, *g2),
                hex_channel(*b1, *b2),
                Some(1.0),
            ),
            [r1, r2, g1, g2, b1, b2, a1, a2] => (
                hex_channel(*r1, *r2),
                hex_channel(*g1, *g2),
                hex_channel(*b1, *b2),
                hex_channel(*a1, *a2),
            ),
            _ => return None,
        };
        match (red, green, blue, alpha) {
            (Some(red), Some(green), Some(blue), Some(alpha)) => {
                Some(Self::rgba(red, green, blue, alpha))
            }
            _ => None,
        }
    }

    /// Parses a CSS color string as accepted by a canvas `fillStyle`.
    ///
    /// Supported: hex notation, `rgb()`/`rgba()` with comma or space separated
    /// arguments (channels as 0..=255 numbers or percentages, alpha as a
    /// 0..=1 number or percentage), and the basic named colors.
    pub fn from_css(input: &str) -> ChartResult<Self> {
        let invalid = || ChartError::InvalidData(format!("`{input}` is not a supported css color"));

        let trimmed = input.trim();
        if trimmed.starts_with('#') {
            return Self::from_hex(trimmed).ok_or_else(invalid);
        }

        let lowered = trimmed.to_ascii_lowercase();
        let arguments = lowered
            .strip_prefix("rgba(")
            .or_else(|| lowered.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'));
        match arguments {
            Some(arguments) => parse_rgb_arguments(arguments).ok_or_else(invalid),
            None => named_color(&lowered).ok_or_else(invalid),
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

const fn hex_channel(high: u8, low: u8) -> Option<f64> {
    match (hex_value(high), hex_value(low)) {
        (Some(high), Some(low)) => Some((high * 16 + low) as f64 / 255.0),
        _ => None,
    }
}

fn parse_rgb_arguments(arguments: &str) -> Option<Color> {
    let parts: Vec<&str> = if arguments.contains(',') {
        arguments.split(',').map(str::trim).collect()
    } else {
        // Space syntax puts alpha behind a slash: `rgb(70 146 202 / 30%)`.
        arguments
            .split(|ch: char| ch.is_whitespace() || ch == '/')
            .filter(|part| !part.is_empty())
            .collect()
    };

    let (channels, alpha) = match parts.as_slice() {
        [red, green, blue] => ([*red, *green, *blue], None),
        [red, green, blue, alpha] => ([*red, *green, *blue], Some(*alpha)),
        _ => return None,
    };

    let red = parse_rgb_channel(channels[0])?;
    let green = parse_rgb_channel(channels[1])?;
    let blue = parse_rgb_channel(channels[2])?;
    let alpha = match alpha {
        Some(alpha) => parse_alpha(alpha)?,
        None => 1.0,
    };
    Some(Color::rgba(red, green, blue, alpha))
}

fn parse_rgb_channel(raw: &str) -> Option<f64> {
    match raw.strip_suffix('%') {
        Some(percent) => parse_finite(percent).map(|value| (value / 100.0).clamp(0.0, 1.0)),
        None => parse_finite(raw).map(|value| value.clamp(0.0, 255.0) / 255.0),
    }
}

fn parse_alpha(raw: &str) -> Option<f64> {
    let value = match raw.strip_suffix('%') {
        Some(percent) => parse_finite(percent)? / 100.0,
        None => parse_finite(raw)?,
    };
    Some(value.clamp(0.0, 1.0))
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn named_color(name: &str) -> Option<Color> {
    let hex = match name {
        "transparent" => "#0000",
        "black" => "#000000",
        "white" => "#ffffff",
        "gray" | "grey" => "#808080",
        "silver" => "#c0c0c0",
        "red" => "#ff0000",
        "maroon" => "#800000",
        "orange" => "#ffa500",
        "yellow" => "#ffff00",
        "olive" => "#808000",
        "lime" => "#00ff00",
        "green" => "#008000",
        "teal" => "#008080",
        "aqua" | "cyan" => "#00ffff",
        "blue" => "#0000ff",
        "navy" => "#000080",
        "steelblue" => "#4682b4",
        "purple" => "#800080",
        "fuchsia" | "magenta" => "#ff00ff",
        _ => return None,
    };
    Color::from_hex(hex)
}

/// Filled rectangle in surface-local pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(ChartError::InvalidData(
                "rect geometry must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}
