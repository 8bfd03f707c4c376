use serde::{Deserialize, Deserializer, Serialize, de};

/// An RGB fill color resolved from a named or hex color string.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components scaled to the 0.0..=1.0 range used by PDF color operators.
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Parses a CSS color name, `#RGB`/`#RRGGBB` hex, or `rgb(r, g, b)`.
    pub fn parse(s: &str) -> Result<Color, String> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::parse_hex(s);
        }
        if let Some(inner) = s.strip_prefix("rgb(").and_then(|rest| rest.strip_suffix(')')) {
            return Self::parse_rgb_function(inner);
        }
        Self::from_name(s).ok_or_else(|| format!("Unknown color name: {}", s))
    }

    fn parse_hex(s: &str) -> Result<Color, String> {
        let hex = &s[1..];
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("Invalid hex color: {}", s));
        }
        match hex.len() {
            3 => {
                // #RGB format - expand each digit
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16)
                    .map_err(|e| format!("Invalid red component: {}", e))?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16)
                    .map_err(|e| format!("Invalid green component: {}", e))?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16)
                    .map_err(|e| format!("Invalid blue component: {}", e))?;
                Ok(Color { r, g, b })
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16)
                    .map_err(|e| format!("Invalid red component: {}", e))?;
                let g = u8::from_str_radix(&hex[2..4], 16)
                    .map_err(|e| format!("Invalid green component: {}", e))?;
                let b = u8::from_str_radix(&hex[4..6], 16)
                    .map_err(|e| format!("Invalid blue component: {}", e))?;
                Ok(Color { r, g, b })
            }
            _ => Err(format!(
                "Invalid hex color length: expected 3 or 6, got {}",
                hex.len()
            )),
        }
    }

    fn parse_rgb_function(inner: &str) -> Result<Color, String> {
        let parts: Vec<u8> = inner
            .split(',')
            .map(|p| {
                p.trim()
                    .parse::<u8>()
                    .map_err(|e| format!("Invalid rgb() component '{}': {}", p.trim(), e))
            })
            .collect::<Result<_, _>>()?;
        match parts.as_slice() {
            [r, g, b] => Ok(Color::rgb(*r, *g, *b)),
            _ => Err(format!("rgb() expects 3 components, got {}", parts.len())),
        }
    }

    /// The CSS basic color keywords plus a few extended names editors emit.
    pub fn from_name(name: &str) -> Option<Color> {
        let color = match name.to_ascii_lowercase().as_str() {
            "black" => Color::rgb(0, 0, 0),
            "white" => Color::rgb(255, 255, 255),
            "red" => Color::rgb(255, 0, 0),
            "lime" => Color::rgb(0, 255, 0),
            "green" => Color::rgb(0, 128, 0),
            "blue" => Color::rgb(0, 0, 255),
            "yellow" => Color::rgb(255, 255, 0),
            "cyan" | "aqua" => Color::rgb(0, 255, 255),
            "magenta" | "fuchsia" => Color::rgb(255, 0, 255),
            "gray" | "grey" => Color::rgb(128, 128, 128),
            "silver" => Color::rgb(192, 192, 192),
            "maroon" => Color::rgb(128, 0, 0),
            "olive" => Color::rgb(128, 128, 0),
            "navy" => Color::rgb(0, 0, 128),
            "purple" => Color::rgb(128, 0, 128),
            "teal" => Color::rgb(0, 128, 128),
            "orange" => Color::rgb(255, 165, 0),
            "pink" => Color::rgb(255, 192, 203),
            "brown" => Color::rgb(165, 42, 42),
            _ => return None,
        };
        Some(color)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b } => Ok(Color { r, g, b }),
        }
    }
}
