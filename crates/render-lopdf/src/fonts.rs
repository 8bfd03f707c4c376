//! Standard Type1 fonts, resource naming and approximate metrics.

use lopdf::{Dictionary, Object, dictionary};

/// The PDF base-14 fonts every viewer provides.
pub const STANDARD_FONTS: [&str; 14] = [
    "Courier",
    "Courier-Bold",
    "Courier-Oblique",
    "Courier-BoldOblique",
    "Helvetica",
    "Helvetica-Bold",
    "Helvetica-Oblique",
    "Helvetica-BoldOblique",
    "Times-Roman",
    "Times-Bold",
    "Times-Italic",
    "Times-BoldItalic",
    "Symbol",
    "ZapfDingbats",
];

const FALLBACK_FONT: &str = "Helvetica";

/// Maps base font names to page resource names (`F1`, `F2`, ...) in first-use order.
#[derive(Debug, Default, Clone)]
pub struct FontRegistry {
    fonts: Vec<&'static str>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves `name` to a standard font, substituting Helvetica for anything else.
    pub fn resolve(name: &str) -> &'static str {
        match STANDARD_FONTS.iter().find(|font| **font == name) {
            Some(font) => font,
            None => {
                log::warn!("Font '{}' is not a standard PDF font, using {}", name, FALLBACK_FONT);
                FALLBACK_FONT
            }
        }
    }

    /// The resource name for `base_font`, registering it on first use.
    pub fn resource_name(&mut self, base_font: &'static str) -> String {
        let index = match self.fonts.iter().position(|font| *font == base_font) {
            Some(index) => index,
            None => {
                self.fonts.push(base_font);
                self.fonts.len() - 1
            }
        };
        format!("F{}", index + 1)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// The `/Font` resource dictionary for every registered font.
    pub fn to_resources(&self) -> Dictionary {
        let mut fonts = Dictionary::new();
        for (index, base_font) in self.fonts.iter().enumerate() {
            let font = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => *base_font,
                "Encoding" => "WinAnsiEncoding",
            };
            fonts.set(format!("F{}", index + 1).into_bytes(), Object::Dictionary(font));
        }
        fonts
    }
}

/// Average glyph advance as a fraction of the font size.
fn average_advance(base_font: &str) -> f32 {
    if base_font.starts_with("Courier") {
        0.6
    } else if base_font.starts_with("Times") {
        0.48
    } else {
        0.52
    }
}

/// Approximate rendered width of `text`, in points.
pub fn text_width(text: &str, base_font: &str, size: f32) -> f32 {
    let advance = average_advance(base_font);
    text.chars()
        .map(|c| if c == ' ' { 0.25 } else { advance })
        .sum::<f32>()
        * size
}
