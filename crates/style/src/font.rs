//! Standard PDF base-14 font names and their bold variants.

/// The bold face of a base font, for the fonts that have a fixed mapping.
///
/// Fonts outside the table (including faces that are already bold or italic)
/// have no variant and are left unchanged by callers.
pub fn bold_variant(base_font: &str) -> Option<&'static str> {
    match base_font {
        "Times-Roman" => Some("Times-Bold"),
        "Courier" => Some("Courier-Bold"),
        "Helvetica" => Some("Helvetica-Bold"),
        _ => None,
    }
}
