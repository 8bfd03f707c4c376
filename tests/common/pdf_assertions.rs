#![allow(dead_code)]

use lopdf::{Document as LopdfDocument, Object};
use std::collections::HashSet;

/// Extract all text content from a PDF document
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

/// Base font names referenced by any page
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = HashSet::new();
    for page_id in doc.get_pages().values() {
        for font in doc.get_page_fonts(*page_id).unwrap_or_default().values() {
            if let Ok(name) = font.get(b"BaseFont").and_then(Object::as_name) {
                fonts.insert(String::from_utf8_lossy(name).to_string());
            }
        }
    }
    fonts.into_iter().collect()
}

fn dict_name_is(object: &Object, key: &[u8], value: &[u8]) -> bool {
    let dict = match object {
        Object::Dictionary(dict) => dict,
        Object::Stream(stream) => &stream.dict,
        _ => return false,
    };
    dict.get(key).and_then(Object::as_name).ok() == Some(value)
}

/// Number of link annotations in the document
pub fn count_link_annotations(doc: &LopdfDocument) -> usize {
    doc.objects
        .values()
        .filter(|object| dict_name_is(object, b"Subtype", b"Link"))
        .count()
}

/// URIs targeted by link annotations
pub fn link_uris(doc: &LopdfDocument) -> Vec<String> {
    doc.objects
        .values()
        .filter(|object| dict_name_is(object, b"Subtype", b"Link"))
        .filter_map(|object| {
            let action = object.as_dict().ok()?.get(b"A").ok()?.as_dict().ok()?;
            let uri = action.get(b"URI").ok()?.as_str().ok()?;
            Some(String::from_utf8_lossy(uri).to_string())
        })
        .collect()
}

/// Number of embedded image XObjects
pub fn count_images(doc: &LopdfDocument) -> usize {
    doc.objects
        .values()
        .filter(|object| dict_name_is(object, b"Subtype", b"Image"))
        .count()
}

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert that PDF contains a font matching a pattern
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f.contains($pattern)),
            "PDF should use a font matching '{}', found {:?}",
            $pattern,
            fonts
        );
    };
}
