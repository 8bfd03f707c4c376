#![allow(dead_code)]

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, Rgb, RgbImage};
use serde_json::{Value, json};
use std::io::Cursor;

/// Wrap insert ops into a raw delta
pub fn raw_delta(ops: Vec<Value>) -> Value {
    json!({ "ops": ops })
}

/// A text insert with inline attributes
pub fn styled(text: &str, attributes: Value) -> Value {
    json!({ "insert": text, "attributes": attributes })
}

pub fn text(text: &str) -> Value {
    json!({ "insert": text })
}

/// A line terminator carrying line attributes
pub fn line_end(attributes: Value) -> Value {
    json!({ "insert": "\n", "attributes": attributes })
}

/// A raw delta of unformatted lines
pub fn plain_lines(lines: &[&str]) -> Value {
    let mut joined = lines.join("\n");
    joined.push('\n');
    raw_delta(vec![text(&joined)])
}

/// Ops for one list item
pub fn list_item(text_content: &str, kind: &str, indent: usize) -> Vec<Value> {
    let attributes = if indent == 0 {
        json!({ "list": kind })
    } else {
        json!({ "list": kind, "indent": indent })
    };
    vec![text(text_content), line_end(attributes)]
}

/// A parsed document from paragraph values
pub fn parsed_document(paragraphs: Vec<Value>) -> Value {
    json!({ "paragraphs": paragraphs })
}

pub fn parsed_paragraph(text_content: &str) -> Value {
    json!({ "textRuns": [{ "text": text_content }] })
}

/// A solid-colored PNG as a base64 data URL
pub fn png_data_url(width: u32, height: u32) -> String {
    let img = RgbImage::from_pixel(width, height, Rgb([30, 120, 200]));
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageFormat::Png)
        .expect("Failed to encode PNG fixture");
    format!("data:image/png;base64,{}", STANDARD.encode(bytes.into_inner()))
}
