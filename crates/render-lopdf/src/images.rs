//! Image sources and their XObjects.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use deltapdf_render_core::RenderError;
use lopdf::{Stream, dictionary};
use std::collections::HashMap;

/// A decoded image registered as a page resource.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ImageResource {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

/// Decoded images keyed by source, so a repeated source is embedded once.
#[derive(Default)]
pub(crate) struct ImageStore {
    by_source: HashMap<String, ImageResource>,
    streams: Vec<(String, Stream)>,
}

impl ImageStore {
    pub fn load(&mut self, source: &str) -> Result<ImageResource, RenderError> {
        if let Some(resource) = self.by_source.get(source) {
            return Ok(resource.clone());
        }
        let bytes = read_source(source)?;
        let decoded = image::load_from_memory(&bytes)
            .map_err(|e| RenderError::Image(e.to_string()))?
            .to_rgb8();
        let (width, height) = decoded.dimensions();

        let stream = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width as i64,
                "Height" => height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
            },
            decoded.into_raw(),
        );
        let resource = ImageResource {
            name: format!("Im{}", self.streams.len() + 1),
            width,
            height,
        };
        self.streams.push((resource.name.clone(), stream));
        self.by_source.insert(source.to_string(), resource.clone());
        Ok(resource)
    }

    pub fn into_streams(self) -> Vec<(String, Stream)> {
        self.streams
    }
}

/// Reads the bytes behind a data URL or a file path.
fn read_source(source: &str) -> Result<Vec<u8>, RenderError> {
    if let Some(rest) = source.strip_prefix("data:") {
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| RenderError::Image("malformed data URL".into()))?;
        if !header.ends_with(";base64") {
            return Err(RenderError::Image("only base64 data URLs are supported".into()));
        }
        return STANDARD
            .decode(payload.trim())
            .map_err(|e| RenderError::Image(e.to_string()));
    }
    if source.starts_with("http://") || source.starts_with("https://") {
        return Err(RenderError::Image(format!("remote image not fetched: {source}")));
    }
    Ok(std::fs::read(source)?)
}
