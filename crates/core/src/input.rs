//! Input preparation: a raw delta, a parsed document, or a homogeneous array of either.

use deltapdf_delta::{DeltaError, DeltaParser, RawDelta};
use deltapdf_types::ParsedDocument;
use serde_json::Value;

use crate::error::BuildError;

const SINGLE_SHAPE_ERROR: &str = "Must provide a raw or parsed delta.";
const ARRAY_SHAPE_ERROR: &str = "Array must contain raw or parsed deltas only.";

/// One input document before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentInput {
    Raw(RawDelta),
    Parsed(ParsedDocument),
}

impl DocumentInput {
    /// Discriminates on the presence of `ops` (raw) or `paragraphs` (parsed).
    /// Returns `Ok(None)` when the value has neither.
    pub fn from_value(value: &Value) -> Result<Option<Self>, BuildError> {
        let Some(object) = value.as_object() else {
            return Ok(None);
        };
        if object.contains_key("ops") {
            let raw: RawDelta =
                serde_json::from_value(value.clone()).map_err(DeltaError::from)?;
            Ok(Some(DocumentInput::Raw(raw)))
        } else if object.contains_key("paragraphs") {
            let parsed: ParsedDocument = serde_json::from_value(value.clone())?;
            Ok(Some(DocumentInput::Parsed(parsed)))
        } else {
            Ok(None)
        }
    }

    fn is_raw(&self) -> bool {
        matches!(self, DocumentInput::Raw(_))
    }

    pub fn into_parsed(self, parser: &dyn DeltaParser) -> Result<ParsedDocument, BuildError> {
        match self {
            DocumentInput::Raw(raw) => Ok(parser.parse(&raw)?),
            DocumentInput::Parsed(parsed) => Ok(parsed),
        }
    }
}

/// Normalizes caller input into parsed documents, in input order.
///
/// Fails before anything is drawn. Every element of an array is checked, and
/// an array mixing raw and parsed documents is rejected.
pub fn prepare_input(
    value: &Value,
    parser: &dyn DeltaParser,
) -> Result<Vec<ParsedDocument>, BuildError> {
    let inputs = match value {
        Value::Array(items) => {
            if items.is_empty() {
                return Err(BuildError::EmptyInput);
            }
            let mut inputs = Vec::with_capacity(items.len());
            for item in items {
                let input = DocumentInput::from_value(item)?
                    .ok_or_else(|| BuildError::InvalidInput(ARRAY_SHAPE_ERROR.to_string()))?;
                inputs.push(input);
            }
            let first_is_raw = inputs[0].is_raw();
            if inputs.iter().any(|input| input.is_raw() != first_is_raw) {
                return Err(BuildError::InvalidInput(ARRAY_SHAPE_ERROR.to_string()));
            }
            inputs
        }
        single => {
            let input = DocumentInput::from_value(single)?
                .ok_or_else(|| BuildError::InvalidInput(SINGLE_SHAPE_ERROR.to_string()))?;
            vec![input]
        }
    };

    inputs
        .into_iter()
        .map(|input| input.into_parsed(parser))
        .collect()
}
