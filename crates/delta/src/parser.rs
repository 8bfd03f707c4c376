use deltapdf_types::{
    DocumentSetup, Embed, Hyperlink, LineAttributes, ListKind, Paragraph, ParsedDocument, Run,
    RunAttributes, RunContent,
};
use serde_json::{Map, Value};

use crate::error::DeltaError;
use crate::model::{Insert, RawDelta};

/// Normalizes a raw delta into paragraphs.
pub trait DeltaParser: Send + Sync {
    fn parse(&self, raw: &RawDelta) -> Result<ParsedDocument, DeltaError>;
}

/// Parser following the Quill editor's delta conventions.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuillDeltaParser;

impl DeltaParser for QuillDeltaParser {
    fn parse(&self, raw: &RawDelta) -> Result<ParsedDocument, DeltaError> {
        let mut state = ParseState::default();

        for (index, op) in raw.ops.iter().enumerate() {
            let Some(insert) = &op.insert else {
                log::debug!("Skipping non-insert op {}", index);
                continue;
            };
            match insert {
                Insert::Text(text) => {
                    let run_attributes = run_attributes(index, op.attributes.as_ref())?;
                    let mut lines = text.split('\n').peekable();
                    while let Some(segment) = lines.next() {
                        if !segment.is_empty() {
                            state.push_run(Run {
                                content: RunContent::Text(segment.to_string()),
                                attributes: run_attributes.clone(),
                            });
                        }
                        if lines.peek().is_some() {
                            let line = line_attributes(index, op.attributes.as_ref())?;
                            state.end_line(line);
                        }
                    }
                }
                Insert::Embed(embed) => {
                    if let Some(formula) = embed.get("formula") {
                        let run_attributes = run_attributes(index, op.attributes.as_ref())?;
                        state.push_run(Run {
                            content: RunContent::Formula(value_to_string(formula)),
                            attributes: run_attributes,
                        });
                    } else if let Some(image) = embed.get("image") {
                        state.push_embed(Embed::Image(value_to_string(image)));
                    } else if let Some(video) = embed.get("video") {
                        state.push_embed(Embed::Video(value_to_string(video)));
                    } else {
                        return Err(DeltaError::UnsupportedEmbed {
                            index,
                            keys: embed.keys().cloned().collect(),
                        });
                    }
                }
            }
        }

        Ok(state.finish())
    }
}

#[derive(Default)]
struct ParseState {
    paragraphs: Vec<Paragraph>,
    runs: Vec<Run>,
    setup: DocumentSetup,
    /// A block embed was just emitted; its terminating newline is absorbed.
    after_embed: bool,
    in_ordered_list: bool,
}

impl ParseState {
    fn push_run(&mut self, run: Run) {
        if let Some(link) = run.attributes.as_ref().and_then(|a| a.link.clone()) {
            self.setup.hyperlinks.push(Hyperlink {
                text: run.content_str().to_string(),
                link,
            });
        }
        self.after_embed = false;
        self.runs.push(run);
    }

    fn push_embed(&mut self, embed: Embed) {
        if !self.runs.is_empty() {
            let runs = std::mem::take(&mut self.runs);
            self.push_paragraph(Paragraph::Plain { runs });
        }
        self.push_paragraph(Paragraph::Embed(embed));
        self.after_embed = true;
    }

    fn end_line(&mut self, attributes: Option<LineAttributes>) {
        if self.after_embed && self.runs.is_empty() {
            self.after_embed = false;
            return;
        }
        let runs = std::mem::take(&mut self.runs);
        let paragraph = match attributes {
            Some(attributes) => Paragraph::Formatted { runs, attributes },
            None => Paragraph::Plain { runs },
        };
        self.push_paragraph(paragraph);
    }

    fn push_paragraph(&mut self, paragraph: Paragraph) {
        let ordered = matches!(
            &paragraph,
            Paragraph::Formatted { attributes, .. } if attributes.list == Some(ListKind::Ordered)
        );
        if ordered && !self.in_ordered_list {
            self.setup.numbered_lists += 1;
        }
        self.in_ordered_list = ordered;
        self.paragraphs.push(paragraph);
    }

    fn finish(mut self) -> ParsedDocument {
        if !self.runs.is_empty() {
            let runs = std::mem::take(&mut self.runs);
            self.push_paragraph(Paragraph::Plain { runs });
        }
        ParsedDocument {
            setup: self.setup,
            paragraphs: self.paragraphs,
        }
    }
}

const LINE_KEYS: [&str; 6] = ["header", "blockquote", "code-block", "list", "indent", "citation"];

/// Keeps only the line attributes the renderer understands. Returns `None`
/// when nothing recognized remains, so the line is treated as plain.
fn line_attributes(
    index: usize,
    attributes: Option<&Map<String, Value>>,
) -> Result<Option<LineAttributes>, DeltaError> {
    let Some(attributes) = attributes else {
        return Ok(None);
    };
    let mut filtered = Map::new();
    for key in LINE_KEYS {
        match attributes.get(key) {
            None | Some(Value::Null) | Some(Value::Bool(false)) => {}
            // Newer editors tag code blocks with a language name.
            Some(Value::String(_)) if key == "code-block" => {
                filtered.insert(key.to_string(), Value::Bool(true));
            }
            Some(value) => {
                filtered.insert(key.to_string(), value.clone());
            }
        }
    }
    if filtered.is_empty() {
        return Ok(None);
    }
    let line: LineAttributes = serde_json::from_value(Value::Object(filtered))
        .map_err(|source| DeltaError::InvalidAttributes { index, source })?;
    Ok(line.has_recognized_flag().then_some(line))
}

fn run_attributes(
    index: usize,
    attributes: Option<&Map<String, Value>>,
) -> Result<Option<RunAttributes>, DeltaError> {
    let Some(attributes) = attributes else {
        return Ok(None);
    };
    let mut inline = attributes.clone();
    for key in LINE_KEYS {
        inline.remove(key);
    }
    inline.retain(|_, value| !value.is_null());
    if inline.is_empty() {
        return Ok(None);
    }
    let parsed: RunAttributes = serde_json::from_value(Value::Object(inline))
        .map_err(|source| DeltaError::InvalidAttributes { index, source })?;
    Ok((parsed != RunAttributes::default()).then_some(parsed))
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> ParsedDocument {
        let raw: RawDelta = serde_json::from_value(value).unwrap();
        QuillDeltaParser.parse(&raw).unwrap()
    }

    #[test]
    fn splits_text_into_paragraphs() {
        let doc = parse(json!({ "ops": [{ "insert": "first\nsecond\n" }] }));
        assert_eq!(
            doc.paragraphs,
            vec![
                Paragraph::plain(vec![Run::text("first")]),
                Paragraph::plain(vec![Run::text("second")]),
            ]
        );
    }

    #[test]
    fn newline_attributes_become_line_attributes() {
        let doc = parse(json!({ "ops": [
            { "insert": "Title" },
            { "insert": "\n", "attributes": { "header": 1, "align": "center" } },
            { "insert": "one" },
            { "insert": "\n", "attributes": { "list": "ordered" } },
            { "insert": "two" },
            { "insert": "\n", "attributes": { "list": "ordered", "indent": 1 } },
            { "insert": "centered" },
            { "insert": "\n", "attributes": { "align": "center" } }
        ]}));

        assert_eq!(
            doc.paragraphs[0],
            Paragraph::formatted(vec![Run::text("Title")], LineAttributes::header(1))
        );
        assert_eq!(
            doc.paragraphs[2],
            Paragraph::formatted(vec![Run::text("two")], LineAttributes::list(ListKind::Ordered, 1))
        );
        assert_eq!(doc.paragraphs[3], Paragraph::plain(vec![Run::text("centered")]));
        assert_eq!(doc.setup.numbered_lists, 1);
    }

    #[test]
    fn inline_attributes_stay_on_runs() {
        let doc = parse(json!({ "ops": [
            { "insert": "bold", "attributes": { "bold": true } },
            { "insert": " and " },
            { "insert": "link", "attributes": { "link": "https://example.com" } },
            { "insert": "\n" }
        ]}));
        let runs = doc.paragraphs[0].runs();
        assert_eq!(runs.len(), 3);
        assert!(runs[0].attributes.as_ref().unwrap().bold);
        assert_eq!(runs[1].attributes, None);
        assert_eq!(doc.setup.hyperlinks[0].link, "https://example.com");
        assert_eq!(doc.setup.hyperlinks[0].text, "link");
    }

    #[test]
    fn embeds_take_their_own_paragraph() {
        let doc = parse(json!({ "ops": [
            { "insert": "Below is an image. " },
            { "insert": { "image": "data:image/png;base64,AAAA" } },
            { "insert": "\n" },
            { "insert": "E = " },
            { "insert": { "formula": "mc^2" } },
            { "insert": "\n" }
        ]}));
        assert_eq!(doc.paragraphs.len(), 3);
        assert_eq!(doc.paragraphs[0].kind(), "plain");
        assert_eq!(
            doc.paragraphs[1],
            Paragraph::Embed(Embed::Image("data:image/png;base64,AAAA".into()))
        );
        assert_eq!(
            doc.paragraphs[2].runs()[1].content,
            RunContent::Formula("mc^2".into())
        );
    }

    #[test]
    fn code_block_language_tag_is_accepted() {
        let doc = parse(json!({ "ops": [
            { "insert": "let x = 1;" },
            { "insert": "\n", "attributes": { "code-block": "rust" } }
        ]}));
        match &doc.paragraphs[0] {
            Paragraph::Formatted { attributes, .. } => assert!(attributes.code_block),
            other => panic!("expected code block, got {other:?}"),
        }
    }

    #[test]
    fn trailing_text_forms_final_paragraph() {
        let doc = parse(json!({ "ops": [{ "insert": "no newline" }] }));
        assert_eq!(doc.paragraphs, vec![Paragraph::plain(vec![Run::text("no newline")])]);
    }

    #[test]
    fn unknown_embed_is_rejected() {
        let raw: RawDelta =
            serde_json::from_value(json!({ "ops": [{ "insert": { "divider": true } }] })).unwrap();
        let err = QuillDeltaParser.parse(&raw).unwrap_err();
        assert!(matches!(err, DeltaError::UnsupportedEmbed { index: 0, .. }));
    }
}
