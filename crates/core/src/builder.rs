//! The document driver.

use deltapdf_delta::{DeltaParser, QuillDeltaParser};
use deltapdf_render_core::DrawingBackend;
use deltapdf_style::StyleOverrides;
use deltapdf_types::ParsedDocument;
use serde_json::Value;

use crate::context::BuildContext;
use crate::dispatch::ParagraphDispatcher;
use crate::error::BuildError;
use crate::input::prepare_input;

/// Counts of what one build walked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub documents: usize,
    pub paragraphs: usize,
}

/// Walks documents paragraph by paragraph into a backend.
///
/// The builder itself holds no per-build state; every call to [`build`]
/// starts from a fresh [`BuildContext`], so one builder can serve
/// overlapping builds.
///
/// [`build`]: DocumentBuilder::build
pub struct DocumentBuilder {
    parser: Box<dyn DeltaParser>,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            parser: Box::new(QuillDeltaParser),
        }
    }

    /// Replaces the parser used for raw deltas.
    pub fn with_parser(mut self, parser: Box<dyn DeltaParser>) -> Self {
        self.parser = parser;
        self
    }

    pub fn parser(&self) -> &dyn DeltaParser {
        self.parser.as_ref()
    }

    pub fn prepare(&self, input: &Value) -> Result<Vec<ParsedDocument>, BuildError> {
        prepare_input(input, self.parser.as_ref())
    }

    /// Emits every paragraph of every document, in order.
    pub fn build(
        &self,
        documents: &[ParsedDocument],
        overrides: &StyleOverrides,
        backend: &mut dyn DrawingBackend,
    ) -> Result<BuildSummary, BuildError> {
        let mut ctx = BuildContext::new(overrides);
        log::info!(
            "Building {} document(s) with {} style override(s)",
            documents.len(),
            overrides.len()
        );

        let mut dispatcher = ParagraphDispatcher::new(&mut ctx, backend);
        let mut summary = BuildSummary::default();
        for document in documents {
            for paragraph in &document.paragraphs {
                dispatcher.dispatch(summary.paragraphs, paragraph)?;
                summary.paragraphs += 1;
            }
            summary.documents += 1;
        }

        log::info!(
            "Built {} paragraph(s) from {} document(s)",
            summary.paragraphs,
            summary.documents
        );
        Ok(summary)
    }

    /// Prepares `input` and builds it.
    pub fn build_value(
        &self,
        input: &Value,
        overrides: &StyleOverrides,
        backend: &mut dyn DrawingBackend,
    ) -> Result<BuildSummary, BuildError> {
        let documents = self.prepare(input)?;
        self.build(&documents, overrides, backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deltapdf_render_core::{CommandRecorder, DrawCommand};
    use deltapdf_style::StyleOverride;
    use deltapdf_types::{LineAttributes, ListKind, Paragraph, Run};
    use serde_json::json;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn ordered(text: &str) -> Paragraph {
        Paragraph::formatted(vec![Run::text(text)], LineAttributes::list(ListKind::Ordered, 0))
    }

    fn markers(commands: &[DrawCommand]) -> Vec<String> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::DrawText { content, x, .. } if *x == 75.0 => Some(content.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn documents_are_concatenated() {
        init_logger();
        let builder = DocumentBuilder::new();
        let mut recorder = CommandRecorder::new();
        let summary = builder
            .build_value(
                &json!([
                    { "ops": [{ "insert": "one\ntwo\n" }] },
                    { "ops": [{ "insert": "three\n" }] }
                ]),
                &StyleOverrides::new(),
                &mut recorder,
            )
            .unwrap();
        assert_eq!(summary, BuildSummary { documents: 2, paragraphs: 3 });

        let texts: Vec<_> = recorder
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::DrawText { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn numbering_continues_across_documents() {
        let builder = DocumentBuilder::new();
        let mut recorder = CommandRecorder::new();
        let docs = vec![
            ParsedDocument::new(vec![ordered("a"), ordered("b")]),
            ParsedDocument::new(vec![ordered("c")]),
        ];
        builder.build(&docs, &StyleOverrides::new(), &mut recorder).unwrap();
        assert_eq!(markers(recorder.commands()), vec!["1.", "2.", "3."]);
    }

    #[test]
    fn sequential_builds_do_not_share_state() {
        let builder = DocumentBuilder::new();
        let docs = vec![ParsedDocument::new(vec![ordered("a"), ordered("b")])];

        let mut overrides = StyleOverrides::new();
        overrides.insert("list_paragraph".into(), StyleOverride::default().font("Courier"));
        let mut first = CommandRecorder::new();
        builder.build(&docs, &overrides, &mut first).unwrap();

        let mut second = CommandRecorder::new();
        builder.build(&docs, &StyleOverrides::new(), &mut second).unwrap();

        assert_eq!(markers(second.commands()), vec!["1.", "2."]);
        assert_eq!(second.commands()[1], DrawCommand::SetFont("Times-Roman".into()));
        assert_eq!(first.commands()[1], DrawCommand::SetFont("Courier".into()));
    }

    #[test]
    fn invalid_input_draws_nothing() {
        let builder = DocumentBuilder::new();
        let mut recorder = CommandRecorder::new();
        let err = builder
            .build_value(&json!({ "nope": true }), &StyleOverrides::new(), &mut recorder)
            .unwrap_err();
        assert!(matches!(err, BuildError::InvalidInput(_)));
        assert!(recorder.commands().is_empty());
    }

    struct EchoParser;

    impl DeltaParser for EchoParser {
        fn parse(
            &self,
            _raw: &deltapdf_delta::RawDelta,
        ) -> Result<ParsedDocument, deltapdf_delta::DeltaError> {
            Ok(ParsedDocument::new(vec![Paragraph::plain(vec![Run::text("echo")])]))
        }
    }

    #[test]
    fn custom_parser_is_used_for_raw_input() {
        let builder = DocumentBuilder::new().with_parser(Box::new(EchoParser));
        let mut recorder = CommandRecorder::new();
        builder
            .build_value(&json!({ "ops": [] }), &StyleOverrides::new(), &mut recorder)
            .unwrap();
        assert!(recorder.commands().iter().any(
            |c| matches!(c, DrawCommand::DrawText { content, .. } if content == "echo")
        ));
    }
}
