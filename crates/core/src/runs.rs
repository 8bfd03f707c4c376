//! Run emission: per-run attribute resolution and line continuation.

use deltapdf_render_core::{DrawingBackend, TextOptions};
use deltapdf_style::{StyleEntry, bold_variant};
use deltapdf_types::{Run, RunAttributes};
use itertools::{Itertools, Position};

/// Left edge used when a base carries no indent.
pub const DEFAULT_INDENT: f32 = 72.0;

/// The style a sequence of runs is emitted under.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBase {
    pub font: String,
    pub font_size: f32,
    pub indent: Option<f32>,
}

impl TextBase {
    pub fn new(font: impl Into<String>, font_size: f32, indent: Option<f32>) -> Self {
        Self {
            font: font.into(),
            font_size,
            indent,
        }
    }

    /// A base taking font, size and indent from a style entry.
    pub fn from_style(style: &StyleEntry) -> Self {
        Self::new(style.font.clone(), style.font_size, Some(style.base_indent))
    }

    /// A zero indent counts as unset.
    pub fn x(&self) -> f32 {
        self.indent
            .filter(|indent| *indent != 0.0)
            .unwrap_or(DEFAULT_INDENT)
    }
}

/// Emits one text instruction group per run.
///
/// Every run restarts from the base font and size, so size and bold never
/// accumulate across runs. All runs but the last are `continued` so the
/// backend stitches them onto one line.
pub fn emit_runs(runs: &[Run], base: &TextBase, backend: &mut dyn DrawingBackend) {
    let x = base.x();
    for (position, run) in runs.iter().with_position() {
        let last = matches!(position, Position::Last | Position::Only);
        let attributes = run.attributes.as_ref();

        backend.set_font(&base.font);
        backend.set_font_size(base.font_size);
        apply_pre_text(attributes, base, backend);

        log::trace!(
            "Run '{}' at x={} (continued: {})",
            run.content_str(),
            x,
            !last
        );
        backend.draw_text(run.content_str(), x, None, &text_options(attributes, last));
    }
}

fn apply_pre_text(
    attributes: Option<&RunAttributes>,
    base: &TextBase,
    backend: &mut dyn DrawingBackend,
) {
    let Some(attributes) = attributes else {
        backend.set_fill_color("black");
        return;
    };
    if let Some(size) = attributes.size {
        backend.set_font_size(base.font_size + size.offset());
    }
    if attributes.bold {
        match bold_variant(&base.font) {
            Some(bold) => backend.set_font(bold),
            None => log::warn!("No bold variant for font '{}'", base.font),
        }
    }
    let fill = match (&attributes.color, &attributes.link) {
        (Some(color), _) => color.as_str(),
        (None, Some(_)) => "blue",
        (None, None) => "black",
    };
    backend.set_fill_color(fill);
}

fn text_options(attributes: Option<&RunAttributes>, last: bool) -> TextOptions {
    let attributes = attributes.cloned().unwrap_or_default();
    TextOptions {
        underline: attributes.underline,
        strike: attributes.strike,
        oblique: attributes.italic,
        link: attributes.link,
        continued: !last,
        width: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deltapdf_render_core::{CommandRecorder, DrawCommand};
    use deltapdf_types::RunSize;

    fn times() -> TextBase {
        TextBase::new("Times-Roman", 12.0, Some(72.0))
    }

    fn record(runs: &[Run], base: &TextBase) -> Vec<DrawCommand> {
        let mut recorder = CommandRecorder::new();
        emit_runs(runs, base, &mut recorder);
        recorder.into_commands()
    }

    fn continued_flags(commands: &[DrawCommand]) -> Vec<bool> {
        commands
            .iter()
            .filter_map(DrawCommand::text_options)
            .map(|options| options.continued)
            .collect()
    }

    #[test]
    fn single_run_ends_the_line() {
        let commands = record(&[Run::text("hello")], &times());
        assert_eq!(
            commands,
            vec![
                DrawCommand::SetFont("Times-Roman".into()),
                DrawCommand::SetFontSize(12.0),
                DrawCommand::SetFillColor("black".into()),
                DrawCommand::DrawText {
                    content: "hello".into(),
                    x: 72.0,
                    y: None,
                    options: TextOptions::default(),
                },
            ]
        );
    }

    #[test]
    fn all_but_last_run_are_continued() {
        let runs = vec![Run::text("a"), Run::text("b"), Run::formula("x^2"), Run::text("c")];
        let commands = record(&runs, &times());
        assert_eq!(continued_flags(&commands), vec![true, true, true, false]);
        assert_eq!(commands.iter().filter(|c| c.is_text()).count(), 4);
    }

    #[test]
    fn size_offsets_are_relative_to_base() {
        let large = RunAttributes {
            size: Some(RunSize::Large),
            ..Default::default()
        };
        let small = RunAttributes {
            size: Some(RunSize::Small),
            ..Default::default()
        };
        let runs = vec![
            Run::text("big").with_attributes(large),
            Run::text("tiny").with_attributes(small),
        ];
        let sizes: Vec<f32> = record(&runs, &times())
            .into_iter()
            .filter_map(|c| match c {
                DrawCommand::SetFontSize(size) => Some(size),
                _ => None,
            })
            .collect();
        assert_eq!(sizes, vec![12.0, 16.0, 12.0, 8.0]);
    }

    #[test]
    fn bold_uses_variant_of_base_font() {
        let bold = RunAttributes {
            bold: true,
            ..Default::default()
        };
        let commands = record(&[Run::text("strong").with_attributes(bold.clone())], &times());
        assert_eq!(commands[2], DrawCommand::SetFont("Times-Bold".into()));

        let base = TextBase::new("Helvetica-Bold", 16.0, Some(72.0));
        let commands = record(&[Run::text("title").with_attributes(bold)], &base);
        let fonts: Vec<_> = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::SetFont(_)))
            .collect();
        assert_eq!(fonts, vec![&DrawCommand::SetFont("Helvetica-Bold".into())]);
    }

    #[test]
    fn fill_color_precedence() {
        let link = RunAttributes {
            link: Some("https://example.com".into()),
            ..Default::default()
        };
        let colored_link = RunAttributes {
            color: Some("red".into()),
            ..link.clone()
        };
        let commands = record(
            &[
                Run::text("link").with_attributes(link),
                Run::text("red link").with_attributes(colored_link),
            ],
            &times(),
        );
        let fills: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::SetFillColor(color) => Some(color.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(fills, vec!["blue", "red"]);
        assert_eq!(
            commands[3].text_options().unwrap().link.as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn options_carry_run_formatting() {
        let attributes = RunAttributes {
            underline: true,
            strike: true,
            italic: true,
            ..Default::default()
        };
        let commands = record(&[Run::text("styled").with_attributes(attributes)], &times());
        let options = commands[3].text_options().unwrap();
        assert!(options.underline && options.strike && options.oblique);
        assert!(!options.continued);
        assert_eq!(options.link, None);
    }

    #[test]
    fn missing_indent_falls_back_to_margin() {
        let base = TextBase::new("Courier", 12.0, None);
        let commands = record(&[Run::text("code")], &base);
        assert!(matches!(commands[3], DrawCommand::DrawText { x, .. } if x == 72.0));

        let base = TextBase::new("Courier", 12.0, Some(103.0));
        let commands = record(&[Run::text("item")], &base);
        assert!(matches!(commands[3], DrawCommand::DrawText { x, .. } if x == 103.0));
    }

    #[test]
    fn empty_runs_emit_nothing() {
        assert!(record(&[], &times()).is_empty());
    }
}
