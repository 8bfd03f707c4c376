//! Paragraph dispatch: classify each paragraph and route it to its builder.

use deltapdf_render_core::{DrawingBackend, ImageAlign, ImageOptions, TextOptions};
use deltapdf_style::StyleName;
use deltapdf_types::{Embed, LineAttributes, ListKind, Paragraph, Run};

use crate::context::BuildContext;
use crate::error::BuildError;
use crate::list_item::build_list_item;
use crate::runs::{TextBase, emit_runs};

/// Display box for image embeds, `[width, height]` in points.
pub const IMAGE_FIT: [f32; 2] = [200.0, 200.0];

/// Drives one paragraph at a time into a backend, sharing a build context.
pub struct ParagraphDispatcher<'a> {
    ctx: &'a mut BuildContext,
    backend: &'a mut dyn DrawingBackend,
}

impl<'a> ParagraphDispatcher<'a> {
    pub fn new(ctx: &'a mut BuildContext, backend: &'a mut dyn DrawingBackend) -> Self {
        Self { ctx, backend }
    }

    /// Emits `paragraph`. `index` identifies it in errors.
    pub fn dispatch(&mut self, index: usize, paragraph: &Paragraph) -> Result<(), BuildError> {
        if let Paragraph::Formatted { attributes, .. } = paragraph {
            validate(index, attributes)?;
        }
        log::debug!("Paragraph {} ({})", index, paragraph.kind());

        self.backend.move_down(None);
        match paragraph {
            Paragraph::Embed(embed) => {
                self.ctx.counters.reset();
                self.build_embed(embed);
                Ok(())
            }
            Paragraph::Formatted { runs, attributes } => self.build_formatted(runs, attributes),
            Paragraph::Plain { runs } => {
                self.ctx.counters.reset();
                self.emit_styled(runs, StyleName::Normal);
                Ok(())
            }
        }
    }

    fn build_embed(&mut self, embed: &Embed) {
        self.backend.move_down(None);
        match embed {
            Embed::Image(source) => {
                self.backend.draw_image(
                    source,
                    &ImageOptions {
                        fit: IMAGE_FIT,
                        align: ImageAlign::Center,
                    },
                );
            }
            Embed::Video(video) => {
                let normal = self.ctx.styles.style(StyleName::Normal);
                let base = TextBase::from_style(normal);
                self.backend.set_font(&base.font);
                self.backend.set_font_size(base.font_size);
                self.backend.set_fill_color("blue");
                self.backend.draw_text(
                    video,
                    base.x(),
                    None,
                    &TextOptions {
                        link: Some(video.clone()),
                        ..TextOptions::default()
                    },
                );
            }
        }
    }

    /// Every recognized flag fires on its own, in a fixed order.
    fn build_formatted(
        &mut self,
        runs: &[Run],
        attributes: &LineAttributes,
    ) -> Result<(), BuildError> {
        if let Some(level) = attributes.header {
            self.ctx.counters.reset();
            self.emit_styled(runs, header_style(level)?);
        }
        if attributes.blockquote {
            self.ctx.counters.reset();
            self.emit_styled(runs, StyleName::BlockQuote);
        }
        if attributes.code_block {
            self.ctx.counters.reset();
            self.emit_styled(runs, StyleName::CodeBlock);
        }
        if let Some(kind) = attributes.list {
            // Only ordered items carry numbering from one paragraph to the next.
            if kind == ListKind::Bullet {
                self.ctx.counters.reset();
            }
            build_list_item(self.ctx, runs, attributes, kind, self.backend)?;
        }
        if attributes.citation {
            self.ctx.counters.reset();
            self.emit_styled(runs, StyleName::Citation);
        }
        Ok(())
    }

    fn emit_styled(&mut self, runs: &[Run], name: StyleName) {
        let base = TextBase::from_style(self.ctx.styles.style(name));
        emit_runs(runs, &base, self.backend);
    }
}

fn validate(index: usize, attributes: &LineAttributes) -> Result<(), BuildError> {
    if !attributes.has_recognized_flag() {
        return Err(BuildError::UnrecognizedLineAttributes { paragraph: index });
    }
    if let Some(level) = attributes.header {
        header_style(level)?;
    }
    Ok(())
}

/// Level 1 maps to `header_1`; deeper levels share `header_2`.
fn header_style(level: u8) -> Result<StyleName, BuildError> {
    match level {
        0 => Err(BuildError::UnsupportedHeaderLevel(level)),
        1 => Ok(StyleName::Header1),
        _ => Ok(StyleName::Header2),
    }
}
