//! List item layout: marker placement, then the item's runs on the same line.

use deltapdf_render_core::{DrawingBackend, TextOptions};
use deltapdf_style::StyleName;
use deltapdf_types::{LineAttributes, ListKind, Run};

use crate::context::BuildContext;
use crate::error::BuildError;
use crate::runs::{TextBase, emit_runs};

/// Usable text width of a Letter page with one-inch margins.
pub const PAGE_TEXT_WIDTH: f32 = 72.0 * 6.5;

const BULLET: &str = "\u{2022}";

/// Gap between the marker column and the item text.
const MARKER_GAP: f32 = 3.0;

/// Horizontal positions of one list item, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListItemLayout {
    pub marker_x: f32,
    pub marker_width: f32,
    pub text_indent: f32,
}

impl ListItemLayout {
    /// Layout for an item at 0-based `depth` under the given list indents.
    pub fn new(base_indent: f32, level_indent: f32, depth: usize) -> Self {
        let level = (depth + 1) as f32;
        let marker_x = base_indent + level_indent * level;
        Self {
            marker_x,
            marker_width: PAGE_TEXT_WIDTH - (MARKER_GAP + marker_x),
            text_indent: base_indent + level_indent + MARKER_GAP + level_indent * level,
        }
    }
}

/// Draws one list item. Ordered items advance the list counters; the caller
/// resets them for bullets.
pub fn build_list_item(
    ctx: &mut BuildContext,
    runs: &[Run],
    attributes: &LineAttributes,
    kind: ListKind,
    backend: &mut dyn DrawingBackend,
) -> Result<(), BuildError> {
    let depth = attributes.depth();
    let marker = match kind {
        ListKind::Bullet => BULLET.to_string(),
        ListKind::Ordered => format!("{}.", ctx.counters.next_indicator(depth)?),
    };

    let style = ctx.styles.style(StyleName::ListParagraph);
    let layout = ListItemLayout::new(style.base_indent, style.level_indent, depth);
    log::debug!("List item '{}' at depth {}: {:?}", marker, depth, layout);

    backend.set_font(&style.font);
    backend.set_font_size(style.font_size);
    backend.set_fill_color("black");
    backend.draw_text(
        &marker,
        layout.marker_x,
        None,
        &TextOptions {
            width: Some(layout.marker_width),
            ..TextOptions::default()
        },
    );
    // Cancel the marker's line advance so the text starts beside it.
    backend.move_up(None);

    let base = TextBase::new(style.font.clone(), style.font_size, Some(layout.text_indent));
    emit_runs(runs, &base, backend);
    Ok(())
}
