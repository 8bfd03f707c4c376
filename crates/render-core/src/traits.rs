use crate::command::{DrawCommand, ImageOptions, TextOptions};
use crate::error::RenderError;

/// A page-layout backend, abstracting the drawing primitives.
///
/// Drawing calls are infallible from the caller's point of view; a backend
/// that hits a problem while drawing keeps it and reports it from `finish`.
/// Reflow, pagination and glyph metrics are the backend's business.
pub trait DrawingBackend {
    fn set_font(&mut self, name: &str);

    fn set_font_size(&mut self, size: f32);

    fn set_fill_color(&mut self, color: &str);

    /// Advances the cursor by `lines` lines (one when `None`).
    fn move_down(&mut self, lines: Option<f32>);

    fn move_up(&mut self, lines: Option<f32>);

    /// Draws `content` starting at `x`. A `None` `y` keeps the current line.
    fn draw_text(&mut self, content: &str, x: f32, y: Option<f32>, options: &TextOptions);

    fn draw_image(&mut self, source: &str, options: &ImageOptions);

    /// Flushes every instruction and returns the finished artifact.
    fn finish(self: Box<Self>) -> Result<Vec<u8>, RenderError>;

    /// Issues a recorded command against this backend.
    fn apply(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::SetFont(name) => self.set_font(name),
            DrawCommand::SetFontSize(size) => self.set_font_size(*size),
            DrawCommand::SetFillColor(color) => self.set_fill_color(color),
            DrawCommand::MoveDown(lines) => self.move_down(*lines),
            DrawCommand::MoveUp(lines) => self.move_up(*lines),
            DrawCommand::DrawText {
                content,
                x,
                y,
                options,
            } => self.draw_text(content, *x, *y, options),
            DrawCommand::DrawImage { source, options } => self.draw_image(source, options),
        }
    }
}
