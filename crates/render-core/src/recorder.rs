use crate::command::{DrawCommand, ImageOptions, TextOptions};
use crate::error::RenderError;
use crate::traits::DrawingBackend;

/// A backend that records every instruction instead of drawing it.
///
/// `finish` yields the stream as JSON.
#[derive(Debug, Default, Clone)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Plays the recorded stream into another backend, in order.
    pub fn replay(&self, backend: &mut dyn DrawingBackend) {
        for command in &self.commands {
            backend.apply(command);
        }
    }
}

impl DrawingBackend for CommandRecorder {
    fn set_font(&mut self, name: &str) {
        self.commands.push(DrawCommand::SetFont(name.to_string()));
    }

    fn set_font_size(&mut self, size: f32) {
        self.commands.push(DrawCommand::SetFontSize(size));
    }

    fn set_fill_color(&mut self, color: &str) {
        self.commands.push(DrawCommand::SetFillColor(color.to_string()));
    }

    fn move_down(&mut self, lines: Option<f32>) {
        self.commands.push(DrawCommand::MoveDown(lines));
    }

    fn move_up(&mut self, lines: Option<f32>) {
        self.commands.push(DrawCommand::MoveUp(lines));
    }

    fn draw_text(&mut self, content: &str, x: f32, y: Option<f32>, options: &TextOptions) {
        self.commands.push(DrawCommand::DrawText {
            content: content.to_string(),
            x,
            y,
            options: options.clone(),
        });
    }

    fn draw_image(&mut self, source: &str, options: &ImageOptions) {
        self.commands.push(DrawCommand::DrawImage {
            source: source.to_string(),
            options: options.clone(),
        });
    }

    fn finish(self: Box<Self>) -> Result<Vec<u8>, RenderError> {
        log::debug!("Serializing {} recorded draw commands", self.commands.len());
        Ok(serde_json::to_vec_pretty(&self.commands)?)
    }
}
