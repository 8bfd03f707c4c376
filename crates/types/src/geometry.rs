#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// US Letter, the default page size of the PDF backend.
    pub fn letter() -> Self {
        Self::new(612.0, 792.0)
    }

    /// Scales `self` to the largest size inside `bounds` with the same aspect ratio.
    pub fn fit_within(self, bounds: Size) -> Size {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Size::new(0.0, 0.0);
        }
        let scale = (bounds.width / self.width).min(bounds.height / self.height);
        Size::new(self.width * scale, self.height * scale)
    }
}
