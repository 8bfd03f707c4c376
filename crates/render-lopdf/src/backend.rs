use deltapdf_render_core::{DrawingBackend, ImageAlign, ImageOptions, RenderError, TextOptions};
use deltapdf_types::{Color, Size};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, StringFormat, dictionary};

use crate::fonts::{FontRegistry, text_width};
use crate::images::ImageStore;
use crate::text::{to_win_ansi, wrap_lines};

/// Line advance as a multiple of the font size.
const LINE_SPACING: f32 = 1.15;
/// Baseline offset below the top of a line, as a multiple of the font size.
const ASCENT: f32 = 0.8;

/// Page size and uniform margin, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        let letter = Size::letter();
        Self {
            width: letter.width,
            height: letter.height,
            margin: 72.0,
        }
    }
}

impl PageGeometry {
    fn right_edge(&self) -> f32 {
        self.width - self.margin
    }

    fn bottom_edge(&self) -> f32 {
        self.height - self.margin
    }
}

#[derive(Default)]
struct PageBuffer {
    operations: Vec<Operation>,
    links: Vec<Dictionary>,
}

/// Where a `continued` text chain left off.
#[derive(Debug, Clone, Copy)]
struct Pen {
    x: f32,
    line_start: f32,
    right: f32,
}

/// Lays out drawing instructions onto PDF pages with lopdf.
pub struct LopdfBackend {
    geometry: PageGeometry,
    pages: Vec<PageBuffer>,
    /// Distance of the current line's top from the top of the page.
    cursor_y: f32,
    pen: Option<Pen>,
    font: &'static str,
    font_size: f32,
    fill: Color,
    fonts: FontRegistry,
    images: ImageStore,
}

impl Default for LopdfBackend {
    fn default() -> Self {
        Self::new(PageGeometry::default())
    }
}

impl LopdfBackend {
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            pages: vec![PageBuffer::default()],
            cursor_y: geometry.margin,
            pen: None,
            font: "Helvetica",
            font_size: 12.0,
            fill: Color::BLACK,
            fonts: FontRegistry::new(),
            images: ImageStore::default(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn line_height(&self) -> f32 {
        self.font_size * LINE_SPACING
    }

    fn ops(&mut self) -> &mut Vec<Operation> {
        let last = self.pages.len() - 1;
        &mut self.pages[last].operations
    }

    fn new_page(&mut self) {
        log::debug!("Starting page {}", self.pages.len() + 1);
        self.pages.push(PageBuffer::default());
        self.cursor_y = self.geometry.margin;
    }

    /// Breaks the page when `height` no longer fits above the bottom margin.
    fn ensure_room(&mut self, height: f32) {
        let overflows = self.cursor_y + height > self.geometry.bottom_edge();
        if overflows && self.cursor_y > self.geometry.margin {
            self.new_page();
        }
    }

    fn pdf_y(&self, top: f32) -> f32 {
        self.geometry.height - top
    }

    fn measure(&self, text: &str) -> f32 {
        text_width(text, self.font, self.font_size)
    }

    fn draw_segment(&mut self, segment: &str, x: f32, options: &TextOptions) {
        let trimmed = segment.trim_end();
        if trimmed.is_empty() {
            return;
        }
        self.ensure_room(self.line_height());
        let resource = self.fonts.resource_name(self.font);
        let [r, g, b] = self.fill.to_unit();
        let size = self.font_size;
        let baseline = self.pdf_y(self.cursor_y + size * ASCENT);
        let width = self.measure(trimmed);

        let mut ops = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![Object::Name(resource.into_bytes()), size.into()]),
            Operation::new("rg", vec![r.into(), g.into(), b.into()]),
        ];
        if options.oblique && !self.font.contains("Italic") && !self.font.contains("Oblique") {
            // Shear the text matrix to fake an italic face.
            ops.push(Operation::new(
                "Tm",
                vec![1.into(), 0.into(), 0.2_f32.into(), 1.into(), x.into(), baseline.into()],
            ));
        } else {
            ops.push(Operation::new("Td", vec![x.into(), baseline.into()]));
        }
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(trimmed), StringFormat::Literal)],
        ));
        ops.push(Operation::new("ET", vec![]));

        let rules = [
            (options.underline, baseline - size * 0.1),
            (options.strike, baseline + size * 0.3),
        ];
        for (_, y) in rules.iter().filter(|(enabled, _)| *enabled) {
            ops.extend([
                Operation::new("RG", vec![r.into(), g.into(), b.into()]),
                Operation::new("w", vec![(size / 16.0).into()]),
                Operation::new("m", vec![x.into(), (*y).into()]),
                Operation::new("l", vec![(x + width).into(), (*y).into()]),
                Operation::new("S", vec![]),
            ]);
        }
        self.ops().extend(ops);

        if let Some(uri) = &options.link {
            let top = self.pdf_y(self.cursor_y);
            let bottom = self.pdf_y(self.cursor_y + self.line_height());
            let link = dictionary! {
                "Type" => "Annot",
                "Subtype" => "Link",
                "Rect" => vec![x.into(), bottom.into(), (x + width).into(), top.into()],
                "Border" => vec![0.into(), 0.into(), 0.into()],
                "A" => dictionary! {
                    "Type" => "Action",
                    "S" => "URI",
                    "URI" => Object::String(uri.as_bytes().to_vec(), StringFormat::Literal),
                },
            };
            let last = self.pages.len() - 1;
            self.pages[last].links.push(link);
        }
    }

    fn write_document(self) -> Result<Document, RenderError> {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let mut xobjects = Dictionary::new();
        for (name, stream) in self.images.into_streams() {
            let id = doc.add_object(stream);
            xobjects.set(name.into_bytes(), id);
        }
        let resources_id = doc.add_object(dictionary! {
            "Font" => self.fonts.to_resources(),
            "XObject" => xobjects,
        });

        let mut kids = Vec::with_capacity(self.pages.len());
        for page in self.pages {
            let content = Content {
                operations: page.operations,
            };
            let encoded = content
                .encode()
                .map_err(|e| RenderError::Pdf(e.to_string()))?;
            let content_id = doc.add_object(lopdf::Stream::new(dictionary! {}, encoded));

            let mut page_dict = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
            };
            if !page.links.is_empty() {
                let annots: Vec<Object> = page
                    .links
                    .into_iter()
                    .map(|link| Object::Reference(doc.add_object(link)))
                    .collect();
                page_dict.set("Annots", annots);
            }
            kids.push(Object::Reference(doc.add_object(page_dict)));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "MediaBox" => vec![
                    0.into(),
                    0.into(),
                    self.geometry.width.into(),
                    self.geometry.height.into(),
                ],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        Ok(doc)
    }
}

impl DrawingBackend for LopdfBackend {
    fn set_font(&mut self, name: &str) {
        self.font = FontRegistry::resolve(name);
    }

    fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    fn set_fill_color(&mut self, color: &str) {
        self.fill = Color::parse(color).unwrap_or_else(|err| {
            log::warn!("{}, using black", err);
            Color::BLACK
        });
    }

    fn move_down(&mut self, lines: Option<f32>) {
        self.pen = None;
        self.cursor_y += lines.unwrap_or(1.0) * self.line_height();
    }

    fn move_up(&mut self, lines: Option<f32>) {
        self.pen = None;
        let moved = self.cursor_y - lines.unwrap_or(1.0) * self.line_height();
        self.cursor_y = moved.max(self.geometry.margin);
    }

    fn draw_text(&mut self, content: &str, x: f32, y: Option<f32>, options: &TextOptions) {
        if let Some(y) = y {
            self.pen = None;
            self.cursor_y = y;
        }
        let pen = self.pen.unwrap_or_else(|| {
            let right = options
                .width
                .map(|width| x + width)
                .unwrap_or_else(|| self.geometry.right_edge());
            Pen {
                x,
                line_start: x,
                right,
            }
        });

        let lines = wrap_lines(
            content,
            pen.right - pen.x,
            pen.right - pen.line_start,
            |text| self.measure(text),
        );
        let mut cursor_x = pen.x;
        for (index, line) in lines.iter().enumerate() {
            if index > 0 {
                self.cursor_y += self.line_height();
                cursor_x = pen.line_start;
            }
            self.draw_segment(line, cursor_x, options);
            cursor_x += self.measure(line);
        }

        if options.continued {
            self.pen = Some(Pen { x: cursor_x, ..pen });
        } else {
            self.pen = None;
            self.cursor_y += self.line_height();
        }
    }

    fn draw_image(&mut self, source: &str, options: &ImageOptions) {
        let resource = match self.images.load(source) {
            Ok(resource) => resource,
            Err(err) => {
                log::warn!("Skipping image that failed to load: {}", err);
                return;
            }
        };
        let [fit_width, fit_height] = options.fit;
        let size = Size::new(resource.width as f32, resource.height as f32)
            .fit_within(Size::new(fit_width, fit_height));
        let left = self.geometry.margin;
        let x = match options.align {
            ImageAlign::Left => left,
            ImageAlign::Center => left + (fit_width - size.width) / 2.0,
            ImageAlign::Right => left + fit_width - size.width,
        };

        self.pen = None;
        self.ensure_room(size.height);
        let y = self.pdf_y(self.cursor_y + size.height);
        self.ops().extend([
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    size.width.into(),
                    0.into(),
                    0.into(),
                    size.height.into(),
                    x.into(),
                    y.into(),
                ],
            ),
            Operation::new("Do", vec![Object::Name(resource.name.into_bytes())]),
            Operation::new("Q", vec![]),
        ]);
        self.cursor_y += size.height;
    }

    fn finish(self: Box<Self>) -> Result<Vec<u8>, RenderError> {
        let page_count = self.pages.len();
        let mut doc = self.write_document()?;
        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        log::info!("Wrote {} page(s), {} bytes", page_count, bytes.len());
        Ok(bytes)
    }
}
