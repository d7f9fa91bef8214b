//! A small paginated PDF writer.
//!
//! Layout happens in millimetres on A4 portrait pages with the origin at the
//! top-left corner, the way page-oriented report writers usually work. Pages
//! are kept in memory as lists of marks and only turned into PDF objects by
//! [`PdfWriter::to_bytes`].

use super::fonts::{self, FontStyle};
use crate::error::AssemblyError;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, dictionary};

pub const PAGE_WIDTH: f64 = 210.0;
pub const PAGE_HEIGHT: f64 = 297.0;

const PT_PER_MM: f64 = 72.0 / 25.4;
/// Horizontal padding inside a cell
const CELL_MARGIN: f64 = 1.0;
const DEFAULT_MARGIN: f64 = 10.0;
/// Distance from the bottom edge that triggers an automatic page break
const BREAK_MARGIN: f64 = 20.0;
const LINE_WIDTH: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone)]
enum Mark {
    Text {
        x: f64,
        baseline: f64,
        style: FontStyle,
        size: f64,
        text: String,
    },
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    },
}

#[derive(Debug, Clone, Default)]
struct Page {
    marks: Vec<Mark>,
}

/// Page-based writer with a text cursor, automatic page breaks and an
/// optional header repeated on every page
#[derive(Debug, Clone)]
pub struct PdfWriter {
    pages: Vec<Page>,
    header: Option<String>,
    x: f64,
    y: f64,
    left_margin: f64,
    top_margin: f64,
    right_margin: f64,
    style: FontStyle,
    /// Font size in points
    size: f64,
    last_height: f64,
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfWriter {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            header: None,
            x: DEFAULT_MARGIN,
            y: DEFAULT_MARGIN,
            left_margin: DEFAULT_MARGIN,
            top_margin: DEFAULT_MARGIN,
            right_margin: DEFAULT_MARGIN,
            style: FontStyle::Regular,
            size: 12.0,
            last_height: 0.0,
        }
    }

    /// Centered bold line drawn at the top of every page added afterwards
    pub fn set_header(&mut self, header: impl Into<String>) {
        self.header = Some(header.into());
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn set_font(&mut self, style: FontStyle, size_pt: f64) {
        self.style = style;
        self.size = size_pt;
    }

    /// Current font size in mm
    pub fn font_size(&self) -> f64 {
        self.size / PT_PER_MM
    }

    /// Width of `text` in the current font, in mm
    pub fn string_width(&self, text: &str) -> f64 {
        fonts::text_width(self.style, text) as f64 * self.size / 1000.0 / PT_PER_MM
    }

    pub fn add_page(&mut self) {
        self.pages.push(Page::default());
        self.x = self.left_margin;
        self.y = self.top_margin;

        if let Some(header) = self.header.clone() {
            let (style, size) = (self.style, self.size);
            self.set_font(FontStyle::Bold, 12.0);
            self.cell(0.0, 10.0, &header, false, false, Align::Center);
            self.ln(Some(10.0));
            self.set_font(style, size);
        }
    }

    /// Draws a single-line cell at the cursor
    ///
    /// A width of 0 extends the cell to the right margin. With `ln` the cursor
    /// moves to the start of the next line, otherwise to the right of the cell.
    pub fn cell(&mut self, w: f64, h: f64, text: &str, border: bool, ln: bool, align: Align) {
        if self.pages.is_empty() {
            self.add_page();
        }
        if self.y + h > PAGE_HEIGHT - BREAK_MARGIN {
            let x = self.x;
            self.add_page();
            self.x = x;
        }

        let w = if w <= 0.0 {
            PAGE_WIDTH - self.right_margin - self.x
        } else {
            w
        };

        if border {
            self.mark(Mark::Rect {
                x: self.x,
                y: self.y,
                w,
                h,
            });
        }

        if !text.is_empty() {
            let dx = match align {
                Align::Left => CELL_MARGIN,
                Align::Center => (w - self.string_width(text)) / 2.0,
            };
            self.mark(Mark::Text {
                x: self.x + dx,
                baseline: self.y + 0.5 * h + 0.3 * self.font_size(),
                style: self.style,
                size: self.size,
                text: text.to_string(),
            });
        }

        self.last_height = h;
        if ln {
            self.x = self.left_margin;
            self.y += h;
        } else {
            self.x += w;
        }
    }

    /// Draws `text` wrapped into as many lines of height `h` as needed,
    /// breaking pages where necessary
    pub fn multi_cell(&mut self, w: f64, h: f64, text: &str) {
        let x = self.x;
        let w = if w <= 0.0 {
            PAGE_WIDTH - self.right_margin - x
        } else {
            w
        };

        for line in self.wrap(text, w - 2.0 * CELL_MARGIN) {
            self.x = x;
            self.cell(w, h, &line, false, true, Align::Left);
        }
        self.x = self.left_margin;
    }

    /// Line break; without a height the height of the last cell is used
    pub fn ln(&mut self, h: Option<f64>) {
        self.x = self.left_margin;
        self.y += h.unwrap_or(self.last_height);
    }

    /// Splits `text` into lines no wider than `max_width` mm
    ///
    /// Explicit newlines always break (a single trailing one is ignored),
    /// words are never split unless they are wider than a whole line.
    pub fn wrap(&self, text: &str, max_width: f64) -> Vec<String> {
        let text = text.strip_suffix('\n').unwrap_or(text);
        let mut lines = Vec::new();

        for paragraph in text.split('\n') {
            let mut current = String::new();
            for word in paragraph.split_whitespace() {
                let candidate = if current.is_empty() {
                    word.to_string()
                } else {
                    format!("{current} {word}")
                };
                if self.string_width(&candidate) <= max_width {
                    current = candidate;
                    continue;
                }

                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                for c in word.chars() {
                    current.push(c);
                    if current.chars().count() > 1 && self.string_width(&current) > max_width {
                        current.pop();
                        lines.push(std::mem::take(&mut current));
                        current.push(c);
                    }
                }
            }
            lines.push(current);
        }

        lines
    }

    /// Encodes every page into a complete PDF file
    pub fn to_bytes(&self) -> Result<Vec<u8>, AssemblyError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut fonts = Dictionary::new();
        for style in FontStyle::ALL {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => style.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(style.resource_name(), font_id);
        }
        let resources_id = doc.add_object(dictionary! { "Font" => fonts });

        let mut kids = Vec::with_capacity(self.pages.len());
        for page in &self.pages {
            let content = Content {
                operations: page_operations(page),
            };
            let encoded = content
                .encode()
                .map_err(|e| AssemblyError::Serialize(e.to_string()))?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(Object::from(page_id));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    real(PAGE_WIDTH * PT_PER_MM),
                    real(PAGE_HEIGHT * PT_PER_MM),
                ],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| AssemblyError::Serialize(e.to_string()))?;
        Ok(bytes)
    }

    fn mark(&mut self, mark: Mark) {
        if let Some(page) = self.pages.last_mut() {
            page.marks.push(mark);
        }
    }
}

fn page_operations(page: &Page) -> Vec<Operation> {
    let mut ops = vec![Operation::new("w", vec![real(LINE_WIDTH * PT_PER_MM)])];

    for mark in &page.marks {
        match mark {
            Mark::Text {
                x,
                baseline,
                style,
                size,
                text,
            } => {
                ops.push(Operation::new("BT", vec![]));
                ops.push(Operation::new(
                    "Tf",
                    vec![style.resource_name().into(), real(*size)],
                ));
                ops.push(Operation::new(
                    "Td",
                    vec![real(x * PT_PER_MM), real((PAGE_HEIGHT - baseline) * PT_PER_MM)],
                ));
                ops.push(Operation::new(
                    "Tj",
                    vec![Object::string_literal(fonts::encode_win_ansi(text))],
                ));
                ops.push(Operation::new("ET", vec![]));
            }
            Mark::Rect { x, y, w, h } => {
                ops.push(Operation::new(
                    "re",
                    vec![
                        real(x * PT_PER_MM),
                        real((PAGE_HEIGHT - y) * PT_PER_MM),
                        real(w * PT_PER_MM),
                        real(-h * PT_PER_MM),
                    ],
                ));
                ops.push(Operation::new("S", vec![]));
            }
        }
    }

    ops
}

fn real(value: f64) -> Object {
    Object::Real(value as _)
}
