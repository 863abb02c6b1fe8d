//! Minimal PDF 1.4 writer: A4 pages, the two standard Helvetica faces with
//! WinAnsi encoding, filled/stroked shapes and raw RGB images.
//!
//! Callers work in millimetres with the origin at the top-left corner; the
//! writer converts to PDF points with the origin at the bottom-left.

use std::fmt::Write as _;

use crate::report::raster::RasterImage;

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const PT_PER_MM: f32 = 72.0 / 25.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

impl Font {
    fn resource(self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    fn operands(self) -> String {
        format!(
            "{:.3} {:.3} {:.3}",
            f32::from(self.0) / 255.0,
            f32::from(self.1) / 255.0,
            f32::from(self.2) / 255.0
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub font: Font,
    pub size: f32,
    pub color: Rgb,
}

struct Image {
    width: u32,
    height: u32,
    rgb: Vec<u8>,
}

pub struct PdfDocument {
    pages: Vec<String>,
    images: Vec<Image>,
    current: usize,
}

impl Default for PdfDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfDocument {
    /// A document with one blank page.
    pub fn new() -> Self {
        Self {
            pages: vec![String::new()],
            images: Vec::new(),
            current: 0,
        }
    }

    pub fn add_page(&mut self) {
        self.pages.push(String::new());
        self.current = self.pages.len() - 1;
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Make `index` (0-based) the page that receives drawing operations.
    pub fn set_page(&mut self, index: usize) {
        if index < self.pages.len() {
            self.current = index;
        }
    }

    fn ops(&mut self) -> &mut String {
        &mut self.pages[self.current]
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        let (px, py) = to_pt(x, y + h);
        let op = format!(
            "{} rg {px:.2} {py:.2} {:.2} {:.2} re f\n",
            color.operands(),
            w * PT_PER_MM,
            h * PT_PER_MM
        );
        self.ops().push_str(&op);
    }

    pub fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb, line_mm: f32) {
        let (px, py) = to_pt(x, y + h);
        let op = format!(
            "{} RG {:.2} w {px:.2} {py:.2} {:.2} {:.2} re S\n",
            color.operands(),
            line_mm * PT_PER_MM,
            w * PT_PER_MM,
            h * PT_PER_MM
        );
        self.ops().push_str(&op);
    }

    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgb, line_mm: f32) {
        let (x1, y1) = to_pt(from.0, from.1);
        let (x2, y2) = to_pt(to.0, to.1);
        let op = format!(
            "{} RG {:.2} w {x1:.2} {y1:.2} m {x2:.2} {y2:.2} l S\n",
            color.operands(),
            line_mm * PT_PER_MM
        );
        self.ops().push_str(&op);
    }

    /// Draw one line of text with its baseline at `y`.
    pub fn text(&mut self, x: f32, y: f32, text: &str, style: TextStyle, align: Align) {
        let width = super::metrics::text_width(text, style.font, style.size);
        let left = match align {
            Align::Left => x,
            Align::Center => x - width / 2.0,
            Align::Right => x - width,
        };
        let (px, py) = to_pt(left, y);
        let op = format!(
            "BT /{} {:.1} Tf {} rg {px:.2} {py:.2} Td ({}) Tj ET\n",
            style.font.resource(),
            style.size,
            style.color.operands(),
            escape_text(text)
        );
        self.ops().push_str(&op);
    }

    /// Place `image` in the box whose top-left corner is `(x, y)`.
    pub fn image(&mut self, image: &RasterImage, x: f32, y: f32, w: f32, h: f32) {
        let index = self.images.len();
        self.images.push(Image {
            width: image.width,
            height: image.height,
            rgb: image.to_rgb(),
        });
        let (px, py) = to_pt(x, y + h);
        let op = format!(
            "q {:.2} 0 0 {:.2} {px:.2} {py:.2} cm /Im{index} Do Q\n",
            w * PT_PER_MM,
            h * PT_PER_MM
        );
        self.ops().push_str(&op);
    }

    /// Serialise the document.
    pub fn finish(self) -> Vec<u8> {
        let mut out = ObjectWriter::default();
        out.raw(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

        let page_count = self.pages.len();
        let image_base = 5;
        let page_base = image_base + self.images.len();
        // each page is a page object followed by its content stream
        let kids = (0..page_count)
            .map(|i| format!("{} 0 R", page_base + i * 2))
            .collect::<Vec<_>>()
            .join(" ");

        out.object(1, b"<< /Type /Catalog /Pages 2 0 R >>");
        out.object(
            2,
            format!("<< /Type /Pages /Kids [{kids}] /Count {page_count} >>").as_bytes(),
        );
        out.object(
            3,
            b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
        );
        out.object(
            4,
            b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>",
        );

        let mut xobjects = String::new();
        for (i, image) in self.images.iter().enumerate() {
            let id = image_base + i;
            let _ = write!(xobjects, " /Im{i} {id} 0 R");
            let head = format!(
                "<< /Type /XObject /Subtype /Image /Width {} /Height {} /ColorSpace /DeviceRGB /BitsPerComponent 8 /Length {} >>",
                image.width,
                image.height,
                image.rgb.len()
            );
            out.stream(id, &head, &image.rgb);
        }

        let resources = format!(
            "<< /Font << /F1 3 0 R /F2 4 0 R >> /XObject <<{xobjects} >> >>"
        );
        for (i, content) in self.pages.iter().enumerate() {
            let page_id = page_base + i * 2;
            let content_id = page_id + 1;
            out.object(
                page_id,
                format!(
                    "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] /Resources {resources} /Contents {content_id} 0 R >>",
                    PAGE_WIDTH_MM * PT_PER_MM,
                    PAGE_HEIGHT_MM * PT_PER_MM
                )
                .as_bytes(),
            );
            out.stream(
                content_id,
                &format!("<< /Length {} >>", content.len()),
                content.as_bytes(),
            );
        }

        out.finish(1)
    }
}

fn to_pt(x: f32, y: f32) -> (f32, f32) {
    (x * PT_PER_MM, (PAGE_HEIGHT_MM - y) * PT_PER_MM)
}

/// Byte buffer that remembers where each object starts for the xref table.
#[derive(Default)]
struct ObjectWriter {
    buf: Vec<u8>,
    offsets: Vec<(usize, usize)>,
}

impl ObjectWriter {
    fn raw(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    fn object(&mut self, id: usize, body: &[u8]) {
        self.offsets.push((id, self.buf.len()));
        self.raw(format!("{id} 0 obj\n").as_bytes());
        self.raw(body);
        self.raw(b"\nendobj\n");
    }

    fn stream(&mut self, id: usize, dict: &str, data: &[u8]) {
        self.offsets.push((id, self.buf.len()));
        self.raw(format!("{id} 0 obj\n{dict}\nstream\n").as_bytes());
        self.raw(data);
        self.raw(b"\nendstream\nendobj\n");
    }

    fn finish(mut self, root: usize) -> Vec<u8> {
        self.offsets.sort_unstable();
        let size = self.offsets.len() + 1;
        let xref_at = self.buf.len();

        let mut table = format!("xref\n0 {size}\n0000000000 65535 f \n");
        for (_, offset) in &self.offsets {
            let _ = write!(table, "{offset:010} 00000 n \n");
        }
        let _ = write!(
            table,
            "trailer\n<< /Size {size} /Root {root} 0 R >>\nstartxref\n{xref_at}\n%%EOF\n"
        );
        self.raw(table.as_bytes());
        self.buf
    }
}

/// Encode `text` as a PDF literal string body in WinAnsi. Bytes outside
/// printable ASCII are written as octal escapes.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            ' '..='~' => out.push(ch),
            _ => {
                let _ = write!(out, "\\{:03o}", win_ansi(ch));
            }
        }
    }
    out
}

fn win_ansi(ch: char) -> u8 {
    match ch {
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '…' => 0x85,
        '\u{a0}'..='\u{ff}' => ch as u8,
        _ => b'?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: TextStyle = TextStyle {
        font: Font::Regular,
        size: 11.0,
        color: Rgb(0, 0, 0),
    };

    fn as_text(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }

    #[test]
    fn escapes_delimiters_and_non_ascii() {
        assert_eq!(escape_text("a (b) \\ c"), "a \\(b\\) \\\\ c");
        assert_eq!(escape_text("• ©"), "\\225 \\251");
        assert_eq!(escape_text("日"), "\\077");
    }

    #[test]
    fn xref_offsets_point_at_objects() {
        let mut doc = PdfDocument::new();
        doc.text(20.0, 20.0, "Hello", BODY, Align::Left);
        doc.add_page();
        doc.text(20.0, 20.0, "World", BODY, Align::Center);
        let bytes = doc.finish();
        let text = as_text(&bytes);

        assert!(bytes.starts_with(b"%PDF-1.4"));
        assert!(text.trim_end().ends_with("%%EOF"));
        assert!(text.contains("/Count 2"));

        let xref_at: usize = text
            .rsplit("startxref\n")
            .next()
            .and_then(|tail| tail.lines().next())
            .and_then(|n| n.parse().ok())
            .unwrap();
        let table = as_text(&bytes[xref_at..]);
        assert!(table.starts_with("xref"));

        let entries: Vec<usize> = table
            .lines()
            .skip(3)
            .take_while(|line| line.ends_with(" n "))
            .map(|line| line[..10].parse().unwrap())
            .collect();
        // catalog, pages, two fonts, two pages with contents
        assert_eq!(entries.len(), 8);
        for (i, offset) in entries.iter().enumerate() {
            assert!(bytes[*offset..].starts_with(format!("{} 0 obj", i + 1).as_bytes()));
        }
    }

    #[test]
    fn images_become_rgb_xobjects() {
        let mut doc = PdfDocument::new();
        let image = RasterImage {
            width: 2,
            height: 2,
            rgba: vec![0; 16],
        };
        doc.image(&image, 20.0, 40.0, 80.0, 50.0);
        let text = as_text(&doc.finish());
        assert!(text.contains("/Subtype /Image /Width 2 /Height 2"));
        assert!(text.contains("/Length 12"));
        assert!(text.contains("/Im0 Do"));
    }

    #[test]
    fn coordinates_flip_to_bottom_left() {
        let (x, y) = to_pt(0.0, PAGE_HEIGHT_MM);
        assert_eq!((x, y), (0.0, 0.0));
        let (_, top) = to_pt(0.0, 0.0);
        assert!((top - 841.89).abs() < 0.01);
    }
}
