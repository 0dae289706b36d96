//! PDF document writer.
//!
//! Assembles complete PDF documents with proper structure:
//! header, body, xref table, and trailer.

use super::content_stream::{font_resource_name, ContentStreamBuilder};
use super::object_serializer::ObjectSerializer;
use super::page_template::{PageTemplate, PlaceholderContext};
use crate::error::Result;
use crate::object::{Object, ObjectRef};
use std::collections::HashMap;
use std::io::Write;

/// Base-14 fonts registered on every page.
const STANDARD_FONTS: [&str; 4] = [
    "Helvetica",
    "Helvetica-Bold",
    "Helvetica-Oblique",
    "Helvetica-BoldOblique",
];

/// Configuration for PDF generation.
#[derive(Debug, Clone)]
pub struct PdfWriterConfig {
    /// PDF version (e.g., "1.4")
    pub version: String,
    /// Document title
    pub title: Option<String>,
    /// Creator application
    pub creator: Option<String>,
    /// Whether to compress content streams
    pub compress: bool,
}

impl Default for PdfWriterConfig {
    fn default() -> Self {
        Self {
            version: "1.4".to_string(),
            title: None,
            creator: Some(env!("CARGO_PKG_NAME").to_string()),
            compress: true,
        }
    }
}

impl PdfWriterConfig {
    /// Set document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable stream compression.
    ///
    /// When enabled, content streams are written with the FlateDecode filter.
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}

/// Compress data using zlib for the FlateDecode filter.
fn compress_data(data: &[u8]) -> std::io::Result<Vec<u8>> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// A page being built.
pub struct PageBuilder<'a> {
    writer: &'a mut PdfWriter,
    page_index: usize,
}

impl<'a> PageBuilder<'a> {
    /// Direct access to the page's content stream.
    pub fn content(&mut self) -> &mut ContentStreamBuilder {
        &mut self.writer.pages[self.page_index].content_builder
    }

    /// Add text to the page.
    pub fn add_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font_name: &str,
        font_size: f32,
    ) -> &mut Self {
        self.content()
            .begin_text()
            .set_font(font_name, font_size)
            .text(text, x, y);
        self
    }

    /// Finish building this page and return to the writer.
    pub fn finish(mut self) -> &'a mut PdfWriter {
        self.content().end_text();
        self.writer
    }
}

/// Internal page data.
struct PageData {
    width: f32,
    height: f32,
    content_builder: ContentStreamBuilder,
}

/// PDF document writer.
///
/// Builds a complete PDF document with pages, fonts, and content.
pub struct PdfWriter {
    config: PdfWriterConfig,
    pages: Vec<PageData>,
    /// Header/footer drawn on every page at finish time
    template: Option<PageTemplate>,
    /// Object ID counter
    next_obj_id: u32,
    /// Font objects (base font name -> id), in registration order
    fonts: Vec<(String, ObjectRef)>,
}

impl PdfWriter {
    /// Create a new PDF writer with default config.
    pub fn new() -> Self {
        Self::with_config(PdfWriterConfig::default())
    }

    /// Create a PDF writer with custom config.
    pub fn with_config(config: PdfWriterConfig) -> Self {
        Self {
            config,
            pages: Vec::new(),
            template: None,
            next_obj_id: 1,
            fonts: Vec::new(),
        }
    }

    /// Draw `template` on every page when the document is finished.
    pub fn set_template(&mut self, template: PageTemplate) {
        self.template = Some(template);
    }

    /// Allocate a new object ID.
    fn alloc_obj_id(&mut self) -> u32 {
        let id = self.next_obj_id;
        self.next_obj_id += 1;
        id
    }

    /// Add a page with the given dimensions in points.
    pub fn add_page(&mut self, width: f32, height: f32) -> PageBuilder<'_> {
        let page_index = self.pages.len();
        self.pages.push(PageData {
            width,
            height,
            content_builder: ContentStreamBuilder::new(),
        });
        PageBuilder {
            writer: self,
            page_index,
        }
    }

    /// Add an A4 sized page (210mm x 297mm).
    pub fn add_a4_page(&mut self) -> PageBuilder<'_> {
        self.add_page(595.28, 841.89)
    }

    /// Create the font object for `font_name` if it does not exist yet.
    fn register_font(&mut self, font_name: &str) -> ObjectRef {
        if let Some((_, font_ref)) = self.fonts.iter().find(|(name, _)| name == font_name) {
            return *font_ref;
        }
        let font_ref = ObjectRef::new(self.alloc_obj_id(), 0);
        self.fonts.push((font_name.to_string(), font_ref));
        font_ref
    }

    fn font_object(font_name: &str) -> Object {
        ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Font")),
            ("Subtype", ObjectSerializer::name("Type1")),
            ("BaseFont", ObjectSerializer::name(font_name)),
            ("Encoding", ObjectSerializer::name("WinAnsiEncoding")),
        ])
    }

    fn info_object(&self) -> Object {
        let mut entries = Vec::new();
        if let Some(title) = &self.config.title {
            entries.push(("Title", ObjectSerializer::string(title)));
        }
        if let Some(creator) = &self.config.creator {
            entries.push(("Creator", ObjectSerializer::string(creator)));
            entries.push(("Producer", ObjectSerializer::string(creator)));
        }
        let created = chrono::Local::now().format("D:%Y%m%d%H%M%S").to_string();
        entries.push(("CreationDate", ObjectSerializer::string(&created)));
        ObjectSerializer::dict(entries)
    }

    /// Build the complete PDF document.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        let serializer = ObjectSerializer::compact();
        let mut output = Vec::new();
        let mut xref_offsets: Vec<(u32, usize)> = Vec::new();

        writeln!(output, "%PDF-{}", self.config.version)?;
        // Binary marker
        output.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");

        if let Some(template) = self.template.take() {
            let total = self.pages.len();
            for (i, page) in self.pages.iter_mut().enumerate() {
                let mut context = PlaceholderContext::new(i + 1, total);
                if let Some(title) = &self.config.title {
                    context = context.with_title(title.clone());
                }
                page.content_builder.end_text();
                template.render(&mut page.content_builder, &context, page.width, page.height);
            }
        }

        for font_name in STANDARD_FONTS {
            self.register_font(font_name);
        }
        let font_resources: HashMap<String, Object> = self
            .fonts
            .iter()
            .map(|(name, font_ref)| (font_resource_name(name), Object::Reference(*font_ref)))
            .collect();

        let catalog_id = self.alloc_obj_id();
        let pages_id = self.alloc_obj_id();

        let mut page_refs: Vec<Object> = Vec::with_capacity(self.pages.len());
        let mut page_objects: Vec<(u32, Object)> = Vec::with_capacity(self.pages.len() * 2);

        let pages = std::mem::take(&mut self.pages);
        for page in &pages {
            let page_id = self.alloc_obj_id();
            let content_id = self.alloc_obj_id();

            let raw_content = page.content_builder.build()?;
            let mut content_dict = HashMap::new();
            let content_bytes = if self.config.compress {
                content_dict.insert("Filter".to_string(), ObjectSerializer::name("FlateDecode"));
                compress_data(&raw_content)?
            } else {
                raw_content
            };

            let page_obj = ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Page")),
                ("Parent", ObjectSerializer::reference(pages_id, 0)),
                (
                    "MediaBox",
                    ObjectSerializer::rect(0.0, 0.0, page.width as f64, page.height as f64),
                ),
                ("Contents", ObjectSerializer::reference(content_id, 0)),
                (
                    "Resources",
                    ObjectSerializer::dict(vec![(
                        "Font",
                        Object::Dictionary(font_resources.clone()),
                    )]),
                ),
            ]);

            page_refs.push(ObjectSerializer::reference(page_id, 0));
            page_objects.push((page_id, page_obj));
            page_objects.push((
                content_id,
                Object::Stream {
                    dict: content_dict,
                    data: bytes::Bytes::from(content_bytes),
                },
            ));
        }

        let pages_obj = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Pages")),
            ("Count", ObjectSerializer::integer(pages.len() as i64)),
            ("Kids", Object::Array(page_refs)),
        ]);
        let catalog_obj = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Catalog")),
            ("Pages", ObjectSerializer::reference(pages_id, 0)),
        ]);
        let info_id = self.alloc_obj_id();
        let info_obj = self.info_object();

        let mut emit = |output: &mut Vec<u8>, id: u32, obj: &Object| -> std::io::Result<()> {
            xref_offsets.push((id, output.len()));
            serializer.write_indirect(output, id, 0, obj)
        };

        for (name, font_ref) in &self.fonts {
            emit(&mut output, font_ref.id, &Self::font_object(name))?;
        }
        emit(&mut output, catalog_id, &catalog_obj)?;
        emit(&mut output, pages_id, &pages_obj)?;
        for (id, obj) in &page_objects {
            emit(&mut output, *id, obj)?;
        }
        emit(&mut output, info_id, &info_obj)?;

        // Cross-reference table, one entry per allocated id
        let xref_start = output.len();
        writeln!(output, "xref")?;
        writeln!(output, "0 {}", self.next_obj_id)?;
        writeln!(output, "0000000000 65535 f ")?;
        xref_offsets.sort_by_key(|(id, _)| *id);
        for (_, offset) in &xref_offsets {
            writeln!(output, "{:010} 00000 n ", offset)?;
        }

        let trailer = ObjectSerializer::dict(vec![
            ("Size", ObjectSerializer::integer(self.next_obj_id as i64)),
            ("Root", ObjectSerializer::reference(catalog_id, 0)),
            ("Info", ObjectSerializer::reference(info_id, 0)),
        ]);
        writeln!(output, "trailer")?;
        serializer.write_object(&mut output, &trailer)?;
        writeln!(output)?;
        writeln!(output, "startxref")?;
        writeln!(output, "{}", xref_start)?;
        write!(output, "%%EOF")?;

        log::debug!(
            "Wrote PDF: {} pages, {} objects, {} bytes",
            pages.len(),
            self.next_obj_id - 1,
            output.len()
        );
        Ok(output)
    }

    /// Save the PDF to a file.
    pub fn save(self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.finish()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}
