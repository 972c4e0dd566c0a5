use std::io::{self, Write};

use flate2::write::ZlibEncoder;
use flate2::Compression;
use kurbo::Affine;

use crate::core::builder::LinearGradientBuilder;
use crate::core::error::GradientError;
use crate::core::page::{Page, PatternId};
use crate::core::shading::{shading_pattern_object, AxialShading, ShadingSink};
use crate::core::writer::{PdfObject, PdfWriter, WriteSeek};

/// Shading registered with a document; becomes one indirect object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShadingId(pub usize);

/// In-memory PDF document collecting shadings, shading patterns and pages.
///
/// Object numbering at write time: catalog 1, page tree 2, then every
/// shading, every pattern, and a content stream + page object per page.
#[derive(Debug, Clone, Default)]
pub struct Document {
    shadings: Vec<PdfObject>,
    patterns: Vec<(ShadingId, Option<Affine>)>,
    pages: Vec<Page>,
}

impl ShadingSink for Document {
    type Shading = ShadingId;
    type Pattern = PatternId;

    fn axial_shading(&mut self, shading: &AxialShading) -> ShadingId {
        self.shadings.push(shading.to_pdf_object());
        ShadingId(self.shadings.len() - 1)
    }

    fn shading_pattern(&mut self, shading: ShadingId, matrix: Option<Affine>) -> PatternId {
        self.patterns.push((shading, matrix));
        PatternId(self.patterns.len() - 1)
    }
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page to the document
    pub fn add_page(&mut self, page: &Page) {
        self.pages.push(page.clone());
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Single page of `width` x `height` filled edge to edge with `gradient`.
    /// A gradient without color leaves the page blank.
    pub fn with_gradient_page(gradient: &LinearGradientBuilder, width: f64, height: f64) -> Self {
        let mut document = Document::new();
        let mut page = Page::new(width, height);
        let area = page.media_box();
        if let Some(pattern) = gradient.build_color(Some(&area), None, &mut document) {
            page.fill_rect_with_pattern(&area, pattern);
        }
        document.add_page(&page);
        document
    }

    /// Write the document to a file
    pub fn write_to(&self, path: &str) -> Result<(), GradientError> {
        let writer = PdfWriter::from_path(path)?;
        self.write_with(writer)?;
        Ok(())
    }

    /// Write the document to any seekable sink (e.g. `Cursor<Vec<u8>>`)
    pub fn write_to_writer<W: WriteSeek>(&self, sink: W) -> Result<W, GradientError> {
        let writer = PdfWriter::new(sink)?;
        Ok(self.write_with(writer)?)
    }

    /// Render the document to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, GradientError> {
        let cursor = self.write_to_writer(io::Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }

    fn write_with<W: WriteSeek>(&self, mut writer: PdfWriter<W>) -> io::Result<W> {
        let catalog_id = 1;
        let pages_id = 2;
        let first_shading_id = 3;
        let first_pattern_id = first_shading_id + self.shadings.len() as u32;
        let first_page_id = first_pattern_id + self.patterns.len() as u32;

        // (content_id, page_id) per page
        let page_object_ids: Vec<(u32, u32)> = (0..self.pages.len() as u32)
            .map(|i| (first_page_id + i * 2, first_page_id + i * 2 + 1))
            .collect();

        let catalog = PdfObject::dict(vec![
            ("Type", PdfObject::name("Catalog")),
            ("Pages", PdfObject::Reference(pages_id)),
        ]);
        writer.write_object(catalog_id, &catalog)?;

        let page_refs = page_object_ids
            .iter()
            .map(|(_content_id, page_id)| PdfObject::Reference(*page_id))
            .collect();
        let pages_obj = PdfObject::dict(vec![
            ("Type", PdfObject::name("Pages")),
            ("Kids", PdfObject::Array(page_refs)),
            ("Count", PdfObject::Integer(self.pages.len() as i64)),
        ]);
        writer.write_object(pages_id, &pages_obj)?;

        for (i, shading) in self.shadings.iter().enumerate() {
            writer.write_object(first_shading_id + i as u32, shading)?;
        }

        // Patterns are shared by every page, like fonts in a text document
        let mut pattern_resources = Vec::with_capacity(self.patterns.len());
        for (i, (shading, matrix)) in self.patterns.iter().enumerate() {
            let pattern_id = first_pattern_id + i as u32;
            let shading_ref = PdfObject::Reference(first_shading_id + shading.0 as u32);
            writer.write_object(pattern_id, &shading_pattern_object(shading_ref, *matrix))?;
            pattern_resources.push((PatternId(i).resource_name(), PdfObject::Reference(pattern_id)));
        }

        for (page, (content_id, page_id)) in self.pages.iter().zip(&page_object_ids) {
            let content_stream = PdfObject::Stream(
                vec![("Filter".to_string(), PdfObject::name("FlateDecode"))],
                compress(&page.content)?,
            );
            writer.write_object(*content_id, &content_stream)?;

            let page_obj = PdfObject::dict(vec![
                ("Type", PdfObject::name("Page")),
                ("Parent", PdfObject::Reference(pages_id)),
                ("MediaBox", PdfObject::Array(vec![
                    PdfObject::Integer(0),
                    PdfObject::Integer(0),
                    PdfObject::Real(page.width),
                    PdfObject::Real(page.height),
                ])),
                ("Resources", PdfObject::dict(vec![
                    ("Pattern", PdfObject::Dictionary(pattern_resources.clone())),
                ])),
                ("Contents", PdfObject::Reference(*content_id)),
            ]);
            writer.write_object(*page_id, &page_obj)?;
        }

        writer.write_xref_and_trailer(catalog_id)?;
        writer.into_inner()
    }
}

fn compress(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}
