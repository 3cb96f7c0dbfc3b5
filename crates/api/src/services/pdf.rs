//! Pass document layout and PDF rendering.
//!
//! The logical document is described by [`PassLayout`]; the
//! [`DocumentRenderer`] trait is the seam between the issuance path and the
//! layout engine, so tests can render passes without font assets. The
//! production implementation, [`GenpdfRenderer`], drives `genpdf` with a
//! font family loaded once at startup.

use std::io::Cursor;
use std::path::Path;

use genpdf::{Alignment, Document, Element, SimplePageDecorator, elements, fonts, style};
use thiserror::Error;

use gatepass_core::PassRecord;

/// Title line printed at the top of every pass document.
pub const PASS_TITLE: &str = "Festival Pass";

/// Line printed in place of the holder's picture when it cannot be fetched.
pub const PICTURE_FALLBACK_LINE: &str = "Picture could not be loaded";

/// Title font size in points.
const TITLE_FONT_SIZE: u8 = 18;

/// Errors that can occur when rendering a pass document.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The font family could not be loaded from disk.
    #[error("font family could not be loaded: {0}")]
    Fonts(#[source] genpdf::error::Error),

    /// An image could not be decoded for embedding.
    #[error("image could not be embedded: {0}")]
    Image(#[source] genpdf::error::Error),

    /// The assembled document failed to serialize.
    #[error("document rendering failed: {0}")]
    Render(#[source] genpdf::error::Error),
}

/// The picture slot of a pass document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PictureSlot {
    /// No picture URL was submitted.
    Absent,
    /// The picture was fetched and is embedded as an image.
    Image(Vec<u8>),
    /// A picture URL was submitted but the resource could not be fetched;
    /// the document carries [`PICTURE_FALLBACK_LINE`] instead.
    Unavailable,
}

/// Logical description of a pass document, independent of the layout engine.
#[derive(Debug, Clone)]
pub struct PassLayout {
    /// Centered title line.
    pub title: String,
    /// Field lines printed below the title.
    pub lines: Vec<String>,
    /// PNG image of the identifier barcode.
    pub barcode_png: Vec<u8>,
    /// Optional holder picture.
    pub picture: PictureSlot,
}

impl PassLayout {
    /// Describe the document for `record`.
    #[must_use]
    pub fn new(record: &PassRecord, barcode_png: Vec<u8>, picture: PictureSlot) -> Self {
        Self {
            title: PASS_TITLE.to_owned(),
            lines: vec![
                format!("Name: {}", record.name),
                format!("Phone: {}", record.phone),
            ],
            barcode_png,
            picture,
        }
    }
}

/// Serializes a [`PassLayout`] into document bytes.
pub trait DocumentRenderer: Send + Sync {
    /// Render the layout to its final binary form.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if an image cannot be decoded or the document
    /// fails to serialize.
    fn render(&self, layout: &PassLayout) -> Result<Vec<u8>, RenderError>;
}

/// PDF renderer over `genpdf`.
pub struct GenpdfRenderer {
    family: fonts::FontFamily<fonts::FontData>,
}

impl GenpdfRenderer {
    /// Load the font family and build a renderer.
    ///
    /// Expects the usual `{name}-Regular.ttf`, `-Bold`, `-Italic`, and
    /// `-BoldItalic` files under `font_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Fonts`] if any font file is missing or invalid.
    pub fn from_dir(font_dir: &Path, family_name: &str) -> Result<Self, RenderError> {
        let family =
            fonts::from_files(font_dir, family_name, None).map_err(RenderError::Fonts)?;
        Ok(Self { family })
    }
}

impl DocumentRenderer for GenpdfRenderer {
    fn render(&self, layout: &PassLayout) -> Result<Vec<u8>, RenderError> {
        let mut doc = Document::new(self.family.clone());
        doc.set_title(layout.title.clone());

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(10);
        doc.set_page_decorator(decorator);

        doc.push(
            elements::Paragraph::new(layout.title.clone())
                .aligned(Alignment::Center)
                .styled(style::Style::new().bold().with_font_size(TITLE_FONT_SIZE)),
        );
        doc.push(elements::Break::new(1));

        for line in &layout.lines {
            doc.push(elements::Paragraph::new(line.clone()));
        }

        doc.push(elements::Break::new(1));
        let barcode = elements::Image::from_reader(Cursor::new(layout.barcode_png.as_slice()))
            .map_err(RenderError::Image)?
            .with_alignment(Alignment::Left);
        doc.push(barcode);

        match &layout.picture {
            PictureSlot::Absent => {}
            PictureSlot::Image(bytes) => {
                doc.push(elements::Break::new(1));
                let picture = elements::Image::from_reader(Cursor::new(bytes.as_slice()))
                    .map_err(RenderError::Image)?;
                doc.push(picture);
            }
            PictureSlot::Unavailable => {
                doc.push(elements::Break::new(1));
                doc.push(elements::Paragraph::new(PICTURE_FALLBACK_LINE));
            }
        }

        let mut bytes = Vec::new();
        doc.render(&mut bytes).map_err(RenderError::Render)?;
        Ok(bytes)
    }
}
