//! Code 128 barcode rendering.
//!
//! Pass identifiers are phone-number-shaped strings, so symbols are encoded
//! in Code 128 character set B (printable ASCII).

use barcoders::generators::image::Image as PngGenerator;
use barcoders::sym::code128::Code128;
use thiserror::Error;

/// Code 128 character set B selector, required by the encoder as a prefix.
const CHARSET_B: char = '\u{0181}';

/// Rendered barcode height in pixels.
const BARCODE_HEIGHT: u32 = 80;

/// Errors that can occur when rendering a barcode.
#[derive(Debug, Error)]
pub enum BarcodeError {
    /// The payload contains characters Code 128 set B cannot carry.
    #[error("payload {0:?} cannot be encoded as Code 128: {1}")]
    Encode(String, String),

    /// The encoded symbol could not be rasterized.
    #[error("barcode image generation failed: {0}")]
    Generate(String),
}

/// Renders pass identifiers as Code 128 PNG images.
#[derive(Debug, Clone)]
pub struct BarcodeRenderer {
    height: u32,
}

impl BarcodeRenderer {
    /// Create a renderer with the default symbol height.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            height: BARCODE_HEIGHT,
        }
    }

    /// Render `payload` as a Code 128 PNG.
    ///
    /// # Errors
    ///
    /// Returns [`BarcodeError::Encode`] for payloads outside character set B
    /// and [`BarcodeError::Generate`] if rasterization fails.
    pub fn render(&self, payload: &str) -> Result<Vec<u8>, BarcodeError> {
        let symbol = Code128::new(format!("{CHARSET_B}{payload}"))
            .map_err(|e| BarcodeError::Encode(payload.to_owned(), e.to_string()))?;

        let generator = PngGenerator::png(self.height);
        generator
            .generate(&symbol.encode()[..])
            .map_err(|e| BarcodeError::Generate(e.to_string()))
    }
}

impl Default for BarcodeRenderer {
    fn default() -> Self {
        Self::new()
    }
}
