//! PDF assembly: one screenshot per landscape page

use crate::{Error, Result};
use log::{debug, warn};
use printpdf::{Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, Pt, RawImage, XObjectTransform};
use std::path::Path;

const MM_PER_PT: f32 = 25.4 / 72.0;

/// Page geometry, in PDF points.
///
/// The image offset is measured from the top-left corner of the page; the
/// image height follows the screenshot's aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub image_left: f32,
    pub image_top: f32,
    pub image_width: f32,
}

impl Default for PageLayout {
    /// A4 landscape with the screenshot 700pt wide, 50pt in from the top-left corner
    fn default() -> Self {
        Self {
            page_width: 841.89,
            page_height: 595.28,
            image_left: 50.0,
            image_top: 50.0,
            image_width: 700.0,
        }
    }
}

/// Where an image lands on the page, in PDF coordinates (origin bottom-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePlacement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Points per pixel when the image is drawn at 72 dpi
    pub scale: f32,
}

impl PageLayout {
    /// Place an image of `px_width` x `px_height` pixels on the page.
    pub fn place(&self, px_width: usize, px_height: usize) -> ImagePlacement {
        let scale = if px_width == 0 { 0.0 } else { self.image_width / px_width as f32 };
        let height = px_height as f32 * scale;
        ImagePlacement {
            x: self.image_left,
            y: self.page_height - self.image_top - height,
            width: self.image_width,
            height,
            scale,
        }
    }
}

/// The output document, built page by page in capture order
pub struct SlideDocument {
    doc: PdfDocument,
    pages: Vec<PdfPage>,
    layout: PageLayout,
}

impl SlideDocument {
    pub fn new(title: &str, layout: PageLayout) -> Self {
        Self {
            doc: PdfDocument::new(title),
            pages: Vec::new(),
            layout,
        }
    }

    /// Decode a PNG screenshot and append it as a new page.
    pub fn add_png(&mut self, png: &[u8]) -> Result<()> {
        let mut warnings = Vec::new();
        let image = RawImage::decode_from_bytes(png, &mut warnings)
            .map_err(|e| Error::PdfError(format!("Failed to decode screenshot: {}", e)))?;
        if !warnings.is_empty() {
            warn!("Image decode warnings: {:?}", warnings);
        }

        let placement = self.layout.place(image.width, image.height);
        let image_id = self.doc.add_image(&image);

        let ops = vec![Op::UseXobject {
            id: image_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(placement.x)),
                translate_y: Some(Pt(placement.y)),
                scale_x: Some(placement.scale),
                scale_y: Some(placement.scale),
                dpi: Some(72.0),
                ..Default::default()
            },
        }];

        self.pages.push(PdfPage::new(
            Mm(self.layout.page_width * MM_PER_PT),
            Mm(self.layout.page_height * MM_PER_PT),
            ops,
        ));
        debug!("Added page {} ({}x{} px)", self.pages.len(), image.width, image.height);
        Ok(())
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Serialize the document and write it to `path`, returning the page count.
    pub fn finish(mut self, path: &Path) -> Result<usize> {
        let count = self.pages.len();
        let mut warnings = Vec::new();
        let bytes = self
            .doc
            .with_pages(self.pages)
            .save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            warn!("PDF serialization warnings: {:?}", warnings);
        }

        std::fs::write(path, bytes)?;
        Ok(count)
    }
}
