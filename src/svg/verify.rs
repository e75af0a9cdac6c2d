use crate::foundation::error::{PosterError, PosterResult};

/// Canvas size as reported by the SVG parser.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DocumentSize {
    pub width: f32,
    pub height: f32,
}

/// Parse a serialized document with `usvg` to confirm it is well-formed SVG.
pub fn verify_document(document: &str) -> PosterResult<DocumentSize> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(document, &opts)
        .map_err(|e| PosterError::markup(format!("parse svg document: {e}")))?;
    let size = tree.size();
    Ok(DocumentSize {
        width: size.width(),
        height: size.height(),
    })
}
