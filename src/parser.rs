use crate::container::PptxContainer;
use crate::extract::{self, MediaPayload};
use crate::images::ImageExtractor;
use crate::model::{PresentationData, SlideData};
use crate::notes;
use crate::parse_rels;
use crate::parse_xml;
use crate::parser_config::ParserConfig;
use crate::types::Shape;
use crate::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Fallback presentation title when neither the document properties nor the
/// first slide provide one.
const UNTITLED: &str = "Untitled Presentation";

/// Drives the extraction of one presentation into a [`PresentationData`]
/// model.
///
/// The output directory is explicit construction state: embedded images are
/// written under `<output_dir>/images/` and referenced by relative path from
/// the model. One parser instance can process any number of documents, but
/// two invocations sharing an output directory would collide on image
/// filenames and must be given distinct directories by the caller.
pub struct PptxParser {
    images: ImageExtractor,
    config: ParserConfig,
}

impl PptxParser {
    pub fn new(output_dir: impl Into<PathBuf>, config: ParserConfig) -> Self {
        let output_dir = output_dir.into();
        Self {
            images: ImageExtractor::new(output_dir.join("images")),
            config,
        }
    }

    /// Parses one pptx file into the document model.
    ///
    /// The image directory is created (idempotently) before any slide is
    /// processed. Slides are visited in document order and indexed 1..N.
    ///
    /// # Errors
    ///
    /// Failure to open or read the document is a hard error propagated to the
    /// caller; a batch driver is expected to catch it per document and move
    /// on. Recoverable conditions (missing metadata title, dangling picture
    /// references, unknown image content types) never surface as errors.
    pub fn parse(&self, path: &Path) -> Result<PresentationData> {
        let mut container = PptxContainer::open(path)?;
        log::debug!(
            "opened {} with {} slide(s)",
            path.display(),
            container.slide_count
        );

        if self.config.extract_images {
            self.images.ensure_dir()?;
        }

        let title = self.presentation_title(&mut container)?;

        let slide_paths = container.slide_paths.clone();
        let mut slides = Vec::with_capacity(slide_paths.len());
        for (i, slide_path) in slide_paths.iter().enumerate() {
            let slide = self.parse_slide(&mut container, slide_path, (i + 1) as u32)?;
            slides.push(slide);
        }

        Ok(PresentationData { title, slides })
    }

    /// Resolves the presentation title through an ordered strategy chain:
    /// document properties, then a scan of the first slide, then a literal
    /// default. Strategy failures fall through, never propagate.
    fn presentation_title(&self, container: &mut PptxContainer) -> Result<String> {
        if let Some(title) = container.core_title() {
            return Ok(title);
        }

        if let Some(first_slide) = container.slide_paths.first().cloned() {
            let data = container.read_file(&first_slide)?;
            let shapes = parse_xml::parse_slide_shapes(&data)?;
            if let Some(title) = first_slide_title(&shapes) {
                return Ok(title);
            }
        }

        Ok(UNTITLED.to_string())
    }

    fn parse_slide(
        &self,
        container: &mut PptxContainer,
        slide_path: &str,
        index: u32,
    ) -> Result<SlideData> {
        let slide_data = container.read_file(slide_path)?;
        let shapes = parse_xml::parse_slide_shapes(&slide_data)?;

        let media = if self.config.extract_images {
            self.load_media(container, slide_path)?
        } else {
            HashMap::new()
        };

        let mut slide = SlideData::new(index);
        extract::walk_shapes(&shapes, &mut slide, index, &media, &self.images)?;
        slide.notes = notes::extract_notes(container, slide_path)?;

        Ok(slide)
    }

    /// Preloads the image payloads referenced from a slide's relationships.
    /// Targets missing from the archive are left out; the walker treats the
    /// corresponding pictures as dangling and skips them.
    fn load_media(
        &self,
        container: &mut PptxContainer,
        slide_path: &str,
    ) -> Result<HashMap<String, MediaPayload>> {
        let rels_path = PptxContainer::slide_rels_path(slide_path);
        let Ok(rels_data) = container.read_file(&rels_path) else {
            return Ok(HashMap::new());
        };

        let mut media = HashMap::new();
        for image_ref in parse_rels::parse_slide_rels(&rels_data)? {
            let part_path = PptxContainer::resolve_target(slide_path, &image_ref.target);
            match container.read_file(&part_path) {
                Ok(bytes) => {
                    let content_type = container.content_type_for(&part_path).map(str::to_string);
                    media.insert(image_ref.id, MediaPayload { bytes, content_type });
                }
                Err(_) => {
                    log::debug!("missing media part {} for {}", part_path, image_ref.id);
                }
            }
        }

        Ok(media)
    }
}

/// Scans the top-level shapes of the first slide for title text: the first
/// non-empty title placeholder or plain text box wins.
fn first_slide_title(shapes: &[Shape]) -> Option<String> {
    for shape in shapes {
        let Shape::Text(text_shape) = shape else {
            continue;
        };

        let is_candidate = text_shape.is_text_box
            || matches!(text_shape.role.as_deref(), Some("title") | Some("ctrTitle"));
        if !is_candidate {
            continue;
        }

        let text = text_shape.full_text();
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            return Some(trimmed.to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Paragraph, TextShape};

    fn shape(role: Option<&str>, is_text_box: bool, text: &str) -> Shape {
        Shape::Text(TextShape {
            role: role.map(str::to_string),
            is_text_box,
            paragraphs: vec![Paragraph {
                text: text.to_string(),
                bullet: false,
            }],
            ..TextShape::default()
        })
    }

    #[test]
    fn test_first_slide_title_prefers_first_candidate() {
        let shapes = vec![
            shape(Some("body"), false, "body text"),
            shape(None, true, "  Deck Title  "),
            shape(Some("title"), false, "Later Title"),
        ];
        assert_eq!(first_slide_title(&shapes).as_deref(), Some("Deck Title"));
    }

    #[test]
    fn test_first_slide_title_skips_empty_candidates() {
        let shapes = vec![
            shape(Some("title"), false, "   "),
            shape(Some("ctrTitle"), false, "Centered"),
        ];
        assert_eq!(first_slide_title(&shapes).as_deref(), Some("Centered"));
    }

    #[test]
    fn test_first_slide_title_none_without_candidates() {
        let shapes = vec![shape(Some("body"), false, "body text")];
        assert!(first_slide_title(&shapes).is_none());
    }
}
