use crate::container::PptxContainer;
use crate::parse_rels;
use crate::parse_xml;
use crate::types::Shape;
use crate::Result;

/// Placeholder role of the slide-thumbnail shape in a notes slide. It echoes
/// the slide image and must never contribute notes text.
const SLIDE_IMAGE_ROLE: &str = "sldImg";

/// Extracts the speaker notes of one slide.
///
/// A slide without a notes part yields the empty string. Otherwise the notes
/// slide's text shapes are visited in order, the slide-thumbnail placeholder
/// is skipped, and the remaining non-empty texts are joined with single
/// newlines.
pub fn extract_notes(container: &mut PptxContainer, slide_path: &str) -> Result<String> {
    let rels_path = PptxContainer::slide_rels_path(slide_path);
    let Ok(rels_data) = container.read_file(&rels_path) else {
        return Ok(String::new());
    };

    let Some(target) = parse_rels::parse_notes_target(&rels_data)? else {
        return Ok(String::new());
    };

    let notes_path = PptxContainer::resolve_target(slide_path, &target);
    let Ok(notes_data) = container.read_file(&notes_path) else {
        return Ok(String::new());
    };

    let shapes = parse_xml::parse_slide_shapes(&notes_data)?;
    Ok(collect_notes_text(&shapes))
}

/// Joins the non-placeholder text shapes of a notes slide.
pub fn collect_notes_text(shapes: &[Shape]) -> String {
    let mut notes = String::new();

    for shape in shapes {
        let Shape::Text(text_shape) = shape else {
            continue;
        };
        if text_shape.role.as_deref() == Some(SLIDE_IMAGE_ROLE) {
            continue;
        }

        let text = text_shape.full_text();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            continue;
        }

        if !notes.is_empty() {
            notes.push('\n');
        }
        notes.push_str(trimmed);
    }

    notes
}
