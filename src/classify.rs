use crate::constants::{EMU_PER_POINT, TITLE_MAX_Y_POINTS};
use crate::model::{ContentKind, SlideData, TextContent};
use crate::types::TextShape;

/// Decides whether a text shape should be treated as a slide title.
///
/// The rules are evaluated once per shape, first match wins:
/// 1. The placeholder role hint is `title` or `ctrTitle`.
/// 2. The shape name contains `title` or `heading` (case-insensitive).
/// 3. The shape is anchored in the top 100 points of the slide.
///
/// Rule 3 is a positional heuristic inherited from the source coordinate
/// system; raw anchors are EMU and are converted to points before the
/// comparison. Shapes without explicit geometry never match it.
pub fn is_title_shape(shape: &TextShape) -> bool {
    if let Some(role) = &shape.role {
        if role == "title" || role == "ctrTitle" {
            return true;
        }
    }

    let name = shape.name.to_lowercase();
    if name.contains("title") || name.contains("heading") {
        return true;
    }

    match shape.y {
        Some(y) => y / EMU_PER_POINT < TITLE_MAX_Y_POINTS,
        None => false,
    }
}

/// Classifies one text shape into the slide record.
///
/// Whitespace-only shapes are dropped. The first title-eligible shape fills
/// `SlideData.title` and emits no content. Every other shape contributes one
/// [`TextContent`] per non-empty paragraph: `bullet` for bulleted paragraphs,
/// `title` when the shape was title-eligible but the slot was already taken,
/// `paragraph` otherwise.
pub fn classify_text_shape(shape: &TextShape, slide: &mut SlideData) {
    let text = shape.full_text();
    if text.trim().is_empty() {
        return;
    }

    let is_title = is_title_shape(shape);

    if is_title && slide.title.is_none() {
        slide.title = Some(text.trim().to_string());
        return;
    }

    for paragraph in &shape.paragraphs {
        let trimmed = paragraph.text.trim();
        if trimmed.is_empty() {
            continue;
        }

        let kind = if paragraph.bullet {
            ContentKind::Bullet
        } else if is_title {
            ContentKind::Title
        } else {
            ContentKind::Paragraph
        };

        slide.content.push(TextContent {
            kind,
            text: trimmed.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Paragraph;

    fn shape(role: Option<&str>, name: &str, y: Option<i64>, texts: &[(&str, bool)]) -> TextShape {
        TextShape {
            role: role.map(str::to_string),
            name: name.to_string(),
            is_text_box: false,
            y,
            paragraphs: texts
                .iter()
                .map(|(text, bullet)| Paragraph {
                    text: (*text).to_string(),
                    bullet: *bullet,
                })
                .collect(),
        }
    }

    #[test]
    fn test_role_hint_wins() {
        assert!(is_title_shape(&shape(Some("title"), "Content 3", None, &[])));
        assert!(is_title_shape(&shape(Some("ctrTitle"), "Content 3", None, &[])));
        assert!(!is_title_shape(&shape(Some("body"), "Content 3", None, &[])));
    }

    #[test]
    fn test_shape_name_heuristic() {
        assert!(is_title_shape(&shape(None, "Title 1", None, &[])));
        assert!(is_title_shape(&shape(None, "Section Heading", None, &[])));
        assert!(!is_title_shape(&shape(None, "TextBox 7", None, &[])));
    }

    #[test]
    fn test_position_heuristic_uses_points() {
        // 99 points, just under the threshold
        assert!(is_title_shape(&shape(None, "TextBox 1", Some(99 * 12_700), &[])));
        // 100 points is no longer a title
        assert!(!is_title_shape(&shape(None, "TextBox 1", Some(100 * 12_700), &[])));
        // no explicit anchor
        assert!(!is_title_shape(&shape(None, "TextBox 1", None, &[])));
    }

    #[test]
    fn test_first_title_fills_slot_without_content() {
        let mut slide = SlideData::new(1);
        let s = shape(None, "TextBox 1", Some(0), &[("Quarterly Results", false)]);
        classify_text_shape(&s, &mut slide);

        assert_eq!(slide.title.as_deref(), Some("Quarterly Results"));
        assert!(slide.content.is_empty());
    }

    #[test]
    fn test_second_title_shape_degrades_to_content() {
        let mut slide = SlideData::new(1);
        classify_text_shape(&shape(Some("title"), "Title 1", None, &[("Main", false)]), &mut slide);
        classify_text_shape(&shape(Some("title"), "Title 2", None, &[("Subhead", false)]), &mut slide);

        assert_eq!(slide.title.as_deref(), Some("Main"));
        assert_eq!(
            slide.content,
            vec![TextContent {
                kind: ContentKind::Title,
                text: "Subhead".to_string()
            }]
        );
    }

    #[test]
    fn test_bullet_flag_beats_title_kind() {
        let mut slide = SlideData::new(1);
        slide.title = Some("already set".to_string());
        let s = shape(
            Some("title"),
            "Title 2",
            None,
            &[("Bulleted anyway", true), ("Plain line", false)],
        );
        classify_text_shape(&s, &mut slide);

        assert_eq!(slide.content[0].kind, ContentKind::Bullet);
        assert_eq!(slide.content[1].kind, ContentKind::Title);
    }

    #[test]
    fn test_whitespace_only_shape_is_dropped() {
        let mut slide = SlideData::new(1);
        classify_text_shape(&shape(None, "TextBox 1", None, &[("   ", false), ("", true)]), &mut slide);

        assert!(slide.title.is_none());
        assert!(slide.content.is_empty());
    }

    #[test]
    fn test_paragraph_text_is_trimmed() {
        let mut slide = SlideData::new(1);
        classify_text_shape(
            &shape(None, "TextBox 1", None, &[("  padded text \t", false)]),
            &mut slide,
        );

        assert_eq!(slide.content[0].text, "padded text");
        assert_eq!(slide.content[0].kind, ContentKind::Paragraph);
    }
}
