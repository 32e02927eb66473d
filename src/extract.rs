use crate::classify;
use crate::images::ImageExtractor;
use crate::model::SlideData;
use crate::types::Shape;
use crate::Result;
use std::collections::HashMap;

/// Preloaded payload of one embedded image, keyed by relationship id.
#[derive(Debug, Clone)]
pub struct MediaPayload {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

/// Walks a slide's shape tree in document order, dispatching each shape by
/// capability: text shapes to the classifier, picture shapes to the image
/// extractor, groups recursively into their children.
///
/// Title promotion is first-wins across the entire slide, nested groups
/// included, because the classifier sees one shared [`SlideData`]. Pictures
/// whose relationship id resolves to no payload are skipped silently.
pub fn walk_shapes(
    shapes: &[Shape],
    slide: &mut SlideData,
    slide_index: u32,
    media: &HashMap<String, MediaPayload>,
    images: &ImageExtractor,
) -> Result<()> {
    for shape in shapes {
        match shape {
            Shape::Text(text_shape) => classify::classify_text_shape(text_shape, slide),
            Shape::Picture(pic) => {
                let payload = pic.embed_id.as_ref().and_then(|id| media.get(id));
                match payload {
                    Some(payload) => {
                        let image_ref = images.extract(
                            pic,
                            &payload.bytes,
                            payload.content_type.as_deref(),
                            slide_index,
                            slide.images.len(),
                        )?;
                        slide.images.push(image_ref);
                    }
                    None => {
                        log::debug!(
                            "slide {}: skipping picture '{}' with no backing data",
                            slide_index,
                            pic.name
                        );
                    }
                }
            }
            Shape::Group(group) => {
                walk_shapes(&group.children, slide, slide_index, media, images)?;
            }
            Shape::Unknown => {}
        }
    }

    Ok(())
}
