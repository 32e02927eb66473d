use crate::constants::{IMAGE_RELATIONSHIP, NOTES_RELATIONSHIP};
use crate::types::ImageReference;
use crate::Result;
use roxmltree::Document;

/// Parses relationship (`.rels`) XML data from a pptx slide, extracting image
/// references.
///
/// Relationship parts map resource ids to their targets; this function keeps
/// only relationships pointing at embedded images, in document order.
///
/// # Errors
///
/// Returns an error if the data is not valid UTF-8 or the XML is malformed.
pub fn parse_slide_rels(xml_data: &[u8]) -> Result<Vec<ImageReference>> {
    let xml_str = std::str::from_utf8(xml_data)?;
    let doc = Document::parse(xml_str)?;

    let mut images = Vec::new();
    for rel in doc
        .root_element()
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "Relationship")
    {
        if rel.attribute("Type") != Some(IMAGE_RELATIONSHIP) {
            continue;
        }
        if let (Some(id), Some(target)) = (rel.attribute("Id"), rel.attribute("Target")) {
            images.push(ImageReference {
                id: id.to_string(),
                target: target.to_string(),
            });
        }
    }

    Ok(images)
}

/// Finds the notes-slide target of a slide's relationship part, if the slide
/// has speaker notes.
pub fn parse_notes_target(xml_data: &[u8]) -> Result<Option<String>> {
    let xml_str = std::str::from_utf8(xml_data)?;
    let doc = Document::parse(xml_str)?;

    let target = doc
        .root_element()
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "Relationship")
        .find(|rel| rel.attribute("Type") == Some(NOTES_RELATIONSHIP))
        .and_then(|rel| rel.attribute("Target"))
        .map(str::to_string);

    Ok(target)
}
