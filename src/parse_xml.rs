use crate::constants::{A_NAMESPACE, DC_NAMESPACE, P_NAMESPACE, RELS_NAMESPACE};
use crate::types::{GroupShape, Paragraph, PictureShape, Shape, TextShape};
use crate::{Error, Result};
use roxmltree::{Document, Node};
use std::collections::HashMap;

/// Parses raw XML slide data from a PowerPoint (pptx) file into a shape tree.
///
/// Processes a single slide's XML to extract its shapes in document order:
/// text shapes, picture shapes and group shapes (whose children are parsed
/// recursively). Shape kinds outside those three are represented as
/// [`Shape::Unknown`] and ignored downstream.
///
/// Notes slides (`<p:notes>`) share the `<p:cSld>`/`<p:spTree>` structure and
/// are parsed with the same function.
///
/// # Errors
///
/// Returns [`Error`] if the data is not valid UTF-8, the XML is malformed, or
/// the `<p:cSld>`/`<p:spTree>` schema elements are missing.
pub fn parse_slide_shapes(xml_data: &[u8]) -> Result<Vec<Shape>> {
    let xml_str = std::str::from_utf8(xml_data)?;
    let doc = Document::parse(xml_str)?;
    let root = doc.root_element();

    let c_sld = root
        .children()
        .find(|n| is_p_element(n, "cSld"))
        .ok_or(Error::ParseError("no <p:cSld> element in slide XML"))?;

    let sp_tree = c_sld
        .children()
        .find(|n| is_p_element(n, "spTree"))
        .ok_or(Error::ParseError("no <p:spTree> element in slide XML"))?;

    Ok(parse_shape_children(&sp_tree))
}

/// Parses the direct shape children of a `<p:spTree>` or `<p:grpSp>` node.
fn parse_shape_children(parent: &Node) -> Vec<Shape> {
    let mut shapes = Vec::new();

    for child in parent.children().filter(|n| n.is_element()) {
        if child.tag_name().namespace() != Some(P_NAMESPACE) {
            continue;
        }
        match child.tag_name().name() {
            "sp" => {
                if let Some(text_shape) = parse_sp(&child) {
                    shapes.push(Shape::Text(text_shape));
                }
            }
            "pic" => shapes.push(Shape::Picture(parse_pic(&child))),
            "grpSp" => shapes.push(Shape::Group(GroupShape {
                children: parse_shape_children(&child),
            })),
            "nvGrpSpPr" | "grpSpPr" => {}
            _ => shapes.push(Shape::Unknown),
        }
    }

    shapes
}

/// Parses a `<p:sp>` node into a [`TextShape`]. Shapes without a `<p:txBody>`
/// carry no text and yield `None`.
fn parse_sp(sp_node: &Node) -> Option<TextShape> {
    let tx_body = sp_node
        .children()
        .find(|n| is_p_element(n, "txBody"))?;

    let mut shape = TextShape::default();

    if let Some(nv_sp_pr) = sp_node.children().find(|n| is_p_element(n, "nvSpPr")) {
        if let Some(c_nv_pr) = nv_sp_pr.children().find(|n| is_p_element(n, "cNvPr")) {
            shape.name = c_nv_pr.attribute("name").unwrap_or_default().to_string();
        }
        if let Some(c_nv_sp_pr) = nv_sp_pr.children().find(|n| is_p_element(n, "cNvSpPr")) {
            shape.is_text_box = matches!(c_nv_sp_pr.attribute("txBox"), Some("1") | Some("true"));
        }
        shape.role = nv_sp_pr
            .children()
            .find(|n| is_p_element(n, "nvPr"))
            .and_then(|nv_pr| nv_pr.children().find(|n| is_p_element(n, "ph")))
            .and_then(|ph| ph.attribute("type"))
            .map(str::to_string);
    }

    shape.y = sp_node
        .children()
        .find(|n| is_p_element(n, "spPr"))
        .and_then(|sp_pr| sp_pr.children().find(|n| is_a_element(n, "xfrm")))
        .and_then(|xfrm| xfrm.children().find(|n| is_a_element(n, "off")))
        .and_then(|off| off.attribute("y"))
        .and_then(|y| y.parse::<i64>().ok());

    for p_node in tx_body.children().filter(|n| is_a_element(n, "p")) {
        shape.paragraphs.push(parse_paragraph(&p_node));
    }

    Some(shape)
}

/// Parses a single paragraph node (`<a:p>`), concatenating its text runs and
/// reading the bullet marker from the paragraph properties.
fn parse_paragraph(p_node: &Node) -> Paragraph {
    let mut text = String::new();

    for r_node in p_node.children().filter(|n| is_a_element(n, "r")) {
        if let Some(t_node) = r_node.children().find(|n| is_a_element(n, "t")) {
            if let Some(t) = t_node.text() {
                text.push_str(t);
            }
        }
    }

    Paragraph {
        text,
        bullet: has_bullet(p_node),
    }
}

/// A paragraph counts as bulleted when its `<a:pPr>` carries an explicit
/// bullet marker (`<a:buChar>` or `<a:buAutoNum>`) or an indentation level,
/// unless bullets are switched off with `<a:buNone>`. Bullet formatting
/// inherited from layout or master parts is not resolved.
fn has_bullet(p_node: &Node) -> bool {
    let Some(p_pr) = p_node.children().find(|n| is_a_element(n, "pPr")) else {
        return false;
    };

    if p_pr.children().any(|n| is_a_element(&n, "buNone")) {
        return false;
    }

    p_pr.attribute("lvl").is_some()
        || p_pr
            .children()
            .any(|n| is_a_element(&n, "buChar") || is_a_element(&n, "buAutoNum"))
}

/// Parses a picture node (`<p:pic>`), extracting the shape name and the
/// relationship id of the embedded payload (`<a:blip r:embed="...">`).
/// A missing blip or embed attribute yields a dangling picture shape that the
/// walker skips.
fn parse_pic(pic_node: &Node) -> PictureShape {
    let name = pic_node
        .children()
        .find(|n| is_p_element(n, "nvPicPr"))
        .and_then(|nv| nv.children().find(|n| is_p_element(n, "cNvPr")))
        .and_then(|c_nv_pr| c_nv_pr.attribute("name"))
        .unwrap_or_default()
        .to_string();

    let embed_id = pic_node
        .descendants()
        .find(|n| is_a_element(n, "blip"))
        .and_then(|blip| {
            blip.attribute((RELS_NAMESPACE, "embed"))
                .or_else(|| blip.attribute("r:embed"))
        })
        .map(str::to_string);

    PictureShape { name, embed_id }
}

/// Reads the presentation title from `docProps/core.xml` (`<dc:title>`).
/// Any structural problem maps to `None`; the caller falls through to its
/// next title-resolution strategy.
pub fn parse_core_title(xml_data: &[u8]) -> Option<String> {
    let xml_str = std::str::from_utf8(xml_data).ok()?;
    let doc = Document::parse(xml_str).ok()?;

    let title = doc
        .root_element()
        .children()
        .find(|n| {
            n.is_element()
                && n.tag_name().name() == "title"
                && n.tag_name().namespace() == Some(DC_NAMESPACE)
        })?
        .text()?
        .trim()
        .to_string();

    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

/// Parses `[Content_Types].xml` into lookup tables used to recover the MIME
/// type of media parts: `Default` entries keyed by lowercase extension and
/// `Override` entries keyed by part name.
pub fn parse_content_types(xml_data: &[u8]) -> Result<ContentTypes> {
    let xml_str = std::str::from_utf8(xml_data)?;
    let doc = Document::parse(xml_str)?;

    let mut defaults = HashMap::new();
    let mut overrides = HashMap::new();

    for node in doc.root_element().children().filter(|n| n.is_element()) {
        match node.tag_name().name() {
            "Default" => {
                if let (Some(ext), Some(ty)) =
                    (node.attribute("Extension"), node.attribute("ContentType"))
                {
                    defaults.insert(ext.to_lowercase(), ty.to_string());
                }
            }
            "Override" => {
                if let (Some(part), Some(ty)) =
                    (node.attribute("PartName"), node.attribute("ContentType"))
                {
                    overrides.insert(part.to_string(), ty.to_string());
                }
            }
            _ => {}
        }
    }

    Ok(ContentTypes { defaults, overrides })
}

/// Content-type registry of a pptx archive.
#[derive(Debug, Clone, Default)]
pub struct ContentTypes {
    defaults: HashMap<String, String>,
    overrides: HashMap<String, String>,
}

impl ContentTypes {
    /// Looks up the content type of an archive part, trying part-name
    /// overrides first and falling back to the extension default.
    pub fn for_part(&self, part_path: &str) -> Option<&str> {
        let part_name = format!("/{}", part_path.trim_start_matches('/'));
        if let Some(ty) = self.overrides.get(&part_name) {
            return Some(ty);
        }
        let extension = part_path.rsplit('.').next()?.to_lowercase();
        self.defaults.get(&extension).map(String::as_str)
    }
}

fn is_p_element(node: &Node, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && node.tag_name().namespace() == Some(P_NAMESPACE)
}

fn is_a_element(node: &Node, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && node.tag_name().namespace() == Some(A_NAMESPACE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn load_xml(filename: &str) -> Vec<u8> {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("tests");
        path.push("test_data");
        path.push("xml");
        path.push(filename);
        fs::read(path).expect("Unable to read test data file")
    }

    #[test]
    fn test_parse_title_and_body_shapes() {
        let shapes = parse_slide_shapes(&load_xml("slide_title_body.xml")).unwrap();
        assert_eq!(shapes.len(), 2);

        let Shape::Text(title) = &shapes[0] else {
            panic!("expected a text shape");
        };
        assert_eq!(title.role.as_deref(), Some("title"));
        assert_eq!(title.name, "Title 1");
        assert_eq!(title.full_text(), "Quarterly Results");

        let Shape::Text(body) = &shapes[1] else {
            panic!("expected a text shape");
        };
        assert_eq!(body.role.as_deref(), Some("body"));
        assert_eq!(body.paragraphs.len(), 2);
        assert!(body.paragraphs[0].bullet);
        assert_eq!(body.paragraphs[0].text, "Revenue up 12%");
        assert!(!body.paragraphs[1].bullet);
        assert_eq!(body.paragraphs[1].text, "A closing paragraph");
    }

    #[test]
    fn test_parse_anchor_and_text_box_flag() {
        let shapes = parse_slide_shapes(&load_xml("slide_text_box.xml")).unwrap();

        let Shape::Text(shape) = &shapes[0] else {
            panic!("expected a text shape");
        };
        assert!(shape.is_text_box);
        assert!(shape.role.is_none());
        assert_eq!(shape.y, Some(254_000));
    }

    #[test]
    fn test_parse_nested_group() {
        let shapes = parse_slide_shapes(&load_xml("slide_group.xml")).unwrap();
        assert_eq!(shapes.len(), 1);

        let Shape::Group(outer) = &shapes[0] else {
            panic!("expected a group shape");
        };
        let Shape::Group(inner) = &outer.children[0] else {
            panic!("expected a nested group shape");
        };
        let Shape::Text(text) = &inner.children[0] else {
            panic!("expected a text shape inside the inner group");
        };
        assert!(text.paragraphs[0].bullet);
        assert_eq!(text.paragraphs[0].text, "Revenue up 12%");
    }

    #[test]
    fn test_parse_picture_shape() {
        let shapes = parse_slide_shapes(&load_xml("slide_picture.xml")).unwrap();

        let Shape::Picture(pic) = &shapes[0] else {
            panic!("expected a picture shape");
        };
        assert_eq!(pic.name, "Picture 2");
        assert_eq!(pic.embed_id.as_deref(), Some("rId2"));
    }

    #[test]
    fn test_parse_notes_shapes() {
        let shapes = parse_slide_shapes(&load_xml("notes.xml")).unwrap();

        let roles: Vec<_> = shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Text(t) => Some(t.role.as_deref()),
                _ => None,
            })
            .collect();
        assert_eq!(roles, vec![Some("sldImg"), Some("body")]);
    }

    #[test]
    fn test_missing_sp_tree_is_an_error() {
        let result = parse_slide_shapes(b"<p:sld xmlns:p=\"http://schemas.openxmlformats.org/presentationml/2006/main\"/>");
        assert!(matches!(result, Err(Error::ParseError(_))));
    }

    #[test]
    fn test_parse_core_title() {
        assert_eq!(
            parse_core_title(&load_xml("core_props.xml")).as_deref(),
            Some("Annual Report")
        );
        assert_eq!(parse_core_title(b"<not-xml"), None);
    }

    #[test]
    fn test_content_type_lookup() {
        let types = parse_content_types(&load_xml("content_types.xml")).unwrap();

        assert_eq!(types.for_part("ppt/media/image1.png"), Some("image/png"));
        assert_eq!(types.for_part("ppt/media/image2.JPEG"), Some("image/jpeg"));
        // override beats extension default
        assert_eq!(types.for_part("ppt/media/special.bin"), Some("image/tiff"));
        assert_eq!(types.for_part("ppt/media/image9.webp"), None);
    }
}
