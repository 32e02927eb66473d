use serde::{Deserialize, Serialize};

/// The fully assembled document model for one presentation.
///
/// Built once per input file and immutable afterwards. The JSON shape produced
/// by [`PresentationData::to_json`] is a stable public schema; field names and
/// order follow the struct declarations below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationData {
    pub title: String,
    pub slides: Vec<SlideData>,
}

impl PresentationData {
    /// Renders the model as pretty-printed JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One slide's extracted content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideData {
    /// 1-based position in document order. Contiguous across a presentation.
    pub index: u32,
    /// The slide title, set at most once by the first title-eligible shape.
    pub title: Option<String>,
    /// Classified text blocks in traversal order, flattened across groups.
    pub content: Vec<TextContent>,
    /// Extracted images in extraction order.
    pub images: Vec<ImageRef>,
    /// Speaker notes, empty string when the slide has none.
    pub notes: String,
}

impl SlideData {
    pub fn new(index: u32) -> Self {
        Self {
            index,
            title: None,
            content: Vec::new(),
            images: Vec::new(),
            notes: String::new(),
        }
    }
}

/// Semantic role of a classified text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Title,
    Bullet,
    Paragraph,
}

/// A classified text block. `text` is always trimmed and never empty;
/// whitespace-only source shapes are dropped before reaching the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub text: String,
}

/// Reference to an image written to the output directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Shape-provided name, or `image_<n>` when the shape is unnamed.
    pub id: String,
    /// `slide_<slideIndex>_image_<n>.<ext>`, unique within one run.
    pub filename: String,
    /// Relative path under the output directory (`images/<filename>`),
    /// intended for downstream dereferencing.
    pub path: String,
}
