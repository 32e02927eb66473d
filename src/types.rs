/// A positioned visual element on a slide, as read from the slide's shape tree
/// (`<p:spTree>`). Groups nest arbitrarily deep.
#[derive(Debug, Clone)]
pub enum Shape {
    Text(TextShape),
    Picture(PictureShape),
    Group(GroupShape),
    Unknown,
}

/// A text-bearing shape (`<p:sp>` with a `<p:txBody>`).
#[derive(Debug, Clone, Default)]
pub struct TextShape {
    /// Placeholder role hint from `<p:ph type="...">`, e.g. `title`,
    /// `ctrTitle`, `body`, `sldImg`. `None` for non-placeholder shapes.
    pub role: Option<String>,
    /// Human-readable shape name from `<p:cNvPr name="...">`.
    pub name: String,
    /// Explicit text box flag (`<p:cNvSpPr txBox="1">`).
    pub is_text_box: bool,
    /// Vertical anchor offset in EMU from `<a:off y="...">`, when the shape
    /// carries explicit geometry. Placeholders inheriting layout geometry
    /// have no offset.
    pub y: Option<i64>,
    pub paragraphs: Vec<Paragraph>,
}

impl TextShape {
    /// Concatenated text of all paragraphs, one line per paragraph.
    pub fn full_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One paragraph (`<a:p>`) inside a text shape.
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    pub text: String,
    /// Whether the paragraph carries an explicit bullet marker
    /// (`<a:buChar>`, `<a:buAutoNum>` or an indentation level).
    pub bullet: bool,
}

/// A picture shape (`<p:pic>`). The payload lives in the archive's media
/// folder and is resolved through the slide's relationships.
#[derive(Debug, Clone, Default)]
pub struct PictureShape {
    /// Shape name from `<p:cNvPr name="...">`, empty when absent.
    pub name: String,
    /// Relationship id from `<a:blip r:embed="...">`.
    pub embed_id: Option<String>,
}

/// A group shape (`<p:grpSp>`) containing child shapes.
#[derive(Debug, Clone, Default)]
pub struct GroupShape {
    pub children: Vec<Shape>,
}

/// An image relationship entry from a slide's `.rels` part.
#[derive(Debug, Clone)]
pub struct ImageReference {
    pub id: String,
    pub target: String,
}
