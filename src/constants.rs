/// PresentationML namespace (`p:` prefix in slide XML).
pub const P_NAMESPACE: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";

/// DrawingML namespace (`a:` prefix in slide XML).
pub const A_NAMESPACE: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

/// Relationship attribute namespace (`r:` prefix, e.g. `r:embed`).
pub const RELS_NAMESPACE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Relationship `Type` for embedded images in `.rels` parts.
pub const IMAGE_RELATIONSHIP: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

/// Relationship `Type` linking a slide to its notes slide part.
pub const NOTES_RELATIONSHIP: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/notesSlide";

/// Dublin Core namespace used for the `<dc:title>` element in `docProps/core.xml`.
pub const DC_NAMESPACE: &str = "http://purl.org/dc/elements/1.1/";

/// Archive path of the content-type registry.
pub const CONTENT_TYPES_PATH: &str = "[Content_Types].xml";

/// Archive path of the core document properties.
pub const CORE_PROPS_PATH: &str = "docProps/core.xml";

/// English Metric Units per typographic point. Raw shape anchors in slide XML
/// are stored in EMU; the title position heuristic operates in points.
pub const EMU_PER_POINT: i64 = 12_700;

/// Shapes anchored above this y offset (in points) are treated as titles.
pub const TITLE_MAX_Y_POINTS: i64 = 100;
