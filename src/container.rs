use crate::constants::{CONTENT_TYPES_PATH, CORE_PROPS_PATH};
use crate::parse_xml::{self, ContentTypes};
use crate::Result;
use std::io::Read;
use std::path::Path;

/// Read access to a loaded PowerPoint (pptx) container.
///
/// A pptx file is a zip archive of XML parts plus media payloads.
/// `PptxContainer` opens the archive, enumerates the slide parts in
/// presentation order and exposes raw part access for the extraction layer.
pub struct PptxContainer {
    archive: zip::ZipArchive<std::fs::File>,
    /// Archive paths of the slide parts, ordered by slide number.
    pub slide_paths: Vec<String>,
    pub slide_count: u32,
    content_types: ContentTypes,
}

impl PptxContainer {
    /// Opens a pptx file and indexes its slide parts.
    ///
    /// Slide paths are ordered by their numeric slide suffix; a lexical sort
    /// would place `slide10.xml` before `slide2.xml`.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be opened or is not a readable
    /// zip archive. This is the one hard failure of the pipeline; callers
    /// processing batches are expected to catch it per document.
    pub fn open(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let mut archive = zip::ZipArchive::new(file)?;

        let mut slide_paths: Vec<String> = Vec::new();
        for i in 0..archive.len() {
            let file = archive.by_index(i)?;
            let name = file.name().to_string();

            if name.starts_with("ppt/slides/slide") && name.ends_with(".xml") {
                slide_paths.push(name);
            }
        }

        slide_paths.sort_by_key(|path| Self::extract_slide_number(path).unwrap_or(u32::MAX));
        let slide_count = slide_paths.len() as u32;

        let mut container = Self {
            archive,
            slide_paths,
            slide_count,
            content_types: ContentTypes::default(),
        };

        if let Ok(data) = container.read_file(CONTENT_TYPES_PATH) {
            if let Ok(types) = parse_xml::parse_content_types(&data) {
                container.content_types = types;
            }
        }

        Ok(container)
    }

    /// Reads a file from the archive by its internal path.
    pub fn read_file(&mut self, path: &str) -> Result<Vec<u8>> {
        let mut file = self.archive.by_name(path)?;
        let mut content = Vec::new();
        file.read_to_end(&mut content)?;
        Ok(content)
    }

    /// The presentation title from `docProps/core.xml`, when the part exists
    /// and carries a non-empty `<dc:title>`. Lookup failures are swallowed so
    /// callers can fall through to heuristic title detection.
    pub fn core_title(&mut self) -> Option<String> {
        let data = self.read_file(CORE_PROPS_PATH).ok()?;
        parse_xml::parse_core_title(&data)
    }

    /// Content type of an archive part, from `[Content_Types].xml`.
    pub fn content_type_for(&self, part_path: &str) -> Option<&str> {
        self.content_types.for_part(part_path)
    }

    /// Path to the relationships part of a slide.
    ///
    /// For `ppt/slides/slide1.xml` this is `ppt/slides/_rels/slide1.xml.rels`.
    pub fn slide_rels_path(slide_path: &str) -> String {
        let mut rels_path = slide_path.to_string();
        if let Some(pos) = rels_path.rfind('/') {
            rels_path.insert_str(pos + 1, "_rels/");
        }
        rels_path.push_str(".rels");
        rels_path
    }

    /// Resolves a relationship target against the directory of the part that
    /// references it. Targets beginning with `../` are taken relative to
    /// `ppt/`.
    pub fn resolve_target(part_path: &str, target: &str) -> String {
        if let Some(adjusted) = target.strip_prefix("../") {
            format!("ppt/{}", adjusted)
        } else {
            let part_dir = part_path.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("");
            format!("{}/{}", part_dir, target)
        }
    }

    /// Extracts the numeric suffix from a slide path
    /// (`ppt/slides/slide12.xml` → `12`).
    pub fn extract_slide_number(path: &str) -> Option<u32> {
        path.rsplit('/')
            .next()
            .and_then(|filename| {
                filename
                    .strip_prefix("slide")
                    .and_then(|s| s.strip_suffix(".xml"))
            })
            .and_then(|num_str| num_str.parse::<u32>().ok())
    }
}
