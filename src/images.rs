use crate::model::ImageRef;
use crate::types::PictureShape;
use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes embedded picture payloads to the output image directory and builds
/// the [`ImageRef`] entries referenced from the document model.
///
/// Filenames are `slide_<slideIndex>_image_<n>.<ext>` with `n` counted per
/// slide, so names never collide within one run. Paths placed in the model are
/// relative (`images/<filename>`) for downstream dereferencing.
#[derive(Debug, Clone)]
pub struct ImageExtractor {
    image_dir: PathBuf,
}

impl ImageExtractor {
    pub fn new(image_dir: impl Into<PathBuf>) -> Self {
        Self {
            image_dir: image_dir.into(),
        }
    }

    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    /// Creates the image directory if it does not exist yet. Idempotent;
    /// called once before any slide is processed.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.image_dir)?;
        Ok(())
    }

    /// Writes one picture payload and returns its reference.
    ///
    /// `image_count` is the number of images already extracted for this slide.
    pub fn extract(
        &self,
        shape: &PictureShape,
        payload: &[u8],
        content_type: Option<&str>,
        slide_index: u32,
        image_count: usize,
    ) -> Result<ImageRef> {
        let n = image_count + 1;
        let extension = content_type.map_or("png", extension_for);
        let filename = format!("slide_{}_image_{}.{}", slide_index, n, extension);

        fs::write(self.image_dir.join(&filename), payload)?;

        let id = if shape.name.is_empty() {
            format!("image_{}", n)
        } else {
            shape.name.clone()
        };

        Ok(ImageRef {
            id,
            path: format!("images/{}", filename),
            filename,
        })
    }
}

/// Maps an image content type to a file extension. Unrecognized types fall
/// back to `png` rather than failing.
fn extension_for(content_type: &str) -> &'static str {
    match content_type.to_lowercase().as_str() {
        "image/png" => "png",
        "image/jpeg" | "image/jpg" => "jpg",
        "image/gif" => "gif",
        "image/bmp" => "bmp",
        "image/tiff" => "tiff",
        _ => "png",
    }
}
