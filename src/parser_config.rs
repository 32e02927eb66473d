/// Configuration options for the extraction pipeline.
///
/// Use [`ParserConfig::builder()`] to create a configuration instance,
/// customizing only the desired fields while falling back to defaults for the
/// rest.
///
/// # Configuration Options
///
/// | Parameter | Type | Default | Description |
/// |-----------|------|---------|-------------|
/// | `extract_images` | `bool` | `true` | Whether embedded images are written to the output directory |
///
/// # Example
///
/// ```
/// use pptx_to_json::ParserConfig;
///
/// let config = ParserConfig::builder()
///     .extract_images(false)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ParserConfig {
    pub extract_images: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            extract_images: true,
        }
    }
}

impl ParserConfig {
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }
}

/// Builder for [`ParserConfig`].
#[derive(Debug, Default)]
pub struct ParserConfigBuilder {
    extract_images: Option<bool>,
}

impl ParserConfigBuilder {
    /// Sets whether embedded images should be extracted to disk. When
    /// disabled, slides keep empty image lists and nothing is written.
    pub fn extract_images(mut self, value: bool) -> Self {
        self.extract_images = Some(value);
        self
    }

    /// Builds the final [`ParserConfig`], applying defaults for unset fields.
    pub fn build(self) -> ParserConfig {
        ParserConfig {
            extract_images: self.extract_images.unwrap_or(true),
        }
    }
}
