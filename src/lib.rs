mod classify;
mod constants;
mod container;
mod extract;
mod images;
mod model;
mod notes;
mod parse_rels;
mod parse_xml;
mod parser;
mod parser_config;
mod types;

pub use container::PptxContainer;
pub use model::{ContentKind, ImageRef, PresentationData, SlideData, TextContent};
pub use parser::PptxParser;
pub use parser_config::ParserConfig;
pub use types::*;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    ParseError(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
