//! Boggle Nogs engine: upstream IO and the fetch → extract → render pipeline.
mod decode;
mod engine;
mod fetch;
mod ignore_lists;
mod templates;
mod types;

pub use decode::{decode_html, DecodeError, DecodedHtml};
pub use engine::ProxyEngine;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use ignore_lists::load_ignore_rules;
pub use templates::{load_templates, TemplateError, FOOT_FILENAME, HEAD_FILENAME};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput};
