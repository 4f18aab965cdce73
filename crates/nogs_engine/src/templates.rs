use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use nogs_core::PageTemplate;
use nogs_logging::nogs_info;
use thiserror::Error;

pub const HEAD_FILENAME: &str = "head.html";
pub const FOOT_FILENAME: &str = "foot.html";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read template {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read `head.html` and `foot.html` from `dir`. Both must exist.
pub fn load_templates(dir: &Path) -> Result<PageTemplate, TemplateError> {
    let head = read_fragment(&dir.join(HEAD_FILENAME))?;
    let foot = read_fragment(&dir.join(FOOT_FILENAME))?;
    nogs_info!("Loaded page templates from {:?}", dir);
    Ok(PageTemplate { head, foot })
}

fn read_fragment(path: &Path) -> Result<String, TemplateError> {
    fs::read_to_string(path).map_err(|source| TemplateError::Read {
        path: path.to_path_buf(),
        source,
    })
}
