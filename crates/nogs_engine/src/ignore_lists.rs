use std::fs;
use std::path::Path;

use nogs_core::IgnoreRules;
use nogs_logging::{nogs_info, nogs_warn};

/// Build the ignore rules from two line-delimited regex files.
///
/// A missing or unreadable file counts as an empty list; bad patterns are
/// skipped by [`IgnoreRules::from_lines`].
pub fn load_ignore_rules(site_path: &Path, title_path: &Path) -> IgnoreRules {
    let sites = read_list(site_path);
    let titles = read_list(title_path);
    let rules = IgnoreRules::from_lines(sites.lines(), titles.lines());
    nogs_info!(
        "Loaded {} site and {} title ignore patterns",
        rules.site_pattern_count(),
        rules.title_pattern_count()
    );
    rules
}

fn read_list(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            nogs_warn!("Ignore list {:?} not found; ignoring nothing from it", path);
            String::new()
        }
        Err(err) => {
            nogs_warn!("Failed to read ignore list {:?}: {}", path, err);
            String::new()
        }
    }
}
