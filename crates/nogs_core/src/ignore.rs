use nogs_logging::nogs_warn;
use regex::Regex;

/// Site and title block lists, compiled once at startup and then only read.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    sites: Vec<Regex>,
    titles: Vec<Regex>,
}

impl IgnoreRules {
    /// Compile one pattern per line. Blank lines are skipped; invalid
    /// patterns are logged and dropped.
    pub fn from_lines<'a, S, T>(site_lines: S, title_lines: T) -> Self
    where
        S: IntoIterator<Item = &'a str>,
        T: IntoIterator<Item = &'a str>,
    {
        Self {
            sites: compile_lines("site", site_lines),
            titles: compile_lines("title", title_lines),
        }
    }

    pub fn ignores_site(&self, site: &str) -> bool {
        self.sites.iter().any(|re| re.is_match(site))
    }

    pub fn ignores_title(&self, title: &str) -> bool {
        self.titles.iter().any(|re| re.is_match(title))
    }

    pub fn site_pattern_count(&self) -> usize {
        self.sites.len()
    }

    pub fn title_pattern_count(&self) -> usize {
        self.titles.len()
    }
}

fn compile_lines<'a>(kind: &str, lines: impl IntoIterator<Item = &'a str>) -> Vec<Regex> {
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Regex::new(line) {
            Ok(re) => Some(re),
            Err(err) => {
                nogs_warn!(
                    "Invalid {} regex expression, will be ignored: {} ({})",
                    kind,
                    line,
                    err
                );
                None
            }
        })
        .collect()
}
