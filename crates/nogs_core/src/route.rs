/// Inbound request shapes the proxy serves; everything else is a 404.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` or `/?p=<n>`.
    FrontPage { page: Option<u32> },
    /// `/from?site=<domain>[&next=...]`, forwarded verbatim.
    FromSite { query: String },
}

impl Route {
    pub fn classify(path: &str, query: Option<&str>) -> Option<Self> {
        let query = query.filter(|q| !q.is_empty());
        match (path, query) {
            ("/", None) => Some(Route::FrontPage { page: None }),
            ("/", Some(q)) => {
                let digits = q.strip_prefix("p=")?;
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                digits.parse().ok().map(|n| Route::FrontPage { page: Some(n) })
            }
            ("/from", Some(q)) if has_site_param(q) => Some(Route::FromSite {
                query: q.to_owned(),
            }),
            _ => None,
        }
    }

    /// Path and query to request from the upstream site root.
    pub fn upstream_path(&self) -> String {
        match self {
            Route::FrontPage { page: None } => String::new(),
            Route::FrontPage { page: Some(n) } => format!("?p={n}"),
            Route::FromSite { query } => format!("from?{query}"),
        }
    }
}

fn has_site_param(query: &str) -> bool {
    query
        .split('&')
        .filter_map(|pair| pair.strip_prefix("site="))
        .any(|value| !value.is_empty())
}
