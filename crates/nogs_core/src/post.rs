pub const TITLE_NOT_FOUND: &str = "TITLE NOT FOUND";
pub const SITE_NOT_FOUND: &str = "SITE NOT FOUND";
pub const SCORE_NOT_FOUND: &str = "SCORE NOT FOUND";

/// One entry of the upstream listing.
///
/// `rank`, `score` and the comment fields are absent for job postings; the
/// site fields are absent for discussion-only posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Post {
    pub rank: Option<String>,
    pub title: String,
    pub title_link: String,
    pub site: Option<String>,
    pub site_link: Option<String>,
    pub score: Option<String>,
    pub comments: Option<String>,
    pub comments_link: Option<String>,
}

/// Everything extracted from one listing page, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub posts: Vec<Post>,
    /// Upstream-relative target of the "More" link, e.g. `?p=2`.
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Emitted(Post),
    Ignored,
}
