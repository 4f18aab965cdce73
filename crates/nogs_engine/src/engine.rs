use std::sync::Arc;

use nogs_core::{render_page, IgnoreRules, Page, PageTemplate, PostExtractor, Route};
use nogs_logging::{nogs_debug, nogs_info};
use url::Url;

use crate::decode::decode_html;
use crate::fetch::Fetcher;
use crate::{FailureKind, FetchError};

/// Serves one inbound route: fetch upstream, extract posts, render.
///
/// Holds only immutable configuration, so one instance is shared by every
/// request.
pub struct ProxyEngine {
    fetcher: Arc<dyn Fetcher>,
    upstream: Url,
    rules: Arc<IgnoreRules>,
    template: PageTemplate,
}

impl ProxyEngine {
    /// `upstream` is the listing site root, e.g. `https://news.ycombinator.com/`.
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        upstream: Url,
        rules: Arc<IgnoreRules>,
        template: PageTemplate,
    ) -> Self {
        Self {
            fetcher,
            upstream,
            rules,
            template,
        }
    }

    pub fn upstream_url(&self, route: &Route) -> Result<Url, FetchError> {
        self.upstream
            .join(&route.upstream_path())
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    /// Fetch and extract. Markup anomalies never fail; only the fetch and
    /// body decoding can.
    pub async fn fetch_page(&self, route: &Route) -> Result<Page, FetchError> {
        let url = self.upstream_url(route)?;
        let output = self.fetcher.fetch(url.as_str()).await?;
        let decoded = decode_html(&output.bytes, output.metadata.content_type.as_deref())
            .map_err(|err| FetchError::new(FailureKind::Undecodable, err.to_string()))?;
        nogs_debug!(
            "Decoded {} bytes from {} as {}",
            output.metadata.byte_len,
            output.metadata.final_url,
            decoded.encoding_label
        );

        let page = PostExtractor::new(&self.rules, self.upstream.clone()).extract(&decoded.html);
        nogs_info!(
            "Extracted {} posts from {} (next page: {})",
            page.posts.len(),
            url,
            page.next_page.as_deref().unwrap_or("none")
        );
        Ok(page)
    }

    pub async fn serve(&self, route: &Route) -> Result<String, FetchError> {
        let page = self.fetch_page(route).await?;
        Ok(render_page(&self.template, &page))
    }
}
