use nogs_logging::{nogs_debug, nogs_info, nogs_warn};
use url::{form_urlencoded, Url};

use crate::ignore::IgnoreRules;
use crate::post::{Page, Post, ScanOutcome, SCORE_NOT_FOUND, SITE_NOT_FOUND, TITLE_NOT_FOUND};
use crate::token::{Cursor, Tag, Token};

const ITEM_PREFIX: &str = "item?id=";
const SITE_FILTER: &str = "from?site=";
const VOTE_PREFIX: &str = "vote?";
const DISCUSSION_KEYWORDS: [&str; 2] = ["comment", "discuss"];

/// Single-pass extractor for upstream listing pages.
///
/// Walks the token stream once, opening a record at every rank cell and
/// stopping at the "More" link. Missing fields degrade to placeholders; only
/// ignore rules can drop a record.
pub struct PostExtractor<'r> {
    rules: &'r IgnoreRules,
    base: Url,
}

impl<'r> PostExtractor<'r> {
    /// `base` is the upstream site root that relative item links resolve against.
    pub fn new(rules: &'r IgnoreRules, base: Url) -> Self {
        Self { rules, base }
    }

    pub fn extract(&self, html: &str) -> Page {
        let mut cursor = Cursor::new(html);
        let mut page = Page::default();
        loop {
            match cursor.advance() {
                Token::End => {
                    nogs_debug!(
                        "End of document after {} posts, no next page link",
                        page.posts.len()
                    );
                    return page;
                }
                Token::StartTag(tag) if is_record_start(&tag) => {
                    if let ScanOutcome::Emitted(post) = self.scan_record(&mut cursor) {
                        page.posts.push(post);
                    }
                }
                Token::StartTag(tag) if is_more_link(&tag) => {
                    page.next_page = tag.attr("href").map(str::to_owned);
                    if page.next_page.is_none() {
                        nogs_warn!("Next page link without href");
                    }
                    return page;
                }
                _ => {}
            }
        }
    }

    /// Fill one post from the tokens following its rank cell.
    ///
    /// Completes on the comments link or the row separator. The next record's
    /// rank cell and the "More" link are only peeked, never consumed.
    fn scan_record(&self, cursor: &mut Cursor<'_>) -> ScanOutcome {
        let mut post = Post::default();
        let mut title_found = false;
        loop {
            match cursor.peek() {
                Token::End => return complete(post, title_found, "end of document"),
                Token::StartTag(tag) if is_record_start(tag) || is_more_link(tag) => {
                    return complete(post, title_found, "next marker");
                }
                _ => {}
            }
            let Token::StartTag(tag) = cursor.advance() else {
                continue;
            };

            if tag.is("span") && tag.has_class("rank") {
                if let Some(text) = take_text(cursor) {
                    post.rank = Some(trim_rank(&text));
                }
            } else if !title_found && is_title_link(&tag) {
                let href = tag.attr("href").unwrap_or_default();
                post.title_link = self.resolve_title_link(href);
                match take_text(cursor) {
                    Some(title) if self.rules.ignores_title(&title) => {
                        nogs_info!("Title ignored: {}", title);
                        return drain_record(cursor);
                    }
                    Some(title) => post.title = title,
                    None => {
                        nogs_debug!("No title text after link {}", post.title_link);
                        post.title = TITLE_NOT_FOUND.to_string();
                    }
                }
                title_found = true;
            } else if let Some(site_link) = tag.attr("href").filter(|h| h.contains(SITE_FILTER)) {
                let site = site_domain(site_link);
                if self.rules.ignores_site(&site) {
                    nogs_info!("Site ignored: {}", site);
                    return drain_record(cursor);
                }
                post.site_link = Some(site_link.to_owned());
                // the label sits in a span inside the link
                if matches!(cursor.peek(), Token::StartTag(_)) {
                    cursor.advance();
                }
                post.site = Some(take_text(cursor).unwrap_or_else(|| {
                    nogs_debug!("No site label after {}", site_link);
                    SITE_NOT_FOUND.to_string()
                }));
            } else if tag.is("span") && tag.has_class("score") {
                post.score = Some(take_text(cursor).unwrap_or_else(|| {
                    nogs_debug!("No score text for post '{}'", post.title);
                    SCORE_NOT_FOUND.to_string()
                }));
            } else if let Some(href) = comment_candidate(&tag, title_found) {
                // Age, hide and past links share this shape; only the text differs.
                if let Some(text) = take_text_if(cursor, mentions_discussion) {
                    post.comments_link = Some(self.absolute(href));
                    post.comments = Some(text);
                    return ScanOutcome::Emitted(post);
                }
            } else if is_row_separator(&tag) {
                return complete(post, title_found, "row separator");
            }
        }
    }

    fn resolve_title_link(&self, href: &str) -> String {
        if href.starts_with(ITEM_PREFIX) {
            self.absolute(href)
        } else {
            href.to_owned()
        }
    }

    fn absolute(&self, href: &str) -> String {
        match self.base.join(href) {
            Ok(url) => url.to_string(),
            Err(err) => {
                nogs_debug!("Keeping unresolvable link {}: {}", href, err);
                href.to_owned()
            }
        }
    }
}

/// Skip the rest of an ignored record so the outer scan resumes on a clean
/// boundary.
fn drain_record(cursor: &mut Cursor<'_>) -> ScanOutcome {
    loop {
        match cursor.peek() {
            Token::End => return ScanOutcome::Ignored,
            Token::StartTag(tag) if is_record_start(tag) || is_more_link(tag) => {
                return ScanOutcome::Ignored
            }
            _ => {}
        }
        if let Token::StartTag(tag) = cursor.advance() {
            if is_row_separator(&tag) {
                return ScanOutcome::Ignored;
            }
        }
    }
}

/// Every completion path ends here: a record that never showed a title link
/// is not a post.
fn complete(post: Post, title_found: bool, closed_by: &str) -> ScanOutcome {
    if title_found {
        nogs_debug!("Post '{}' closed by {}", post.title, closed_by);
        ScanOutcome::Emitted(post)
    } else {
        nogs_debug!("Dropping record without title link, closed by {}", closed_by);
        ScanOutcome::Ignored
    }
}

fn take_text(cursor: &mut Cursor<'_>) -> Option<String> {
    take_text_if(cursor, |_| true)
}

/// Consume the next token only if it is text accepted by `accept`.
fn take_text_if(cursor: &mut Cursor<'_>, accept: impl Fn(&str) -> bool) -> Option<String> {
    match cursor.peek() {
        Token::Text(text) if accept(text) => {}
        _ => return None,
    }
    match cursor.advance() {
        Token::Text(text) => Some(text),
        _ => None,
    }
}

fn is_record_start(tag: &Tag) -> bool {
    tag.is("td") && tag.has_class("title") && tag.attr("align") == Some("right")
}

fn is_more_link(tag: &Tag) -> bool {
    tag.is("a") && tag.has_class("morelink")
}

fn is_row_separator(tag: &Tag) -> bool {
    tag.is("tr") && tag.has_class("spacer")
}

fn is_title_link(tag: &Tag) -> bool {
    tag.is("a")
        && tag
            .attr("href")
            .is_some_and(|href| !href.starts_with(VOTE_PREFIX))
}

fn comment_candidate(tag: &Tag, title_found: bool) -> Option<&str> {
    if !title_found || !tag.is("a") || tag.has_class("hnuser") {
        return None;
    }
    tag.attr("href")
}

fn mentions_discussion(text: &str) -> bool {
    let lower = text.to_lowercase();
    DISCUSSION_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Percent-decoded `site` parameter of a site filter link.
fn site_domain(site_link: &str) -> String {
    let query = site_link.split_once('?').map_or(site_link, |(_, query)| query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "site")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_else(|| site_link.to_owned())
}

fn trim_rank(text: &str) -> String {
    text.trim().trim_end_matches('.').to_string()
}
