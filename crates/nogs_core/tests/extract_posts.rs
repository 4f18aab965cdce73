use nogs_core::{IgnoreRules, Page, Post, PostExtractor, TITLE_NOT_FOUND};
use pretty_assertions::assert_eq;
use url::Url;

const FRONT_PAGE: &str = include_str!("fixtures/front_page.html");
const NO_PATTERNS: [&str; 0] = [];

fn base() -> Url {
    Url::parse("https://news.ycombinator.com/").unwrap()
}

fn extract(rules: &IgnoreRules, html: &str) -> Page {
    PostExtractor::new(rules, base()).extract(html)
}

/// One listing entry in the upstream's markup. `comments: None` renders a
/// job-style entry with neither score nor discussion link.
fn record(id: u32, title: &str, site: Option<&str>, comments: Option<&str>) -> String {
    let title_link = match site {
        Some(site) => format!("https://{site}/{id}"),
        None => format!("item?id={id}"),
    };
    let sitebit = site
        .map(|site| {
            format!(
                r#"<span class="sitebit comhead"> (<a href="from?site={site}"><span class="sitestr">{site}</span></a>)</span>"#
            )
        })
        .unwrap_or_default();
    let (rank, subtext) = match comments {
        Some(comments) => (
            format!(r#"<span class="rank">{id}.</span>"#),
            format!(
                r#"<span class="score" id="score_{id}">{id} points</span> by <a href="user?id=u{id}" class="hnuser">u{id}</a> <span class="age"><a href="item?id={id}">1 hour ago</a></span> | <a href="hide?id={id}">hide</a> | <a href="item?id={id}">{comments}</a>"#
            ),
        ),
        None => (
            String::new(),
            format!(r#"<span class="age"><a href="item?id={id}">1 hour ago</a></span>"#),
        ),
    };
    format!(
        r#"<tr class="athing" id="{id}"><td align="right" valign="top" class="title">{rank}</td><td class="votelinks"><a id="up_{id}" href="vote?id={id}&amp;how=up"></a></td><td class="title"><span class="titleline"><a href="{title_link}">{title}</a>{sitebit}</span></td></tr>
<tr><td colspan="2"></td><td class="subtext">{subtext}</td></tr>
<tr class="spacer" style="height:5px"></tr>
"#
    )
}

fn more_link(href: &str) -> String {
    format!(r#"<tr><td class="title"><a href="{href}" class="morelink" rel="next">More</a></td></tr>"#)
}

fn document(body: &str) -> String {
    format!("<html><body><table>{body}</table></body></html>")
}

#[test]
fn front_page_fixture_yields_three_posts_and_next_page() {
    let page = extract(&IgnoreRules::default(), FRONT_PAGE);

    assert_eq!(
        page.posts,
        vec![
            Post {
                rank: Some("1".to_string()),
                title: "Parsing HTML & friends in Rust".to_string(),
                title_link: "https://example.com/rust-&-html".to_string(),
                site: Some("example.com".to_string()),
                site_link: Some("from?site=example.com".to_string()),
                score: Some("128 points".to_string()),
                comments: Some("42\u{a0}comments".to_string()),
                comments_link: Some("https://news.ycombinator.com/item?id=40000001".to_string()),
            },
            Post {
                rank: Some("2".to_string()),
                title: "Ask HN: How do you review parsers?".to_string(),
                title_link: "https://news.ycombinator.com/item?id=40000002".to_string(),
                site: None,
                site_link: None,
                score: Some("56 points".to_string()),
                comments: Some("17\u{a0}comments".to_string()),
                comments_link: Some("https://news.ycombinator.com/item?id=40000002".to_string()),
            },
            Post {
                rank: None,
                title: "Acme (YC S21) Is Hiring Rust Engineers".to_string(),
                title_link: "https://www.ycombinator.com/companies/acme/jobs".to_string(),
                site: Some("ycombinator.com".to_string()),
                site_link: Some("from?site=ycombinator.com".to_string()),
                score: None,
                comments: None,
                comments_link: None,
            },
        ]
    );
    assert_eq!(page.next_page.as_deref(), Some("?p=2"));
}

#[test]
fn ignored_title_is_dropped_and_next_post_is_intact() {
    let rules = IgnoreRules::from_lines(NO_PATTERNS, ["^Parsing HTML"]);
    let page = extract(&rules, FRONT_PAGE);

    assert_eq!(page.posts.len(), 2);
    let ask = &page.posts[0];
    assert_eq!(ask.rank.as_deref(), Some("2"));
    assert_eq!(ask.title, "Ask HN: How do you review parsers?");
    assert_eq!(ask.score.as_deref(), Some("56 points"));
    assert_eq!(
        ask.comments_link.as_deref(),
        Some("https://news.ycombinator.com/item?id=40000002")
    );
    assert_eq!(page.next_page.as_deref(), Some("?p=2"));
}

#[test]
fn ignored_site_is_dropped_without_losing_pagination() {
    let rules = IgnoreRules::from_lines(["ycombinator\\.com$"], NO_PATTERNS);
    let page = extract(&rules, FRONT_PAGE);

    let titles: Vec<&str> = page.posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Parsing HTML & friends in Rust",
            "Ask HN: How do you review parsers?"
        ]
    );
    assert_eq!(page.next_page.as_deref(), Some("?p=2"));
}

#[test]
fn emitted_count_is_markers_minus_ignored() {
    let mut body = String::new();
    for id in 1..=12 {
        let site = if id % 4 == 0 { "blocked.example" } else { "ok.example" };
        let title = if id % 5 == 0 {
            format!("Spam {id}")
        } else {
            format!("Story {id}")
        };
        body.push_str(&record(id, &title, Some(site), Some("3 comments")));
    }
    body.push_str(&more_link("?p=2"));
    let rules = IgnoreRules::from_lines(["^blocked\\."], ["^Spam"]);

    let page = extract(&rules, &document(&body));

    // ids 4, 8, 12 blocked by site; 5 and 10 by title
    assert_eq!(page.posts.len(), 12 - 3 - 2);
    let ranks: Vec<&str> = page.posts.iter().filter_map(|p| p.rank.as_deref()).collect();
    assert_eq!(ranks, vec!["1", "2", "3", "6", "7", "9", "11"]);
}

#[test]
fn relative_item_links_become_absolute_and_external_links_pass_through() {
    let body = record(7, "Show HN: thing", None, Some("discuss"))
        + &record(8, "External", Some("lwn.net"), Some("1 comment"));
    let page = extract(&IgnoreRules::default(), &document(&body));

    assert_eq!(
        page.posts[0].title_link,
        "https://news.ycombinator.com/item?id=7"
    );
    assert_eq!(page.posts[0].comments.as_deref(), Some("discuss"));
    assert_eq!(page.posts[1].title_link, "https://lwn.net/8");
}

#[test]
fn job_post_completes_at_row_separator() {
    let body = record(3, "Acme Is Hiring", Some("acme.example"), None)
        + &record(4, "Next", Some("next.example"), Some("9 comments"));
    let page = extract(&IgnoreRules::default(), &document(&body));

    assert_eq!(page.posts.len(), 2);
    let job = &page.posts[0];
    assert_eq!(job.title, "Acme Is Hiring");
    assert_eq!(job.rank, None);
    assert_eq!(job.score, None);
    assert_eq!(job.comments, None);
    assert_eq!(job.comments_link, None);
    assert_eq!(page.posts[1].comments.as_deref(), Some("9 comments"));
}

#[test]
fn pagination_marker_stops_the_scan() {
    let body = record(1, "First", Some("a.example"), Some("2 comments"))
        + &more_link("?p=2")
        + &record(2, "After more", Some("b.example"), Some("5 comments"));
    let page = extract(&IgnoreRules::default(), &document(&body));

    assert_eq!(page.posts.len(), 1);
    assert_eq!(page.posts[0].title, "First");
    assert_eq!(page.next_page.as_deref(), Some("?p=2"));
}

#[test]
fn missing_pagination_marker_is_not_an_error() {
    let body = record(1, "Only", None, Some("4 comments"));
    let page = extract(&IgnoreRules::default(), &document(&body));

    assert_eq!(page.posts.len(), 1);
    assert_eq!(page.next_page, None);
}

#[test]
fn missing_title_text_uses_placeholder() {
    let html = r#"<table><tr><td align="right" class="title"><span class="rank">1.</span></td>
<td class="title"><a href="https://example.com/empty"></a></td></tr>
<tr><td class="subtext"><a href="item?id=1">10 comments</a></td></tr></table>"#;
    let page = extract(&IgnoreRules::default(), html);

    assert_eq!(page.posts.len(), 1);
    assert_eq!(page.posts[0].title, TITLE_NOT_FOUND);
    assert_eq!(page.posts[0].title_link, "https://example.com/empty");
    assert_eq!(page.posts[0].comments.as_deref(), Some("10 comments"));
}

#[test]
fn record_without_terminator_is_closed_by_next_record_start() {
    let html = r#"<table>
<tr><td align="right" class="title"><span class="rank">1.</span></td><td class="title"><a href="https://a.example/">Unterminated</a></td></tr>
<tr><td align="right" class="title"><span class="rank">2.</span></td><td class="title"><a href="https://b.example/">Second</a></td></tr>
<tr><td class="subtext"><a href="item?id=2">1 comment</a></td></tr>
</table>"#;
    let page = extract(&IgnoreRules::default(), html);

    let titles: Vec<&str> = page.posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Unterminated", "Second"]);
    assert_eq!(page.posts[0].comments, None);
    assert_eq!(page.posts[1].rank.as_deref(), Some("2"));
}

#[test]
fn open_record_at_end_of_document_is_kept_only_with_a_title() {
    let with_title = r#"<td align="right" class="title"><span class="rank">1.</span></td><td class="title"><a href="https://a.example/">Truncated"#;
    let page = extract(&IgnoreRules::default(), with_title);
    assert_eq!(page.posts.len(), 1);
    assert_eq!(page.posts[0].title, "Truncated");

    let without_title = r#"<td align="right" class="title"><span class="rank">1.</span>"#;
    let page = extract(&IgnoreRules::default(), without_title);
    assert!(page.posts.is_empty());
}

#[test]
fn record_without_title_link_is_dropped_however_it_closes() {
    let html = r#"<table>
<tr><td align="right" class="title"><span class="rank">1.</span></td></tr>
<tr class="spacer"></tr>
<tr><td align="right" class="title"><span class="rank">2.</span></td></tr>
<tr><td align="right" class="title"><span class="rank">3.</span></td><td class="title"><a href="https://c.example/">Real</a></td></tr>
<tr><td class="subtext"><a href="item?id=3">5 comments</a></td></tr>
<tr><td align="right" class="title"><span class="rank">4.</span></td></tr>
<tr><td class="title"><a href="?p=2" class="morelink">More</a></td></tr>
</table>"#;
    let page = extract(&IgnoreRules::default(), html);

    assert_eq!(page.posts.len(), 1);
    assert_eq!(page.posts[0].rank.as_deref(), Some("3"));
    assert_eq!(page.posts[0].title, "Real");
    assert_eq!(page.next_page.as_deref(), Some("?p=2"));
}

#[test]
fn extraction_is_idempotent() {
    let rules = IgnoreRules::from_lines(NO_PATTERNS, ["^Ask HN"]);
    let extractor = PostExtractor::new(&rules, base());

    let first = extractor.extract(FRONT_PAGE);
    let second = extractor.extract(FRONT_PAGE);

    assert_eq!(first, second);
}
