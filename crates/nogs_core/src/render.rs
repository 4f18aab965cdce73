use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::post::{Page, Post};

/// Header and footer fragments wrapped around every rendered listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageTemplate {
    pub head: String,
    pub foot: String,
}

/// Render a simplified listing page. Site and pagination links point back
/// at the proxy; title and comment links go straight to their targets.
pub fn render_page(template: &PageTemplate, page: &Page) -> String {
    let mut out = String::with_capacity(template.head.len() + template.foot.len() + 512);
    out.push_str(&template.head);
    out.push_str("<h1><a class=\"title\" href=\"/\">Boggle Nogs</a></h1>\n");
    out.push_str("<div class=\"posts\">\n");
    for post in &page.posts {
        render_post(&mut out, post);
    }
    out.push_str("</div>\n");
    if let Some(next) = &page.next_page {
        let _ = writeln!(
            out,
            "<a class=\"black\" href=\"/{}\">more</a>",
            attr(next)
        );
    }
    out.push_str(&template.foot);
    out
}

fn render_post(out: &mut String, post: &Post) {
    let _ = writeln!(
        out,
        "<div class=\"left\"><span class=\"grey\">{}</span></div>",
        text(post.rank.as_deref().unwrap_or_default())
    );
    out.push_str("<div class=\"right\">\n");
    let _ = write!(
        out,
        "<a class=\"black\" href=\"{}\">{}</a>",
        attr(&post.title_link),
        text(&post.title)
    );
    if let (Some(site), Some(site_link)) = (&post.site, &post.site_link) {
        let _ = write!(
            out,
            " <span class=\"grey\">(</span><a class=\"grey\" href=\"/{}\">{}</a><span class=\"grey\">)</span>",
            attr(site_link),
            text(site)
        );
    }
    out.push_str("\n<br>\n");
    if let Some(score) = &post.score {
        let _ = writeln!(out, "<span class=\"grey\">{}</span>", text(score));
    }
    if let (Some(comments), Some(link)) = (&post.comments, &post.comments_link) {
        let _ = writeln!(
            out,
            "<a class=\"grey\" href=\"{}\">{}</a>",
            attr(link),
            text(comments)
        );
    }
    out.push_str("</div>\n");
}
