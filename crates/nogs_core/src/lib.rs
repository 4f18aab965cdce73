//! Boggle Nogs core: token stream, post extraction and page rendering.
//!
//! Everything in this crate is synchronous and free of IO; the engine crate
//! feeds it already-fetched markup and the app crate serves what it renders.
mod extract;
mod ignore;
mod post;
mod render;
mod route;
mod token;

pub use extract::PostExtractor;
pub use ignore::IgnoreRules;
pub use post::{
    Page, Post, ScanOutcome, SCORE_NOT_FOUND, SITE_NOT_FOUND, TITLE_NOT_FOUND,
};
pub use render::{render_page, PageTemplate};
pub use route::Route;
pub use token::{Cursor, Tag, Token, TokenStream};
