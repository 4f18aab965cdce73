use html5gum::{DefaultEmitter, Tokenizer};
use nogs_logging::nogs_trace;

/// A start tag with its lower-cased name and decoded attribute values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    attrs: Vec<(String, String)>,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// True when `class` is one of the whitespace-separated class names.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|value| value.split_ascii_whitespace().any(|c| c == class))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    StartTag(Tag),
    EndTag(String),
    Text(String),
    /// Input exhausted. Returned forever once reached.
    End,
}

/// Lazy, forward-only token sequence over a markup buffer.
///
/// Comments and doctypes are dropped; tokenizer parse errors are recoverable
/// and only traced. To rescan, build a new stream over the same buffer.
pub struct TokenStream<'a> {
    inner: Box<dyn Iterator<Item = html5gum::Token> + 'a>,
    finished: bool,
}

impl<'a> TokenStream<'a> {
    pub fn new(html: &'a str) -> Self {
        let mut emitter = DefaultEmitter::default();
        // keep <script>/<style> bodies out of the tag stream
        emitter.naively_switch_states(true);
        let inner = Tokenizer::new_with_emitter(html, emitter).flatten();
        Self {
            inner: Box::new(inner),
            finished: false,
        }
    }

    pub fn next_token(&mut self) -> Token {
        if self.finished {
            return Token::End;
        }
        for raw in self.inner.by_ref() {
            match raw {
                html5gum::Token::StartTag(tag) => {
                    let attrs = tag
                        .attributes
                        .iter()
                        .map(|(key, value)| (lossy(key), lossy(value)))
                        .collect();
                    return Token::StartTag(Tag {
                        name: lossy(&tag.name),
                        attrs,
                    });
                }
                html5gum::Token::EndTag(tag) => return Token::EndTag(lossy(&tag.name)),
                html5gum::Token::String(text) => return Token::Text(lossy(&text)),
                html5gum::Token::Error(err) => nogs_trace!("Recoverable markup error: {:?}", err),
                _ => {}
            }
        }
        self.finished = true;
        Token::End
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.next_token() {
            Token::End => None,
            token => Some(token),
        }
    }
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// One-token lookahead over a [`TokenStream`].
pub struct Cursor<'a> {
    stream: TokenStream<'a>,
    peeked: Option<Token>,
}

impl<'a> Cursor<'a> {
    pub fn new(html: &'a str) -> Self {
        Self {
            stream: TokenStream::new(html),
            peeked: None,
        }
    }

    pub fn peek(&mut self) -> &Token {
        self.peeked.get_or_insert_with(|| self.stream.next_token())
    }

    pub fn advance(&mut self) -> Token {
        self.peeked
            .take()
            .unwrap_or_else(|| self.stream.next_token())
    }
}
