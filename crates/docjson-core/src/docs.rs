//! Documentation comments and their block tags.
//!
//! Block tags are classified into [`BlockTag`] variants when the comment is
//! parsed, so consumers match on the variant instead of filtering a mixed
//! collection by a kind string.

use std::fmt;

/// A documentation comment attached to one declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocComment {
    /// Full body text before the first block tag, inline tags kept verbatim.
    pub summary: String,
    /// Block tags in document order.
    pub tags: Vec<BlockTag>,
}

impl DocComment {
    /// Creates a comment with the given summary and no block tags.
    #[must_use]
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            tags: Vec::new(),
        }
    }

    /// Appends a block tag.
    #[must_use]
    pub fn with_tag(mut self, tag: BlockTag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Parses raw comment text. See [`parse`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        parse(raw)
    }
}

/// The kind discriminator of a [`BlockTag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// `@since`
    Since,
    /// `@see`
    See,
    /// `@param`
    Param,
    /// `@throws` / `@exception`
    Throws,
    /// `@return`
    Return,
    /// Any other block tag.
    Other,
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Since => "since",
            Self::See => "see",
            Self::Param => "param",
            Self::Throws => "throws",
            Self::Return => "return",
            Self::Other => "other",
        };
        f.write_str(s)
    }
}

/// A classified block tag with its kind-specific payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockTag {
    /// `@since <body>`
    Since(String),
    /// `@see <reference>`
    See(String),
    /// `@param <name> <description>`
    Param {
        /// Parameter name as written.
        name: String,
        /// Description text.
        description: String,
    },
    /// `@throws <exception> <description>`
    Throws {
        /// Exception signature as written, simple or qualified.
        exception: String,
        /// Description text.
        description: String,
    },
    /// `@return <description>`
    Return(String),
    /// Block tags that are carried but never emitted (`@author`, `@deprecated`, ...).
    Other {
        /// Tag name without the leading `@`.
        name: String,
        /// Raw body text.
        body: String,
    },
}

impl BlockTag {
    /// Creates a `@param` tag.
    #[must_use]
    pub fn param(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Param {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Creates a `@throws` tag.
    #[must_use]
    pub fn throws(exception: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Throws {
            exception: exception.into(),
            description: description.into(),
        }
    }

    /// Returns the kind discriminator.
    #[must_use]
    pub fn kind(&self) -> TagKind {
        match self {
            Self::Since(_) => TagKind::Since,
            Self::See(_) => TagKind::See,
            Self::Param { .. } => TagKind::Param,
            Self::Throws { .. } => TagKind::Throws,
            Self::Return(_) => TagKind::Return,
            Self::Other { .. } => TagKind::Other,
        }
    }

    /// Returns the free-text part of the tag.
    ///
    /// For `@param` and `@throws` this is the description after the key.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Since(text) | Self::See(text) | Self::Return(text) => text,
            Self::Param { description, .. } | Self::Throws { description, .. } => description,
            Self::Other { body, .. } => body,
        }
    }

    fn classify(name: &str, body: String) -> Self {
        match name {
            "since" => Self::Since(body),
            "see" => Self::See(body),
            "return" => Self::Return(body),
            "param" => {
                let (key, rest) = split_key(&body);
                Self::param(key, rest)
            }
            "throws" | "exception" => {
                let (key, rest) = split_key(&body);
                Self::throws(key, rest)
            }
            other => Self::Other {
                name: other.to_string(),
                body,
            },
        }
    }
}

/// Splits off the first whitespace-delimited word.
fn split_key(body: &str) -> (&str, &str) {
    let body = body.trim_start();
    match body.find(char::is_whitespace) {
        Some(idx) => (&body[..idx], body[idx..].trim()),
        None => (body, ""),
    }
}

/// Parses raw documentation comment text into a [`DocComment`].
///
/// Accepts text with or without the `/** ... */` delimiters and strips the
/// leading `*` gutter of each line. The summary runs until the first line
/// that starts with `@name`; each block tag then runs until the next one.
///
/// ```
/// use docjson_core::{BlockTag, DocComment};
///
/// let doc = DocComment::parse("/**\n * Adds.\n * @param a left\n * @return sum\n */");
/// assert_eq!(doc.summary, "Adds.");
/// assert_eq!(doc.tags[0], BlockTag::param("a", "left"));
/// assert_eq!(doc.tags[1], BlockTag::Return("sum".into()));
/// ```
#[must_use]
pub fn parse(raw: &str) -> DocComment {
    let text = raw.trim();
    let text = text.strip_prefix("/**").unwrap_or(text);
    let text = text.strip_suffix("*/").unwrap_or(text);

    let mut summary: Vec<&str> = Vec::new();
    let mut sections: Vec<(&str, Vec<&str>)> = Vec::new();

    for line in text.lines().map(strip_gutter) {
        if let Some((name, rest)) = block_tag_start(line) {
            sections.push((name, vec![rest]));
        } else if let Some((_, lines)) = sections.last_mut() {
            lines.push(line);
        } else {
            summary.push(line);
        }
    }

    DocComment {
        summary: join_lines(&summary),
        tags: sections
            .into_iter()
            .map(|(name, lines)| BlockTag::classify(name, join_lines(&lines)))
            .collect(),
    }
}

fn strip_gutter(line: &str) -> &str {
    let line = line.trim_start();
    let line = line.trim_start_matches('*');
    line.strip_prefix(' ').unwrap_or(line)
}

/// Returns `(tag name, remainder)` if the line opens a block tag.
fn block_tag_start(line: &str) -> Option<(&str, &str)> {
    let rest = line.trim_start().strip_prefix('@')?;
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '.'))
        .unwrap_or(rest.len());
    if end == 0 || !rest.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    Some((&rest[..end], rest[end..].trim_start()))
}

fn join_lines(lines: &[&str]) -> String {
    lines.join("\n").trim().to_string()
}
