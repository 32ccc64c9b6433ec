//! Association of block tags with the declaration elements they describe.
//!
//! Parameters and thrown types have no structural link to their
//! documentation; they are matched against `@param` and `@throws` tags by
//! name. All lookups return `Option`, an undocumented element is not an
//! error.

use crate::docs::{BlockTag, DocComment, TagKind};
use std::collections::HashMap;

/// Returns the first tag of `kind` in document order.
#[must_use]
pub fn first_of_kind(tags: &[BlockTag], kind: TagKind) -> Option<&BlockTag> {
    tags.iter().find(|tag| tag.kind() == kind)
}

/// Finds the description of parameter `param_name`.
///
/// Duplicate `@param` names resolve to the last one.
#[must_use]
pub fn match_param<'a>(tags: &'a [BlockTag], param_name: &str) -> Option<&'a str> {
    param_map(tags).get(param_name).copied()
}

/// Finds the description of the thrown type rendered as `thrown_name`.
///
/// Selects the first `@throws` key, in document order, that is a prefix of
/// either the qualified `thrown_name` or its simple name. Documentation
/// often writes `IOException` where the model has `java.io.IOException`.
/// The match is deliberately loose: a key of `Foo` matches both
/// `com.example.FooException` and `com.example.FooError`.
#[must_use]
pub fn match_throws<'a>(tags: &'a [BlockTag], thrown_name: &str) -> Option<&'a str> {
    prefix_lookup(&throws_entries(tags), thrown_name)
}

fn param_map(tags: &[BlockTag]) -> HashMap<&str, &str> {
    tags.iter()
        .filter_map(|tag| match tag {
            BlockTag::Param { name, description } if !name.trim().is_empty() => {
                Some((name.as_str(), description.as_str()))
            }
            _ => None,
        })
        .collect()
}

/// Builds `(exception key, description)` entries.
///
/// Keys keep the position of their first occurrence; a repeated key takes
/// the later description. Tags without a key are skipped.
fn throws_entries(tags: &[BlockTag]) -> Vec<(&str, &str)> {
    let mut entries: Vec<(&str, &str)> = Vec::new();
    for tag in tags {
        let BlockTag::Throws {
            exception,
            description,
        } = tag
        else {
            continue;
        };
        if exception.trim().is_empty() {
            continue;
        }
        match entries.iter_mut().find(|(key, _)| *key == exception.as_str()) {
            Some(entry) => entry.1 = description.as_str(),
            None => entries.push((exception.as_str(), description.as_str())),
        }
    }
    entries
}

fn prefix_lookup<'a>(entries: &[(&'a str, &'a str)], thrown_name: &str) -> Option<&'a str> {
    let simple = simple_name(thrown_name);
    entries
        .iter()
        .find(|(key, _)| thrown_name.starts_with(*key) || simple.starts_with(*key))
        .map(|(_, description)| *description)
}

/// Last dotted segment, with any array suffix kept.
fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

/// Tags of one comment, classified once for repeated lookups.
///
/// The serializer builds one matcher per documented declaration and queries
/// it for every parameter and thrown type.
#[derive(Debug, Default)]
pub struct TagMatcher<'a> {
    since: Option<&'a str>,
    returns: Option<&'a str>,
    see: Vec<&'a str>,
    params: HashMap<&'a str, &'a str>,
    throws: Vec<(&'a str, &'a str)>,
}

impl<'a> TagMatcher<'a> {
    /// Classifies the tags of `doc`.
    #[must_use]
    pub fn new(doc: &'a DocComment) -> Self {
        let tags = doc.tags.as_slice();
        Self {
            since: first_of_kind(tags, TagKind::Since).map(BlockTag::text),
            returns: first_of_kind(tags, TagKind::Return).map(BlockTag::text),
            see: tags
                .iter()
                .filter_map(|tag| match tag {
                    BlockTag::See(reference) => Some(reference.as_str()),
                    _ => None,
                })
                .collect(),
            params: param_map(tags),
            throws: throws_entries(tags),
        }
    }

    /// Builds a matcher for an optional comment; `None` yields an empty one.
    #[must_use]
    pub fn for_doc(doc: Option<&'a DocComment>) -> Self {
        doc.map(Self::new).unwrap_or_default()
    }

    /// Body of the first `@since` tag.
    #[must_use]
    pub fn since(&self) -> Option<&'a str> {
        self.since
    }

    /// Description of the first `@return` tag.
    #[must_use]
    pub fn returns(&self) -> Option<&'a str> {
        self.returns
    }

    /// All `@see` references in document order.
    #[must_use]
    pub fn see(&self) -> &[&'a str] {
        &self.see
    }

    /// See [`match_param`].
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&'a str> {
        self.params.get(name).copied()
    }

    /// See [`match_throws`].
    #[must_use]
    pub fn throws(&self, thrown_name: &str) -> Option<&'a str> {
        prefix_lookup(&self.throws, thrown_name)
    }
}
