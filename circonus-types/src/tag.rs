//! Circonus tags.

use std::collections::BTreeMap;
use std::fmt;

/// A `category:value` tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    pub category: String,
    pub value: String,
}

impl Tag {
    pub fn new(category: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            value: value.into(),
        }
    }

    /// Split a raw tag on its first `:`.
    ///
    /// A tag without a separator is a bare category with an empty value.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((category, value)) => Self::new(category, value),
            None => Self::new(raw, ""),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category, self.value)
    }
}

/// Map tag categories to values. Later tags override earlier ones.
pub fn tags_to_map<'a, I>(tags: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = &'a str>,
{
    tags.into_iter()
        .map(Tag::parse)
        .map(|t| (t.category, t.value))
        .collect()
}
