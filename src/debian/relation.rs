//! Parsing of relationship fields (`Depends`, `Pre-Depends`, `Provides`).

/// One comma-separated group of a relationship field.
///
/// `libc6 (>= 2.24) | libc6.1` has two alternatives; any one satisfies the
/// group. Only package names are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    alternatives: Vec<String>,
}

impl Relation {
    /// A group of alternatives; `None` when `alternatives` is empty.
    pub fn new(alternatives: Vec<String>) -> Option<Self> {
        (!alternatives.is_empty()).then_some(Self { alternatives })
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    pub fn into_alternatives(self) -> Vec<String> {
        self.alternatives
    }

    /// The alternative listed first.
    pub fn first(&self) -> &str {
        self.alternatives.first().map(String::as_str).unwrap_or_default()
    }
}

/// Parse a relationship field value into groups.
///
/// Version constraints (`(>= 1.0)`), architecture restrictions (`[armhf]`),
/// build profiles (`<!nocheck>`) and architecture qualifiers (`:any`) are
/// dropped. Empty groups are skipped, so the result never contains a
/// relation without alternatives.
pub fn parse_relations(value: &str) -> Vec<Relation> {
    value
        .split(',')
        .filter_map(|group| {
            let alternatives: Vec<String> = group
                .split('|')
                .filter_map(package_name)
                .map(str::to_string)
                .collect();
            Relation::new(alternatives)
        })
        .collect()
}

fn package_name(alternative: &str) -> Option<&str> {
    let token = alternative
        .trim()
        .split(|c: char| c.is_whitespace() || matches!(c, '(' | '[' | '<'))
        .next()?;
    let name = token.split(':').next()?;
    (!name.is_empty()).then_some(name)
}
