//! In-memory model of a Debian `Packages` index.

use std::collections::HashMap;

use tracing::debug;

use super::relation::{parse_relations, Relation};

/// One stanza of a `Packages` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    name: String,
    fields: Vec<(String, String)>,
}

impl PackageRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of `field`, compared case-insensitively as control files require.
    pub fn field(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(field))
            .map(|(_, v)| v.as_str())
    }

    /// All fields in file order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn version(&self) -> Option<&str> {
        self.field("Version")
    }

    /// Path of the `.deb` relative to the mirror root.
    pub fn filename(&self) -> Option<&str> {
        self.field("Filename")
    }

    pub fn depends(&self) -> Vec<Relation> {
        self.relations("Depends")
    }

    pub fn pre_depends(&self) -> Vec<Relation> {
        self.relations("Pre-Depends")
    }

    /// Virtual package names this package provides.
    pub fn provides(&self) -> Vec<String> {
        self.relations("Provides")
            .into_iter()
            .flat_map(Relation::into_alternatives)
            .collect()
    }

    fn relations(&self, field: &str) -> Vec<Relation> {
        self.field(field).map(parse_relations).unwrap_or_default()
    }
}

/// Package records keyed by name.
#[derive(Debug, Clone, Default)]
pub struct PackageIndex {
    packages: HashMap<String, PackageRecord>,
    providers: HashMap<String, Vec<String>>,
}

impl PackageIndex {
    /// Parse the text of a `Packages` file.
    ///
    /// Never fails: stanzas without a `Package` field and lines that are
    /// neither `Field: value` nor continuations are skipped. When a package
    /// appears twice the later stanza wins.
    pub fn parse(text: &str) -> Self {
        let mut packages = HashMap::new();
        let mut fields: Vec<(String, String)> = Vec::new();

        for (lineno, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                finish_stanza(&mut fields, &mut packages);
                continue;
            }

            if line.starts_with(' ') || line.starts_with('\t') {
                match fields.last_mut() {
                    Some((_, value)) => {
                        value.push('\n');
                        value.push_str(line.trim());
                    }
                    None => debug!(line = lineno + 1, "continuation without a field"),
                }
                continue;
            }

            if line.starts_with('#') {
                continue;
            }

            match line.split_once(':') {
                Some((key, value)) => fields.push((key.trim().to_string(), value.trim().to_string())),
                None => debug!(line = lineno + 1, "skipping malformed line"),
            }
        }
        finish_stanza(&mut fields, &mut packages);

        let mut providers: HashMap<String, Vec<String>> = HashMap::new();
        for record in packages.values() {
            for virtual_name in record.provides() {
                providers
                    .entry(virtual_name)
                    .or_default()
                    .push(record.name.clone());
            }
        }
        for names in providers.values_mut() {
            names.sort_unstable();
            names.dedup();
        }

        debug!(packages = packages.len(), virtual_packages = providers.len(), "parsed package index");
        Self {
            packages,
            providers,
        }
    }

    pub fn get(&self, name: &str) -> Option<&PackageRecord> {
        self.packages.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Real packages providing the virtual package `name`, sorted by name.
    pub fn providers(&self, name: &str) -> &[String] {
        self.providers.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

fn finish_stanza(fields: &mut Vec<(String, String)>, packages: &mut HashMap<String, PackageRecord>) {
    if fields.is_empty() {
        return;
    }
    let fields = std::mem::take(fields);
    let name = fields
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("Package"))
        .map(|(_, v)| v.clone());

    match name {
        Some(name) if !name.is_empty() => {
            packages.insert(name.clone(), PackageRecord { name, fields });
        }
        _ => debug!("skipping stanza without a Package field"),
    }
}
