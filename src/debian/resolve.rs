//! Breadth-first dependency resolution over a [`PackageIndex`].

use std::collections::{HashSet, VecDeque};

use tracing::{debug, warn};

use super::relation::Relation;
use super::{IndexError, PackageIndex};

/// A package selected for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPackage {
    pub name: String,
    /// Path relative to the mirror root.
    pub filename: String,
}

/// Result of walking the dependency graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Packages in the order they were reached.
    pub packages: Vec<ResolvedPackage>,
    /// Names that are neither packages nor provided by one, first-seen order.
    pub missing: Vec<String>,
}

impl Resolution {
    /// Whether every requested name was found.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Download URL of every resolved package.
    pub fn urls(&self, mirror: &str) -> Vec<String> {
        let mirror = mirror.trim_end_matches('/');
        self.packages
            .iter()
            .map(|p| format!("{}/{}", mirror, p.filename.trim_start_matches('/')))
            .collect()
    }
}

/// Walks `Depends` (and optionally `Pre-Depends`) from a set of roots.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    index: &'a PackageIndex,
    follow_pre_depends: bool,
}

impl<'a> Resolver<'a> {
    pub fn new(index: &'a PackageIndex) -> Self {
        Self {
            index,
            follow_pre_depends: false,
        }
    }

    /// Also follow `Pre-Depends` edges.
    pub fn follow_pre_depends(mut self, follow: bool) -> Self {
        self.follow_pre_depends = follow;
        self
    }

    /// Compute the transitive closure of `roots`.
    ///
    /// Each package appears at most once in the result. Unknown names are
    /// reported in [`Resolution::missing`] rather than failing; a reached
    /// package without a `Filename` is an error.
    pub fn resolve<I, S>(&self, roots: I) -> Result<Resolution, IndexError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut queue: VecDeque<String> = roots
            .into_iter()
            .map(|name| self.choose(&[name.as_ref()]))
            .collect();
        let mut visited = HashSet::new();
        let mut missing_seen = HashSet::new();
        let mut resolution = Resolution::default();

        while let Some(name) = queue.pop_front() {
            if visited.contains(&name) {
                continue;
            }

            let Some(record) = self.index.get(&name) else {
                if missing_seen.insert(name.clone()) {
                    warn!(package = %name, "Package doesn't exist");
                    resolution.missing.push(name);
                }
                continue;
            };

            let filename = record.filename().ok_or_else(|| IndexError::MissingField {
                package: name.clone(),
                field: "Filename",
            })?;
            resolution.packages.push(ResolvedPackage {
                name: name.clone(),
                filename: filename.to_string(),
            });

            let mut relations = record.depends();
            if self.follow_pre_depends {
                relations.extend(record.pre_depends());
            }
            for relation in &relations {
                let next = self.choose_relation(relation);
                debug!(from = %name, to = %next, "dependency");
                queue.push_back(next);
            }

            visited.insert(name);
        }

        Ok(resolution)
    }

    fn choose_relation(&self, relation: &Relation) -> String {
        let alternatives: Vec<&str> = relation.alternatives().iter().map(String::as_str).collect();
        self.choose(&alternatives)
    }

    // Prefer a real package, then a provider of a virtual one, then the first
    // name so that it surfaces as missing.
    fn choose(&self, alternatives: &[&str]) -> String {
        if let Some(real) = alternatives.iter().find(|a| self.index.contains(a)) {
            return real.to_string();
        }
        if let Some(provider) = alternatives
            .iter()
            .find_map(|a| self.index.providers(a).first())
        {
            return provider.clone();
        }
        alternatives.first().map(|a| a.to_string()).unwrap_or_default()
    }
}
