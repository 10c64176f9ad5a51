//! Reconciliation of remote graphs against the catalog.

use std::collections::HashMap;

use circonus_types::{GraphTemplate, RemoteGraph};

/// What has to happen to bring the remote graph set in line with a catalog.
#[derive(Debug, Default)]
pub struct GraphPlan<'a> {
    /// Templates with no remote instance, in catalog order.
    pub create: Vec<&'a GraphTemplate>,

    /// Templates paired with their existing remote instance, in catalog order.
    pub update: Vec<(&'a GraphTemplate, RemoteGraph)>,

    /// Managed graphs with no place in the catalog, keyed by their tag value.
    pub delete: Vec<(String, RemoteGraph)>,
}

impl GraphPlan<'_> {
    pub fn is_empty(&self) -> bool {
        self.create.is_empty() && self.update.is_empty() && self.delete.is_empty()
    }

    /// Total number of API calls the plan needs.
    pub fn len(&self) -> usize {
        self.create.len() + self.update.len() + self.delete.len()
    }
}

/// Sort `remote` graphs into create/update/delete buckets.
///
/// A remote graph belongs to a template when its `tag_category` tag has the
/// template's key as value. The first graph claiming a key is updated; any
/// further graph with the same key is a duplicate and is deleted along with
/// graphs whose key is unknown or empty.
pub fn plan_graphs<'a>(
    catalog: &'a [GraphTemplate],
    remote: Vec<RemoteGraph>,
    tag_category: &str,
) -> GraphPlan<'a> {
    let mut claimed: HashMap<&'a str, RemoteGraph> = HashMap::new();
    let mut delete = Vec::new();

    for graph in remote {
        let key = graph.tag_value(tag_category).unwrap_or_default();
        match catalog.iter().find(|t| t.key == key) {
            Some(template) if !claimed.contains_key(template.key) => {
                claimed.insert(template.key, graph);
            }
            _ => delete.push((key, graph)),
        }
    }

    let mut create = Vec::new();
    let mut update = Vec::new();
    for template in catalog {
        match claimed.remove(template.key) {
            Some(graph) => update.push((template, graph)),
            None => create.push(template),
        }
    }

    GraphPlan {
        create,
        update,
        delete,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Map;

    use super::*;
    use crate::circonus::catalog::GRAPHS;

    fn remote(cid: &str, tags: &[&str]) -> RemoteGraph {
        RemoteGraph {
            cid: cid.to_string(),
            title: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            extra: Map::new(),
        }
    }

    fn keys<'a>(templates: impl IntoIterator<Item = &'a GraphTemplate>) -> Vec<&'static str> {
        templates.into_iter().map(|t| t.key).collect()
    }

    #[test]
    fn test_fresh_account_creates_everything() {
        let plan = plan_graphs(GRAPHS, vec![], "goestools");
        assert_eq!(
            keys(plan.create.iter().copied()),
            vec!["viterbi", "viterbi_and_drops", "reed_solomon", "demodulator"]
        );
        assert!(plan.update.is_empty());
        assert!(plan.delete.is_empty());
        assert_eq!(plan.len(), 4);
    }

    #[test]
    fn test_mixed_remote_state() {
        let plan = plan_graphs(
            GRAPHS,
            vec![
                remote("/graph/1", &["goestools:reed_solomon"]),
                remote("/graph/2", &["goestools:retired_graph"]),
                remote("/graph/3", &["team:ops", "goestools:viterbi"]),
            ],
            "goestools",
        );

        assert_eq!(
            keys(plan.create.iter().copied()),
            vec!["viterbi_and_drops", "demodulator"]
        );

        let updated: Vec<_> = plan
            .update
            .iter()
            .map(|(t, g)| (t.key, g.cid.as_str()))
            .collect();
        assert_eq!(updated, vec![("viterbi", "/graph/3"), ("reed_solomon", "/graph/1")]);

        assert_eq!(plan.delete.len(), 1);
        assert_eq!(plan.delete[0].0, "retired_graph");
        assert_eq!(plan.delete[0].1.cid, "/graph/2");
    }

    #[test]
    fn test_duplicates_and_untagged_are_deleted() {
        let plan = plan_graphs(
            GRAPHS,
            vec![
                remote("/graph/a", &["goestools:viterbi"]),
                remote("/graph/b", &["goestools:viterbi"]),
                remote("/graph/c", &["goestools"]),
                remote("/graph/d", &["goestools:old"]),
                remote("/graph/e", &["goestools:old"]),
            ],
            "goestools",
        );

        assert_eq!(plan.update.len(), 1);
        assert_eq!(plan.update[0].1.cid, "/graph/a");

        let deleted: Vec<_> = plan.delete.iter().map(|(_, g)| g.cid.as_str()).collect();
        assert_eq!(deleted, vec!["/graph/b", "/graph/c", "/graph/d", "/graph/e"]);
        assert_eq!(plan.delete[1].0, "");
    }

    #[test]
    fn test_every_template_is_covered_exactly_once() {
        let plan = plan_graphs(
            GRAPHS,
            vec![
                remote("/graph/1", &["goestools:demodulator"]),
                remote("/graph/2", &["goestools:demodulator"]),
            ],
            "goestools",
        );

        let mut covered = keys(plan.create.iter().copied());
        covered.extend(plan.update.iter().map(|(t, _)| t.key));
        covered.sort_unstable();

        let mut expected = keys(GRAPHS);
        expected.sort_unstable();
        assert_eq!(covered, expected);
    }

    #[test]
    fn test_other_tag_category() {
        let plan = plan_graphs(
            GRAPHS,
            vec![remote("/graph/1", &["goestools:viterbi", "lab:viterbi"])],
            "lab",
        );
        assert_eq!(plan.update.len(), 1);
        assert_eq!(plan.create.len(), 3);
    }
}
