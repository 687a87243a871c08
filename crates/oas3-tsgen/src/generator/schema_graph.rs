use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;
use petgraph::{algo::kosaraju_scc, graphmap::DiGraphMap};

use crate::{
  openapi::{ComponentCategory, ObjectOrReference, Schema},
  utils::parse_component_ref,
};

/// Reference graph between named schemas: `schema_name -> schemas it references`.
#[derive(Debug, Default)]
pub(crate) struct SchemaGraph {
  dependencies: BTreeMap<String, BTreeSet<String>>,
}

impl SchemaGraph {
  pub(crate) fn build(schemas: &IndexMap<String, ObjectOrReference<Schema>>) -> Self {
    let dependencies = schemas
      .iter()
      .map(|(name, node)| {
        let mut deps = BTreeSet::new();
        collect_refs(node, &mut deps);
        (name.clone(), deps)
      })
      .collect();
    Self { dependencies }
  }

  /// Strongly connected groups of mutually recursive schemas, self-references included.
  ///
  /// Each cycle lists its members sorted; cycles are ordered by their first member.
  pub(crate) fn detect_cycles(&self) -> Vec<Vec<String>> {
    let mut graph = DiGraphMap::<&str, ()>::new();
    for (node, deps) in &self.dependencies {
      graph.add_node(node.as_str());
      for dep in deps {
        graph.add_edge(node.as_str(), dep.as_str(), ());
      }
    }

    let mut cycles: Vec<Vec<String>> = kosaraju_scc(&graph)
      .into_iter()
      .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
      .map(|scc| {
        let mut members: Vec<String> = scc.into_iter().map(String::from).collect();
        members.sort();
        members
      })
      .collect();
    cycles.sort();
    cycles
  }
}

fn collect_refs(node: &ObjectOrReference<Schema>, deps: &mut BTreeSet<String>) {
  let schema = match node {
    ObjectOrReference::Ref { ref_path } => {
      if let Some(parsed) = parse_component_ref(ref_path)
        && parsed.category == ComponentCategory::Schemas.to_string()
      {
        deps.insert(parsed.name);
      }
      return;
    }
    ObjectOrReference::Object(schema) => schema,
  };

  for property in schema.properties.iter().flat_map(IndexMap::values) {
    collect_refs(property, deps);
  }
  for member in schema.all_of.iter().chain(&schema.one_of).chain(&schema.any_of) {
    collect_refs(member, deps);
  }
  if let Some(items) = &schema.items {
    collect_refs(items, deps);
  }
}
