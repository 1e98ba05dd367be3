//! Hierarchy (JSON) and matrix (CSV) exports for the dashboard

use super::hierarchy::HierarchyStats;
use super::NetworkAnalytics;
use crate::error::NetworkResult;
use crate::graph::{NetworkStats, SectorId, SectorRelationship, SectorTier};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HierarchyExport<'a> {
    exported_at: String,
    stats: &'a NetworkStats,
    hierarchy: HierarchyStats,
    nodes: Vec<HierarchyNode<'a>>,
    relationships: Vec<&'a SectorRelationship>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HierarchyNode<'a> {
    id: SectorId,
    name: &'a str,
    tier: SectorTier,
    level: usize,
    connections: usize,
    parents: &'a [SectorId],
    children: &'a [SectorId],
    influence: f64,
}

/// Pretty-printed JSON with every node's place in the hierarchy
pub fn export_hierarchy_data(analytics: &NetworkAnalytics<'_>) -> NetworkResult<String> {
    let store = analytics.store();
    let hierarchy = analytics.hierarchy();

    let nodes = store
        .nodes()
        .map(|node| HierarchyNode {
            id: node.id,
            name: &node.name,
            tier: node.tier,
            level: hierarchy.level(node.id),
            connections: node.connections,
            parents: hierarchy.parents(node.id),
            children: hierarchy.children(node.id),
            influence: analytics.influence_of(&hierarchy, node),
        })
        .collect();

    let export = HierarchyExport {
        exported_at: chrono::Utc::now().to_rfc3339(),
        stats: store.stats(),
        hierarchy: hierarchy.stats(),
        nodes,
        relationships: store.relationships().collect(),
    };

    Ok(serde_json::to_string_pretty(&export)?)
}

/// Square CSV grid of strengths.
///
/// Header row is `Sector` followed by every node name; each row starts with
/// the row node's name. Cells hold `matrix[row][column]` to three decimals,
/// or nothing when no edge exists in that direction.
pub fn export_matrix_data(analytics: &NetworkAnalytics<'_>) -> String {
    let store = analytics.store();
    let matrix = store.matrix();
    let nodes: Vec<_> = store.nodes().collect();

    let mut lines = Vec::with_capacity(nodes.len() + 1);

    let mut header = vec!["Sector".to_string()];
    header.extend(nodes.iter().map(|node| csv_field(&node.name)));
    lines.push(header.join(","));

    for row in &nodes {
        let mut cells = vec![csv_field(&row.name)];
        cells.extend(nodes.iter().map(|column| {
            matrix
                .get(row.id, column.id)
                .map(|cell| format!("{:.3}", cell.strength))
                .unwrap_or_default()
        }));
        lines.push(cells.join(","));
    }

    let mut csv = lines.join("\n");
    csv.push('\n');
    csv
}

/// Quote a CSV field when it holds a comma, a quote or a newline
pub fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
