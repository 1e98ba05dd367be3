//! HSOMNI CLI: command-line interface for the sector relationship network
//!
//! Loads sectors from the catalog API (or a JSON file), seeds a network and
//! prints one analytics report.

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::{ContentArrangement, Table};
use hsomni::analytics::export::csv_field;
use hsomni::graph::{RelationshipStore, SectorId};
use hsomni::{NetworkConfig, SectorClient, SectorNetwork, SectorSource};
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hsomni", version, about = "HSOMNI9000 sector network analytics")]
struct Cli {
    /// Catalog API base URL (overrides the config file)
    #[arg(long, global = true, env = "HSOMNI_URL")]
    url: Option<String>,

    /// Read sectors from a JSON file instead of the API
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for relationship generation (overrides the config file)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Clone, ValueEnum)]
enum ExportKind {
    Hierarchy,
    Matrix,
}

#[derive(Subcommand)]
enum Commands {
    /// Network statistics
    Stats,
    /// Strongest relationships
    Strongest {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Dependency map of one sector
    Deps {
        /// Sector id
        id: u64,
    },
    /// Influence leaderboard
    Influence {
        /// Defaults to the configured leaderboard size
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Sectors per hierarchy level
    Hierarchy,
    /// Strongest edges flagged by the critical path heuristic
    Critical,
    /// Export hierarchy JSON or matrix CSV
    Export {
        kind: ExportKind,
        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

/// Tabular report with its JSON twin
struct Report {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
    json: Value,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let network = build_network(cli).await?;

    let report = match &cli.command {
        Commands::Stats => stats_report(&network),
        Commands::Strongest { limit } => strongest_report(&network, *limit),
        Commands::Deps { id } => deps_report(&network, SectorId(*id))?,
        Commands::Influence { limit } => influence_report(&network, *limit),
        Commands::Hierarchy => hierarchy_report(&network),
        Commands::Critical => critical_report(&network),
        Commands::Export { kind, output } => {
            let data = match kind {
                ExportKind::Hierarchy => network.export_hierarchy_data()?,
                ExportKind::Matrix => network.export_matrix_data(),
            };
            return write_export(&data, output.as_ref());
        }
    };

    print_report(&report, &cli.format)
}

async fn build_network(cli: &Cli) -> anyhow::Result<SectorNetwork> {
    let mut config = match &cli.config {
        Some(path) => NetworkConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => NetworkConfig::default(),
    };
    if let Some(url) = &cli.url {
        config.source.base_url = url.clone();
    }
    if let Some(seed) = cli.seed {
        config.synergy.seed = Some(seed);
    }

    let source = match &cli.file {
        Some(path) => SectorSource::File(path.clone()),
        None => SectorSource::Remote(SectorClient::from_config(&config.source)?),
    };

    let mut network = SectorNetwork::new(config);
    network
        .initialize(&source)
        .await
        .with_context(|| format!("loading sectors from {}", source.describe()))?;
    Ok(network)
}

fn name_of(store: &RelationshipStore, id: SectorId) -> String {
    store
        .node(id)
        .map(|node| node.name.clone())
        .unwrap_or_else(|| format!("#{}", id))
}

fn stats_report(network: &SectorNetwork) -> Report {
    let stats = network.network_stats();
    let rows = vec![
        vec!["Sectors".to_string(), network.store().node_count().to_string()],
        vec!["Relationships".to_string(), stats.total_relationships.to_string()],
        vec!["Avg connections".to_string(), format!("{:.2}", stats.avg_connections)],
        vec!["Density".to_string(), format!("{:.2}%", stats.density)],
        vec!["Max connections".to_string(), stats.max_connections.to_string()],
        vec!["Isolated sectors".to_string(), stats.isolated_nodes.to_string()],
    ];

    Report {
        headers: vec!["Metric", "Value"],
        rows,
        json: json!(stats),
    }
}

fn strongest_report(network: &SectorNetwork, limit: usize) -> Report {
    let store = network.store();
    let edges = network.strongest_connections(limit);
    let rows = edges
        .iter()
        .map(|edge| {
            vec![
                name_of(store, edge.source_id),
                name_of(store, edge.target_id),
                format!("{:.3}", edge.strength),
                edge.relationship_type.to_string(),
                edge.bidirectional.to_string(),
                edge.description.clone(),
            ]
        })
        .collect();

    Report {
        headers: vec!["Source", "Target", "Strength", "Type", "Bidirectional", "Description"],
        rows,
        json: json!(edges),
    }
}

fn deps_report(network: &SectorNetwork, id: SectorId) -> anyhow::Result<Report> {
    let map = network
        .dependency_map(id)
        .ok_or_else(|| anyhow!("sector {} not found", id))?;

    let mut rows = Vec::new();
    let groups = [
        ("dependency", &map.dependencies),
        ("dependent", &map.dependents),
        ("parent", &map.parents),
        ("child", &map.children),
    ];
    for (relation, nodes) in groups {
        for node in nodes {
            rows.push(vec![
                relation.to_string(),
                node.id.to_string(),
                node.name.clone(),
                String::new(),
            ]);
        }
    }

    let store = network.store();
    let links = store.relationships_for(id);
    for edge in &links {
        if let Some(other) = edge.other_end(id) {
            rows.push(vec![
                edge.relationship_type.to_string(),
                other.to_string(),
                name_of(store, other),
                format!("{:.3}", edge.strength),
            ]);
        }
    }

    Ok(Report {
        headers: vec!["Relation", "Id", "Sector", "Strength"],
        rows,
        json: json!({ "map": map, "relationships": links }),
    })
}

fn influence_report(network: &SectorNetwork, limit: Option<usize>) -> Report {
    let ranking = match limit {
        Some(limit) => network.analytics().influence_ranking(limit),
        None => network.influence_ranking(),
    };
    let rows = ranking
        .iter()
        .enumerate()
        .map(|(rank, entry)| {
            vec![
                (rank + 1).to_string(),
                entry.node.name.clone(),
                format!("{:.1}", entry.score),
                entry.level.to_string(),
                entry.dependents.to_string(),
                entry.children.to_string(),
            ]
        })
        .collect();

    Report {
        headers: vec!["Rank", "Sector", "Score", "Level", "Dependents", "Children"],
        rows,
        json: json!(ranking),
    }
}

fn hierarchy_report(network: &SectorNetwork) -> Report {
    let store = network.store();
    let stats = network.hierarchy_stats();
    let levels = network.analytics().hierarchy_levels();

    let rows = stats
        .nodes_per_level
        .iter()
        .enumerate()
        .map(|(level, count)| {
            let names: Vec<String> = store
                .nodes()
                .filter(|node| levels.get(&node.id) == Some(&level))
                .map(|node| node.name.clone())
                .collect();
            vec![level.to_string(), count.to_string(), names.join(", ")]
        })
        .collect();

    Report {
        headers: vec!["Level", "Sectors", "Names"],
        rows,
        json: json!(stats),
    }
}

fn critical_report(network: &SectorNetwork) -> Report {
    let store = network.store();
    let paths = network.critical_paths();
    let rows = paths
        .iter()
        .map(|path| {
            vec![
                name_of(store, path.relationship.source_id),
                name_of(store, path.relationship.target_id),
                format!("{:.3}", path.relationship.strength),
                format!("{} -> {}", path.source_level, path.target_level),
                if path.critical { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();

    Report {
        headers: vec!["Source", "Target", "Strength", "Levels", "Critical"],
        rows,
        json: json!(paths),
    }
}

fn print_report(report: &Report, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report.json)?);
        }
        OutputFormat::Csv => {
            println!("{}", report.headers.join(","));
            for row in &report.rows {
                let cells: Vec<String> = row.iter().map(|v| csv_field(v)).collect();
                println!("{}", cells.join(","));
            }
        }
        OutputFormat::Table => {
            if report.rows.is_empty() {
                println!("(no results)");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(&report.headers);
            for row in &report.rows {
                table.add_row(row);
            }

            println!("{}", table);
            println!("{} row(s)", report.rows.len());
        }
    }

    Ok(())
}

fn write_export(data: &str, output: Option<&PathBuf>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, data).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = data.len(), "export written");
        }
        None => print!("{}", data),
    }
    Ok(())
}
