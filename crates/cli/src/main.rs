use anyhow::{Context, Result};
use cellgraph::prelude::*;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;
mod report;

use provenance::Provenance;
use report::{CellRow, ExtractReport, QueryReport};

#[derive(Parser)]
#[command(name = "cellgraph")]
#[command(about = "Extract and query planar cells of a projected graph")]
struct Cmd {
    /// Optional run tag; propagated to provenance and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Extract every cell and print (or write) a JSON report
    Extract {
        #[arg(long)]
        input: PathBuf,
        /// JSON file overriding any subset of the cell constraints
        #[arg(long)]
        constraints: Option<PathBuf>,
        /// Write the report here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Do not seed the session with the exterior face
        #[arg(long)]
        no_wrapper: bool,
        /// Drop soft-rejected cells from the report
        #[arg(long)]
        no_rejected: bool,
    },
    /// Report the face and cell containing a point
    Query {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        constraints: Option<PathBuf>,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Extract {
            input,
            constraints,
            out,
            no_wrapper,
            no_rejected,
        } => {
            let cfg = ExtractCfg {
                detect_wrapper: !no_wrapper,
                keep_rejected: !no_rejected,
            };
            extract(&input, constraints.as_deref(), out.as_deref(), cfg, cmd.tag)
        }
        Action::Query {
            input,
            constraints,
            x,
            y,
        } => query(&input, constraints.as_deref(), Vec2::new(x, y)),
        Action::Report => report(cmd.tag),
    }
}

fn extract(
    input: &Path,
    constraints: Option<&Path>,
    out: Option<&Path>,
    cfg: ExtractCfg,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(input = %input.display(), tag = ?tag, "extract");
    let loaded = input::load_graph(input)?;
    let points = loaded.points()?;
    let mut cons = input::load_constraints(constraints)?;
    let set = extract_cells(&loaded.graph, &points, &mut cons, cfg)?;
    let report = ExtractReport::new(&set);
    tracing::info!(
        accepted = report.accepted.len(),
        rejected = report.rejected.len(),
        faces = report.faces,
        "extracted"
    );

    let body = serde_json::to_vec_pretty(&report)?;
    let Some(out) = out else {
        println!("{}", String::from_utf8_lossy(&body));
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, body).with_context(|| format!("writing {}", out.display()))?;

    let params = serde_json::json!({
        "detect_wrapper": cfg.detect_wrapper,
        "keep_rejected": cfg.keep_rejected,
        "constraints": &cons,
    });
    let mut prov = Provenance::new(params, tag).input(input);
    if let Some(c) = constraints {
        prov = prov.input(c);
    }
    let sidecar = provenance::write_sidecar(out, prov)?;
    tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "wrote report");
    Ok(())
}

fn query(input: &Path, constraints: Option<&Path>, p: Vec2<f64>) -> Result<()> {
    let loaded = input::load_graph(input)?;
    let points = loaded.points()?;
    let mut cons = input::load_constraints(constraints)?;
    let set = extract_cells(&loaded.graph, &points, &mut cons, ExtractCfg::default())?;
    let face = set.face_at(&loaded.graph, &points, p);

    // Separate session: the extraction already claimed every cell hash.
    let walk_cons = input::load_constraints(constraints)?;
    let (walk, walk_cell) = find_cell_at(&loaded.graph, &points, p, &walk_cons)?;

    let report = QueryReport {
        point: [p.x, p.y],
        face,
        face_nodes: face.map(|f| set.faces.faces[f].nodes.clone()),
        cell: set.cell_at(p).map(|c| CellRow::from(c.as_ref())),
        walk: walk.as_str(),
        walk_cell: (walk.is_success() || walk.is_soft()).then(|| CellRow::from(&walk_cell)),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let prov = Provenance::new(serde_json::json!({}), tag);
    println!("{}", serde_json::to_string_pretty(&prov)?);
    Ok(())
}
