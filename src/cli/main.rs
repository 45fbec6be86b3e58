#![warn(clippy::all, clippy::pedantic)]
use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Parser;
use csv::{Reader, Writer};
use log::LevelFilter;
use maxflow::{compute_max_flow, CapacityMatrix};
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Deserialize;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Compute the maximum flow between two vertices of a capacity graph.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// CSV edge list with a from,to,capacity header row
    input: PathBuf,
    /// Source vertex identifier
    #[arg(long)]
    source: usize,
    /// Sink vertex identifier
    #[arg(long)]
    sink: usize,
    /// Also write the result as CSV to this path
    #[arg(long)]
    output: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Debug, Deserialize)]
struct RawEdge {
    from: usize,
    to: usize,
    capacity: i64,
}

// Function to read the capacity edge list from a CSV file
fn read_edges_csv(filepath: &Path) -> Result<Vec<RawEdge>, Box<dyn Error>> {
    let mut rdr = Reader::from_path(filepath)?;
    let rows: Result<Vec<_>, _> = rdr.deserialize().collect();
    Ok(rows?)
}

// Vertex identifiers double as node indices, so every vertex up to the
// largest mentioned one is materialized even when it carries no edge.
fn build_matrix(
    edges: &[RawEdge],
    source: usize,
    sink: usize,
) -> Result<CapacityMatrix<i64>, maxflow::Error> {
    let dim = edges
        .iter()
        .flat_map(|e| [e.from, e.to])
        .chain([source, sink])
        .max()
        .map_or(0, |v| v + 1);

    let mut graph = DiGraph::<(), i64>::with_capacity(dim, edges.len());
    for _ in 0..dim {
        graph.add_node(());
    }
    for e in edges {
        graph.add_edge(NodeIndex::new(e.from), NodeIndex::new(e.to), e.capacity);
    }

    CapacityMatrix::from_graph(&graph)
}

// Function to write the computed flow
fn write_csv(
    source: usize,
    sink: usize,
    flow: i64,
    filepath: &Path,
) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(filepath)?;
    wtr.write_record(["source", "sink", "max_flow"])?;
    wtr.write_record([source.to_string(), sink.to_string(), flow.to_string()])?;
    wtr.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let edges = read_edges_csv(&args.input)?;
    let graph = build_matrix(&edges, args.source, args.sink)?;
    log::info!(
        "{} edges over {} vertices read from {}",
        edges.len(),
        graph.dim(),
        args.input.display()
    );

    let flow = compute_max_flow(&graph, args.source, args.sink)?;
    log::info!("max flow from {} to {} = {flow}", args.source, args.sink);
    println!("{flow}");

    if let Some(output) = &args.output {
        write_csv(args.source, args.sink, flow, output)?;
    }

    Ok(())
}
