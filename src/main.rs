use anyhow::{Context, Result};
use citypaths::{cities, Graph, QueueKind};
use clap::Parser;
use csv::Writer;
use std::io::Write;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "citypaths")]
#[command(about = "Run Dijkstra over the sample city graph from a source city and print every shortest route.", long_about = None)]
struct Cli {
    /// Source city, e.g. Brasilia
    city: String,

    #[arg(short, long, value_enum, default_value_t = QueueKind::Lazy)]
    queue: QueueKind,

    /// Output CSV (destination, minutes, path). If omitted, prints a report to stdout.
    #[arg(short, long)]
    out: Option<String>,

    /// Include unreachable cities in the CSV with infinite time
    #[arg(long, default_value_t = false)]
    include_unreachable: bool,

    /// Print the adjacency list before the report
    #[arg(long, default_value_t = false)]
    show_graph: bool,
}

/// `dst <- ... <- src`, or `None` if `dst` was not reached.
fn route(graph: &Graph, id: usize) -> Option<String> {
    let path = graph.path_to(id);
    if path.is_empty() {
        return None;
    }
    let names: Vec<&str> = path
        .iter()
        .rev()
        .filter_map(|&n| graph.node(n).map(|node| node.name()))
        .collect();
    Some(names.join(" <- "))
}

fn print_report(graph: &Graph, source: &str, out: &mut impl Write) -> Result<()> {
    for (id, node) in graph.nodes().enumerate() {
        match route(graph, id) {
            Some(route) => {
                writeln!(
                    out,
                    "Shortest time from {} to {} is {} minutes",
                    source, node, node.distance
                )?;
                writeln!(out, "{}", route)?;
            }
            None => writeln!(out, "No path from {} to {}", source, node)?,
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_csv(graph: &Graph, out_path: &str, include_unreachable: bool) -> Result<usize> {
    let mut wtr =
        Writer::from_path(out_path).with_context(|| format!("creating CSV {}", out_path))?;
    wtr.write_record(["destination", "minutes", "path"])?;
    let mut written = 0;
    for (id, node) in graph.nodes().enumerate() {
        let row = match route(graph, id) {
            Some(route) => [node.name().to_string(), node.distance.to_string(), route],
            None if include_unreachable => {
                [node.name().to_string(), String::from("inf"), String::new()]
            }
            None => continue,
        };
        wtr.write_record(&row)?;
        written += 1;
    }
    wtr.flush()?;
    Ok(written)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut graph = cities::build_graph().context("building city graph")?;
    info!(nodes = graph.len(), edges = graph.edge_count(), "graph ready");

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    if cli.show_graph {
        write!(stdout, "{}", graph)?;
        writeln!(stdout)?;
    }

    let now = Instant::now();
    let tree = graph
        .shortest_paths(&cli.city, cli.queue)
        .with_context(|| format!("running shortest paths from {}", cli.city))?;
    info!(
        elapsed_s = now.elapsed().as_secs_f64(),
        reachable = tree.reachable_count(),
        queue = ?cli.queue,
        "shortest paths done"
    );

    if let Some(out_path) = cli.out {
        let written = write_csv(&graph, &out_path, cli.include_unreachable)?;
        writeln!(stdout, "Wrote routes for {} cities to {}", written, out_path)?;
    } else {
        print_report(&graph, &cli.city, &mut stdout)?;
    }

    Ok(())
}
