use clap::{Args, Parser, Subcommand};
use podflow::prelude::*;
use std::fs;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Convert pod pipelines to positioned graphs and back
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the positioned graph of a pipeline as JSON
    Graph(ConvertArgs),
    /// Import a pipeline and export it again as `!Flow` text
    Roundtrip(ConvertArgs),
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// Path to the pipeline YAML file
    path: String,

    /// Property schema JSON (defaults to the built-in pod schema)
    #[arg(long)]
    schema: Option<String>,

    /// Horizontal spacing between columns
    #[arg(long)]
    spacing_x: Option<i64>,

    /// Vertical spacing between rows
    #[arg(long)]
    spacing_y: Option<i64>,

    /// Reject non-numeric saved canvas coordinates instead of re-laying them out
    #[arg(long)]
    strict_canvas: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "podflow=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let result = match cli.cmd {
        Commands::Graph(args) => run_graph(&args),
        Commands::Roundtrip(args) => run_roundtrip(&args),
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => exit_with_error(&e.to_string()),
    }
}

fn run_graph(args: &ConvertArgs) -> Result<String> {
    let converter = build_converter(args)?;
    let graph = converter.import_text(&read_file(&args.path)?)?;
    tracing::info!(
        nodes = graph.nodes.len(),
        links = graph.links.len(),
        "Graph built from '{}'",
        args.path
    );
    Ok(serde_json::to_string_pretty(&graph)?)
}

fn run_roundtrip(args: &ConvertArgs) -> Result<String> {
    let converter = build_converter(args)?;
    let graph = converter.import_text(&read_file(&args.path)?)?;
    Ok(converter.export_text(&graph)?)
}

fn build_converter(args: &ConvertArgs) -> Result<FlowConverter> {
    let mut builder = FlowConverter::builder();
    if let Some(schema_path) = &args.schema {
        builder = builder.with_property_types(PropertyTypes::from_json_str(&read_file(schema_path)?)?);
    }

    let defaults = LayoutSpacing::default();
    let spacing = LayoutSpacing {
        x: args.spacing_x.unwrap_or(defaults.x),
        y: args.spacing_y.unwrap_or(defaults.y),
    };
    let policy = if args.strict_canvas {
        CanvasPolicy::Strict
    } else {
        CanvasPolicy::Lenient
    };

    Ok(builder.with_spacing(spacing).with_canvas_policy(policy).build())
}

fn read_file(path: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| format!("Could not read '{}': {}", path, e).into())
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
