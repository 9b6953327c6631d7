use clap::{Parser, Subcommand};
use decision_tree_engine::{TreeEngine, TreeFormat};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "decision-tree-engine")]
#[command(version = "0.1.0")]
#[command(about = "Normalize decision tree dumps into a canonical indexable tree", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load an indented-text MLPDT dump
    Mlpdt {
        /// Path to the dump file
        #[arg(short, long)]
        file: PathBuf,

        #[command(flatten)]
        options: LoadOptions,
    },

    /// Load a Graphviz digraph dump
    Graphviz {
        /// Path to the dump file
        #[arg(short, long)]
        file: PathBuf,

        #[command(flatten)]
        options: LoadOptions,
    },

    /// Load a structured JSON tree document
    Json {
        /// Path to the document file
        #[arg(short, long)]
        file: PathBuf,

        #[command(flatten)]
        options: LoadOptions,
    },
}

#[derive(clap::Args)]
struct LoadOptions {
    /// Assign palette colors to class leaves
    #[arg(short, long)]
    colors: bool,

    /// Print the normalized node table
    #[arg(short, long)]
    show: bool,

    /// Export the tree as a JSON document to this path
    #[arg(short, long)]
    export: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (format, file, options) = match cli.command {
        Commands::Mlpdt { file, options } => (TreeFormat::Mlpdt, file, options),
        Commands::Graphviz { file, options } => (TreeFormat::Graphviz, file, options),
        Commands::Json { file, options } => (TreeFormat::Json, file, options),
    };

    let content = fs::read_to_string(&file)?;
    let mut engine = TreeEngine::new();
    engine.load(format, &content)?;

    let summary = engine.summary();
    println!(
        "Loaded {} tree with {} nodes ({} leaves, max depth {})",
        format.as_str(),
        summary.node_count,
        summary.leaf_count,
        summary.max_depth
    );

    if options.colors {
        let colored = engine.assign_colors();
        println!("Assigned colors to {} class leaves", colored);
    }

    if options.show {
        print_nodes(&engine);
    }

    if let Some(path) = options.export {
        engine.export_to_file(&path)?;
        println!("Exported tree to {}", path.display());
    }

    Ok(())
}

fn print_nodes(engine: &TreeEngine) {
    println!("\n{:<8} {:<6} {:<6} {:<14} label", "id", "depth", "leaf", "color");
    for node in engine.nodes() {
        println!(
            "{:<8} {:<6} {:<6} {:<14} {}",
            node.id,
            node.depth,
            node.is_leaf,
            node.color_name.as_deref().unwrap_or("-"),
            node.label.replace('\n', " | ")
        );
    }
}
