//! CLI entry point for the `kgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use kingraph::cli::commands;
use kingraph::cli::OutputFormat;
use kingraph::graph::{Relation, VertexFilter};

#[derive(Parser)]
#[command(
    name = "kgraph",
    about = "kingraph CLI: relational queries over directed edge lists"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display vertex and edge counts of an edge list
    Info {
        /// Path to the edge-list file ("-" for stdin)
        file: PathBuf,
    },
    /// Show a vertex and its direct successors
    Show {
        /// Path to the edge-list file ("-" for stdin)
        file: PathBuf,
        /// Vertex name
        name: String,
    },
    /// Vertices two outgoing hops away
    Grandparents {
        /// Path to the edge-list file ("-" for stdin)
        file: PathBuf,
        /// Vertex name
        name: String,
    },
    /// Other successors of the vertex's successors
    Siblings {
        /// Path to the edge-list file ("-" for stdin)
        file: PathBuf,
        /// Vertex name
        name: String,
    },
    /// Successors of the vertex's siblings
    Cousins {
        /// Path to the edge-list file ("-" for stdin)
        file: PathBuf,
        /// Vertex name
        name: String,
    },
    /// Run the relational query named on the command line
    Query {
        /// Path to the edge-list file ("-" for stdin)
        file: PathBuf,
        /// Relation: grandparents, siblings or cousins
        #[arg(value_parser = commands::parse_relation)]
        relation: Relation,
        /// Vertex name
        name: String,
    },
    /// List vertices matching all given criteria
    Filter {
        /// Path to the edge-list file ("-" for stdin)
        file: PathBuf,
        /// Accept this name (repeatable)
        #[arg(long = "name")]
        names: Vec<String>,
        /// Accept names with this prefix
        #[arg(long)]
        prefix: Option<String>,
        /// Minimum out-degree
        #[arg(long)]
        min_degree: Option<usize>,
        /// Maximum out-degree
        #[arg(long)]
        max_degree: Option<usize>,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let format = cli.format;
    let mut out = std::io::stdout().lock();

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, format, &mut out),
        Commands::Show { file, name } => commands::cmd_show(&file, &name, format, &mut out),
        Commands::Grandparents { file, name } => {
            commands::cmd_relation(&file, Relation::Grandparents, &name, format, &mut out)
        }
        Commands::Siblings { file, name } => {
            commands::cmd_relation(&file, Relation::Siblings, &name, format, &mut out)
        }
        Commands::Cousins { file, name } => {
            commands::cmd_relation(&file, Relation::Cousins, &name, format, &mut out)
        }
        Commands::Query {
            file,
            relation,
            name,
        } => commands::cmd_relation(&file, relation, &name, format, &mut out),
        Commands::Filter {
            file,
            names,
            prefix,
            min_degree,
            max_degree,
        } => {
            let filter = VertexFilter {
                names: names.into_iter().collect(),
                prefix,
                min_out_degree: min_degree,
                max_out_degree: max_degree,
            };
            commands::cmd_filter(&file, &filter, format, &mut out)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
