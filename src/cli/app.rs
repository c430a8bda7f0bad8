use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "pddl")]
#[command(about = "Phoenix schema extraction toolkit")]
#[command(version)]
pub struct Cli {
    /// Control colored output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Write output to a file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Show informational log messages on stderr (honours RUST_LOG)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all log messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reconstruct the DDL of a table, view or index
    Extract {
        /// Table, view or index name (e.g. table1)
        #[arg(short = 't', long)]
        table: String,

        /// Schema name (e.g. schema1)
        #[arg(short = 's', long)]
        schema: Option<String>,

        /// Write the schema hierarchy tree as JSON to this file instead of printing DDL
        #[arg(long = "tree-file")]
        tree_file: Option<String>,

        /// Path to the catalog snapshot (JSON)
        #[arg(short = 'c', long)]
        catalog: String,

        /// Connection settings file (default: ~/.pddl.properties, /etc/pddl/pddl.properties)
        #[arg(long)]
        config: Option<String>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
