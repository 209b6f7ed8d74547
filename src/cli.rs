use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Datasource Configuration Sync Tool
///
/// Provision and synchronize custom datasource records against an
/// enterprise-search indexing API: push a local configuration to
/// create-or-update the remote record, or pull a remote record back into
/// editable local files.
#[derive(Parser, Debug)]
#[command(name = "dsctl")]
#[command(about, long_about = None, version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Answer yes to all prompts (implies overwriting existing records)
    #[arg(long, global = true)]
    pub yes: bool,

    /// Base directory for config files and default-named icons (default: .)
    #[arg(long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Use a specific env file instead of <dir>/.env
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create or update the remote datasource from the local configuration
    Push {
        /// Overwrite an existing remote record without confirmation
        #[arg(long)]
        force: bool,
    },

    /// Fetch a remote datasource record and optionally export it locally
    Pull {
        /// ID of the datasource to fetch
        id: String,

        /// Export the configuration to <id>-config/
        #[arg(long)]
        save: bool,

        /// Directory to export into (default: the base directory)
        #[arg(long, value_name = "PATH", requires = "save")]
        out: Option<PathBuf>,
    },

    /// Generate a sample configuration file
    Template {
        /// Which file to generate
        #[arg(value_enum)]
        kind: TemplateKind,
    },

    /// List usable datasource categories
    Categories,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum TemplateKind {
    /// Sample object_types.json
    ObjectTypes,
    /// Sample quick_links.json
    QuickLinks,
    /// Sample env file with every supported key
    Env,
}
