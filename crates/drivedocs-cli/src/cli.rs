use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "drivedocs")]
#[command(version, about = "DriveDocs - driver document panel for fleet telematics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Platform server host (e.g. my.fleet.example)
    #[arg(long, global = true, env = "DRIVEDOCS_SERVER")]
    pub server: Option<String>,

    /// Database name
    #[arg(long, global = true, env = "DRIVEDOCS_DATABASE")]
    pub database: Option<String>,

    /// Platform session id
    #[arg(long, global = true, env = "DRIVEDOCS_SESSION_ID")]
    pub session_id: Option<String>,

    /// Driver user name
    #[arg(long, global = true, env = "DRIVEDOCS_USERNAME")]
    pub username: Option<String>,

    /// Selected vehicle id; omit when driving without a vehicle
    #[arg(long, global = true, env = "DRIVEDOCS_DEVICE")]
    pub device: Option<String>,

    /// Base URL of the document endpoints
    #[arg(long, global = true, env = "DRIVEDOCS_DOCS_URL")]
    pub docs_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show the resolved session context (driver, vehicle, trailers, groups)
    Context,

    /// Document operations
    Files {
        #[command(subcommand)]
        command: FilesCommands,
    },

    /// End-user license agreement gate
    Eula {
        #[command(subcommand)]
        command: EulaCommands,
    },

    /// Show per-database configuration
    Config,
}

#[derive(Subcommand)]
pub enum FilesCommands {
    /// List documents in a filterable, paginated table
    List(ListArgs),

    /// Show one document's details and owners
    Show {
        /// Document id or exact file name
        id: String,
    },

    /// Download a document
    Download {
        /// Document id or exact file name
        id: String,

        /// Directory to save into
        #[arg(long, default_value = ".")]
        output: PathBuf,
    },

    /// Resolve a document to a preview URL
    Open {
        /// Document id or exact file name
        id: String,
    },

    /// Resolve a document to a raw signed URL
    Url {
        /// Document id or exact file name
        id: String,
    },
}

#[derive(Args)]
pub struct ListArgs {
    /// Search over all columns
    #[arg(long)]
    pub filter: Option<String>,

    /// Substring filter on the file-name column
    #[arg(long)]
    pub name_filter: Option<String>,

    /// Substring filter on the associated-with column
    #[arg(long)]
    pub associated_filter: Option<String>,

    /// Substring filter on the expiry column (e.g. "Expired")
    #[arg(long)]
    pub expiry_filter: Option<String>,

    /// Ranked search on the file-name column
    #[arg(long)]
    pub fuzzy: Option<String>,

    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (10, 20, 30, 40 or 50)
    #[arg(long, default_value_t = drivedocs_core::DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
}

#[derive(Subcommand)]
pub enum EulaCommands {
    /// Check whether the agreement has been accepted
    Status,

    /// Accept the agreement
    Accept,

    /// Decline the agreement and leave
    Decline,
}
