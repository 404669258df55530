//! CLI definitions for the docuvault shell.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// DocuVault document management client
#[derive(Parser, Debug)]
#[command(name = "docuvault")]
#[command(about = "Browse and manage DocuVault documents from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Backend base URL (API lives under /api/v1)
    #[arg(long, env = "DOCUVAULT_URL", global = true)]
    pub url: Option<String>,

    /// Path of the persisted session file
    #[arg(long, env = "DOCUVAULT_SESSION_PATH", global = true)]
    pub session: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an account and sign in
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long, env = "DOCUVAULT_PASSWORD")]
        password: String,

        /// Repeat of the password; defaults to the password itself
        #[arg(long)]
        password_confirmation: Option<String>,

        /// Department id
        #[arg(long)]
        department: String,

        /// Role: employee or manager
        #[arg(long)]
        role: String,
    },

    /// Sign in with existing credentials
    Login {
        #[arg(long)]
        email: String,

        #[arg(long, env = "DOCUVAULT_PASSWORD")]
        password: String,
    },

    /// Sign out and clear the local session
    Logout,

    /// Show the current session state
    Status,

    /// Show the dashboard summary tiles
    Dashboard,

    /// List documents, optionally filtered
    List {
        /// Title search term
        #[arg(long)]
        search: Option<String>,

        /// Category id filter
        #[arg(long)]
        category: Option<String>,

        /// Department id filter
        #[arg(long)]
        department: Option<String>,
    },

    /// Show one document's details
    Show { id: String },

    /// Upload a new document
    Upload {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: Option<String>,

        /// Category id
        #[arg(long)]
        category: String,

        /// Department id; ignored for managers, who upload to their own
        #[arg(long)]
        department: Option<String>,

        /// Access level: public, department or private
        #[arg(long)]
        access_level: String,

        /// File to upload
        #[arg(long)]
        file: PathBuf,
    },

    /// Edit a document's metadata
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Category id
        #[arg(long)]
        category: Option<String>,

        /// Access level: public, department or private
        #[arg(long)]
        access_level: Option<String>,
    },

    /// Delete a document
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Download a document's file
    Download {
        id: String,

        /// Directory to write the file into
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}
