use crate::export::ExportFormat;
use crate::models::RegisterType;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rSignin
/// Reception sign-in register for colleagues and visitors, stored in SQLite
#[derive(Parser)]
#[command(
    name = "rsignin",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reception sign-in register: colleagues and visitors in a local SQLite file",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Search criteria shared by `find` and `export`.
#[derive(Args, Debug, Clone)]
pub struct FindArgs {
    /// Register to search
    #[arg(long = "type", value_enum, default_value = "colleagues")]
    pub register: RegisterType,

    /// Exact date (e.g. 15/03/2024)
    #[arg(long)]
    pub date: Option<String>,

    /// Month (e.g. 03/2024), matched as a substring of the date
    #[arg(long)]
    pub month: Option<String>,

    /// First name contains
    #[arg(long = "first")]
    pub first_name: Option<String>,

    /// Last name contains
    #[arg(long = "last")]
    pub last_name: Option<String>,

    /// Exact card number (colleagues only)
    #[arg(long)]
    pub card: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StatusArg {
    Returned,
    NotReturned,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database file
    Db {
        #[arg(long = "migrate", help = "Create missing tables and indexes")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Sign someone in
    Add {
        first_name: String,

        last_name: String,

        #[arg(long = "type", value_enum, default_value = "colleagues")]
        register: RegisterType,

        /// Temporary card handed out (colleagues)
        #[arg(long, default_value = "")]
        card: String,

        /// Sign-in date (default: today)
        #[arg(long)]
        date: Option<String>,

        /// Sign-in time (default: now)
        #[arg(long)]
        hour: Option<String>,

        #[arg(long)]
        note: Option<String>,
    },

    /// List today's and yesterday's sign-ins
    List {
        #[arg(long = "type", value_enum, default_value = "colleagues")]
        register: RegisterType,

        /// List the whole register instead of the last two days
        #[arg(long)]
        all: bool,

        /// Print the raw notification as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search the register
    Find {
        #[command(flatten)]
        filter: FindArgs,

        /// Print the raw notification as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mark a card as returned
    Returned {
        id: i64,

        #[arg(long)]
        note: Option<String>,
    },

    /// Mark a card as not returned
    NotReturned {
        id: i64,

        #[arg(long)]
        note: Option<String>,
    },

    /// Replace the note of an entry
    Note {
        id: i64,

        text: String,

        /// Also set the return status (default: keep the current one)
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
    },

    /// Delete one entry by id
    Del {
        id: i64,

        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Delete every entry of both registers
    Clear {
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Delete entries dated in the month N months ago (N from config, default 6)
    Purge {
        /// Purge this month (e.g. 04/2026) instead of the computed one
        #[arg(long)]
        month: Option<String>,

        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Export a register or a search result
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        filter: FindArgs,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Serve JSON-lines requests on stdin, notifications on stdout
    Serve,
}
