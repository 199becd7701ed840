//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "minibank")]
#[command(about = "Demo banking ledger with persistent local state", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new ledger
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Show the account cards
    Accounts,

    /// Show the statement, newest first
    Transactions {
        /// Maximum number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show notifications with the unread badge count
    Notifications {
        /// Only show unread entries
        #[arg(short, long)]
        unread: bool,
    },

    /// Move money out of an account
    Transfer {
        /// Source account key
        from: String,

        /// Destination account key (ignored for external transfers)
        to: String,

        /// Amount to transfer
        amount: String,

        /// Statement description
        #[arg(short, long)]
        description: Option<String>,

        /// Send outside this ledger instead of to another account
        #[arg(long)]
        external: bool,

        /// Display name of an external recipient
        #[arg(long)]
        recipient: Option<String>,
    },

    /// Deposit money into an account
    Deposit {
        /// Destination account key
        to: String,

        /// Amount to deposit
        amount: String,

        /// Statement description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Replace an account balance directly
    SetBalance {
        /// Account key
        key: String,

        /// New balance
        amount: String,
    },

    /// Mark notifications as read
    Read {
        /// Notification id to mark as read
        id: Option<u64>,

        /// Mark every notification as read
        #[arg(short, long)]
        all: bool,
    },

    /// Periodically refresh relative-time labels and re-render
    Watch {
        /// Refresh period in seconds (default: the configured value)
        #[arg(short, long)]
        interval: Option<u64>,

        /// Stop after this many refreshes (default: run until interrupted)
        #[arg(long)]
        iterations: Option<u64>,
    },
}
