//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_account_cards, format_notification_list, format_transaction_list, StdoutRenderer,
};
