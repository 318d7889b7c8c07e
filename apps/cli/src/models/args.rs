//! # CLI Argument Definitions
//!
//! Every page command takes the full landing URL, exactly as the marketplace redirect
//! delivered it.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "fulfill")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Drive the marketplace fulfillment page from the terminal")]
pub struct Cli {
    /// Config file (TOML, JSON or YAML). Defaults to `fulfill.*` in the working directory.
    #[arg(long, short, global = true, env = "FULFILL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter directives, overriding `logging.level` (e.g. `fulfill_flow=debug`).
    #[arg(long, global = true)]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show which section the landing URL selects
    Inspect {
        /// Landing URL including its query string
        url: Url,
    },
    /// Submit the DNS selection form
    Submit {
        url: Url,
        #[command(flatten)]
        form: FormArgs,
    },
    /// Register the marketplace subscription with the backend
    Register { url: Url },
    /// Check that the backend endpoint answers
    Health {},
    /// Run the form validators without contacting the backend
    Validate {
        #[command(subcommand)]
        target: ValidateTarget,
    },
    /// Print the portal address a DNS name would get
    Preview {
        /// DNS name as typed; empty shows the placeholder
        #[arg(default_value = "")]
        dns_name: String,
    },
}

#[derive(Debug, Args)]
pub struct FormArgs {
    /// Administrator email
    #[arg(long)]
    pub email: String,
    /// Portal DNS name
    #[arg(long = "dns")]
    pub dns_name: String,
}

#[derive(Debug, Subcommand)]
pub enum ValidateTarget {
    Email { value: String },
    Dns { value: String },
    /// Both fields, in form order
    Form {
        #[command(flatten)]
        form: FormArgs,
    },
}
