//! Command-line arguments.

use clap::Parser;

/// Conduit command-line client.
#[derive(Parser, Debug)]
#[command(name = "conduit")]
#[command(about = "Browse a Conduit blog from the terminal")]
#[command(version)]
pub struct Args {
    /// Address to open, e.g. `/author/jane?favorited`.
    #[arg(long, value_name = "URL", default_value = "/")]
    pub url: String,

    /// Jump to this page of the list, keeping the other filters.
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub page: Option<u32>,

    /// Also show the comments of this article.
    #[arg(short, long, value_name = "SLUG")]
    pub comments: Option<String>,

    /// API base URL; overrides settings and environment.
    #[arg(long, value_name = "URL")]
    pub api: Option<String>,
}
