//! `chcss`: check CSS class names against a project naming hierarchy.

use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
