//! ncurses-shim CLI
//!
//! Prints the constants extracted from the installed ncurses headers.

use anyhow::Result;
use clap::Parser;
use ncurses_shim::{Group, build_info, table};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ncurses-shim")]
#[command(version, about = "Show ncurses constants as built against the local headers", long_about = None)]
struct Cli {
    /// Print a single constant by name (e.g. KEY_F1)
    #[arg(value_name = "NAME")]
    name: Option<String>,

    /// Only list one group (attr, status, limit, key)
    #[arg(short, long)]
    group: Option<Group>,

    /// Print values in hexadecimal
    #[arg(long)]
    hex: bool,

    /// Show which header was used instead of the constants
    #[arg(long)]
    info: bool,
}

fn format_value(value: i64, hex: bool) -> String {
    if hex && value >= 0 {
        format!("{:#x}", value)
    } else {
        value.to_string()
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.info {
        let info = build_info();
        println!("header: {}", info.header);
        println!("wide:   {}", info.wide);
        println!("probe:  {}", info.probe);
        return Ok(());
    }

    if let Some(name) = &cli.name {
        let c = table::lookup(name)?;
        println!("{} = {}", c.name, format_value(c.value, cli.hex));
        return Ok(());
    }

    let consts: Vec<_> = match cli.group {
        Some(group) => table::in_group(group).collect(),
        None => table::all().collect(),
    };
    tracing::debug!(count = consts.len(), "listing constants");
    for c in consts {
        println!(
            "{:<8} {} = {}",
            c.group,
            c.name,
            format_value(c.value, cli.hex)
        );
    }

    Ok(())
}
