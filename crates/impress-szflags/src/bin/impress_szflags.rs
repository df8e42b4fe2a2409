//! impress-szflags CLI
//!
//! Inspect engine option masks from the command line.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use impress_szflags::{
    all_presets, bootstrap, parse_flags_mask, FlagsConfig, SzFlagUsageGroup,
};

#[derive(Parser)]
#[command(name = "impress-szflags", about = "Inspect engine option flags and masks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a mask (hex, or a flag expression) with symbolic names
    Format {
        /// Mask as `0x...` hex or a `|`-separated flag expression
        mask: String,
        /// Usage group whose names to prefer, e.g. SZ_SEARCH_FLAGS
        #[arg(short, long)]
        group: Option<String>,
    },
    /// List the flags a usage group recognizes
    Group {
        /// Usage group name; lists every group when omitted
        name: Option<String>,
    },
    /// List the named presets
    Presets,
    /// Check a JSON flags configuration file
    Check {
        path: std::path::PathBuf,
    },
}

fn parse_group(name: &str) -> Result<SzFlagUsageGroup, Box<dyn std::error::Error>> {
    SzFlagUsageGroup::from_name(name).ok_or_else(|| format!("unknown usage group: {}", name).into())
}

fn parse_mask(input: &str) -> Result<u64, Box<dyn std::error::Error>> {
    if let Some(hex) = input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) {
        return Ok(u64::from_str_radix(hex, 16)?);
    }
    if let Ok(decimal) = input.parse::<u64>() {
        return Ok(decimal);
    }
    Ok(parse_flags_mask(input)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    bootstrap::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Format { mask, group } => {
            let mask = parse_mask(&mask)?;
            let group = group.as_deref().map(parse_group).transpose()?;
            println!("{}", impress_szflags::format_mask(mask, group));
        }
        Command::Group { name } => {
            let groups = match name {
                Some(name) => vec![parse_group(&name)?],
                None => SzFlagUsageGroup::ALL.to_vec(),
            };
            for group in groups {
                println!("{}", group);
                for flag in group.flags() {
                    let preferred = flag
                        .bit_index()
                        .and_then(|bit| group.flag_for_bit(bit))
                        .map_or(false, |canonical| canonical == flag);
                    let marker = if preferred { "" } else { " (alias)" };
                    println!("  {:016X}  {}{}", flag.value(), flag, marker);
                }
            }
        }
        Command::Presets => {
            for (name, flags) in all_presets() {
                println!("{:<45} {}", name, flags);
            }
        }
        Command::Check { path } => {
            let json = std::fs::read_to_string(&path)?;
            let config = FlagsConfig::from_json(&json)?;
            config.validate()?;
            for group in config.groups.keys() {
                println!("{}", group.format_mask(config.mask_for(*group)));
            }
        }
    }

    Ok(())
}
