use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use thiserror::Error;

use avr32_hex::{DEFAULT_BOOT_PIN, DEFAULT_LOAD_ADDRESS};

use super::parse_util::parse_number;
use crate::logging::LevelFilter;

#[derive(Debug, Parser)]
#[command(name = "avr32", version, about = "AT32UC3 image tooling: Intel HEX and user pages")]
pub struct Args {
    /// Log level; overrides RUST_LOG.
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LevelFilter>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a raw binary into Intel HEX.
    #[command(name = "makehex")]
    MakeHex(MakeHexArgs),
    /// Build a 512-byte user page holding a serial number and boot configuration word.
    #[command(name = "makeuser")]
    MakeUser(MakeUserArgs),
    /// Write a standalone 4-byte boot configuration word.
    #[command(name = "cfgword")]
    CfgWord(CfgWordArgs),
    /// Show the boot pin stored in a configuration word file.
    #[command(name = "parsecfg")]
    ParseCfg(ParseCfgArgs),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::MakeHex(_) => "makehex",
            Self::MakeUser(_) => "makeuser",
            Self::CfgWord(_) => "cfgword",
            Self::ParseCfg(_) => "parsecfg",
        }
    }
}

#[derive(Debug, ClapArgs)]
pub struct MakeHexArgs {
    /// Binary image to convert.
    pub binary: PathBuf,

    /// Output file; defaults to the binary path with a `.hex` extension.
    #[arg(short = 'o', long)]
    pub hex_file: Option<PathBuf>,

    /// Load address of the first byte.
    #[arg(short, long, default_value_t = DEFAULT_LOAD_ADDRESS, value_parser = parse_number)]
    pub address: u32,

    /// Data bytes per record (16 or 32).
    #[arg(short, long, default_value_t = 16)]
    pub columns: u8,

    /// Emit the 4-byte big-endian image length ahead of the data.
    #[arg(long)]
    pub prepend_size: bool,
}

#[derive(Debug, ClapArgs)]
pub struct MakeUserArgs {
    /// Serial number written at the start of the page.
    #[arg(short, long, default_value = "")]
    pub serial: String,

    /// Boot-select pin number.
    #[arg(short, long, default_value_t = DEFAULT_BOOT_PIN as u32, value_parser = parse_number)]
    pub pin: u32,

    /// Enter the bootloader when the pin is high instead of low.
    #[arg(long)]
    pub pin_high: bool,

    /// Leave the configuration word erased.
    #[arg(short, long, conflicts_with_all = ["pin", "pin_high"])]
    pub blank: bool,

    /// Output base name without extension; defaults to the serial number or `userpage`.
    #[arg(short, long)]
    pub file: Option<String>,

    /// Keep the intermediate `.bin` next to the `.hex`.
    #[arg(short, long)]
    pub keep_binary: bool,
}

#[derive(Debug, ClapArgs)]
pub struct CfgWordArgs {
    /// Boot-select pin number.
    #[arg(short, long, default_value_t = DEFAULT_BOOT_PIN as u32, value_parser = parse_number)]
    pub pin: u32,

    /// Enter the bootloader when the pin is high instead of low.
    #[arg(long)]
    pub pin_high: bool,

    #[arg(short, long, default_value = "ispcfg.bin")]
    pub output: PathBuf,
}

#[derive(Debug, ClapArgs)]
pub struct ParseCfgArgs {
    #[arg(default_value = "ispcfg.bin")]
    pub file: PathBuf,
}

#[derive(Debug, Error)]
pub enum ParseArgError {
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("value must not be negative: {0}")]
    Negative(String),
}
