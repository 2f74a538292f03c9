use crate::player::AppVariant;
use clap::{ArgAction, Parser};

/// podswitch - hop between podcast apps without losing your place 🎧
#[derive(Parser, Debug)]
#[command(name = "podswitch", version, about)]
pub struct Args {
    /// Apps to switch through, in order (defaults to `sequence` from config.toml)
    #[arg(value_enum)]
    pub apps: Vec<AppVariant>,

    /// Skip forward this many times after each switch
    #[arg(long, default_value_t = 0)]
    pub forward: u32,

    /// Rewind this many times after each switch
    #[arg(long, default_value_t = 0)]
    pub rewind: u32,

    /// Generate default config.toml to stdout
    #[arg(long)]
    pub generate_config: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
