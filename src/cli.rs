//! Command line arguments backing the `snaptext` binary.
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use snaptext::overlay::JoinOrder;

#[derive(Parser, Debug)]
#[command(
    name = "snaptext",
    about = "Tap recognized text regions on an image and print the selection",
    version
)]
pub struct Args {
    /// JSON file with the recognized regions
    #[arg(long, short = 'r')]
    pub regions: PathBuf,

    /// Image to draw the overlay on (blank canvas when omitted)
    #[arg(long, short = 'i')]
    pub image: Option<PathBuf>,

    /// Canvas width when no image is given
    #[arg(long, default_value = "800")]
    pub width: u32,

    /// Canvas height when no image is given
    #[arg(long, default_value = "600")]
    pub height: u32,

    /// Press at X,Y; repeat to replay several taps in order
    #[arg(long, short = 't', value_parser = parse_tap)]
    pub tap: Vec<(f32, f32)>,

    /// Order of words in the selected text (overrides config)
    #[arg(long, short = 'j', value_enum)]
    pub join: Option<JoinArg>,

    /// Write the rendered overlay as PNG
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Config file to use instead of the user config
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinArg {
    /// Region sequence order
    Region,
    /// Tap order
    Selection,
}

impl From<JoinArg> for JoinOrder {
    fn from(arg: JoinArg) -> Self {
        match arg {
            JoinArg::Region => JoinOrder::RegionOrder,
            JoinArg::Selection => JoinOrder::SelectionOrder,
        }
    }
}

fn parse_tap(s: &str) -> Result<(f32, f32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", s))?;
    let x = x
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("bad x in '{}': {}", s, e))?;
    let y = y
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("bad y in '{}': {}", s, e))?;
    Ok((x, y))
}
