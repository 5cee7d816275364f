use std::fmt::{Display, Formatter};

use clap::Parser;
use log::LevelFilter;

/// Zip or Unzip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Options resolved from the command line.
#[derive(Debug)]
pub struct BwOpts {
    /// Name of the file to read for input
    pub file: String,
    /// Compress or expand
    pub op_mode: Mode,
    /// Log level derived from the -v count
    pub level: LevelFilter,
}

/// Command line interpretation - uses the external clap crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "A block-sorting file compressor",
    long_about = None)]
struct Args {
    /// Filename of the file to process
    filename: String,

    /// Compress the input file into <filename>.burrows (the default)
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Expand the input file, stripping its last suffix
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Sets verbosity. -v shows stage summaries, -vvv is chatty
    #[clap(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Parse the command line into a BwOpts struct.
pub fn bwopts_init() -> BwOpts {
    let args = Args::parse();

    let op_mode = if args.decompress {
        Mode::Unzip
    } else {
        Mode::Zip
    };
    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    BwOpts {
        file: args.filename,
        op_mode,
        level,
    }
}
