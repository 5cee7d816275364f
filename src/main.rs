use log::{error, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use burrows::compression::compress::compress;
use burrows::compression::decompress::decompress;
use burrows::tools::cli::{bwopts_init, Mode};

fn main() {
    let opts = bwopts_init();

    TermLogger::init(
        opts.level,
        Config::default(),
        TerminalMode::Stdout,
        ColorChoice::Auto,
    )
    .expect("logger initialization can only run once");

    let result = match opts.op_mode {
        Mode::Zip => compress(&opts),
        Mode::Unzip => decompress(&opts),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
    info!("Done.");
}
