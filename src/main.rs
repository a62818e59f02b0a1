mod decode_main;
mod encode_main;
mod file_input_util;
mod file_output_util;
mod logging;

use clap::{Parser, Subcommand};

use decode_main::decoder_main;
use decode_main::DecoderCli;
use encode_main::encoder_main;
use encode_main::EncoderCli;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Log more details to stderr (repeat for more)
    #[clap(short, long, parse(from_occurrences), global = true)]
    verbose: u64,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Quote values so a POSIX shell reads them back unchanged
    Encode(EncoderCli),
    /// Remove shell quoting and resolve backslash escapes
    Decode(DecoderCli),
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let res = match cli.command {
        Command::Encode(cli) => encoder_main(cli),
        Command::Decode(cli) => decoder_main(cli),
    };
    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
        // set exit code 1 if there were errors
        std::process::exit(1);
    }
}
