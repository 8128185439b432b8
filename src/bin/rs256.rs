//! Command-line Reed-Solomon encoder
//!
//! Computes the QR correction bytes for a message and prints them in hex,
//! or the full systematic codeword with `--codeword`.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use rs256::Encoder;

fn parse_args() -> clap::ArgMatches {
    Command::new("rs256")
        .version("0.1.0")
        .about("Compute QR Reed-Solomon correction bytes for a message")
        .arg(
            Arg::new("message")
                .help("Message bytes, as UTF-8 text (or hex with --hex)")
                .required(true),
        )
        .arg(
            Arg::new("correction-bytes")
                .short('k')
                .long("correction-bytes")
                .help("Number of correction bytes to compute")
                .value_parser(clap::value_parser!(usize))
                .default_value("10"),
        )
        .arg(
            Arg::new("hex")
                .long("hex")
                .help("Interpret the message argument as hex")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("codeword")
                .long("codeword")
                .help("Print the full codeword (message plus correction bytes)")
                .action(ArgAction::SetTrue),
        )
        .get_matches()
}

fn main() -> Result<()> {
    env_logger::init();
    let matches = parse_args();

    let message_arg = matches
        .get_one::<String>("message")
        .expect("message is required");
    let k = *matches
        .get_one::<usize>("correction-bytes")
        .expect("has a default value");

    let message: Vec<u8> = if matches.get_flag("hex") {
        hex::decode(message_arg).context("message is not valid hex")?
    } else {
        message_arg.as_bytes().to_vec()
    };

    let encoder = Encoder::new(k);
    if matches.get_flag("codeword") {
        let codeword = encoder.encode(&message)?;
        println!("{}", hex::encode(codeword));
    } else {
        let correction = encoder.correction_bytes(&message)?;
        println!("{}", hex::encode(&correction));
    }

    Ok(())
}
