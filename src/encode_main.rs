use anyhow::bail;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::file_input_util;
use crate::file_input_util::InputArgs;
use crate::file_output_util::Writer;

#[derive(Parser)]
pub struct EncoderCli {
    #[clap(flatten)]
    input: InputArgs,

    /// Write results here instead of stdout
    #[clap(short, long, parse(from_os_str))]
    out: Option<PathBuf>,

    /// Decode every result again and fail if it doesn't reproduce the input
    #[clap(short, long)]
    roundtrip: bool,
}

pub fn encoder_main(cli: EncoderCli) -> Result<()> {
    let mut writer = Writer::new(cli.out.as_deref())?;
    let mut count = 0;
    let mut error_count = 0;
    let mut buf = String::new();

    file_input_util::read_values(&cli.input, |name, line, value| {
        buf.clear();
        shquote::encode_to(&mut buf, value);

        if cli.roundtrip {
            match shquote::decode(&buf) {
                Ok(decoded) if decoded == value => {}
                Ok(decoded) => {
                    eprintln!("{}:{}: roundtrip mismatch: {:?} decoded to {:?}", name, line, value, decoded);
                    error_count += 1;
                }
                Err(err) => {
                    eprintln!("{}:{}: roundtrip failed: {}", name, line, err);
                    err.display_from_line(name, &buf, line);
                    error_count += 1;
                }
            }
        }

        writer.write_line(&buf)?;
        count += 1;
        Ok(())
    })?;
    writer.finish()?;
    tracing::info!(count, "encoded values");

    if error_count > 0 {
        bail!("Finished with {} errors", error_count);
    }
    Ok(())
}
