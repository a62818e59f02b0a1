use anyhow::bail;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::file_input_util;
use crate::file_input_util::InputArgs;
use crate::file_output_util::Writer;

#[derive(Parser)]
pub struct DecoderCli {
    #[clap(flatten)]
    input: InputArgs,

    /// Write results here instead of stdout
    #[clap(short, long, parse(from_os_str))]
    out: Option<PathBuf>,

    /// Report every malformed value instead of stopping at the first one
    #[clap(short, long)]
    keep_going: bool,
}

pub fn decoder_main(cli: DecoderCli) -> Result<()> {
    let mut writer = Writer::new(cli.out.as_deref())?;
    let mut count = 0;
    let mut error_count = 0;

    file_input_util::read_values(&cli.input, |name, line, value| {
        let decoded = match shquote::decode(value) {
            Ok(v) => v,
            Err(err) => {
                err.display_from_line(name, value, line);
                error_count += 1;
                if cli.keep_going {
                    return Ok(());
                }
                bail!("Stopping after first malformed value");
            }
        };
        writer.write_line(&decoded)?;
        count += 1;
        Ok(())
    })?;
    writer.finish()?;
    tracing::info!(count, errors = error_count, "decoded values");

    if error_count > 0 {
        bail!("Finished with {} errors", error_count);
    }
    Ok(())
}
