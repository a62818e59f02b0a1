use anyhow::anyhow;
use anyhow::Result;
use clap::Parser;
use std::fs;
use std::io;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

/// Where values come from and how they are split up
#[derive(Parser)]
pub struct InputArgs {
    /// Values to process. If none are given, values are read from --input or stdin
    values: Vec<String>,

    /// Read values from this file ("-" for stdin)
    #[clap(short, long, parse(from_os_str))]
    input: Option<PathBuf>,

    /// Treat the entire input as a single value instead of one value per line
    #[clap(long)]
    whole: bool,
}

pub fn read_values(args: &InputArgs, mut cb: impl FnMut(&str, usize, &str) -> Result<()>) -> Result<()> {
    if !args.values.is_empty() {
        for (i, value) in args.values.iter().enumerate() {
            cb(&format!("<arg {}>", i + 1), 1, value)?;
        }
        return Ok(());
    }

    let (name, data) = match args.input.as_deref() {
        Some(p) if p != Path::new("-") => {
            let data = fs::read_to_string(p).map_err(|err| anyhow!("Unable to read '{}': {}", p.display(), err))?;
            (p.to_string_lossy().into_owned(), data)
        }
        _ => {
            let mut data = String::new();
            io::stdin().read_to_string(&mut data)?;
            ("<stdin>".to_owned(), data)
        }
    };
    tracing::debug!(source = %name, bytes = data.len(), "read input");

    if args.whole {
        let value = data
            .strip_suffix("\r\n")
            .or_else(|| data.strip_suffix('\n'))
            .unwrap_or(&data);
        cb(&name, 1, value)?;
    } else {
        for (line_no, line) in data.lines().enumerate() {
            cb(&name, line_no + 1, line)?;
        }
    }
    Ok(())
}
