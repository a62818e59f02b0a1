use anyhow::anyhow;
use anyhow::Result;
use std::fs;
use std::io;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

pub enum Writer {
    Stdout(io::Stdout),
    File(BufWriter<fs::File>),
}
impl Writer {
    pub fn new(p: Option<&Path>) -> Result<Self> {
        let Some(p) = p else {
            return Ok(Self::Stdout(io::stdout()));
        };

        if let Some(parent) = p.parent() {
            fs::create_dir_all(parent)?;
        }
        if p.is_dir() {
            return Err(anyhow!("Output path {} is a directory", p.display()));
        }
        let f = fs::File::create(p).map_err(|err| anyhow!("Unable to create '{}': {}", p.display(), err))?;
        tracing::debug!(path = %p.display(), "writing output");
        Ok(Self::File(BufWriter::new(f)))
    }

    pub fn write_line(&mut self, line: &str) -> Result<()> {
        use Writer::*;
        match self {
            Stdout(out) => writeln!(out.lock(), "{}", line)?,
            File(f) => writeln!(f, "{}", line)?,
        }
        Ok(())
    }

    pub fn finish(self) -> Result<()> {
        use Writer::*;
        match self {
            Stdout(out) => out.lock().flush()?,
            File(mut f) => f.flush()?,
        }
        Ok(())
    }
}
