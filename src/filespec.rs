//! Output destinations for rendered reports. Allows use of "-" as a way
//! to specify stdout.

use std::convert::Infallible;
use std::fmt;
use std::fs::File;
use std::io::{stdout, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Specifies where to write a rendered report.
#[derive(Clone, Debug)]
pub enum FileSpec {
    /// Write to stdout.
    Stdio,
    /// Write to the file at the given path.
    Path(PathBuf),
}

impl fmt::Display for FileSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        use FileSpec::*;
        match self {
            Stdio => f.write_str("<stdout>"),
            Path(path) => write!(f, "{:?}", path),
        }
    }
}

impl FromStr for FileSpec {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use FileSpec::*;
        if s == "-" {
            Ok(Stdio)
        } else {
            Ok(Path(s.into()))
        }
    }
}

impl FileSpec {
    fn writer(&self) -> Result<Box<dyn Write>> {
        use FileSpec::*;
        Ok(match self {
            Stdio => Box::new(stdout()),
            Path(path) => Box::new(
                File::create(path).with_context(|| format!("opening {:?} for writing", path))?,
            ),
        })
    }
}

/// Writes fully rendered report bytes to `spec`.
pub fn write_bytes(spec: &FileSpec, content: &[u8]) -> Result<()> {
    let mut w = spec.writer()?;
    w.write_all(content)?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_means_stdout() {
        assert!(matches!("-".parse::<FileSpec>(), Ok(FileSpec::Stdio)));
        assert!(matches!(
            "report.csv".parse::<FileSpec>(),
            Ok(FileSpec::Path(_))
        ));
    }
}
