use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("pattern is required: use a positional argument or -f/--file")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Inline text wins over a file; `-` reads the pattern from stdin.
pub fn load_pattern(text: Option<&str>, path: Option<&Path>) -> Result<String, LoadError> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    let Some(path) = path else {
        return Err(LoadError::Missing);
    };

    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(LoadError::Stdin)?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| LoadError::File {
            path: path.to_path_buf(),
            source,
        })?
    };

    Ok(strip_line_ending(&content).to_string())
}

/// Drop the single trailing newline editors append to files.
pub fn strip_line_ending(s: &str) -> &str {
    s.strip_suffix("\r\n")
        .or_else(|| s.strip_suffix('\n'))
        .unwrap_or(s)
}
