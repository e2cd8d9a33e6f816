use std::{error::Error, fmt::Display, path::PathBuf};

#[derive(Debug)]
pub enum PageError {
    /// The page file couldn't be created or written.
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error for PageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PageError::CreateFile { source, .. } => Some(source),
        }
    }
}

impl Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageError::CreateFile { path, source } => {
                write!(f, "Failed to create file '{}': {}", path.display(), source)
            }
        }
    }
}
