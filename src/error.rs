use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced at the library boundary
#[derive(Debug, Error)]
pub enum Error {
    /// An input file could not be opened or read
    #[error("cannot read {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// An input file was readable but its content is not valid
    #[error("malformed input in {}: {source}", path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A start node label never appeared in the graph
    #[error("label {label:?} not found in graph")]
    LabelNotFound { label: String },
    /// The worker pool could not be created
    #[error("cannot build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    /// Writing the report failed
    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

impl Error {
    /// Classifies an IO error raised while reading `path`.
    ///
    /// `InvalidData`/`InvalidInput`/`UnexpectedEof` describe the content of the file and become
    /// [`Error::MalformedInput`]; everything else means the file itself is unavailable.
    pub fn from_input(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::InvalidData
            | io::ErrorKind::InvalidInput
            | io::ErrorKind::UnexpectedEof => Error::MalformedInput { path, source },
            _ => Error::InputUnavailable { path, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_input_errors() {
        let err = Error::from_input(
            "graph.txt",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert!(matches!(err, Error::InputUnavailable { .. }));
        assert!(err.to_string().starts_with("cannot read graph.txt"));

        let err = Error::from_input(
            "nodes.txt",
            io::Error::new(io::ErrorKind::InvalidData, "bad budget"),
        );
        assert!(matches!(err, Error::MalformedInput { .. }));
        assert_eq!(err.to_string(), "malformed input in nodes.txt: bad budget");
    }
}
