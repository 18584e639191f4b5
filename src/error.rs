use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The vocabulary could not be read, or held no words.
    #[error("vocabulary source `{name}` is unavailable: {source}")]
    SourceUnavailable {
        name: String,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn source_unavailable(name: &str, source: io::Error) -> Error {
        Error::SourceUnavailable {
            name: name.to_string(),
            source,
        }
    }
}
