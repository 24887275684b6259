use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavError {
    #[error("cannot navigate to an empty URL")]
    Empty,
    #[error("invalid URL {input:?}: {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
}
