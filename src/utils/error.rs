use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {0}: {1}")]
    ReadError(String, #[source] std::io::Error),
    #[error("json error in {0}: {1}")]
    JsonError(String, #[source] serde_json::Error),
    #[error("yaml error in {0}: {1}")]
    YamlError(String, #[source] serde_yaml::Error),
    #[error("csv error in {0}: {1}")]
    CsvError(String, #[source] ::csv::Error),
    #[error("field `{0}` holds a malformed number {1:?}")]
    NumberError(&'static str, String),
    #[error("malformed node id {0:?}")]
    NodeIdError(String),
    #[error("edge {0:?} connects a node to itself")]
    SelfLoop((usize, usize)),
    #[error("unknown algorithm `{0}`")]
    UnknownAlgorithm(String),
    #[error("parameter `{0}` out of range: {1}")]
    ParameterError(&'static str, String),
}
