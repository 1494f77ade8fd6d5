use std::fs;
use std::io::ErrorKind;
use tracing::warn;
use crate::network::Network;
use super::config::Config;
use super::document::NetworkDoc;
use super::error::Error;


pub fn parse_network(text: &str, origin: &str) -> Result<Network, Error> {
    let doc: NetworkDoc = serde_yaml::from_str(text)
        .map_err(|err| Error::YamlError(origin.to_owned(), err))?;
    doc.into_network()
}

pub fn load_network(path: &str) -> Result<Network, Error> {
    let text = fs::read_to_string(path)
        .map_err(|err| Error::ReadError(path.to_owned(), err))?;
    parse_network(&text, path)
}

pub fn parse_config(text: &str, origin: &str) -> Result<Config, Error> {
    serde_yaml::from_str(text)
        .map_err(|err| Error::YamlError(origin.to_owned(), err))
}

/// Reads the run configuration; a missing file yields the defaults.
pub fn load_config(path: &str) -> Result<Config, Error> {
    match fs::read_to_string(path) {
        Ok(text) => parse_config(&text, path),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!(path, "config file not found, using defaults");
            Ok(Config::default())
        }
        Err(err) => Err(Error::ReadError(path.to_owned(), err)),
    }
}
