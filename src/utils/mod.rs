use std::path::Path;
use crate::network::Network;

pub mod config;
pub mod csv;
pub mod error;
pub mod json;
pub mod yaml;
mod document;

use error::Error;

/// Loads a topology, picking the parser by file extension. A directory
/// is read as a pair of csv tables.
pub fn load_network(path: &str) -> Result<Network, Error> {
    if Path::new(path).is_dir() {
        return self::csv::load_network(path);
    }
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("yaml") | Some("yml") => yaml::load_network(path),
        Some("csv") => self::csv::load_network(path),
        _ => json::load_network(path),
    }
}
