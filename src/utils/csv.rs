use std::fs;
use std::path::Path;
use ::csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};
use crate::network::{Edge, Network};
use super::document::{parse_id, parse_integer, parse_real};
use super::error::Error;

pub const NODES_FILE: &str = "nodes.csv";
pub const EDGES_FILE: &str = "edges.csv";


/// Loads `nodes.csv` and `edges.csv` from a directory, or from the
/// directory holding the given csv file. Without `nodes.csv` every node
/// takes default attributes.
pub fn load_network(path: &str) -> Result<Network, Error> {
    let path = Path::new(path);
    let dir = if path.is_dir() {
        path
    } else {
        path.parent().unwrap_or_else(|| Path::new("."))
    };
    let mut network = Network::new();
    let nodes = dir.join(NODES_FILE);
    if nodes.exists() {
        let origin = nodes.display().to_string();
        parse_nodes(&read(&origin)?, &origin, &mut network)?;
    } else {
        warn!(path = %nodes.display(), "nodes file not found, using default node attributes");
    }
    let origin = dir.join(EDGES_FILE).display().to_string();
    parse_edges(&read(&origin)?, &origin, &mut network)?;
    Ok(network)
}

fn read(path: &str) -> Result<String, Error> {
    fs::read_to_string(path)
        .map_err(|err| Error::ReadError(path.to_owned(), err))
}

/// Header line first, then `id;processing_delay;reliability` rows.
pub fn parse_nodes(text: &str, origin: &str, network: &mut Network) -> Result<(), Error> {
    for record in records(text, origin, 3)? {
        let id = parse_id(&record[0])?;
        let delay = parse_real(&record[1], "processing_delay")?;
        let reliability = parse_real(&record[2], "node_reliability")?;
        network.add_node(id, delay, reliability);
    }
    Ok(())
}

/// Header line first, then `source;target;bandwidth;link_delay;reliability` rows.
pub fn parse_edges(text: &str, origin: &str, network: &mut Network) -> Result<(), Error> {
    for record in records(text, origin, 5)? {
        let ends = (parse_id(&record[0])?, parse_id(&record[1])?);
        let bandwidth = parse_integer(&record[2], "bandwidth")?;
        let delay = parse_real(&record[3], "link_delay")?;
        let reliability = parse_real(&record[4], "link_reliability")?;
        network.add_edge(ends, Edge::new(bandwidth, delay, reliability))?;
    }
    Ok(())
}

/// `;`-separated rows holding at least `width` fields; shorter rows are skipped.
fn records(text: &str, origin: &str, width: usize) -> Result<Vec<StringRecord>, Error> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());
    let mut rows = vec![];
    for (line, record) in reader.records().enumerate() {
        let record = record.map_err(|err| Error::CsvError(origin.to_owned(), err))?;
        if record.len() < width {
            debug!(origin, line = line + 2, fields = record.len(), "skipping short row");
            continue;
        }
        rows.push(record);
    }
    Ok(rows)
}
