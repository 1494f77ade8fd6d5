use std::collections::BTreeMap;
use serde::Deserialize;
use crate::network::{Edge, Network};
use crate::network::{DEFAULT_BANDWIDTH, DEFAULT_LINK_DELAY, DEFAULT_LINK_RELIABILITY};
use crate::network::{DEFAULT_NODE_RELIABILITY, DEFAULT_PROCESSING_DELAY};
use super::error::Error;


/// Topology document shared by the json and yaml loaders.
#[derive(Deserialize, Debug, Default)]
pub struct NetworkDoc {
    #[serde(default)]
    nodes: NodesDoc,
    #[serde(default, alias = "links")]
    edges: Vec<EdgeDoc>,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum NodesDoc {
    Keyed(BTreeMap<NodeKey, NodeDoc>),
    Listed(Vec<NodeDoc>),
}

/// Map key naming a node: JSON keys are always strings, YAML keys may be
/// plain integers.
#[derive(Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[serde(untagged)]
enum NodeKey {
    Index(u64),
    Text(String),
}

impl NodeKey {
    fn id(&self) -> Result<usize, Error> {
        match self {
            NodeKey::Index(index) => Ok(*index as usize),
            NodeKey::Text(text) => parse_id(text),
        }
    }
}

impl Default for NodesDoc {
    fn default() -> Self {
        NodesDoc::Listed(vec![])
    }
}

#[derive(Deserialize, Debug)]
struct NodeDoc {
    id: Option<Loose>,
    processing_delay: Option<Loose>,
    node_reliability: Option<Loose>,
    reliability: Option<Loose>,
}

#[derive(Deserialize, Debug)]
struct EdgeDoc {
    source: Loose,
    target: Loose,
    bandwidth: Option<Loose>,
    link_delay: Option<Loose>,
    delay: Option<Loose>,
    link_reliability: Option<Loose>,
    reliability: Option<Loose>,
}

/// A number, or a string holding one with either `.` or `,` as separator.
#[derive(Deserialize, Clone, Debug)]
#[serde(untagged)]
enum Loose {
    Number(f64),
    Text(String),
}

impl Loose {
    fn real(&self, field: &'static str) -> Result<f64, Error> {
        match self {
            Loose::Number(x) => Ok(*x),
            Loose::Text(text) => parse_real(text, field),
        }
    }
    fn integer(&self, field: &'static str) -> Result<i64, Error> {
        whole(self.real(field)?, field)
    }
    fn id(&self) -> Result<usize, Error> {
        match self {
            Loose::Number(x) if *x >= 0.0 && x.fract() == 0.0 => Ok(*x as usize),
            Loose::Number(x) => Err(Error::NodeIdError(x.to_string())),
            Loose::Text(text) => parse_id(text),
        }
    }
}

pub fn parse_id(text: &str) -> Result<usize, Error> {
    text.trim()
        .parse()
        .map_err(|_| Error::NodeIdError(text.to_owned()))
}

/// Reads a decimal written with either `.` or `,` as separator.
pub fn parse_real(text: &str, field: &'static str) -> Result<f64, Error> {
    text.trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| Error::NumberError(field, text.to_owned()))
}

pub fn parse_integer(text: &str, field: &'static str) -> Result<i64, Error> {
    whole(parse_real(text, field)?, field)
}

fn whole(x: f64, field: &'static str) -> Result<i64, Error> {
    if x.is_finite() && x.fract() == 0.0 {
        Ok(x as i64)
    } else {
        Err(Error::NumberError(field, x.to_string()))
    }
}

/// First present value of a fallback chain, or the default.
fn real_or(chain: &[&Option<Loose>], field: &'static str, default: f64) -> Result<f64, Error> {
    match chain.iter().find_map(|value| value.as_ref()) {
        Some(value) => value.real(field),
        None => Ok(default),
    }
}

impl NetworkDoc {
    pub fn into_network(self) -> Result<Network, Error> {
        let mut nodes: Vec<(usize, NodeDoc)> = match self.nodes {
            NodesDoc::Keyed(map) => map.into_iter()
                .map(|(key, node)| Ok((key.id()?, node)))
                .collect::<Result<_, Error>>()?,
            NodesDoc::Listed(list) => list.into_iter()
                .map(|node| {
                    let id = match &node.id {
                        Some(id) => id.id()?,
                        None => return Err(Error::NodeIdError(String::from("<missing>"))),
                    };
                    Ok((id, node))
                })
                .collect::<Result<_, Error>>()?,
        };
        nodes.sort_by_key(|(id, _)| *id);

        let mut network = Network::new();
        for (id, node) in nodes {
            let delay = real_or(&[&node.processing_delay], "processing_delay",
                                DEFAULT_PROCESSING_DELAY)?;
            let reliability = real_or(&[&node.node_reliability, &node.reliability],
                                      "node_reliability", DEFAULT_NODE_RELIABILITY)?;
            network.add_node(id, delay, reliability);
        }
        for edge in self.edges {
            let ends = (edge.source.id()?, edge.target.id()?);
            let bandwidth = match &edge.bandwidth {
                Some(bandwidth) => bandwidth.integer("bandwidth")?,
                None => DEFAULT_BANDWIDTH,
            };
            let delay = real_or(&[&edge.link_delay, &edge.delay], "link_delay",
                                DEFAULT_LINK_DELAY)?;
            let reliability = real_or(&[&edge.link_reliability, &edge.reliability],
                                      "link_reliability", DEFAULT_LINK_RELIABILITY)?;
            network.add_edge(ends, Edge::new(bandwidth, delay, reliability))?;
        }
        Ok(network)
    }
}
