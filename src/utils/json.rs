use std::fs;
use crate::network::Network;
use super::document::NetworkDoc;
use super::error::Error;


pub fn parse_network(text: &str, origin: &str) -> Result<Network, Error> {
    let doc: NetworkDoc = serde_json::from_str(text)
        .map_err(|err| Error::JsonError(origin.to_owned(), err))?;
    doc.into_network()
}

pub fn load_network(path: &str) -> Result<Network, Error> {
    let text = fs::read_to_string(path)
        .map_err(|err| Error::ReadError(path.to_owned(), err))?;
    parse_network(&text, path)
}


#[cfg(test)]
mod tests {
    use super::parse_network;
    use crate::utils::error::Error;

    #[test]
    fn it_reads_keyed_nodes_and_normalizes_decimals() {
        let text = r#"{
            "nodes": {
                "0": {"processing_delay": "1,5", "reliability": 0.98},
                "1": {"processing_delay": 2, "reliability": 0.5, "node_reliability": "0,97"}
            },
            "edges": [
                {"source": 0, "target": "1", "bandwidth": "250", "delay": "3,5",
                 "link_delay": 4, "reliability": "0,9"}
            ]
        }"#;
        let network = parse_network(text, "inline").unwrap();
        assert_eq!(network.node(0).unwrap().processing_delay, 1.5);
        assert_eq!(network.node(0).unwrap().reliability, 0.98);
        assert_eq!(network.node(1).unwrap().reliability, 0.97);
        let edge = network.edge(1, 0).unwrap();
        assert_eq!(edge.bandwidth, 250);
        assert_eq!(edge.link_delay, 4.0);
        assert_eq!(edge.reliability, 0.9);
    }
    #[test]
    fn it_reads_listed_nodes_and_links() {
        let text = r#"{
            "nodes": [{"id": 3}, {"id": "4", "processing_delay": 0.5}],
            "links": [{"source": 3, "target": 4, "delay": 7}, {"source": 4, "target": 5}]
        }"#;
        let network = parse_network(text, "inline").unwrap();
        assert_eq!(network.node_count(), 3);
        assert_eq!(network.node(3).unwrap().processing_delay, 1.0);
        assert_eq!(network.node(4).unwrap().processing_delay, 0.5);
        assert_eq!(network.edge(3, 4).unwrap().link_delay, 7.0);
        let edge = network.edge(4, 5).unwrap();
        assert_eq!(edge.bandwidth, 100);
        assert_eq!(edge.link_delay, 10.0);
        assert_eq!(edge.reliability, 0.99);
    }
    #[test]
    fn it_reports_malformed_fields() {
        let text = r#"{"edges": [{"source": 0, "target": 1, "reliability": "high"}]}"#;
        match parse_network(text, "inline") {
            Err(Error::NumberError(field, value)) => {
                assert_eq!(field, "link_reliability");
                assert_eq!(value, "high");
            }
            other => panic!("unexpected {:?}", other),
        }
        let text = r#"{"edges": [{"source": 2, "target": 2}]}"#;
        assert!(matches!(parse_network(text, "inline"), Err(Error::SelfLoop(_))));
        let text = r#"{"nodes": {"a": {}}}"#;
        assert!(matches!(parse_network(text, "inline"), Err(Error::NodeIdError(_))));
        assert!(matches!(parse_network("{", "inline"), Err(Error::JsonError(_, _))));
    }
}
