use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use qos_routing::component::Solution;
use qos_routing::planner::Planner;
use qos_routing::utils::{self, yaml};
use qos_routing::utils::config::Arguments;
use qos_routing::utils::error::Error;


fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Arguments = argh::from_env();
    if let Err(err) = run(&args) {
        error!("{}", err);
        process::exit(1);
    }
}

fn run(args: &Arguments) -> Result<(), Error> {
    let mut config = yaml::load_config(&args.config)?;
    config.override_from_args(args);

    let network = utils::load_network(&args.network)?;
    info!(nodes = network.node_count(), edges = network.edge_count(), "network loaded");

    let mut planner = Planner::new(network, config)?;
    let results = planner.plan();
    if args.json {
        let solutions: Vec<&Solution> = results.iter()
            .map(|(solution, _)| solution)
            .collect();
        let text = serde_json::to_string_pretty(&solutions)
            .map_err(|err| Error::JsonError(String::from("<results>"), err))?;
        println!("{}", text);
    } else {
        print!("{}", planner.show_results(&results));
    }
    Ok(())
}
