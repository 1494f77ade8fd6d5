use std::fmt;
use std::marker::PhantomData;
use serde::{Deserialize, Deserializer};
use serde::de::{MapAccess, Visitor};
use serde::de::value::MapAccessDeserializer;
use argh::FromArgs;
use crate::component::Weights;
use super::error::Error;

/// Search low-cost routes with ant colony and genetic optimizers
#[derive(FromArgs)]
pub struct Arguments {
    /// network topology file (json or yaml)
    #[argh(positional)]
    pub network: String,
    /// path to configuration file
    #[argh(option, short='c', default="String::from(\"data/config/default.yaml\")")]
    pub config: String,
    /// override algorithm: aco, ga or all
    #[argh(option, short='a')]
    pub algorithm: Option<String>,
    /// override random seed
    #[argh(option, short='s')]
    pub seed: Option<u64>,
    /// override source node
    #[argh(option)]
    pub source: Option<usize>,
    /// override destination node
    #[argh(option)]
    pub destination: Option<usize>,
    /// print the results as json
    #[argh(switch)]
    pub json: bool,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub name: String,
    pub algorithm: String,
    pub source: usize,
    pub destination: usize,
    /// delay, reliability and resource weights, in that order
    pub weights: [f64; 3],
    /// wall-clock budget per engine in microseconds, 0 for none
    pub timeout: u64,
    pub seed: u64,
    #[serde(deserialize_with = "map_only")]
    pub aco: AcoParams,
    #[serde(deserialize_with = "map_only")]
    pub ga: GaParams,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct AcoParams {
    pub ants: usize,
    pub iterations: usize,
    pub alpha: f64,
    pub beta: f64,
    pub evaporation: f64,
    pub q: f64,
    pub initial_pheromone: f64,
    pub min_pheromone: f64,
    /// step bound per ant, twice the node count when absent
    pub max_steps: Option<usize>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct GaParams {
    pub population: usize,
    pub generations: usize,
    pub mutation: f64,
    pub tournament: usize,
    /// step ceiling of the random walks seeding the population
    pub walk_steps: usize,
    /// random walks tried per population slot before falling back to
    /// k-shortest paths
    pub attempt_factor: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            name: String::from("default"),
            algorithm: String::from("all"),
            source: 0,
            destination: 249,
            weights: [0.33, 0.33, 0.34],
            timeout: 0,
            seed: 42,
            aco: AcoParams::default(),
            ga: GaParams::default(),
        }
    }
}

impl Default for AcoParams {
    fn default() -> Self {
        AcoParams {
            ants: 30,
            iterations: 50,
            alpha: 1.0,
            beta: 2.0,
            evaporation: 0.1,
            q: 100.0,
            initial_pheromone: 1.0,
            min_pheromone: 0.01,
            max_steps: None,
        }
    }
}

impl Default for GaParams {
    fn default() -> Self {
        GaParams {
            population: 100,
            generations: 200,
            mutation: 0.05,
            tournament: 3,
            walk_steps: 300,
            attempt_factor: 100,
        }
    }
}

/// Parameter sections are keyed maps; a bare sequence would otherwise fill
/// the fields by position.
fn map_only<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where D: Deserializer<'de>, T: Deserialize<'de> {
    struct Section<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for Section<T> {
        type Value = T;
        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of parameters")
        }
        fn visit_map<M: MapAccess<'de>>(self, map: M) -> Result<T, M::Error> {
            T::deserialize(MapAccessDeserializer::new(map))
        }
    }

    deserializer.deserialize_map(Section(PhantomData))
}

impl Config {
    pub fn override_from_args(&mut self, args: &Arguments) {
        if let Some(algorithm) = &args.algorithm {
            self.algorithm = algorithm.clone();
        }
        if let Some(seed) = args.seed {
            self.seed = seed;
        }
        if let Some(source) = args.source {
            self.source = source;
        }
        if let Some(destination) = args.destination {
            self.destination = destination;
        }
    }
    pub fn weights(&self) -> Weights {
        Weights::from(self.weights)
    }
    pub fn validate(&self) -> Result<(), Error> {
        if self.weights.iter().any(|w| !(*w >= 0.0) || !w.is_finite()) {
            return Err(Error::ParameterError("weights", format!("{:?}", self.weights)));
        }
        self.aco.validate()?;
        self.ga.validate()
    }
}

impl AcoParams {
    pub fn validate(&self) -> Result<(), Error> {
        if self.ants == 0 {
            return Err(Error::ParameterError("aco.ants", self.ants.to_string()));
        }
        if self.iterations == 0 {
            return Err(Error::ParameterError("aco.iterations", self.iterations.to_string()));
        }
        if !(0.0..1.0).contains(&self.evaporation) {
            return Err(Error::ParameterError("aco.evaporation", self.evaporation.to_string()));
        }
        if !(self.min_pheromone > 0.0) {
            return Err(Error::ParameterError("aco.min_pheromone", self.min_pheromone.to_string()));
        }
        if !(self.initial_pheromone > 0.0) {
            return Err(Error::ParameterError("aco.initial_pheromone", self.initial_pheromone.to_string()));
        }
        if !self.alpha.is_finite() || !self.beta.is_finite() || !self.q.is_finite() {
            let values = format!("alpha {} beta {} q {}", self.alpha, self.beta, self.q);
            return Err(Error::ParameterError("aco", values));
        }
        Ok(())
    }
}

impl GaParams {
    pub fn validate(&self) -> Result<(), Error> {
        if self.population == 0 {
            return Err(Error::ParameterError("ga.population", self.population.to_string()));
        }
        if self.generations == 0 {
            return Err(Error::ParameterError("ga.generations", self.generations.to_string()));
        }
        if !(0.0..=1.0).contains(&self.mutation) {
            return Err(Error::ParameterError("ga.mutation", self.mutation.to_string()));
        }
        if self.tournament == 0 {
            return Err(Error::ParameterError("ga.tournament", self.tournament.to_string()));
        }
        Ok(())
    }
}
