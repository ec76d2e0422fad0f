//! This module contains the definition for nursemap configuration and command line arguments.

use places::Coord;
use serde::{Deserialize, Serialize};
use snafu::{ResultExt, Snafu};
use std::path::PathBuf;
use structopt::StructOpt;

use crate::domain::model::error::Error as ModelError;
use crate::domain::model::filter::Filter;
use crate::domain::model::query::{parse_bounds, QueryState};
use crate::utils::config as config_utils;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Config Compilation Error: {}", source))]
    ConfigCompilation { source: config_utils::Error },

    #[snafu(display("Config Merge Error: {} [{}]", msg, source))]
    ConfigMerge {
        msg: String,
        source: config::ConfigError,
    },

    #[snafu(display("Invalid Query: {}", source))]
    InvalidQuery { source: ModelError },

    #[snafu(display("Invalid Configuration: {}", msg))]
    Invalid { msg: String },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Logging {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSettings {
    /// JSON file holding the registered nurses.
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub logging: Logging,
    pub source: SourceSettings,
    #[serde(default)]
    pub filter: Filter,
    #[serde(default)]
    pub query: QueryState,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "nursemap",
    about = "Lists the nurses visible on the map",
    version = VERSION,
    author = AUTHORS
    )]
pub struct Opts {
    /// Defines the config directory
    ///
    /// If given, this directory must contain a 'nursemap' subdirectory.
    #[structopt(parse(from_os_str), short = "c", long = "config-dir")]
    pub config_dir: Option<PathBuf>,

    /// Defines the run mode in {testing, dev, prod, ...}
    ///
    /// If no run mode is provided, a default behavior will be used.
    #[structopt(short = "m", long = "run-mode")]
    pub run_mode: Option<String>,

    /// Override settings values using key=value
    #[structopt(short = "s", long = "setting", number_of_values = 1)]
    pub settings: Vec<String>,

    /// Latitude of the selected point (requires --lng)
    #[structopt(long = "lat", requires = "lng", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude of the selected point (requires --lat)
    #[structopt(long = "lng", requires = "lat", allow_hyphen_values = true)]
    pub lng: Option<f64>,

    /// Viewport bounds as ne_lat,ne_lng,sw_lat,sw_lng
    #[structopt(short = "b", long = "bounds", allow_hyphen_values = true)]
    pub bounds: Option<String>,

    /// Only keep nurses with at least one of these specialties
    #[structopt(long = "specialty", number_of_values = 1)]
    pub specialties: Vec<String>,

    /// Print the result as a GeoJSON feature collection
    #[structopt(long = "geojson")]
    pub geojson: bool,

    #[structopt(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Print the nurses visible for the given query
    Run,
    /// Prints nursemap's configuration
    Config,
}

impl Opts {
    /// Command line query arguments take precedence over configured ones.
    pub fn query(&self, mut state: QueryState) -> Result<QueryState, ModelError> {
        if let (Some(lat), Some(lng)) = (self.lat, self.lng) {
            state.selected_point = Some(Coord::new(lat, lng));
        }
        if let Some(ref bounds) = self.bounds {
            state.viewport_bounds = parse_bounds(bounds)?;
        }
        if !self.specialties.is_empty() {
            state.specialty_filter = self.specialties.iter().cloned().collect();
        }
        Ok(state)
    }
}

impl Settings {
    // Read the configuration from the embedded defaults and <config-dir>/nursemap
    pub fn new(opts: &Opts) -> Result<Self, Error> {
        let config = config_utils::config_from(
            opts.config_dir.as_deref(),
            &["nursemap"],
            opts.run_mode.as_deref(),
            "NURSEMAP",
            opts.settings.clone(),
        )
        .context(ConfigCompilationSnafu)?;

        let settings: Settings = config.try_deserialize().context(ConfigMergeSnafu {
            msg: String::from("Cannot convert configuration into nursemap settings"),
        })?;

        let query = opts
            .query(settings.query.clone())
            .context(InvalidQuerySnafu)?;

        if settings.source.path.as_os_str().is_empty() {
            return Err(Error::Invalid {
                msg: String::from("source.path must not be empty"),
            });
        }

        Ok(Settings { query, ..settings })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use places::Bounds;

    fn opts(args: &[&str]) -> Opts {
        Opts::from_iter(std::iter::once("nursemap").chain(args.iter().copied()))
    }

    #[test]
    fn should_load_default_settings() {
        let settings = Settings::new(&opts(&["config"])).unwrap();
        assert_eq!(settings.filter.precision.digits(), 4);
        assert_eq!(settings.source.path, PathBuf::from("data/nurses.json"));
        assert_eq!(settings.query, QueryState::default());
    }

    #[test]
    fn should_override_settings_from_command_line() {
        let settings = Settings::new(&opts(&[
            "-s",
            "filter.precision=6",
            "--lat",
            "-23.5505",
            "--lng",
            "-46.6333",
            "--bounds",
            "0,0,-30,-50",
            "--specialty",
            "cardio",
            "run",
        ]))
        .unwrap();
        assert_eq!(settings.filter.precision.digits(), 6);
        assert_eq!(
            settings.query.selected_point,
            Some(Coord::new(-23.5505, -46.6333))
        );
        assert_eq!(
            settings.query.viewport_bounds,
            Bounds::new(Coord::new(0., 0.), Coord::new(-30., -50.))
        );
        assert!(settings.query.specialty_filter.contains("cardio"));
    }

    #[test]
    fn should_reject_invalid_precision() {
        assert!(Settings::new(&opts(&["-s", "filter.precision=0", "config"])).is_err());
    }

    #[test]
    fn should_reject_malformed_bounds() {
        assert!(matches!(
            Settings::new(&opts(&["--bounds", "0,0", "run"])),
            Err(Error::InvalidQuery { .. })
        ));
    }
}
