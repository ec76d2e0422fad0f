use config::{Config, Environment, File, FileFormat};
use snafu::{ResultExt, Snafu};
use std::env;
use std::path::Path;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Key Value Splitting Error: {}", msg))]
    Splitting { msg: String },

    #[snafu(display("Setting Config Value Error: {}", source))]
    ConfigValue { source: config::ConfigError },

    #[snafu(display("Config Compilation Error: {}", source))]
    ConfigCompilation { source: config::ConfigError },
}

const DEFAULT_CONFIG: &str = include_str!("../../config/default.toml");

/// Create a new configuration source from a list of assignments key=value
///
/// The function iterates over the list, and for each element, it tries to
/// (a) identify the key and the value, by searching for the '=' sign.
/// (b) parse the value into one of bool, i64, f64. if not it's a string.
pub fn config_from_args(args: impl IntoIterator<Item = String>) -> Result<Config, Error> {
    let mut config = Config::builder();

    for arg in args {
        let (key, val) = arg.split_once('=').ok_or(Error::Splitting {
            msg: format!("missing '=' in setting override: {}", arg),
        })?;

        config = {
            if let Ok(as_bool) = val.parse::<bool>() {
                config.set_override(key, as_bool).context(ConfigValueSnafu)
            } else if let Ok(as_int) = val.parse::<i64>() {
                config.set_override(key, as_int).context(ConfigValueSnafu)
            } else if let Ok(as_float) = val.parse::<f64>() {
                config.set_override(key, as_float).context(ConfigValueSnafu)
            } else {
                config.set_override(key, val).context(ConfigValueSnafu)
            }
        }?
    }

    config.build().context(ConfigCompilationSnafu)
}

// Layers, from lowest to highest priority:
// * the default configuration compiled into the binary,
// * for each sub directory of the config dir: 'default.toml', then the run mode
//   file ('dev' -> 'dev.toml', required when a run mode is given, RUN_MODE
//   taking precedence over the argument), then an optional 'local.toml',
// * environment variables, eg NURSEMAP_FILTER__PRECISION=5,
// * key=value overrides given on the command line.
pub fn config_from(
    config_dir: Option<&Path>,
    sub_dirs: &[&str],
    run_mode: Option<&str>,
    prefix: &str,
    overrides: Vec<String>,
) -> Result<Config, Error> {
    let mut builder =
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    if let Some(config_dir) = config_dir {
        let run_mode = env::var("RUN_MODE")
            .ok()
            .or_else(|| run_mode.map(String::from));

        builder = sub_dirs.iter().fold(builder, |mut builder, sub_dir| {
            let dir_path = config_dir.join(sub_dir);

            let default_path = dir_path.join("default").with_extension("toml");
            builder = builder.add_source(File::from(default_path).required(false));

            if let Some(ref run_mode) = run_mode {
                let run_mode_path = dir_path.join(run_mode).with_extension("toml");
                builder = builder.add_source(File::from(run_mode_path).required(true));
            }

            // This file shouldn't be checked in to git
            let local_path = dir_path.join("local").with_extension("toml");
            builder.add_source(File::from(local_path).required(false))
        });
    }

    builder = builder.add_source(
        Environment::with_prefix(prefix)
            .prefix_separator("_")
            .separator("__"),
    );

    builder
        .add_source(config_from_args(overrides)?)
        .build()
        .context(ConfigCompilationSnafu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn should_parse_typed_overrides() {
        let config = config_from_args(vec![
            "filter.precision=6".to_string(),
            "source.path=/tmp/nurses.json".to_string(),
            "flag=true".to_string(),
        ])
        .unwrap();
        assert_eq!(config.get_int("filter.precision").unwrap(), 6);
        assert_eq!(config.get_string("source.path").unwrap(), "/tmp/nurses.json");
        assert!(config.get_bool("flag").unwrap());
    }

    #[test]
    fn should_reject_override_without_equal_sign() {
        assert!(matches!(
            config_from_args(vec!["filter.precision".to_string()]),
            Err(Error::Splitting { .. })
        ));
    }

    #[test]
    fn should_start_from_embedded_defaults() {
        let config = config_from(None, &["nursemap"], None, "NURSEMAP_TEST_DEFAULTS", vec![])
            .unwrap();
        assert_eq!(config.get_int("filter.precision").unwrap(), 4);
    }

    #[test]
    fn should_layer_config_dir_and_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let sub_dir = dir.path().join("nursemap");
        fs::create_dir_all(&sub_dir).unwrap();
        fs::write(
            sub_dir.join("default.toml"),
            "[filter]\nprecision = 5\n[source]\npath = \"from-dir.json\"\n",
        )
        .unwrap();

        let config = config_from(
            Some(dir.path()),
            &["nursemap"],
            None,
            "NURSEMAP_TEST_LAYERS",
            vec!["filter.precision=7".to_string()],
        )
        .unwrap();
        assert_eq!(config.get_int("filter.precision").unwrap(), 7);
        assert_eq!(config.get_string("source.path").unwrap(), "from-dir.json");
    }
}
