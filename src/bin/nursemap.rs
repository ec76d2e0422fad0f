use nursemap::adapters::primary::map::MapState;
use nursemap::adapters::primary::markers;
use nursemap::adapters::secondary::json_file::JsonFileSource;
use nursemap::settings;
use nursemap::utils::launch::launch_with_runtime;
use snafu::{ResultExt, Snafu};
use structopt::StructOpt;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Settings (Configuration or CLI) Error: {}", source))]
    Settings { source: settings::Error },

    #[snafu(display("Serialization Error: {}", source))]
    Serialization { source: serde_json::Error },

    #[snafu(display("Execution Error {}", source))]
    Execution { source: Box<dyn std::error::Error> },
}

fn main() -> Result<(), Error> {
    let opts = settings::Opts::from_args();
    let settings = settings::Settings::new(&opts).context(SettingsSnafu)?;

    match opts.cmd {
        settings::Command::Run => {
            let log_path = settings.logging.path.clone();
            launch_with_runtime(log_path.as_deref(), run(opts, settings)).context(ExecutionSnafu)
        }
        settings::Command::Config => {
            println!(
                "{}",
                serde_json::to_string_pretty(&settings).context(SerializationSnafu)?
            );
            Ok(())
        }
    }
}

async fn run(
    opts: settings::Opts,
    settings: settings::Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = JsonFileSource::new(&settings.source.path);
    tracing::info!("Reading nurses from {}", source.path().display());

    let mut map = MapState::new(settings.filter, settings.query);
    map.refresh(&source).await;

    let output = if opts.geojson {
        serde_json::to_string_pretty(&markers::feature_collection(map.filtered()))?
    } else {
        serde_json::to_string_pretty(map.filtered())?
    };
    println!("{}", output);

    Ok(())
}
