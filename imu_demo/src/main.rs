use clap::Parser;
use imu_demo::config::{read_configuration, DemoConfig};
use imu_demo::{run_selected, SELECTED_BACKEND};
use imu_traits::ImuResult;
use log::{error, info};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::io::stdout;
use std::path::PathBuf;
use std::process::ExitCode;
use uom::si::acceleration::standard_gravity;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// RON configuration file
    #[clap(long, value_parser)]
    config: Option<PathBuf>,
    /// Settings value handed to the backend, overrides the configuration file
    #[clap(long, allow_hyphen_values = true)]
    settings: Option<i32>,
    /// Log the internals of the run on stderr
    #[clap(short, long)]
    verbose: bool,
}

fn run(args: &Args) -> ImuResult<()> {
    let config = match &args.config {
        Some(path) => read_configuration(path)?,
        None => DemoConfig::default(),
    }
    .with_settings_override(args.settings);
    info!("backend: {}, config: {:?}", SELECTED_BACKEND, config);

    let (sample, _) = run_selected(stdout(), config.settings)?;
    let [x, y, z] = sample.to_acceleration(config.range);
    info!(
        "{} sample in g: {:.4} {:.4} {:.4}",
        SELECTED_BACKEND,
        x.get::<standard_gravity>(),
        y.get::<standard_gravity>(),
        z.get::<standard_gravity>()
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    // stdout only carries the backend output.
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Could not set up the logger: {e}");
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
