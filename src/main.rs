use clap::Parser;
use env_logger::Env;
use log::{error, info};
use logo_variants::{Error, LogoBuilder, DEFAULT_SOURCE_FILE, RECOMMENDED_SOURCE_SIZE};
use std::path::PathBuf;
use std::process::ExitCode;

/// Generate app icons, web logos and splash screens from a single logo.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Directory containing the source logo; receives the icons, logos and
    /// splash folders.
    #[arg(long, env = "LOGO_ASSETS_DIR", default_value = ".")]
    assets_dir: PathBuf,

    /// Source logo, relative to the assets directory.
    #[arg(long, default_value = DEFAULT_SOURCE_FILE)]
    source: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut builder = LogoBuilder::for_assets_dir(&args.assets_dir);
    builder.source_file(args.assets_dir.join(&args.source));

    match builder.build() {
        Ok(written) => {
            info!("Logo generation completed successfully ({} files)", written.len());
            ExitCode::SUCCESS
        }
        Err(e @ Error::MissingSource { .. }) => {
            error!("{e}");
            error!(
                "Place your logo there as a transparent PNG of at least {RECOMMENDED_SOURCE_SIZE}x{RECOMMENDED_SOURCE_SIZE} pixels"
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("Error processing logo: {e}");
            error!("Logo generation failed!");
            ExitCode::FAILURE
        }
    }
}
