use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use volumio_exporter::export::config::{PackageInfo, Settings};
use volumio_exporter::{ExportConfig, ExportPipeline};

#[derive(Parser, Debug)]
#[command(name = "volumio-exporter")]
#[command(about = "Export iTunes playlists to extended M3U and Volumio formats", long_about = None)]
struct Args {
    /// Path to the settings file
    #[arg(short = 's', long, default_value = "settings.json")]
    settings: String,

    /// Path to the package descriptor
    #[arg(short = 'p', long, default_value = "package.json")]
    package: String,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in descriptor paths
    let settings_path = shellexpand::tilde(&args.settings);
    let package_path = shellexpand::tilde(&args.package);

    let settings = Settings::load(PathBuf::from(settings_path.as_ref()).as_path())?;
    let package = PackageInfo::load(PathBuf::from(package_path.as_ref()).as_path())?;

    log::info!(
        "Exporting playlists prefixed {:?} for {}",
        settings.playlist_prefix,
        package.name
    );

    let config = ExportConfig::from_parts(settings, package);
    let pipeline = ExportPipeline::new(config);
    pipeline.run()?;

    log::info!("Export completed successfully!");
    Ok(())
}
