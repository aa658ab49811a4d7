use clap::Parser;
use color_eyre::Result;
use saturway::{
    Config, Profile, Store,
    cli::{AppMode, Cli, Commands},
};

fn main() -> Result<()> {
    // Set up error reporting with color-eyre
    color_eyre::install()?;

    let cli = Cli::parse();

    // --dev uses separate config and data directories
    let profile = if cli.dev { Profile::Dev } else { Profile::Prod };

    let (config, config_path) = match cli.config {
        Some(path) => (Config::load_from_path(&path)?, Some(path)),
        None => (
            Config::load_with_profile(profile)?,
            Config::get_config_path(profile).ok(),
        ),
    };

    saturway::logging::init(&config.get_log_path())?;
    tracing::info!("Starting saturway ({:?} profile)", profile);

    let store_path = config.get_store_path();
    let store = Store::new(
        store_path
            .to_str()
            .ok_or_else(|| color_eyre::eyre::eyre!("Store path contains invalid UTF-8"))?,
    )?;

    match cli.command {
        None => run_tui(config, store, AppMode::Landing, config_path)?,
        Some(Commands::Tui { mode }) => run_tui(config, store, mode, config_path)?,
        Some(Commands::OptimizeImages {
            assets_dir,
            output_dir,
        }) => {
            saturway::cli::handle_optimize_images(assets_dir, output_dir)?;
        }
    }

    Ok(())
}

fn run_tui(
    config: Config,
    store: Store,
    mode: AppMode,
    config_path: Option<std::path::PathBuf>,
) -> Result<()> {
    let app = saturway::tui::App::new(config, store, mode, config_path)?;
    saturway::tui::run_event_loop(app)?;
    Ok(())
}
