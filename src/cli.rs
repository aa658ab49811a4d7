use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::images::{self, ImageError};

#[derive(Parser)]
#[command(name = "saturway")]
#[command(about = "Saturway landing page and task organizer demo in the terminal")]
#[command(version)]
pub struct Cli {
    /// Custom config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Use development mode (uses separate dev config/data directories)
    #[arg(long)]
    pub dev: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Screen shown at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AppMode {
    #[default]
    Landing,
    Auth,
    Onboarding,
    Main,
    PickerDemo,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch interactive TUI (default if no subcommand)
    Tui {
        /// Screen to start on
        #[arg(long, value_enum, default_value_t = AppMode::Landing)]
        mode: AppMode,
    },
    /// Re-encode the landing page artwork at smaller sizes
    OptimizeImages {
        /// Directory holding the source images
        #[arg(long, default_value = "./assets")]
        assets_dir: PathBuf,
        /// Directory the optimized files are written to
        #[arg(long, default_value = "./assets/optimized")]
        output_dir: PathBuf,
    },
}

/// Handle the optimize-images command
pub fn handle_optimize_images(assets_dir: PathBuf, output_dir: PathBuf) -> Result<(), ImageError> {
    println!("Starting image optimization...\n");

    let report = images::optimize_all(&images::JOBS, &assets_dir, &output_dir)?;
    for file in &report.processed {
        println!("{}\n", file.summary());
    }
    for (source, error) in &report.failed {
        eprintln!("✗ Error processing {}: {}", source, error);
    }

    println!(
        "\n✓ Image optimization complete! ({} processed, {} failed)",
        report.processed.len(),
        report.failed.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tui_is_optional_and_mode_defaults_to_landing() {
        let cli = Cli::try_parse_from(["saturway"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.dev);

        let cli = Cli::try_parse_from(["saturway", "--dev", "tui", "--mode", "picker-demo"]).unwrap();
        assert!(cli.dev);
        assert!(matches!(
            cli.command,
            Some(Commands::Tui {
                mode: AppMode::PickerDemo
            })
        ));
    }

    #[test]
    fn optimize_images_takes_directories() {
        let cli = Cli::try_parse_from([
            "saturway",
            "optimize-images",
            "--assets-dir",
            "src/assets",
            "--output-dir",
            "out",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::OptimizeImages {
                assets_dir,
                output_dir,
            }) => {
                assert_eq!(assets_dir, PathBuf::from("src/assets"));
                assert_eq!(output_dir, PathBuf::from("out"));
            }
            _ => panic!("expected optimize-images"),
        }
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["saturway", "tui", "--mode", "settings"]).is_err());
    }
}
