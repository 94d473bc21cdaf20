use std::path::PathBuf;

use chromafield_config::Config;
use chromafield_core::Palette;
use clap::Parser;
use color_eyre::eyre::WrapErr;

mod app;
mod logging;
mod mouse;
mod overlay;

use app::App;

/// Palette viewer with an interactive particle background
#[derive(Debug, Parser)]
#[command(name = "chromafield")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Palette JSON file to display
    #[arg(short, long, value_name = "FILE")]
    palette: Option<PathBuf>,

    /// Seed for the particle layout
    #[arg(long)]
    seed: Option<u32>,

    /// Target frame rate
    #[arg(long)]
    fps: Option<u32>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Start with the palette overlay hidden
    #[arg(long)]
    no_overlay: bool,
}

impl Cli {
    /// Override config values with the ones given on the command line.
    fn apply(self, config: &mut Config) {
        if let Some(palette) = self.palette {
            config.palette = Some(palette);
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if self.no_overlay {
            config.show_overlay = false;
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);
    logging::init(&config)?;

    let palette = config
        .palette
        .as_deref()
        .map(Palette::load)
        .transpose()
        .wrap_err("failed to load palette")?;

    let terminal = ratatui::init();
    let result = App::new(&config, palette).run(terminal);
    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "chromafield",
            "--palette",
            "p.json",
            "--seed",
            "9",
            "--fps",
            "30",
            "--no-overlay",
        ]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.palette, Some(PathBuf::from("p.json")));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.fps, 30);
        assert!(!config.show_overlay);
    }

    #[test]
    fn seed_matches_config_range() {
        let max = u32::MAX.to_string();
        let cli = Cli::parse_from(["chromafield", "--seed", max.as_str()]);
        assert_eq!(cli.seed, Some(u32::MAX));
        assert!(Cli::try_parse_from(["chromafield", "--seed", "4294967296"]).is_err());
    }

    #[test]
    fn absent_flags_keep_config() {
        let cli = Cli::parse_from(["chromafield"]);
        let mut config = Config {
            seed: Some(1),
            fps: 24,
            ..Config::default()
        };
        cli.apply(&mut config);
        assert_eq!(config.seed, Some(1));
        assert_eq!(config.fps, 24);
        assert!(config.show_overlay);
    }
}
