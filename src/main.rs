use anyhow::Result;
use clap::Parser;
use gridsnake::app::App;
use gridsnake::game::GameConfig;
use gridsnake::score::{HighScoreStore, DEFAULT_SCORE_FILE};

#[derive(Parser)]
#[command(name = "gridsnake")]
#[command(version, about = "Grid-based snake with keyboard and mouse controls")]
struct Cli {
    /// Grid side length, in cells
    #[arg(long, default_value = "20")]
    extent: usize,

    /// Initial tick interval in milliseconds
    #[arg(long, default_value = "150")]
    tick_ms: u64,

    /// Where the high score is stored
    #[arg(long, default_value = DEFAULT_SCORE_FILE)]
    score_file: std::path::PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(cli.extent, cli.tick_ms);
    config.validate()?;

    let store = HighScoreStore::new(cli.score_file);

    App::new(config, store).run().await
}
