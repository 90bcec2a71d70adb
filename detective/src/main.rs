use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::info;

use detective::engine::{Expedition, GameMode};
use detective::events::Event;
use detective::io::{ConsoleSink, EventSink, JsonLinesSink, StdinSource};
use detective::scenario;

#[derive(Parser, Debug)]
#[command(name = "detective")]
#[command(about = "Mansion exploration and case resolution simulator", long_about = None)]
struct Args {
    /// How much of the case-solving toolkit is active
    #[arg(short, long, value_enum, default_value = "master")]
    mode: Mode,

    /// Emit structured JSON events instead of narration
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Novice,
    Adventurer,
    Master,
}

impl From<Mode> for GameMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Novice => GameMode::Novice,
            Mode::Adventurer => GameMode::Adventurer,
            Mode::Master => GameMode::Master,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mode = GameMode::from(args.mode);
    info!(?mode, "starting the mansion case");

    let map = scenario::reference_mansion()?;
    let mut expedition = Expedition::new(map, mode)?;

    let mut source = StdinSource::new();
    let mut sink: Box<dyn EventSink> = if args.json {
        Box::new(JsonLinesSink)
    } else {
        Box::new(ConsoleSink)
    };

    expedition.run(&mut source, sink.as_mut()).await?;

    if mode.tracks_suspects() {
        expedition
            .run_accusation(&mut source, sink.as_mut())
            .await?;
    }
    if mode.collects_clues() {
        sink.emit(Event::ClueReport {
            clues: expedition.clue_report(),
        });
    }

    Ok(())
}
