//! The two seams to the outside world: where commands come from and where
//! events go. The engine only ever sees these traits.

use std::collections::VecDeque;

use anyhow::Result;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::error;

use crate::accusation::Verdict;
use crate::events::Event;
use crate::limits::ACCUSATION_THRESHOLD;

/// Abstract operator input: one line per request.
#[async_trait]
pub trait CommandSource: Send {
    /// Next operator line, `None` once the input is exhausted.
    async fn next_line(&mut self) -> Result<Option<String>>;
}

/// Reads operator lines from standard input.
pub struct StdinSource {
    lines: Lines<BufReader<Stdin>>,
}

impl StdinSource {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandSource for StdinSource {
    async fn next_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.next_line().await?)
    }
}

/// Canned command feed, for tests and scripted runs.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    queue: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queue: lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl CommandSource for ScriptedSource {
    async fn next_line(&mut self) -> Result<Option<String>> {
        Ok(self.queue.pop_front())
    }
}

/// Abstract event consumer. All presentation lives behind this.
pub trait EventSink {
    fn emit(&mut self, event: Event);
}

/// Human narration on stdout.
pub struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn emit(&mut self, event: Event) {
        match event {
            Event::EnteredRoom { room } => {
                println!();
                println!("--- Current location: {room} ---");
            }
            Event::ClueFound { text, suspect } => {
                println!("A clue! \"{text}\"");
                if let Some(name) = suspect {
                    println!("It points at {name}. Noted.");
                }
            }
            Event::ClueAlreadyCollected => {
                println!("The clue here has already been collected.");
            }
            Event::RoomClean => {
                println!("The room looks clean. Nothing of interest.");
            }
            Event::DeadEnd => {
                println!("Dead end! The exploration of the mansion is over.");
            }
            Event::InvalidMove { input } => {
                println!("'{input}' is not a move you can make here. Try LEFT, RIGHT or QUIT.");
            }
            Event::MovePrompt { left, right } => {
                println!("Where to next?");
                if let Some(name) = left {
                    println!("  [L]eft  -> {name}");
                }
                if let Some(name) = right {
                    println!("  [R]ight -> {name}");
                }
                println!("  [Q]uit  -> end the exploration");
            }
            Event::ExplorationEnded => {
                println!("Exploration ended by the detective.");
            }
            Event::AccusationPrompt => {
                println!();
                println!("Who do you accuse? (type the suspect's name)");
            }
            Event::Accusation {
                suspect,
                count,
                verdict,
            } => {
                println!();
                println!("Accused: {suspect} ({count} incriminating clues)");
                match verdict {
                    Verdict::Sustainable => {
                        println!("VERDICT: the accusation against {suspect} stands.");
                    }
                    Verdict::Insufficient => {
                        println!(
                            "VERDICT: insufficient evidence. {count} clues found, {ACCUSATION_THRESHOLD} needed."
                        );
                    }
                    Verdict::Baseless => {
                        println!("VERDICT: baseless. No collected clue implicates {suspect}.");
                    }
                }
            }
            Event::ClueReport { clues } => {
                println!();
                println!("=== Collected clue report ===");
                if clues.is_empty() {
                    println!("No clues were collected.");
                }
                for clue in clues {
                    match clue.suspect {
                        Some(name) => println!(" -> \"{}\" | points at {}", clue.text, name),
                        None => println!(" -> \"{}\"", clue.text),
                    }
                }
            }
        }
    }
}

/// One JSON object per line, for machine consumers.
pub struct JsonLinesSink;

impl EventSink for JsonLinesSink {
    fn emit(&mut self, event: Event) {
        match serde_json::to_string(&event) {
            Ok(line) => println!("{line}"),
            Err(err) => error!(%err, "failed to serialize event"),
        }
    }
}

/// Captures events for assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<Event>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: Event) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_source_drains_then_signals_exhaustion() {
        let mut source = ScriptedSource::new(["left", "quit"]);
        assert_eq!(source.next_line().await.unwrap().as_deref(), Some("left"));
        assert_eq!(source.next_line().await.unwrap().as_deref(), Some("quit"));
        assert_eq!(source.next_line().await.unwrap(), None);
        assert_eq!(source.next_line().await.unwrap(), None);
    }

    #[test]
    fn recording_sink_keeps_events_in_emission_order() {
        let mut sink = RecordingSink::default();
        sink.emit(Event::RoomClean);
        sink.emit(Event::DeadEnd);
        assert_eq!(sink.events, vec![Event::RoomClean, Event::DeadEnd]);
    }
}
