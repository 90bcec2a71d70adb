//! The exploration state machine.
//!
//! An expedition is either at a room or finished. Arrival at a room runs
//! the clue-collection logic once; movement is validated against the map
//! and invalid input never advances the position. Exploration ends at a
//! dead end (a leaf room, the normal ending) or on an explicit quit.

use anyhow::Result;
use tracing::{debug, info};

use crate::accusation;
use crate::clue_index::ClueIndex;
use crate::command::Command;
use crate::events::{ClueRecord, Event};
use crate::io::{CommandSource, EventSink};
use crate::limits::{clamp, MAX_SUSPECT_NAME};
use crate::map::{MansionMap, MapError, RoomId, Side};
use crate::suspect_tally::SuspectTally;

/// How much of the case-solving toolkit is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Pure map exploration: movement, dead ends, quit.
    Novice,
    /// Adds clue collection and the sorted report.
    Adventurer,
    /// Adds the suspect tally and the accusation phase.
    Master,
}

impl GameMode {
    pub fn collects_clues(self) -> bool {
        !matches!(self, GameMode::Novice)
    }

    pub fn tracks_suspects(self) -> bool {
        matches!(self, GameMode::Master)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    AtRoom(RoomId),
    Finished,
}

/// What applying one command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Position advanced to a child room (and the room was entered).
    Moved,
    /// Unrecognized input or missing path; position unchanged.
    Rejected,
    /// The exploration is over (quit, or the move ended at a dead end).
    Finished,
}

pub struct Expedition {
    map: MansionMap,
    mode: GameMode,
    position: Position,
    clues: ClueIndex,
    tally: SuspectTally,
}

impl Expedition {
    pub fn new(map: MansionMap, mode: GameMode) -> Result<Self, MapError> {
        let root = map.root().ok_or(MapError::EmptyMap)?;
        Ok(Self {
            map,
            mode,
            position: Position::AtRoom(root),
            clues: ClueIndex::new(),
            tally: SuspectTally::new(),
        })
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn finished(&self) -> bool {
        self.position == Position::Finished
    }

    pub fn current_room(&self) -> Option<RoomId> {
        match self.position {
            Position::AtRoom(id) => Some(id),
            Position::Finished => None,
        }
    }

    pub fn clues(&self) -> &ClueIndex {
        &self.clues
    }

    pub fn tally(&self) -> &SuspectTally {
        &self.tally
    }

    /// Runs the arrival logic for the current room: entry event, clue
    /// collection on a first visit, and dead-end termination when the room
    /// has no way out.
    pub fn arrive(&mut self, sink: &mut dyn EventSink) {
        let Position::AtRoom(id) = self.position else {
            return;
        };
        let room = self.map.room(id);
        sink.emit(Event::EnteredRoom {
            room: room.name().to_string(),
        });

        if self.mode.collects_clues() {
            let found = room
                .clue()
                .map(|c| (c.text().to_string(), c.suspect().map(str::to_string), c.collected()));
            match found {
                None => sink.emit(Event::RoomClean),
                Some((_, _, true)) => sink.emit(Event::ClueAlreadyCollected),
                Some((text, suspect, false)) => {
                    self.clues.insert(&text, suspect.as_deref());
                    if self.mode.tracks_suspects() {
                        if let Some(name) = suspect.as_deref() {
                            let count = self.tally.increment(name);
                            debug!(suspect = name, count, "clue implicates suspect");
                        }
                    }
                    self.map.collect_clue(id);
                    sink.emit(Event::ClueFound { text, suspect });
                }
            }
        }

        if self.map.room(id).is_leaf() {
            info!(room = self.map.room(id).name(), "dead end reached");
            sink.emit(Event::DeadEnd);
            self.position = Position::Finished;
        }
    }

    /// Applies one operator line. Invalid input or a direction without a
    /// child emits `InvalidMove` and leaves the position untouched.
    pub fn step(&mut self, input: &str, sink: &mut dyn EventSink) -> StepOutcome {
        let Position::AtRoom(id) = self.position else {
            return StepOutcome::Finished;
        };
        let Some(command) = Command::parse(input) else {
            sink.emit(Event::InvalidMove {
                input: input.trim().to_string(),
            });
            return StepOutcome::Rejected;
        };
        let side = match command {
            Command::Quit => {
                sink.emit(Event::ExplorationEnded);
                self.position = Position::Finished;
                return StepOutcome::Finished;
            }
            Command::Left => Side::Left,
            Command::Right => Side::Right,
        };
        match self.map.room(id).child(side) {
            None => {
                sink.emit(Event::InvalidMove {
                    input: input.trim().to_string(),
                });
                StepOutcome::Rejected
            }
            Some(next) => {
                self.position = Position::AtRoom(next);
                self.arrive(sink);
                if self.finished() {
                    StepOutcome::Finished
                } else {
                    StepOutcome::Moved
                }
            }
        }
    }

    fn emit_move_prompt(&self, sink: &mut dyn EventSink) {
        if let Position::AtRoom(id) = self.position {
            let room = self.map.room(id);
            sink.emit(Event::MovePrompt {
                left: room
                    .child(Side::Left)
                    .map(|child| self.map.room(child).name().to_string()),
                right: room
                    .child(Side::Right)
                    .map(|child| self.map.room(child).name().to_string()),
            });
        }
    }

    /// Drives the exploration to completion: arrival at the starting room,
    /// then one command per turn until a dead end or a quit. End of input
    /// counts as a quit.
    pub async fn run(
        &mut self,
        source: &mut dyn CommandSource,
        sink: &mut dyn EventSink,
    ) -> Result<()> {
        self.arrive(sink);
        while let Position::AtRoom(_) = self.position {
            self.emit_move_prompt(sink);
            match source.next_line().await? {
                Some(line) => {
                    self.step(&line, sink);
                }
                None => {
                    sink.emit(Event::ExplorationEnded);
                    self.position = Position::Finished;
                }
            }
        }
        Ok(())
    }

    /// Accusation phase: asks for a name, judges it against the tally,
    /// announces the verdict. Exhausted input skips the phase entirely.
    pub async fn run_accusation(
        &self,
        source: &mut dyn CommandSource,
        sink: &mut dyn EventSink,
    ) -> Result<()> {
        sink.emit(Event::AccusationPrompt);
        let Some(line) = source.next_line().await? else {
            return Ok(());
        };
        let accused = clamp(line.trim(), MAX_SUSPECT_NAME);
        let (count, verdict) = accusation::evaluate(&self.tally, &accused);
        info!(suspect = accused.as_str(), count, ?verdict, "accusation judged");
        sink.emit(Event::Accusation {
            suspect: accused,
            count,
            verdict,
        });
        Ok(())
    }

    /// Sorted snapshot of everything collected so far.
    pub fn clue_report(&self) -> Vec<ClueRecord> {
        self.clues
            .iter()
            .map(|(text, suspect)| ClueRecord {
                text: text.to_string(),
                suspect: suspect.map(str::to_string),
            })
            .collect()
    }
}
