//! Structured events emitted by the engine.
//!
//! Sinks receive these and own every piece of human-facing rendering; the
//! engine never formats presentation strings itself.

use serde::Serialize;

use crate::accusation::Verdict;

/// One clue in the final report, in sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClueRecord {
    pub text: String,
    pub suspect: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum Event {
    EnteredRoom {
        room: String,
    },
    ClueFound {
        text: String,
        suspect: Option<String>,
    },
    ClueAlreadyCollected,
    RoomClean,
    DeadEnd,
    InvalidMove {
        input: String,
    },
    /// Choices available from the current room, for prompt rendering.
    MovePrompt {
        left: Option<String>,
        right: Option<String>,
    },
    ExplorationEnded,
    AccusationPrompt,
    Accusation {
        suspect: String,
        count: u32,
        verdict: Verdict,
    },
    ClueReport {
        clues: Vec<ClueRecord>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_a_tag() {
        assert_eq!(
            serde_json::to_string(&Event::DeadEnd).unwrap(),
            r#"{"event":"deadEnd"}"#
        );
        let found = Event::ClueFound {
            text: "a torn note".to_string(),
            suspect: Some("Diana".to_string()),
        };
        assert_eq!(
            serde_json::to_string(&found).unwrap(),
            r#"{"event":"clueFound","text":"a torn note","suspect":"Diana"}"#
        );
    }
}
