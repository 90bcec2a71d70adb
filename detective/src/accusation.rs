//! Final judgement of an accusation against the collected tally.

use serde::Serialize;

use crate::limits::ACCUSATION_THRESHOLD;
use crate::suspect_tally::SuspectTally;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Verdict {
    /// Enough clues to make the accusation stand.
    Sustainable,
    /// Some clues, but below the threshold.
    Insufficient,
    /// Not a single collected clue implicates the accused.
    Baseless,
}

impl Verdict {
    pub fn for_count(count: u32) -> Verdict {
        if count >= ACCUSATION_THRESHOLD {
            Verdict::Sustainable
        } else if count > 0 {
            Verdict::Insufficient
        } else {
            Verdict::Baseless
        }
    }
}

/// Judges `accused` by their clue count. Pure read of the tally; an unseen
/// name is an ordinary `Baseless`, not an error.
pub fn evaluate(tally: &SuspectTally, accused: &str) -> (u32, Verdict) {
    let count = tally.lookup(accused);
    (count, Verdict::for_count(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_threshold_splits_the_three_verdicts() {
        assert_eq!(Verdict::for_count(0), Verdict::Baseless);
        assert_eq!(Verdict::for_count(1), Verdict::Insufficient);
        assert_eq!(Verdict::for_count(2), Verdict::Insufficient);
        assert_eq!(Verdict::for_count(3), Verdict::Sustainable);
        assert_eq!(Verdict::for_count(4), Verdict::Sustainable);
    }

    #[test]
    fn evaluate_reads_the_tally_without_touching_it() {
        let mut tally = SuspectTally::new();
        tally.increment("Elias");
        tally.increment("Elias");
        assert_eq!(evaluate(&tally, "Elias"), (2, Verdict::Insufficient));
        assert_eq!(evaluate(&tally, "Bruno"), (0, Verdict::Baseless));
        assert_eq!(tally.lookup("Elias"), 2);
    }
}
