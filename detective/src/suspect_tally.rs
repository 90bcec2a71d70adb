//! Per-suspect clue counts in a fixed-size chained hash table.
//!
//! The hash is the wrapping sum of the name's bytes reduced modulo the
//! bucket count, so it is order-insensitive and anagrams collide. The chain
//! scan compares full keys, so a collision only costs a few extra
//! comparisons. No deletion, no rehashing; the table never resizes.

use tracing::debug;

use crate::limits::BUCKET_COUNT;

#[derive(Debug, Clone)]
struct TallyEntry {
    suspect: String,
    count: u32,
    next: Option<Box<TallyEntry>>,
}

/// Bucket index for a suspect name.
pub fn bucket_of(name: &str) -> usize {
    let sum = name
        .bytes()
        .fold(0u32, |acc, byte| acc.wrapping_add(u32::from(byte)));
    sum as usize % BUCKET_COUNT
}

#[derive(Debug, Clone)]
pub struct SuspectTally {
    buckets: [Option<Box<TallyEntry>>; BUCKET_COUNT],
    len: usize,
}

impl SuspectTally {
    pub fn new() -> Self {
        Self {
            buckets: std::array::from_fn(|_| None),
            len: 0,
        }
    }

    /// Number of distinct suspects tracked.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bumps the count for `name`, creating an entry with count 1 at the
    /// head of its chain on first sight. Returns the new count.
    pub fn increment(&mut self, name: &str) -> u32 {
        let bucket = bucket_of(name);
        {
            let mut cur = self.buckets[bucket].as_deref_mut();
            while let Some(entry) = cur {
                if entry.suspect == name {
                    entry.count += 1;
                    debug!(suspect = name, count = entry.count, "tally incremented");
                    return entry.count;
                }
                cur = entry.next.as_deref_mut();
            }
        }

        let head = self.buckets[bucket].take();
        self.buckets[bucket] = Some(Box::new(TallyEntry {
            suspect: name.to_string(),
            count: 1,
            next: head,
        }));
        self.len += 1;
        debug!(suspect = name, bucket, "suspect added to tally");
        1
    }

    /// Count for `name`, 0 when the suspect was never seen. Pure read.
    pub fn lookup(&self, name: &str) -> u32 {
        let mut cur = self.buckets[bucket_of(name)].as_deref();
        while let Some(entry) = cur {
            if entry.suspect == name {
                return entry.count;
            }
            cur = entry.next.as_deref();
        }
        0
    }
}

impl Default for SuspectTally {
    fn default() -> Self {
        Self::new()
    }
}
