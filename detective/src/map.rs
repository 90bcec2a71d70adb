//! The mansion map: a fixed binary tree of rooms.
//!
//! Rooms live in an arena owned by the map and refer to each other by id.
//! The layout is built once, before exploration starts; `attach` validates
//! that the id graph stays a tree (each side set at most once, each room
//! attached under at most one parent, never the starting room, never
//! itself). During exploration the only mutable state is the per-room
//! collected flag.

use crate::limits::{clamp, MAX_CLUE_TEXT, MAX_ROOM_NAME, MAX_SUSPECT_NAME};

pub type RoomId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct Clue {
    text: String,
    suspect: Option<String>,
    collected: bool,
}

impl Clue {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn suspect(&self) -> Option<&str> {
        self.suspect.as_deref()
    }

    pub fn collected(&self) -> bool {
        self.collected
    }
}

#[derive(Debug, Clone)]
pub struct Room {
    name: String,
    clue: Option<Clue>,
    left: Option<RoomId>,
    right: Option<RoomId>,
    attached: bool,
}

impl Room {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn clue(&self) -> Option<&Clue> {
        self.clue.as_ref()
    }

    pub fn child(&self, side: Side) -> Option<RoomId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("unknown room id {0}")]
    UnknownRoom(RoomId),
    #[error("room {room} already has a {side:?} child")]
    SideOccupied { room: RoomId, side: Side },
    #[error("room {0} is already attached under a parent")]
    AlreadyAttached(RoomId),
    #[error("the starting room cannot be attached under another room")]
    RootAttached,
    #[error("room {0} cannot be attached to itself")]
    SelfAttach(RoomId),
    #[error("the map has no rooms")]
    EmptyMap,
}

/// Arena of rooms. The first room added is the starting room.
#[derive(Debug, Clone, Default)]
pub struct MansionMap {
    rooms: Vec<Room>,
}

impl MansionMap {
    pub fn new() -> Self {
        Self { rooms: Vec::new() }
    }

    /// Adds a room without a clue. Over-long names are truncated.
    pub fn add_room(&mut self, name: &str) -> RoomId {
        self.push(name, None)
    }

    /// Adds a clue-bearing room, `collected` starting out false.
    pub fn add_clue_room(&mut self, name: &str, clue_text: &str, suspect: Option<&str>) -> RoomId {
        let clue = Clue {
            text: clamp(clue_text, MAX_CLUE_TEXT),
            suspect: suspect.map(|s| clamp(s, MAX_SUSPECT_NAME)),
            collected: false,
        };
        self.push(name, Some(clue))
    }

    fn push(&mut self, name: &str, clue: Option<Clue>) -> RoomId {
        let id = self.rooms.len();
        self.rooms.push(Room {
            name: clamp(name, MAX_ROOM_NAME),
            clue,
            left: None,
            right: None,
            attached: false,
        });
        id
    }

    /// Wires `child` under one side of `parent`. Construction time only;
    /// every rejection is a scenario-building bug, not a runtime condition.
    pub fn attach(&mut self, parent: RoomId, side: Side, child: RoomId) -> Result<(), MapError> {
        if parent == child {
            return Err(MapError::SelfAttach(parent));
        }
        if parent >= self.rooms.len() {
            return Err(MapError::UnknownRoom(parent));
        }
        if child >= self.rooms.len() {
            return Err(MapError::UnknownRoom(child));
        }
        if child == 0 {
            return Err(MapError::RootAttached);
        }
        if self.rooms[child].attached {
            return Err(MapError::AlreadyAttached(child));
        }
        let slot = match side {
            Side::Left => &mut self.rooms[parent].left,
            Side::Right => &mut self.rooms[parent].right,
        };
        if slot.is_some() {
            return Err(MapError::SideOccupied { room: parent, side });
        }
        *slot = Some(child);
        self.rooms[child].attached = true;
        Ok(())
    }

    /// The starting room, `None` while the map is empty.
    pub fn root(&self) -> Option<RoomId> {
        if self.rooms.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    /// Looks up a room by id. Ids are only ever produced by this map, so an
    /// out-of-range id is a caller bug and panics like any slice index.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id]
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Marks the room's clue as collected. A room without a clue has no flag
    /// to flip, so this is a no-op there.
    pub(crate) fn collect_clue(&mut self, id: RoomId) {
        if let Some(clue) = self.rooms[id].clue.as_mut() {
            clue.collected = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_rooms() -> (MansionMap, RoomId, RoomId) {
        let mut map = MansionMap::new();
        let a = map.add_room("Hall");
        let b = map.add_room("Pantry");
        (map, a, b)
    }

    #[test]
    fn first_room_is_the_root() {
        let (map, a, _) = two_rooms();
        assert_eq!(map.root(), Some(a));
        assert!(MansionMap::new().root().is_none());
    }

    #[test]
    fn attach_wires_one_side_once() {
        let (mut map, a, b) = two_rooms();
        map.attach(a, Side::Left, b).unwrap();
        assert_eq!(map.room(a).child(Side::Left), Some(b));
        assert_eq!(map.room(a).child(Side::Right), None);

        let c = map.add_room("Cellar");
        assert!(matches!(
            map.attach(a, Side::Left, c),
            Err(MapError::SideOccupied { .. })
        ));
    }

    #[test]
    fn a_room_gets_at_most_one_parent() {
        let (mut map, a, b) = two_rooms();
        let c = map.add_room("Cellar");
        map.attach(a, Side::Left, b).unwrap();
        assert!(matches!(
            map.attach(c, Side::Left, b),
            Err(MapError::AlreadyAttached(_))
        ));
    }

    #[test]
    fn degenerate_attachments_are_rejected() {
        let (mut map, a, b) = two_rooms();
        assert!(matches!(
            map.attach(a, Side::Left, a),
            Err(MapError::SelfAttach(_))
        ));
        assert!(matches!(
            map.attach(b, Side::Left, a),
            Err(MapError::RootAttached)
        ));
        assert!(matches!(
            map.attach(a, Side::Left, 99),
            Err(MapError::UnknownRoom(99))
        ));
    }

    #[test]
    fn leaf_means_no_children_at_all() {
        let (mut map, a, b) = two_rooms();
        assert!(map.room(a).is_leaf());
        map.attach(a, Side::Right, b).unwrap();
        assert!(!map.room(a).is_leaf());
        assert!(map.room(b).is_leaf());
    }

    #[test]
    fn over_long_strings_are_truncated_on_entry() {
        let mut map = MansionMap::new();
        let name = "N".repeat(200);
        let text = "T".repeat(200);
        let id = map.add_clue_room(&name, &text, Some("Elias"));
        assert_eq!(map.room(id).name().len(), MAX_ROOM_NAME);
        assert_eq!(map.room(id).clue().unwrap().text().len(), MAX_CLUE_TEXT);
    }

    #[test]
    fn collecting_flips_the_flag_only_where_a_clue_exists() {
        let mut map = MansionMap::new();
        let a = map.add_clue_room("Hall", "A torn note.", Some("Diana"));
        let b = map.add_room("Pantry");
        map.collect_clue(a);
        map.collect_clue(b);
        assert!(map.room(a).clue().unwrap().collected());
        assert!(map.room(b).clue().is_none());
    }
}
