//! Core data types and structures for the group draw.
//!
//! This module defines the value types shared by the roster, sampler, viewport
//! mapping and controller: geometry records, the fixed group and button labels,
//! and the group assignment shown on the board.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// Identifier of a participant as read from the roster.
pub type ParticipantId = i64;

/// A single participant loaded from the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Display name, trimmed and never empty
    pub name: String,
    /// Participant identifier drawn into groups
    pub id: ParticipantId,
}

impl RosterEntry {
    /// Creates a new roster entry.
    pub fn new(name: impl Into<String>, id: ParticipantId) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}

/// A point in viewport space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate
    pub y: f32,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle given by its top-left corner and size.
///
/// The same record is used for rectangles authored in design space and for
/// their mapped counterparts in viewport space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub w: f32,
    /// Height
    pub h: f32,
}

impl Rect {
    /// Creates a new rectangle.
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Returns whether the point lies inside the rectangle.
    ///
    /// Containment is half-open on both axes: a point on the left or top edge is
    /// inside, a point on the right or bottom edge is outside. Two rectangles that
    /// share an edge therefore never both contain the same point.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.w
            && point.y >= self.y
            && point.y < self.y + self.h
    }

    /// Center of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// The four result groups, in their fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupLabel {
    /// First group
    Red,
    /// Second group
    Yellow,
    /// Third group
    Blue,
    /// Fourth group
    Purple,
}

impl GroupLabel {
    /// All labels in declared order. Drawn chunks are assigned in this order.
    pub const ALL: [GroupLabel; 4] = [
        GroupLabel::Red,
        GroupLabel::Yellow,
        GroupLabel::Blue,
        GroupLabel::Purple,
    ];

    /// Position of the label in [`GroupLabel::ALL`].
    pub const fn index(self) -> usize {
        match self {
            GroupLabel::Red => 0,
            GroupLabel::Yellow => 1,
            GroupLabel::Blue => 2,
            GroupLabel::Purple => 3,
        }
    }

    /// Lowercase name of the label.
    pub const fn name(self) -> &'static str {
        match self {
            GroupLabel::Red => "red",
            GroupLabel::Yellow => "yellow",
            GroupLabel::Blue => "blue",
            GroupLabel::Purple => "purple",
        }
    }
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The clickable draw buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonLabel {
    /// Draw four groups of two
    Two,
    /// Draw four groups of three
    Three,
}

impl ButtonLabel {
    /// Number of participants per group drawn by this button.
    pub const fn group_size(self) -> usize {
        match self {
            ButtonLabel::Two => 2,
            ButtonLabel::Three => 3,
        }
    }
}

/// Whether the board is currently showing a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawState {
    /// Nothing drawn, no auto-clear pending
    Idle,
    /// A draw is displayed and an auto-clear is pending
    Showing,
}

/// The participants drawn into each of the four groups.
///
/// An assignment is either empty (all four groups empty) or holds four groups of
/// the same non-zero size. The only ways to build one are [`GroupAssignment::empty`]
/// and [`GroupAssignment::from_drawn`], which both keep that shape.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GroupAssignment {
    groups: [Vec<ParticipantId>; 4],
}

impl GroupAssignment {
    /// Creates an assignment with all four groups empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Slices a drawn sequence into four contiguous chunks of `group_size`.
    ///
    /// Chunks are assigned in [`GroupLabel::ALL`] order: the first `group_size`
    /// ids go to red, the next to yellow, and so on.
    ///
    /// # Arguments
    ///
    /// * `drawn` - The drawn ids, exactly `4 * group_size` of them
    /// * `group_size` - Participants per group, non-zero
    ///
    /// # Returns
    ///
    /// `None` if `group_size` is zero or `drawn` has the wrong length.
    pub fn from_drawn(drawn: Vec<ParticipantId>, group_size: usize) -> Option<Self> {
        if group_size == 0 || drawn.len() != GroupLabel::ALL.len() * group_size {
            return None;
        }
        let mut chunks = drawn.chunks(group_size).map(<[ParticipantId]>::to_vec);
        let groups = std::array::from_fn(|_| chunks.next().unwrap_or_default());
        Some(Self { groups })
    }

    /// Returns whether all four groups are empty.
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }

    /// Participants per group, zero when empty.
    pub fn group_size(&self) -> usize {
        self.groups[0].len()
    }

    /// The drawn ids of one group.
    pub fn group(&self, label: GroupLabel) -> &[ParticipantId] {
        &self.groups[label.index()]
    }

    /// Iterates over the groups in declared label order.
    pub fn iter(&self) -> impl Iterator<Item = (GroupLabel, &[ParticipantId])> {
        GroupLabel::ALL
            .into_iter()
            .map(move |label| (label, self.group(label)))
    }

    /// All drawn ids in label order.
    pub fn all_ids(&self) -> Vec<ParticipantId> {
        self.groups.iter().flatten().copied().collect()
    }

    /// Renders one group as a comma-separated list, e.g. `"3, 17"`.
    pub fn display_text(&self, label: GroupLabel) -> String {
        self.group(label)
            .iter()
            .map(ParticipantId::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Index<GroupLabel> for GroupAssignment {
    type Output = [ParticipantId];

    fn index(&self, label: GroupLabel) -> &Self::Output {
        self.group(label)
    }
}
