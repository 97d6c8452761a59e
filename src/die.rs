//! A single die: its identity, its face, and whether it's being held.

use std::fmt;

use uuid::Uuid;

use crate::{faces::FaceSource, Error, Result};

/// The lowest face on a die.
pub const MIN_FACE: u8 = 1;
/// The highest face on a die.
pub const MAX_FACE: u8 = 6;

/// Opaque identity for a [`Die`], stable for as long as the die exists.
///
/// Rendering layers should key on this rather than on the die's position. Every call to
/// [`Tenzies::new_game`](crate::Tenzies::new_game) makes new ones.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct DieId(Uuid);

impl DieId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for DieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.simple(), f)
    }
}

/// One six-sided die on the table.
///
/// The fields are private so a `Die` can't be coaxed into showing a seventh face. Read them with the accessors; the
/// only ways to change them go through [`Tenzies`](crate::Tenzies).
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Die {
    id: DieId,
    value: u8,
    held: bool,
}

impl Die {
    /// Roll a brand new, unheld die.
    pub fn roll(faces: &mut impl FaceSource) -> Self {
        Self {
            id: DieId::generate(),
            value: faces.face(),
            held: false,
        }
    }

    /// Make a die showing a specific face, e.g. to set up a particular table.
    pub fn showing(value: u8, held: bool) -> Result<Self> {
        if !(MIN_FACE..=MAX_FACE).contains(&value) {
            return Err(Error::FaceOutOfRange(value));
        }
        Ok(Self {
            id: DieId::generate(),
            value,
            held,
        })
    }

    pub fn id(&self) -> DieId {
        self.id
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    pub(crate) fn toggle(&mut self) {
        self.held = !self.held;
    }

    /// Resample the face, unless the die is held.
    pub(crate) fn reroll(&mut self, faces: &mut impl FaceSource) -> bool {
        if self.held {
            return false;
        }
        self.value = faces.face();
        true
    }
}
