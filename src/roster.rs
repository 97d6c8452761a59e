//! The dice on the table, and the one question worth asking about them: has the player won?

use std::collections::HashSet;

use crate::{
    die::{Die, DieId},
    faces::FaceSource,
    Error, Result,
};

/// How many dice are on the table. Always.
pub const ROSTER_LEN: usize = 10;

/// The ten dice of a game, in display order.
///
/// Position is only for display; use [`DieId`] to find a specific die. There's no `won` field here; ask
/// [`Roster::is_won`] every time.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Roster {
    dice: [Die; ROSTER_LEN],
}

impl Roster {
    /// Roll a whole new table: fresh ids, fresh faces, nothing held.
    pub fn roll(faces: &mut impl FaceSource) -> Self {
        Self {
            dice: std::array::from_fn(|_| Die::roll(faces)),
        }
    }

    /// Assemble a roster out of specific dice, checking there's exactly [`ROSTER_LEN`] of them and no id repeats.
    pub fn from_dice(dice: impl IntoIterator<Item = Die>) -> Result<Self> {
        let dice: Vec<Die> = dice.into_iter().collect();
        let dice: [Die; ROSTER_LEN] = dice
            .try_into()
            .map_err(|v: Vec<Die>| Error::RosterSize(v.len()))?;
        let mut seen = HashSet::with_capacity(ROSTER_LEN);
        for die in &dice {
            if !seen.insert(die.id()) {
                return Err(Error::DuplicateId(die.id()));
            }
        }
        Ok(Self { dice })
    }

    /// Whether the game is won: every die is held, and they all show the same face.
    ///
    /// A table that happens to roll ten of a kind isn't won until the player holds all of them.
    pub fn is_won(&self) -> bool {
        let first = self.dice[0].value();
        self.dice.iter().all(|d| d.is_held() && d.value() == first)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Die> + '_ {
        self.dice.iter()
    }

    /// The die at a display position (0-based), if there is one.
    pub fn get(&self, position: usize) -> Option<&Die> {
        self.dice.get(position)
    }

    pub fn find(&self, id: DieId) -> Option<&Die> {
        self.dice.iter().find(|d| d.id() == id)
    }

    pub fn held_count(&self) -> usize {
        self.dice.iter().filter(|d| d.is_held()).count()
    }

    /// Flip the held flag on the die with this id. Returns whether there was one.
    pub(crate) fn toggle(&mut self, id: DieId) -> bool {
        match self.dice.iter_mut().find(|d| d.id() == id) {
            Some(die) => {
                die.toggle();
                true
            }
            None => false,
        }
    }

    /// Reroll every unheld die, returning how many got rerolled.
    pub(crate) fn reroll_unheld(&mut self, faces: &mut impl FaceSource) -> usize {
        let mut rerolled = 0;
        for die in self.dice.iter_mut() {
            if die.reroll(faces) {
                rerolled += 1;
            }
        }
        rerolled
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Die;
    type IntoIter = std::slice::Iter<'a, Die>;

    fn into_iter(self) -> Self::IntoIter {
        self.dice.iter()
    }
}

#[cfg(test)]
pub(crate) mod test {
    use crate::faces::test::Loaded;

    use super::*;

    /// Build a roster out of `(value, held)` pairs.
    pub(crate) fn table(spec: [(u8, bool); ROSTER_LEN]) -> Roster {
        Roster::from_dice(spec.iter().map(|&(v, h)| Die::showing(v, h).unwrap())).unwrap()
    }

    #[test]
    fn fresh_roster_is_well_formed() {
        let roster = Roster::roll(&mut rand::thread_rng());
        assert_eq!(roster.iter().count(), ROSTER_LEN);
        assert!(roster.iter().all(|d| (1..=6).contains(&d.value())));
        assert!(roster.iter().all(|d| !d.is_held()));
        let ids: HashSet<_> = roster.iter().map(Die::id).collect();
        assert_eq!(ids.len(), ROSTER_LEN);
    }

    #[test]
    fn all_held_and_equal_is_won() {
        let roster = table([(3, true); ROSTER_LEN]);
        assert!(roster.is_won());
    }

    #[test]
    fn one_unheld_is_not_won() {
        let mut spec = [(3, true); ROSTER_LEN];
        spec[7].1 = false;
        assert!(!table(spec).is_won());
    }

    #[test]
    fn one_mismatch_is_not_won() {
        let mut spec = [(5, true); ROSTER_LEN];
        spec[0].0 = 4;
        assert!(!table(spec).is_won());
        let mut spec = [(5, true); ROSTER_LEN];
        spec[9].0 = 4;
        assert!(!table(spec).is_won());
    }

    #[test]
    fn ten_of_a_kind_unheld_is_not_won() {
        let roster = Roster::roll(&mut Loaded::always(2));
        assert!(roster.iter().all(|d| d.value() == 2));
        assert!(!roster.is_won());
    }

    #[test]
    fn from_dice_checks_size() {
        let few = (0..9).map(|_| Die::showing(1, false).unwrap());
        assert!(matches!(Roster::from_dice(few), Err(Error::RosterSize(9))));
        let many = (0..11).map(|_| Die::showing(1, false).unwrap());
        assert!(matches!(Roster::from_dice(many), Err(Error::RosterSize(11))));
    }

    #[test]
    fn from_dice_checks_ids() {
        let die = Die::showing(1, false).unwrap();
        let mut dice: Vec<_> = (0..9).map(|_| Die::showing(2, false).unwrap()).collect();
        dice.insert(4, die);
        dice[8] = die;
        match Roster::from_dice(dice) {
            Err(Error::DuplicateId(id)) => assert_eq!(id, die.id()),
            other => panic!("expected a duplicate id, got {:?}", other),
        }
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut roster = table([(1, false); ROSTER_LEN]);
        let before = roster.clone();
        let stranger = Die::showing(1, false).unwrap();
        assert!(!roster.toggle(stranger.id()));
        assert_eq!(roster, before);
    }

    #[test]
    fn find_by_id_ignores_position() {
        let roster = Roster::roll(&mut rand::thread_rng());
        for (i, die) in roster.iter().enumerate() {
            assert_eq!(roster.find(die.id()), roster.get(i));
        }
        assert!(roster.get(ROSTER_LEN).is_none());
    }
}
