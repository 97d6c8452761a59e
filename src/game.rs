//! The game state controller. Owns the table, and is the only thing allowed to change it.
//!
//! Whatever's drawing the game only ever does two things to it: hold a die, or press the big button. Those come in as
//! [`Intent`]s. Everything it needs to draw comes out of [`Tenzies::roster`] and [`Tenzies::phase`], recomputed every
//! time it asks.

use std::fmt;

use rand::{rngs::SmallRng, SeedableRng};

use crate::{
    die::DieId,
    faces::FaceSource,
    roster::Roster,
    watch::{Announce, Watcher, WinEdge},
};

/// Something the player wants to do, forwarded from whatever's drawing the game.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Intent {
    /// Hold the die with this id, or let go of it if it's already held.
    Hold(DieId),
    /// Press the action button: roll if the game's going, start over if it's won.
    RollOrNewGame,
}

/// Tells the caller what, if anything, an [`Intent`] changed.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Response {
    /// Nothing in particular needs to be done.
    Nothing,
    /// The table has changed, and the screen needs to be redrawn.
    Redraw,
}

/// Which half of the game we're in. Always derived from the roster, never stored.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Phase {
    /// Still rolling.
    Playing,
    /// Every die held, all showing the same face.
    Won,
}

impl Phase {
    /// What the action button should say.
    pub fn action_label(self) -> &'static str {
        match self {
            Phase::Playing => "Roll",
            Phase::Won => "New Game",
        }
    }
}

/// A game of Tenzies.
///
/// `F` is where the dice get their faces; by default a [`SmallRng`]. See [`Tenzies::from_entropy`] and
/// [`Tenzies::seeded`] for the usual ways to make one.
pub struct Tenzies<F: FaceSource = SmallRng> {
    roster: Roster,
    faces: F,
    edge: WinEdge,
    watchers: Vec<Box<dyn Watcher>>,
}

impl Tenzies<SmallRng> {
    /// A game with unpredictable dice, announcing wins to the log.
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }

    /// A game whose faces are reproducible from `seed`, announcing wins to the log. Ids are still random.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<F: FaceSource> Tenzies<F> {
    /// Start a fresh game with the given dice, announcing wins to the log.
    pub fn new(mut faces: F) -> Self {
        let roster = Roster::roll(&mut faces);
        let mut game = Self::with_roster(roster, faces);
        game.watch(Announce);
        game
    }

    /// Pick up from a specific table, with no watchers.
    ///
    /// If the table is already won, that doesn't count as *becoming* won; watchers will only hear about the next win.
    pub fn with_roster(roster: Roster, faces: F) -> Self {
        Self {
            edge: WinEdge::new(roster.is_won()),
            roster,
            faces,
            watchers: vec![],
        }
    }

    /// Have a [`Watcher`] hear about every future win.
    pub fn watch(&mut self, watcher: impl Watcher + 'static) -> &mut Self {
        self.watchers.push(Box::new(watcher));
        self
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Whether the game is won. Recomputed from the table on every call.
    pub fn is_won(&self) -> bool {
        self.roster.is_won()
    }

    pub fn phase(&self) -> Phase {
        if self.is_won() {
            Phase::Won
        } else {
            Phase::Playing
        }
    }

    pub fn held_count(&self) -> usize {
        self.roster.held_count()
    }

    /// Throw the whole table out and roll ten new dice, none held.
    pub fn new_game(&mut self) -> &Roster {
        self.roster = Roster::roll(&mut self.faces);
        tracing::debug!("rolled a fresh table");
        for w in self.watchers.iter_mut() {
            w.new_game(&self.roster);
        }
        self.settle();
        &self.roster
    }

    /// Hold the die with this id, or release it if it's already held. Nothing else changes.
    ///
    /// An id that isn't on the table is quietly ignored.
    pub fn toggle_hold(&mut self, id: DieId) -> &Roster {
        if self.roster.toggle(id) {
            tracing::debug!(%id, held = self.roster.held_count(), "toggled hold");
            self.settle();
        } else {
            tracing::debug!(%id, "ignoring hold for a die that isn't on the table");
        }
        &self.roster
    }

    /// Reroll every die that isn't held. Held dice don't change at all.
    pub fn roll_held(&mut self) -> &Roster {
        let rerolled = self.roster.reroll_unheld(&mut self.faces);
        tracing::debug!(rerolled, held = self.roster.held_count(), "rolled");
        self.settle();
        &self.roster
    }

    /// The action button: start over if the game's won, otherwise roll.
    pub fn roll_or_new_game(&mut self) -> &Roster {
        match self.phase() {
            Phase::Won => self.new_game(),
            Phase::Playing => self.roll_held(),
        }
    }

    /// Act on something the player did.
    pub fn apply(&mut self, intent: Intent) -> Response {
        match intent {
            Intent::Hold(id) => {
                if self.roster.find(id).is_none() {
                    return Response::Nothing;
                }
                self.toggle_hold(id);
            }
            Intent::RollOrNewGame => {
                self.roll_or_new_game();
            }
        }
        Response::Redraw
    }

    /// Check for a new win after the table changes, and let the watchers know if there is one.
    fn settle(&mut self) {
        if self.edge.observe(self.roster.is_won()) {
            for w in self.watchers.iter_mut() {
                w.won(&self.roster);
            }
        }
    }
}

impl<F: FaceSource> fmt::Debug for Tenzies<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(std::any::type_name::<Self>())
            .field("roster", &self.roster)
            .field("edge", &self.edge)
            .field("watchers", &self.watchers.len())
            .finish()
    }
}
