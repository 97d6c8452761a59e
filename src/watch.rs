//! Reacting to wins.
//!
//! Drawing the table is a function of the roster: if it's won, show the confetti, and that's that. But some things
//! should happen *once*, when the game becomes won, rather than every time someone looks: logging, sounds,
//! achievements. Those are [`Watcher`]s. The controller runs every state change through a [`WinEdge`], and calls its
//! watchers only when the game flips from not-won to won.

use crate::roster::Roster;

/// Something that wants to know when the game is won.
///
/// Closures taking a `&Roster` are watchers too, so for quick things you can just pass one to
/// [`Tenzies::watch`](crate::Tenzies::watch).
pub trait Watcher: Send {
    /// The game just became won. Called exactly once per win.
    fn won(&mut self, roster: &Roster);

    /// A new game just started.
    ///
    /// By default, does nothing, under the assumption most watchers only care about wins.
    fn new_game(&mut self, _roster: &Roster) {}
}

impl<F: FnMut(&Roster) + Send> Watcher for F {
    fn won(&mut self, roster: &Roster) {
        self(roster)
    }
}

/// Remembers the last thing it saw, so it can tell you when something turned on.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct WinEdge {
    was_won: bool,
}

impl WinEdge {
    /// Start tracking, with `won` as the state to compare the first [`Self::observe`] against.
    pub fn new(won: bool) -> Self {
        Self { was_won: won }
    }

    /// Look at the current state. Returns true only if it's won now and wasn't last time.
    pub fn observe(&mut self, won: bool) -> bool {
        let rising = won && !self.was_won;
        self.was_won = won;
        rising
    }
}

/// The default watcher: tells the log about every win.
#[derive(Clone, Copy, Debug, Default)]
pub struct Announce;

impl Watcher for Announce {
    fn won(&mut self, roster: &Roster) {
        let face = roster.get(0).map(|d| d.value()).unwrap_or_default();
        tracing::info!(face, "You won the game! Tenzieeeeeees!");
    }

    fn new_game(&mut self, _roster: &Roster) {
        tracing::debug!("new game started");
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn edge_fires_on_rise_only() {
        let mut edge = WinEdge::new(false);
        assert!(!edge.observe(false));
        assert!(edge.observe(true));
        assert!(!edge.observe(true));
        assert!(!edge.observe(true));
        assert!(!edge.observe(false));
        assert!(edge.observe(true));
    }

    #[test]
    fn edge_starting_won_waits_for_a_fall() {
        let mut edge = WinEdge::new(true);
        assert!(!edge.observe(true));
        assert!(!edge.observe(false));
        assert!(edge.observe(true));
    }

    #[test]
    fn closures_are_watchers() {
        let mut count = 0;
        {
            let mut w = |_: &Roster| count += 1;
            let roster = Roster::roll(&mut rand::thread_rng());
            Watcher::won(&mut w, &roster);
            Watcher::new_game(&mut w, &roster);
            Watcher::won(&mut w, &roster);
        }
        assert_eq!(count, 2);
    }
}
