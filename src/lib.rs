//! Tenzies: ten dice, roll until they all match.
//!
//! Hold dice between rolls to freeze them at their current face. Once every die is held and they all show the same
//! face, the game is won, and the button that said "Roll" says "New Game" instead.
//!
//! # Architecture
//!
//! There's one piece of state, the [`Roster`] of ten [`Die`]s, and it lives in the [`Tenzies`] controller. Nothing
//! else is allowed to change it. Whatever draws the game (the crate ships a console one, behind a feature) reads the
//! roster, asks [`Tenzies::phase`] whether it's won, and sends [`Intent`]s back: hold this die, or press the button.
//!
//! Whether the game is won is never stored anywhere. It's always recomputed from the roster, so it can't drift out
//! of sync with the dice. Things that should happen *once* when the game is won, rather than on every redraw, are
//! [`Watcher`]s; the controller calls them only when the game flips from not-won to won.
//!
//! Dice faces come from a [`FaceSource`], which every [`rand::Rng`] already is.
//!
//! # Features
//!
//! - `cli_crossterm` (default): the `console` front end and the `tenzies` binary, with held dice colored through
//!   `crossterm`.

pub mod config;
pub mod console;
pub mod die;
mod error;
pub mod faces;
pub mod game;
pub mod roster;
pub mod watch;

pub use crate::{
    config::Config,
    die::{Die, DieId},
    error::{Error, Result},
    faces::FaceSource,
    game::{Intent, Phase, Response, Tenzies},
    roster::{Roster, ROSTER_LEN},
    watch::{Watcher, WinEdge},
};
