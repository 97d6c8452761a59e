//! A line-at-a-time console front end.
//!
//! This is deliberately as thin as it can be: it draws the table, turns what the player types into [`Intent`]s, and
//! hands them to the [`Tenzies`] controller. The only thing it adds is translating the positions the player sees
//! into the [`DieId`]s the controller wants.

#![cfg(feature = "cli_crossterm")]

use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use crossterm::style::Stylize;
use rand::rngs::SmallRng;

use crate::{
    config::Config,
    die::{Die, DieId},
    faces::FaceSource,
    game::{Intent, Phase, Response, Tenzies},
    roster::ROSTER_LEN,
    Error, Result,
};

const TITLE: &str = "Tenzies";
const INSTRUCTIONS: &str = "Roll until all dice are the same. \
    Click each die to freeze it at its current value between rolls.";
const HELP: &str = "\
Commands:
  <enter>, r, roll    press the button (roll, or start a new game once you've won)
  3, h 3 5, hold 1 2  hold or release the dice at those positions
  ?, help             show this again
  q, quit, exit       leave";
const CONFETTI: &str = "*  .  +  *  .  +  *  TENZIES!  *  +  .  *  +  .  *";

/// One line of player input, parsed.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Command {
    /// Press the action button.
    Roll,
    /// Toggle hold on these 1-based positions.
    Hold(Vec<usize>),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let line = s.trim().to_ascii_lowercase();
        let mut words = line.split_whitespace().peekable();
        match words.peek().copied() {
            None | Some("r") | Some("roll") if line.split_whitespace().count() <= 1 => {
                return Ok(Command::Roll)
            }
            Some("?") | Some("help") => return Ok(Command::Help),
            Some("q") | Some("quit") | Some("exit") => return Ok(Command::Quit),
            Some("h") | Some("hold") => {
                words.next();
            }
            _ => (),
        }
        let positions = words
            .map(|w| w.parse::<usize>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| Error::UnknownCommand(s.trim().into()))?;
        if positions.is_empty() {
            return Err(Error::UnknownCommand(s.trim().into()));
        }
        Ok(Command::Hold(positions))
    }
}

/// A [`Tenzies`] game, plus what's needed to show it on a console.
pub struct Console<F: FaceSource = SmallRng> {
    game: Tenzies<F>,
    color: bool,
}

impl<F: FaceSource> Console<F> {
    pub fn new(game: Tenzies<F>, color: bool) -> Self {
        Self { game, color }
    }

    pub fn game(&self) -> &Tenzies<F> {
        &self.game
    }

    /// Turn 1-based display positions into die ids. Fails if any of them is off the table, so a typo doesn't half-apply.
    fn ids_at(&self, positions: &[usize]) -> Result<Vec<DieId>> {
        positions
            .iter()
            .map(|&p| {
                p.checked_sub(1)
                    .and_then(|i| self.game.roster().get(i))
                    .map(Die::id)
                    .ok_or(Error::NoSuchPosition(p))
            })
            .collect()
    }

    /// Act on one command. `Help` and `Quit` are the caller's business, and do nothing here.
    pub fn handle(&mut self, command: &Command) -> Result<Response> {
        tracing::trace!(?command, "handling command");
        match command {
            Command::Roll => Ok(self.game.apply(Intent::RollOrNewGame)),
            Command::Hold(positions) => {
                let mut response = Response::Nothing;
                for id in self.ids_at(positions)? {
                    if self.game.apply(Intent::Hold(id)) == Response::Redraw {
                        response = Response::Redraw;
                    }
                }
                Ok(response)
            }
            Command::Help | Command::Quit => Ok(Response::Nothing),
        }
    }

    fn render_die(&self, die: &Die) -> String {
        let face = die.value();
        match (self.color, die.is_held()) {
            (true, true) => format!(" {} ", face).black().on_green().to_string(),
            (true, false) => format!(" {} ", face).black().on_white().to_string(),
            (false, true) => format!("[{}]", face),
            (false, false) => format!(" {} ", face),
        }
    }

    /// Draw the whole table as text, ending in a newline.
    pub fn render(&self) -> String {
        let mut out = format!("{}\n{}\n\n", TITLE, INSTRUCTIONS);
        for i in 0..ROSTER_LEN {
            out.push_str(&format!("{:^3} ", i + 1));
        }
        out.push('\n');
        for die in self.game.roster() {
            out.push_str(&self.render_die(die));
            out.push(' ');
        }
        out.push('\n');
        let phase = self.game.phase();
        if phase == Phase::Won {
            out.push_str(&format!("\n{}\n", CONFETTI));
        }
        out.push_str(&format!("\n[ {} ]\n", phase.action_label()));
        out
    }

    /// Play until the input runs out or the player quits.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        writeln!(output, "{}\n", HELP)?;
        write!(output, "{}", self.render())?;
        loop {
            write!(output, "> ")?;
            output.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }
            let command = match line.parse::<Command>() {
                Ok(c) => c,
                Err(e) => {
                    tracing::debug!(%e, "bad input");
                    writeln!(output, "{} (try `help`)", e)?;
                    continue;
                }
            };
            match command {
                Command::Quit => break,
                Command::Help => writeln!(output, "{}", HELP)?,
                other => match self.handle(&other) {
                    Ok(Response::Redraw) => write!(output, "{}", self.render())?,
                    Ok(Response::Nothing) => (),
                    Err(e) => writeln!(output, "{}", e)?,
                },
            }
        }
        output.flush()?;
        Ok(())
    }
}

/// Set up a game the way `config` says, and play it on stdin/stdout.
pub fn play(config: &Config) -> Result<()> {
    let game = match config.seed {
        Some(seed) => {
            tracing::info!(seed, "starting a seeded game");
            Tenzies::seeded(seed)
        }
        None => Tenzies::from_entropy(),
    };
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Console::new(game, config.color).run(stdin.lock(), stdout.lock())
}
