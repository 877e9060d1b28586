#![cfg(feature = "std")]

//! Text rendering of states and fixed-rate playback of a solution path.

use std::io::Write;
use std::string::String;

use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::search::Puzzle;
use crate::state::{BoatSide, State};

const RIVER: &str = "~~~~~~~~~~";
const BOAT: &str = "\\__/";

/// Consumer of solution states. Implementations decide how a state is shown;
/// pacing is handled by [`play`].
#[async_trait::async_trait]
pub trait Renderer: Send {
    /// Show `state`; `step` is 0 for the start state and counts crossings after it.
    async fn draw(&mut self, state: &State, step: usize, total: usize) -> anyhow::Result<()>;

    /// Called once after the last state has been drawn.
    async fn finish(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

fn row(glyph: char, present: i64, total: i32) -> String {
    let present = present.clamp(0, i64::from(total.max(0))) as usize;
    let total = total.max(0) as usize;
    let mut out = String::with_capacity(total);
    out.extend(std::iter::repeat(glyph).take(present));
    out.extend(std::iter::repeat('.').take(total - present));
    out
}

/// Two-line picture of both banks: missionaries on the first line, cannibals on
/// the second, with the boat drawn next to the bank that holds it.
pub fn render_scene(state: &State, missionaries: i32, cannibals: i32) -> String {
    let banks = state.banks(missionaries, cannibals);
    let (top_river, bottom_river) = match state.boat {
        BoatSide::Start => (std::format!("{}{}", BOAT, RIVER), std::format!("{}    ", RIVER)),
        BoatSide::Destination => (std::format!("{}{}", RIVER, BOAT), std::format!("    {}", RIVER)),
    };
    std::format!(
        "{} {} {}\n{} {} {}\n",
        row('M', banks.start.missionaries, missionaries),
        top_river,
        row('M', banks.destination.missionaries, missionaries),
        row('C', banks.start.cannibals, cannibals),
        bottom_river,
        row('C', banks.destination.cannibals, cannibals),
    )
}

/// Writes each state as a small text scene to any `Write` sink.
pub struct TextRenderer<W: Write + Send> {
    out: W,
    missionaries: i32,
    cannibals: i32,
}

impl<W: Write + Send> TextRenderer<W> {
    pub fn new(out: W, puzzle: &Puzzle) -> Self {
        Self {
            out,
            missionaries: puzzle.missionaries(),
            cannibals: puzzle.cannibals(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[async_trait::async_trait]
impl<W: Write + Send> Renderer for TextRenderer<W> {
    async fn draw(&mut self, state: &State, step: usize, total: usize) -> anyhow::Result<()> {
        writeln!(self.out, "Crossing {}/{}  {}", step, total, state)?;
        self.out
            .write_all(render_scene(state, self.missionaries, self.cannibals).as_bytes())?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    async fn finish(&mut self) -> anyhow::Result<()> {
        writeln!(self.out, "Everyone is across.")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Draw the start state and then every state of `path`, one per `period`.
/// The path must come from a completed search; nothing here inspects it.
pub async fn play<R: Renderer + ?Sized>(
    renderer: &mut R,
    puzzle: &Puzzle,
    path: &[State],
    period: Duration,
) -> anyhow::Result<()> {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let total = path.len();
    let frames = std::iter::once(puzzle.start()).chain(path.iter().copied());
    for (step, state) in frames.enumerate() {
        ticker.tick().await;
        log::debug!("drawing crossing {}/{}", step, total);
        renderer.draw(&state, step, total).await?;
    }
    renderer.finish().await
}
