//! Controller: event loop and play/pause state machine.
//!
//! One thread owns the grid, the renderer, and the terminal for the whole
//! run. Each running tick handles input, advances exactly one generation,
//! and draws; the paused state blocks on input instead of spinning.

use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::{cursor::MoveTo, queue, style::Print};
use rand::rngs::StdRng;

use life_core::{Grid, Pattern, SimConfig};

use crate::config::CliConfig;
use crate::input::{self, Command};
use crate::render;
use crate::terminal::SizeSource;

/// Controller states. `Terminated` is final.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Running,
    Paused,
    Terminated,
}

pub struct App<W, S>
where
    W: Write,
    S: SizeSource,
{
    grid: Grid,
    /// Pattern to return to on reset; `None` means re-randomize.
    starting: Option<Pattern>,
    state: State,
    config: CliConfig,
    sim: SimConfig,
    out: W,
    size: S,
    rng: StdRng,
}

impl<W, S> App<W, S>
where
    W: Write,
    S: SizeSource,
{
    /// Builds the controller with a freshly seeded grid sized to the
    /// terminal: width = columns, height = 2x lines (two logical rows per
    /// terminal line).
    pub fn new(
        config: CliConfig,
        sim: SimConfig,
        starting: Option<Pattern>,
        out: W,
        size: S,
        rng: StdRng,
    ) -> Result<Self> {
        let (columns, lines) = size.size()?;
        let grid = Grid::new(columns as usize, lines as usize * 2, sim);
        let mut app = Self {
            grid,
            starting,
            state: State::Running,
            config,
            sim,
            out,
            size,
            rng,
        };
        app.seed();
        Ok(app)
    }

    /// Runs until terminated. The initial frame is drawn before the loop.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!(
            width = self.grid.width(),
            height = self.grid.height(),
            rate = self.config.rate,
            "starting simulation"
        );
        self.draw()?;
        loop {
            match self.state {
                State::Running => self.tick()?,
                State::Paused => self.paused_tick()?,
                State::Terminated => break,
            }
        }
        tracing::info!("simulation terminated");
        Ok(())
    }

    /// One running tick: throttle, input, one unconditional step, draw.
    fn tick(&mut self) -> Result<()> {
        if self.config.rate > 0 {
            thread::sleep(Duration::from_secs_f64(1.0 / f64::from(self.config.rate)));
        }
        if let Some(command) = input::poll_command()? {
            self.apply(command)?;
        }
        // A command may have paused or terminated the loop; only a still
        // running tick takes its unconditional generation.
        if self.state == State::Running {
            self.advance()?;
        }
        Ok(())
    }

    /// Blocks on input while paused; commands still act immediately.
    fn paused_tick(&mut self) -> Result<()> {
        if let Some(command) = input::wait_command()? {
            self.apply(command)?;
        }
        Ok(())
    }

    /// Applies one command to the state machine.
    pub fn apply(&mut self, command: Command) -> Result<()> {
        tracing::debug!(?command, state = ?self.state, "command");
        match command {
            Command::Exit => self.state = State::Terminated,
            Command::Pause => {
                self.state = match self.state {
                    State::Paused => State::Running,
                    _ => State::Paused,
                };
            }
            // While running this stacks on top of the tick's own step, so a
            // Step during play advances two generations. Deliberate.
            Command::Step => self.advance()?,
            Command::Reset => self.reset()?,
        }
        Ok(())
    }

    /// Advances one generation and redraws.
    fn advance(&mut self) -> Result<()> {
        self.grid.step();
        self.draw()
    }

    /// Re-measures the terminal, rebuilds the grid, and redraws.
    fn reset(&mut self) -> Result<()> {
        let (columns, lines) = self.size.size()?;
        self.grid = Grid::new(columns as usize, lines as usize * 2, self.sim);
        self.seed();
        tracing::info!(
            width = self.grid.width(),
            height = self.grid.height(),
            "grid reset"
        );
        self.draw()
    }

    /// Seeds from the starting pattern, or randomizes when there is none.
    fn seed(&mut self) {
        match &self.starting {
            Some(pattern) if !pattern.is_empty() => {
                self.grid.reset(pattern.cells().iter().copied());
            }
            _ => self.grid.randomize(&mut self.rng),
        }
    }

    fn draw(&mut self) -> Result<()> {
        let frame = render::render(&self.grid);
        queue!(self.out, MoveTo(0, 0), Print(frame))?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use rand::SeedableRng;

    use super::*;

    /// Size source the test can change between calls.
    #[derive(Clone)]
    struct SharedSize(Rc<Cell<(u16, u16)>>);

    impl SizeSource for SharedSize {
        fn size(&self) -> Result<(u16, u16)> {
            Ok(self.0.get())
        }
    }

    fn test_app(starting: Option<Pattern>) -> (App<Vec<u8>, SharedSize>, SharedSize) {
        let size = SharedSize(Rc::new(Cell::new((10, 5))));
        let app = App::new(
            CliConfig::default(),
            SimConfig::default(),
            starting,
            Vec::new(),
            size.clone(),
            StdRng::seed_from_u64(42),
        )
        .unwrap();
        (app, size)
    }

    fn live_cells(grid: &Grid) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if grid.cell_state(x as i32, y as i32) {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    fn blinker() -> Pattern {
        Pattern::parse(".O\n.O\n.O")
    }

    #[test]
    fn test_grid_sized_to_terminal() {
        let (app, _) = test_app(Some(blinker()));
        assert_eq!(app.grid.width(), 10);
        assert_eq!(app.grid.height(), 10);
    }

    #[test]
    fn test_exit_terminates() {
        let (mut app, _) = test_app(None);
        app.apply(Command::Exit).unwrap();
        assert_eq!(app.state, State::Terminated);
    }

    #[test]
    fn test_pause_toggles_without_touching_grid() {
        let (mut app, _) = test_app(Some(blinker()));
        let before = live_cells(&app.grid);

        app.apply(Command::Pause).unwrap();
        assert_eq!(app.state, State::Paused);
        assert_eq!(live_cells(&app.grid), before);

        app.apply(Command::Pause).unwrap();
        assert_eq!(app.state, State::Running);
        assert_eq!(live_cells(&app.grid), before);
    }

    #[test]
    fn test_step_advances_one_generation() {
        let (mut app, _) = test_app(Some(blinker()));
        app.apply(Command::Step).unwrap();
        assert_eq!(live_cells(&app.grid), vec![(0, 1), (1, 1), (2, 1)]);
        app.apply(Command::Step).unwrap();
        assert_eq!(live_cells(&app.grid), vec![(1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_step_acts_while_paused() {
        let (mut app, _) = test_app(Some(blinker()));
        app.apply(Command::Pause).unwrap();
        app.apply(Command::Step).unwrap();
        assert_eq!(app.state, State::Paused);
        assert_eq!(live_cells(&app.grid), vec![(0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_reset_restores_starting_pattern() {
        let (mut app, _) = test_app(Some(blinker()));
        app.apply(Command::Step).unwrap();
        app.apply(Command::Reset).unwrap();
        assert_eq!(live_cells(&app.grid), vec![(1, 0), (1, 1), (1, 2)]);
        assert_eq!(app.state, State::Running);
    }

    #[test]
    fn test_reset_randomizes_without_pattern() {
        let (mut app, _) = test_app(None);
        app.grid.reset(std::iter::empty());
        assert_eq!(app.grid.population(), 0);
        app.apply(Command::Reset).unwrap();
        assert!(app.grid.population() > 0);
    }

    #[test]
    fn test_reset_remeasures_terminal() {
        let (mut app, size) = test_app(None);
        size.0.set((20, 8));
        app.apply(Command::Reset).unwrap();
        assert_eq!(app.grid.width(), 20);
        assert_eq!(app.grid.height(), 16);
    }

    #[test]
    fn test_draw_writes_one_frame() {
        let (mut app, _) = test_app(Some(blinker()));
        app.draw().unwrap();
        let written = String::from_utf8(app.out.clone()).unwrap();
        assert!(written.contains('▀'));
        // 10x10 logical cells render as 5 terminal lines.
        assert_eq!(written.matches("\r\n").count(), 4);
    }
}
