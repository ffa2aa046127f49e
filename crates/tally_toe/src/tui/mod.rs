//! Terminal UI: the engine's presenter and input surface.

mod input;
mod ui;
mod view;

pub use input::{Action, action_for, move_cursor};
pub use ui::draw;
pub use view::TerminalView;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tally_toe_core::{GameEngine, Presenter, ScoreStore};
use tracing::{debug, error, info, instrument};

/// Whether the event loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading input.
    Continue,
    /// Leave the app.
    Quit,
}

/// Applies one action to the engine and the view.
#[instrument(skip(engine, view))]
pub fn apply_action<S, P>(
    engine: &mut GameEngine<S, P>,
    view: &RefCell<TerminalView>,
    action: Action,
) -> Flow
where
    S: ScoreStore,
    P: Presenter,
{
    match action {
        Action::MoveCursor(pos) => view.borrow_mut().set_cursor(pos),
        Action::Select(pos) => {
            view.borrow_mut().set_cursor(pos);
            engine.select(pos);
        }
        Action::Reset => engine.reset(),
        Action::Quit => return Flow::Quit,
        Action::None => {}
    }
    Flow::Continue
}

/// Runs the game in the terminal until the player quits.
pub fn run<S: ScoreStore>(store: S) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, store);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

#[instrument(skip_all)]
fn run_game<S: ScoreStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: S,
) -> Result<()> {
    let view = Rc::new(RefCell::new(TerminalView::new()));
    let mut engine = GameEngine::initialize(store, TerminalView::presenter(&view));

    loop {
        terminal.draw(|frame| draw(frame, &view.borrow()))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        let cursor = view.borrow().cursor();
        let action = action_for(key, cursor);
        debug!(?action, "Key handled");

        if apply_action(&mut engine, &view, action) == Flow::Quit {
            info!("Quit requested");
            return Ok(());
        }
    }
}
