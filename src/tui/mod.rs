//! Terminal dashboard: sidebar filters, KPIs, charts, raw table.
//!
//! Model/update/view split: [`App`] holds the current selection plus focus
//! and scroll positions, key events update it, and every frame recomputes
//! the filtered views from scratch. Nothing is carried between frames
//! besides the memoized dataset and the selection itself.

mod app;
mod render;

pub use app::{App, Focus, ViewModel};

use std::io;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::commands::common::SelectorDomains;
use crate::data::Dataset;
use crate::error::Result;

/// Run the dashboard until the user quits.
///
/// Raw mode and the alternate screen are torn down on both clean exit and
/// error so the terminal is never left unusable.
pub fn run(dataset: &'static Dataset, domains: SelectorDomains) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(dataset, domains);
    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Full recompute pass: filter then summarize, fresh every frame.
        let view = app.view();
        terminal.draw(|frame| render::draw(frame, app, &view))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key.code, key.modifiers) {
                return Ok(());
            }
        }
    }
}
