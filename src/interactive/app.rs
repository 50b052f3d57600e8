//! TUI application state and event loop

use super::rendering::visible_rows;
use crate::render::layout::{GRID_COLUMNS, GridLayout};
use crate::render::series::BoardChart;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Default figure title of the interactive window
pub const DEFAULT_TITLE: &str = "SMT vs Solving Strategies - Standard Variant";

/// Application state
pub struct App {
    pub title: String,
    pub charts: Vec<BoardChart>,
    pub layout: GridLayout,
    /// First grid row on screen
    pub row_offset: usize,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(title: impl Into<String>, charts: Vec<BoardChart>) -> Self {
        let layout = GridLayout::new(charts.len(), GRID_COLUMNS);
        Self {
            title: title.into(),
            charts,
            layout,
            row_offset: 0,
            should_quit: false,
        }
    }

    /// Largest offset that still fills the screen with `visible` rows
    #[must_use]
    pub const fn max_offset(&self, visible: usize) -> usize {
        self.layout.rows.saturating_sub(visible)
    }

    pub fn scroll_by(&mut self, delta: isize, visible: usize) {
        let target = self.row_offset.saturating_add_signed(delta);
        self.row_offset = target.min(self.max_offset(visible));
    }

    /// Apply one key press; `visible` is how many grid rows fit on screen
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers, visible: usize) {
        let page = visible.max(1) as isize;
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1, visible),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1, visible),
            KeyCode::PageDown => self.scroll_by(page, visible),
            KeyCode::PageUp => self.scroll_by(-page, visible),
            KeyCode::Home => self.row_offset = 0,
            KeyCode::End => self.row_offset = self.max_offset(visible),
            _ => {}
        }
    }
}

/// Run the TUI application, blocking until the user closes it
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let visible = visible_rows(terminal.size()?.height);
            app.handle_key(key.code, key.modifiers, visible);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
