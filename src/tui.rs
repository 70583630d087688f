//! Interactive tag selector
//!
//! A single-list picker over the aggregated tag names using ratatui and
//! crossterm. Enter returns the highlighted entry, q/Esc cancels.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Run the selector over `items` and return the chosen entry, if any
pub fn select(title: &str, items: &[String]) -> Result<Option<String>> {
    // Setup terminal (raw mode)
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_selector(&mut terminal, title, items);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Selector event loop
fn run_selector<B>(
    terminal: &mut Terminal<B>,
    title: &str,
    items: &[String],
) -> Result<Option<String>>
where
    B: ratatui::backend::Backend,
{
    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(0));
    }

    loop {
        terminal.draw(|f| draw(f, title, items, &mut state))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(None),
                    KeyCode::Up | KeyCode::Char('k') => select_previous(&mut state, items.len()),
                    KeyCode::Down | KeyCode::Char('j') => select_next(&mut state, items.len()),
                    KeyCode::Enter => {
                        return Ok(state
                            .selected()
                            .and_then(|i| items.get(i))
                            .cloned());
                    }
                    _ => {}
                }
            }
        }
    }
}

fn draw(frame: &mut Frame, title: &str, items: &[String], state: &mut ListState) {
    let list_items: Vec<ListItem> = items
        .iter()
        .enumerate()
        .map(|(i, item)| ListItem::new(format!("{}. {}", i + 1, item)))
        .collect();

    let list = List::new(list_items)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .highlight_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, frame.size(), state);
}

fn select_previous(state: &mut ListState, len: usize) {
    if len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(0) | None => len - 1,
        Some(i) => i - 1,
    };
    state.select(Some(i));
}

fn select_next(state: &mut ListState, len: usize) {
    if len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(i) if i + 1 < len => i + 1,
        _ => 0,
    };
    state.select(Some(i));
}
