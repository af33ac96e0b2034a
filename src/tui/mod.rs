pub mod state;
pub mod view;

use crate::config::Config;
use crate::store::TaskStore;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use state::{AppState, HELP, InputMode};
use std::{io, time::Duration};

pub fn run() -> Result<()> {
    // Panic Hook
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        use std::io::Write;
        if let Ok(mut file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("trakr_panic.log")
        {
            let _ = writeln!(file, "PANIC: {:?}", info);
        }
        default_hook(info);
    }));

    let config = Config::load().unwrap_or_default();
    let store = TaskStore::open(config.data_file());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppState::new(store);

    loop {
        terminal.draw(|f| view::draw(f, &mut app))?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Mouse(mouse_event) => match mouse_event.kind {
                    MouseEventKind::ScrollDown => app.next(),
                    MouseEventKind::ScrollUp => app.previous(),
                    _ => {}
                },
                Event::Key(key) => handle_key(&mut app, key.code),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn handle_key(app: &mut AppState, code: KeyCode) {
    match app.mode {
        InputMode::Creating => match code {
            KeyCode::Enter => {
                // The field clears whether or not the add goes through.
                let text = app.input_buffer.clone();
                app.reset_input();
                app.mode = InputMode::Normal;
                match app.store.add_task(&text) {
                    Ok(Some(_)) => {
                        app.select_last();
                        app.message = "Added.".to_string();
                    }
                    // Blank input: silent no-op
                    Ok(None) => app.message = HELP.to_string(),
                    Err(e) => app.message = format!("Error: {}", e),
                }
            }
            KeyCode::Esc => {
                app.reset_input();
                app.mode = InputMode::Normal;
                app.message = HELP.to_string();
            }
            KeyCode::Char(c) => app.enter_char(c),
            KeyCode::Backspace => app.delete_char(),
            KeyCode::Left => app.move_cursor_left(),
            KeyCode::Right => app.move_cursor_right(),
            _ => {}
        },
        InputMode::Normal => match code {
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('a') => {
                app.mode = InputMode::Creating;
                app.message = "Example: Buy milk".to_string();
            }
            KeyCode::Char('t') => {
                app.toggle_theme();
            }
            KeyCode::Char(' ') => {
                if let Some(id) = app.selected_task_id() {
                    if let Err(e) = app.store.toggle_task(id) {
                        app.message = format!("Error: {}", e);
                    }
                }
            }
            // Navigation
            KeyCode::Down | KeyCode::Char('j') => app.next(),
            KeyCode::Up | KeyCode::Char('k') => app.previous(),
            KeyCode::PageDown => app.jump_forward(10),
            KeyCode::PageUp => app.jump_backward(10),
            _ => {}
        },
    }
}
