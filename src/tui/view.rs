use crate::tui::state::{AppState, InputMode};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

struct Palette {
    text: Color,
    border: Color,
    done: Color,
    pending: Color,
    highlight_bg: Color,
    status: Color,
    help: Color,
    input: Color,
}

fn palette(dark: bool) -> Palette {
    if dark {
        Palette {
            text: Color::White,
            border: Color::Gray,
            done: Color::Green,
            pending: Color::Yellow,
            highlight_bg: Color::DarkGray,
            status: Color::Cyan,
            help: Color::DarkGray,
            input: Color::Yellow,
        }
    } else {
        Palette {
            text: Color::Black,
            border: Color::Blue,
            done: Color::Green,
            pending: Color::Magenta,
            highlight_bg: Color::Gray,
            status: Color::Blue,
            help: Color::DarkGray,
            input: Color::Blue,
        }
    }
}

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let pal = palette(state.dark_mode);

    // Main body on top, 3-line footer below
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    let list_block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Tasks ({}) ", state.store.len()))
        .border_style(Style::default().fg(pal.border));

    if state.store.is_empty() {
        let empty = Paragraph::new("No tasks yet.\nPress 'a' to add your first task.")
            .style(Style::default().fg(pal.help))
            .alignment(Alignment::Center)
            .block(list_block);
        f.render_widget(empty, chunks[0]);
    } else {
        let items: Vec<ListItem> = state
            .store
            .tasks()
            .iter()
            .map(|t| {
                let checkbox = if t.completed { "[x] " } else { "[ ] " };
                let title_style = if t.completed {
                    Style::default()
                        .fg(pal.text)
                        .add_modifier(Modifier::CROSSED_OUT | Modifier::DIM)
                } else {
                    Style::default().fg(pal.text)
                };
                let status_style = if t.completed {
                    Style::default().fg(pal.done)
                } else {
                    Style::default().fg(pal.pending)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{}{}", checkbox, t.title), title_style),
                    Span::raw("  "),
                    Span::styled(t.status_label(), status_style),
                ]))
            })
            .collect();

        let list = List::new(items).block(list_block).highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(pal.highlight_bg),
        );
        f.render_stateful_widget(list, chunks[0], &mut state.list_state);
    }

    // Footer: live input while creating, status + shortcuts otherwise
    let footer_area = chunks[1];
    match state.mode {
        InputMode::Creating => {
            let prefix = "> ";
            let input = Paragraph::new(format!("{}{}", prefix, state.input_buffer))
                .style(Style::default().fg(pal.input))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Create Task ")
                        .border_style(Style::default().fg(pal.border)),
                );
            f.render_widget(input, footer_area);
            let cursor_x =
                footer_area.x + 1 + prefix.chars().count() as u16 + state.cursor_position as u16;
            let cursor_y = footer_area.y + 1;
            f.set_cursor_position((cursor_x, cursor_y));
        }
        InputMode::Normal => {
            let f_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(footer_area);
            let status = Paragraph::new(state.message.clone())
                .style(Style::default().fg(pal.status))
                .block(
                    Block::default()
                        .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                        .title(" Status ")
                        .border_style(Style::default().fg(pal.border)),
                );
            let theme_label = if state.dark_mode { "dark" } else { "light" };
            let help = Paragraph::new(format!("{} | theme: {}", crate::tui::state::HELP, theme_label))
                .style(Style::default().fg(pal.help))
                .alignment(Alignment::Right)
                .block(
                    Block::default()
                        .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
                        .title(" Actions ")
                        .border_style(Style::default().fg(pal.border)),
                );
            f.render_widget(status, f_chunks[0]);
            f.render_widget(help, f_chunks[1]);
        }
    }
}
