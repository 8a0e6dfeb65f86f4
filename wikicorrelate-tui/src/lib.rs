use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;
use wikicorrelate_core::CorrelateOptions;

pub mod form;

pub use form::{App, Field};

/// Run the correlation form until the user quits.
pub fn run(defaults: CorrelateOptions) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&defaults);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.poll_search();
        terminal.draw(|f| ui(f, app))?;

        // Poll so a finished search shows up without a key press
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.cancel_search();
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    if app.is_running() {
                        app.cancel_search();
                    } else {
                        app.should_quit = true;
                    }
                }
                KeyCode::Char(c) => app.insert_char(c),
                KeyCode::Backspace => app.backspace(),
                KeyCode::Tab | KeyCode::Down => app.focus_next(),
                KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
                KeyCode::Enter => app.start_search(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn ui(f: &mut Frame, app: &App) {
    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(Field::ALL.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Min(3)); // Results
    constraints.push(Constraint::Length(1)); // Status bar

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "WikiCorrelate",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - find a link path between two articles"),
    ]));
    f.render_widget(title, chunks[0]);

    for (i, field) in Field::ALL.iter().enumerate() {
        let area = chunks[i + 1];
        let focused = *field == app.focused();
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let input = Paragraph::new(app.input(*field)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(field.label()),
        );
        f.render_widget(input, area);

        if focused && !app.is_running() {
            f.set_cursor_position((
                area.x + 1 + app.input(*field).chars().count() as u16,
                area.y + 1,
            ));
        }
    }

    let results_area = chunks[Field::ALL.len() + 1];
    let lines: Vec<Line> = app
        .output()
        .iter()
        .map(|line| Line::from(line.clone()))
        .collect();
    let results = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Path"))
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });
    f.render_widget(results, results_area);

    let status = Paragraph::new(Line::from(vec![
        Span::styled(app.status().to_string(), Style::default().fg(Color::Gray)),
        Span::raw("  |  "),
        Span::styled("Tab", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" next field | "),
        Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" correlate | "),
        Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" cancel/quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, chunks[Field::ALL.len() + 2]);
}
