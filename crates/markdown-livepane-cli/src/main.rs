use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use markdown_livepane_config::Config;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

mod app;
mod layout;
mod session;
mod view;

use app::App;
use layout::{Wrapped, caret_cell, wrap_line};
use session::Session;
use view::Theme;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = env::args().collect();
    let path = match args.len() {
        1 => None,
        2 => Some(PathBuf::from(&args[1])),
        _ => {
            eprintln!("Usage: {} [FILE]", args[0]);
            process::exit(1);
        }
    };

    let palette = match Config::load() {
        Ok(Some(config)) => config.palette,
        Ok(None) => Default::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let session = match Session::start(path) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    let mut app = App::new(session, Theme::from_palette(&palette));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut scroll = 0;
    while !app.should_quit {
        terminal.draw(|f| ui(f, app, &mut scroll))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }
    }
    Ok(())
}

/// Draws both panes and the status line. `scroll` is the editor's first
/// visible display row and is kept across frames.
fn ui(f: &mut Frame, app: &mut App, scroll: &mut usize) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    // Editor pane: raw markup, wrapped, with the caret
    let editor_block = Block::default()
        .borders(Borders::ALL)
        .title(app.session.title());
    let editor_area = editor_block.inner(panes[0]);
    let width = usize::from(editor_area.width);
    let height = usize::from(editor_area.height);

    let text = app.session.document.text();
    let editor = Wrapped::new(
        text.split('\n')
            .map(|line| wrap_line([(line, Style::default())], width)),
    );
    let (line, _) = app.caret_point();
    let line_start = app.session.document.point_to_offset(line, 0);
    let (row_in_line, caret_col) = caret_cell(&text[line_start..app.caret()], width);
    let caret_row = editor.row_of_line(line) + row_in_line;
    *scroll = scroll_to_line(*scroll, caret_row, height);

    f.render_widget(
        Paragraph::new(editor.window(*scroll, height)).block(editor_block),
        panes[0],
    );

    if matches!(app.mode, app::Mode::Edit) && width > 0 && height > 0 {
        // Both offsets are below the pane's u16 width and height
        let x = editor_area.x + caret_col as u16;
        let y = editor_area.y + (caret_row - *scroll) as u16;
        f.set_cursor_position((x, y));
    }

    // Preview pane: styled runs, aligned with the editor's top line
    let preview_block = Block::default().borders(Borders::ALL).title("Preview");
    let preview_area = preview_block.inner(panes[1]);
    let pass = app.preview.refresh(&app.session.document);
    let lines = view::preview_lines(pass, &app.theme);
    let preview = Wrapped::new(lines.iter().map(|line| {
        wrap_line(
            line.spans.iter().map(|s| (s.content.as_ref(), s.style)),
            usize::from(preview_area.width),
        )
    }));
    let top = preview.row_of_line(editor.line_at_row(*scroll));

    f.render_widget(
        Paragraph::new(preview.window(top, usize::from(preview_area.height))).block(preview_block),
        panes[1],
    );

    f.render_widget(Paragraph::new(app.status_line()), rows[1]);
}

/// Smallest scroll change that keeps `row` inside a pane `height` rows tall.
fn scroll_to_line(scroll: usize, row: usize, height: usize) -> usize {
    let height = height.max(1);
    if row < scroll {
        row
    } else if row >= scroll.saturating_add(height) {
        row + 1 - height
    } else {
        scroll
    }
}
