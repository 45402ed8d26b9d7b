//! Interactive gallery browser
//!
//! Live filter typing, selection, and a modal overlay for the selected
//! favorite. Storage faults are reported on the status line and never
//! end the session.

use std::borrow::Cow;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use ratatui::widgets::*;

use lightbox::favorites::FavoritesStore;
use lightbox::gallery::{self, EmptyReason, GalleryItem, GalleryView};
use lightbox::viewer::Viewer;
use lightbox::Result;

struct App {
    store: FavoritesStore,
    filter: String,
    selected: usize,
    viewer: Viewer,
    status: Cow<'static, str>,
    is_error: bool,
    running: bool,
}

impl App {
    fn new(store: FavoritesStore) -> Self {
        Self {
            store,
            filter: String::new(),
            selected: 0,
            viewer: Viewer::new(),
            status: Cow::Borrowed("Ready"),
            is_error: false,
            running: true,
        }
    }
}

pub fn run(store: FavoritesStore) -> Result<()> {
    let mut app = App::new(store);

    terminal::enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    while app.running {
        // Re-project on every pass: the filter feeds the renderer on
        // each keystroke
        let view = gallery::render(app.store.list(), &app.filter);
        let shown: &[GalleryItem] = match &view {
            GalleryView::Gallery(items) => items,
            GalleryView::Empty(_) => &[],
        };
        if !shown.is_empty() && app.selected >= shown.len() {
            app.selected = shown.len() - 1;
        }

        terminal.draw(|f| draw_ui(f, &app, &view))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, key.code, shown);
                }
            }
        }
    }

    // Restore terminal
    terminal::disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    Ok(())
}

/// Apply one key press. While the modal is open only Esc/Enter react;
/// otherwise printable characters edit the filter.
fn handle_key(app: &mut App, code: KeyCode, shown: &[GalleryItem]) {
    if app.viewer.is_open() {
        match code {
            KeyCode::Esc | KeyCode::Enter => {
                app.viewer.close();
                app.status = Cow::Borrowed("Ready");
                app.is_error = false;
            }
            _ => {}
        }
        return;
    }

    match code {
        KeyCode::Esc => {
            if !app.filter.is_empty() {
                app.filter.clear();
            } else {
                app.running = false;
            }
        }
        KeyCode::Up => {
            app.selected = app.selected.saturating_sub(1);
        }
        KeyCode::Down => {
            if app.selected + 1 < shown.len() {
                app.selected += 1;
            }
        }
        KeyCode::Enter => {
            if let Some(item) = shown.get(app.selected) {
                app.viewer.open(item.url.clone());
                app.status = Cow::Owned(format!("Viewing {}", item.caption));
                app.is_error = false;
            }
        }
        KeyCode::Delete => {
            if let Some(item) = shown.get(app.selected) {
                match app.store.remove(&item.url) {
                    Ok(_) => {
                        app.status = Cow::Owned(format!("Removed {}", item.caption));
                        app.is_error = false;
                    }
                    Err(e) => {
                        app.status = Cow::Owned(e.to_string());
                        app.is_error = true;
                    }
                }
            }
        }
        KeyCode::Backspace => {
            app.filter.pop();
        }
        KeyCode::Char(c) => {
            app.filter.push(c);
        }
        _ => {}
    }
}

fn draw_ui(f: &mut Frame, app: &App, view: &GalleryView) {
    let area = f.area();

    let outer = Block::default()
        .title(format!(" Lightbox v{} ", env!("CARGO_PKG_VERSION")))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::vertical([
        Constraint::Length(3), // filter bar
        Constraint::Min(3),    // gallery
        Constraint::Length(1), // status line
        Constraint::Length(1), // help bar
    ])
    .split(inner);

    draw_filter(f, app, chunks[0]);
    draw_gallery(f, app, view, chunks[1]);
    draw_status(f, app, chunks[2]);
    draw_help(f, chunks[3]);

    if app.viewer.is_open() {
        draw_modal(f, app, area);
    }
}

fn draw_filter(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Filter ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = if app.filter.is_empty() {
        Line::from(Span::styled(
            "type to filter by caption or URL",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            app.filter.as_str(),
            Style::default().fg(Color::Yellow),
        ))
    };

    f.render_widget(Paragraph::new(text).block(block), area);
}

fn draw_gallery(f: &mut Frame, app: &App, view: &GalleryView, area: Rect) {
    let block = Block::default()
        .title(format!(" Favorites ({}) ", app.store.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    match view {
        GalleryView::Gallery(items) => {
            let rows: Vec<ListItem> = items
                .iter()
                .map(|item| {
                    ListItem::new(Line::from(vec![
                        Span::styled(item.caption.clone(), Style::default().fg(Color::White)),
                        Span::raw("  "),
                        Span::styled(item.url.clone(), Style::default().fg(Color::DarkGray)),
                    ]))
                })
                .collect();

            let list = List::new(rows)
                .block(block)
                .highlight_style(Style::default().fg(Color::Cyan).bold())
                .highlight_symbol("> ");

            let mut state = ListState::default();
            state.select(Some(app.selected));
            f.render_stateful_widget(list, area, &mut state);
        }
        GalleryView::Empty(reason) => {
            let message = match reason {
                EmptyReason::NoFavorites => "No favorites saved yet",
                EmptyReason::NoMatches => "No favorites match the filter",
            };
            let placeholder = Paragraph::new(Line::from(Span::styled(
                message,
                Style::default().fg(Color::DarkGray),
            )))
            .alignment(Alignment::Center)
            .block(block);
            f.render_widget(placeholder, area);
        }
    }
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let color = if app.is_error {
        Color::Red
    } else {
        Color::DarkGray
    };
    let line = Line::from(Span::styled(
        format!("  {}", app.status),
        Style::default().fg(color),
    ));
    f.render_widget(Paragraph::new(line), area);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let help = Line::from(vec![
        Span::styled("  Enter ", Style::default().fg(Color::Yellow)),
        Span::raw("view  |  "),
        Span::styled("Del ", Style::default().fg(Color::Yellow)),
        Span::raw("remove  |  "),
        Span::styled("\u{2191}/\u{2193} ", Style::default().fg(Color::Yellow)),
        Span::raw("select  |  "),
        Span::styled("Esc ", Style::default().fg(Color::Yellow)),
        Span::raw("clear filter / quit"),
    ]);

    f.render_widget(Paragraph::new(help).alignment(Alignment::Left), area);
}

fn draw_modal(f: &mut Frame, app: &App, area: Rect) {
    let Some(url) = app.viewer.current() else {
        return;
    };

    let popup = centered_rect(area, 70, 7);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" {} ", gallery::caption_for(url)))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(url, Style::default().fg(Color::White).bold())),
        Line::from(""),
        Line::from(Span::styled(
            "Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let detail = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(detail, popup);
}

/// A rect of `percent_x` width and `height` rows, centered in `area`
fn centered_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
    let width = area.width * percent_x / 100;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width,
        height: height.min(area.height),
    }
}
