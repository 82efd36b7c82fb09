//! UI rendering for the TUI.
//!
//! Defines the layout, renders the visible view and records the clickable
//! regions back into the app for mouse handling.

use super::app::{App, View};
use super::widgets::{
    header::{Header, TitleBar},
    loader::LoaderOverlay,
    page::{NavBar, PageView},
    rain::RainBackdrop,
    selector::SelectorScreen,
    terminal::{TerminalBody, TerminalLayout},
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the entire UI.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Main layout: header, content, key hints
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Content
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let header_area = main_layout[0];
    let content_area = main_layout[1];
    let footer_area = main_layout[2];

    frame.render_widget(Header::new(app.view, app.loader_progress), header_area);

    app.hit_areas.controls.clear();
    app.hit_areas.options.clear();
    app.hit_areas.sections.clear();

    match app.view {
        View::Selector => render_selector(frame, content_area, app),
        View::Terminal => render_terminal(frame, content_area, app),
        View::Gui => render_gui(frame, content_area, app),
    }

    render_footer(frame, footer_area, app.view);

    if let Some(percent) = app.loader_progress {
        frame.render_widget(LoaderOverlay::new(percent), content_area);
    }
}

fn render_selector(frame: &mut Frame, area: Rect, app: &mut App) {
    app.hit_areas.options = SelectorScreen::option_areas(area);
    app.rain.resize(area.width, area.height);
    frame.render_widget(RainBackdrop::new(&app.rain), area);
    frame.render_widget(SelectorScreen::new(app.selector), area);
}

/// Renders the terminal window: title bar with buttons, then the body.
fn render_terminal(frame: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);
    let title_area = chunks[0];
    let window_area = chunks[1];

    let profile = app.interpreter.profile();
    let title = format!("{}@{}: ~", profile.user, profile.host);
    let label = profile.prompt_label();

    app.hit_areas.controls = TitleBar::control_areas(title_area);
    frame.render_widget(TitleBar::new(&title), title_area);

    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let body_area = block.inner(window_area);
    frame.render_widget(block, window_area);

    if body_area.width == 0 || body_area.height == 0 {
        return;
    }

    let prompt = app.interpreter.prompt();
    let layout = TerminalLayout::build(
        app.interpreter.scrollback().entries(),
        &label,
        prompt.text(),
        prompt.cursor(),
        body_area.width,
    );

    let max_scroll = layout.lines.len().saturating_sub(usize::from(body_area.height));
    app.terminal_scroll = app.terminal_scroll.min(max_scroll);
    let first = layout.first_visible(body_area.height, app.terminal_scroll);

    frame.render_widget(TerminalBody::new(&layout, first), body_area);

    let (cursor_row, cursor_col) = layout.cursor;
    let cursor_visible = cursor_row >= first
        && cursor_row < first + usize::from(body_area.height)
        && cursor_col < body_area.width;
    if cursor_visible && app.interpreter.prompt().is_enabled() && !app.is_transitioning() {
        frame.set_cursor_position((
            body_area.x + cursor_col,
            body_area.y + (cursor_row - first) as u16,
        ));
    }
}

fn render_gui(frame: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);
    let nav_area = chunks[0];
    let page_area = Rect {
        x: chunks[1].x + 1,
        width: chunks[1].width.saturating_sub(2),
        ..chunks[1]
    };

    app.gui.resize(page_area.width, page_area.height);
    app.hit_areas.sections = NavBar::section_areas(nav_area);

    frame.render_widget(NavBar::new(app.gui.current_section()), nav_area);
    frame.render_widget(PageView::new(&app.gui, app.typing.displayed()), page_area);
}

fn footer_hint(view: View) -> &'static str {
    match view {
        View::Selector => " ←/→ select · Enter open · q quit",
        View::Terminal => {
            " Enter run · Tab complete · ↑/↓ history · PgUp/PgDn scroll · F2 close · F3 minimize · F4 maximize · Ctrl+C quit"
        }
        View::Gui => " 1-6 jump · ↑/↓ scroll · PgUp/PgDn page · t terminal · q quit",
    }
}

fn render_footer(frame: &mut Frame, area: Rect, view: View) {
    let hint = Paragraph::new(Span::styled(
        footer_hint(view),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(hint, area);
}
