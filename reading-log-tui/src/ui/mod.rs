use crate::app::{App, Focus, StatusKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

mod dialogs;
mod entries_table;
mod form_panel;
pub(super) mod utils;

pub fn render(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_search_bar(frame, root[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(root[1]);

    form_panel::render_form_panel(frame, body[0], app);
    entries_table::render_entries_table(frame, body[1], app);

    render_status_line(frame, root[2], app);
    render_help_line(frame, root[3], app);

    // Dialogs render on top of everything else
    if app.delete_context.is_some() {
        dialogs::render_delete_confirm_dialog(frame, app);
    } else if app.alert.is_some() {
        dialogs::render_alert_dialog(frame, app);
    }
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default()
    }
}

fn render_search_bar(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Search;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Search title or author ")
        .border_style(border_style(focused))
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    let paragraph = Paragraph::new(Line::from(Span::raw(app.search_input.value.as_str())))
        .block(block);
    frame.render_widget(paragraph, area);

    if focused && app.delete_context.is_none() && app.alert.is_none() {
        let (before, _) = app.search_input.split_at_cursor();
        utils::place_cursor(frame, inner, before);
    }
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let Some(status) = &app.status else {
        return;
    };

    let style = match status.kind {
        StatusKind::Success => Style::default().fg(Color::Green),
        StatusKind::Error => Style::default().fg(Color::Red),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(status.text.as_str(), style))),
        area,
    );
}

fn render_help_line(frame: &mut Frame, area: Rect, app: &App) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));

    let mut spans = vec![
        key("Tab"),
        Span::raw(": Next field  "),
        key("Ctrl+S"),
        Span::raw(format!(": {}  ", app.form.chrome().submit_label)),
        key("Ctrl+F"),
        Span::raw(": Search  "),
    ];

    match app.focus {
        Focus::Entries => spans.extend([
            key("e"),
            Span::raw(": Edit  "),
            key("d"),
            Span::raw(": Delete  "),
            key("q"),
            Span::raw(": Quit"),
        ]),
        _ => spans.extend([key("Ctrl+C"), Span::raw(": Quit")]),
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
