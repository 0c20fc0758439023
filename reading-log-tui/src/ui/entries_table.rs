use super::*;
use crate::render::entry_rows;
use ratatui::widgets::{Cell, Row, Table, TableState};

pub fn render_entries_table(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Entries;
    let title = if app.search_input.value.trim().is_empty() {
        format!(" Entries ({}) ", app.entries.len())
    } else {
        format!(
            " Entries ({}) matching \"{}\" ",
            app.entries.len(),
            app.search_input.value.trim()
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style(focused));

    if app.entries.is_empty() {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "No entries",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(["Date", "Title", "Author", "Position"])
        .style(Style::default().fg(Color::DarkGray));

    let rows = entry_rows(&app.entries).into_iter().map(|row| {
        Row::new([
            Cell::from(row.date),
            Cell::from(row.title),
            Cell::from(row.author),
            Cell::from(row.position),
        ])
    });

    let widths = [
        Constraint::Length(10),
        Constraint::Percentage(35),
        Constraint::Percentage(30),
        Constraint::Min(10),
    ];

    let highlight = if focused {
        Style::default()
            .bg(Color::Magenta)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(2)
        .row_highlight_style(highlight);

    let mut state = TableState::default();
    state.select(Some(app.selected_row));
    frame.render_stateful_widget(table, area, &mut state);
}
