use super::*;
use crate::app::FormField;

const LABEL_WIDTH: usize = 13;

pub fn render_form_panel(frame: &mut Frame, area: Rect, app: &App) {
    let chrome = app.form.chrome();
    let form_focused = matches!(app.focus, Focus::Form(_));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", chrome.heading))
        .border_style(border_style(form_focused))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_line: Option<(u16, String)> = None;
    let suggestions = app.visible_suggestions();

    for field in FormField::ALL {
        let focused = app.focus == Focus::Form(field);
        let input = app.form.input(field);
        let required = FormField::REQUIRED.contains(&field);

        let label = format!(
            "{:<width$}",
            format!("{}{}", field.label(), if required { "*" } else { "" }),
            width = LABEL_WIDTH
        );
        let label_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let value_style = if focused {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        if focused {
            let (before, _) = input.split_at_cursor();
            cursor_line = Some((lines.len() as u16, format!("{}{}", label, before)));
        }

        lines.push(Line::from(vec![
            Span::styled(label, label_style),
            Span::styled(input.value.as_str(), value_style),
        ]));

        if focused && field.has_suggestions() {
            for (idx, suggestion) in suggestions.iter().enumerate() {
                let marker = if idx == 0 { "→ " } else { "  " };
                lines.push(Line::from(vec![
                    Span::raw(" ".repeat(LABEL_WIDTH)),
                    Span::styled(marker, Style::default().fg(Color::Yellow)),
                    Span::styled(*suggestion, Style::default().fg(Color::Cyan)),
                ]));
            }
        }
    }

    lines.push(Line::from(""));
    let mut actions = vec![
        Span::styled("Ctrl+S", Style::default().fg(Color::Yellow)),
        Span::raw(format!(": {}", chrome.submit_label)),
    ];
    if chrome.show_cancel {
        actions.extend([
            Span::raw("  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(": Cancel"),
        ]);
    }
    lines.push(Line::from(actions));

    frame.render_widget(Paragraph::new(lines), inner);

    if let Some((row, before)) = cursor_line {
        if row < inner.height && app.delete_context.is_none() && app.alert.is_none() {
            let line_area = Rect::new(inner.x, inner.y + row, inner.width, 1);
            utils::place_cursor(frame, line_area, &before);
        }
    }
}
