use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use nelbac_core::advisor::ChatRole;

use crate::app::App;

/// Chat overlay for the smart advisor. Rendered above whatever page is
/// active.
pub struct AdvisorWidget;

impl AdvisorWidget {
    pub fn render(frame: &mut Frame, app: &App) {
        let area = frame.area();
        let width = 64u16.min(area.width.saturating_sub(4));
        let height = area.height.saturating_sub(4).max(10);
        let popup = centered_rect(width, height, area);

        frame.render_widget(Clear, popup);

        let title = if app.advisor.session_id.is_empty() {
            " Nelbac Smart Advisor ".to_string()
        } else {
            format!(" Nelbac Smart Advisor · {} ", short_id(&app.advisor.session_id))
        };
        let block = Block::default()
            .title(title)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.accent))
            .style(Style::default().bg(app.theme.bg1));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        Self::render_history(frame, rows[0], app);
        Self::render_input(frame, rows[1], app);

        let hint = Paragraph::new(Span::styled(
            "Enter: send  Ctrl-L: clear chat  Esc: close",
            Style::default().fg(app.theme.grey1),
        ));
        frame.render_widget(hint, rows[2]);
    }

    fn render_history(frame: &mut Frame, area: Rect, app: &App) {
        let mut lines: Vec<Line> = Vec::new();
        for message in &app.advisor.messages {
            let (label, color) = match message.role {
                ChatRole::User => ("You", app.theme.fg0),
                ChatRole::Advisor => ("Advisor", app.theme.accent),
            };
            lines.push(Line::from(Span::styled(
                format!("{}:", label),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                message.content.clone(),
                Style::default().fg(app.theme.fg1),
            )));
            lines.push(Line::from(""));
        }
        if app.advisor.waiting {
            lines.push(Line::from(Span::styled(
                "Advisor is typing...",
                Style::default()
                    .fg(app.theme.grey1)
                    .add_modifier(Modifier::ITALIC),
            )));
        }

        // Pin the view to the newest message
        let wrapped_height: usize = lines
            .iter()
            .map(|l| wrapped_lines(l.width(), area.width))
            .sum();
        let scroll = wrapped_height.saturating_sub(usize::from(area.height)) as u16;

        let history = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        frame.render_widget(history, area);
    }

    fn render_input(frame: &mut Frame, area: Rect, app: &App) {
        let cursor = if app.advisor.waiting { "" } else { "█" };
        let input = Paragraph::new(Line::from(vec![
            Span::styled("> ", Style::default().fg(app.theme.accent)),
            Span::styled(app.advisor.input.clone(), Style::default().fg(app.theme.fg0)),
            Span::styled(cursor, Style::default().fg(app.theme.accent)),
        ]))
        .style(Style::default().bg(app.theme.bg2));
        frame.render_widget(input, area);
    }
}

fn wrapped_lines(content_width: usize, area_width: u16) -> usize {
    let area_width = usize::from(area_width.max(1));
    content_width.div_ceil(area_width).max(1)
}

fn short_id(session_id: &str) -> &str {
    session_id.get(..8).unwrap_or(session_id)
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_id_truncates_uuids() {
        assert_eq!(short_id("0199ab34-1111-2222-3333-444455556666"), "0199ab34");
        assert_eq!(short_id("tiny"), "tiny");
    }

    #[test]
    fn wrapped_lines_rounds_up() {
        assert_eq!(wrapped_lines(0, 40), 1);
        assert_eq!(wrapped_lines(40, 40), 1);
        assert_eq!(wrapped_lines(41, 40), 2);
    }
}
