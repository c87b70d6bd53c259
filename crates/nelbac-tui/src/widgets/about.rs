use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

pub struct AboutWidget;

impl AboutWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let company = &app.catalog.company;

        let block = Block::default()
            .title(format!(" About {} ", company.name))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.grey0))
            .style(Style::default().bg(app.theme.bg0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(4)])
            .split(inner);

        let body = Paragraph::new(vec![
            Line::from(Span::styled(
                company.tagline.clone(),
                Style::default()
                    .fg(app.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Founded {} in {}", company.founded, company.location),
                Style::default().fg(app.theme.grey1),
            )),
            Line::from(""),
            Line::from(Span::styled(
                company.description.clone(),
                Style::default().fg(app.theme.fg1),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Our mission",
                Style::default()
                    .fg(app.theme.fg0)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                company.mission.clone(),
                Style::default().fg(app.theme.fg1),
            )),
        ])
        .wrap(Wrap { trim: false });
        frame.render_widget(body, rows[0]);

        Self::render_stats(frame, rows[1], app);
    }

    fn render_stats(frame: &mut Frame, area: Rect, app: &App) {
        let stats = &app.catalog.company.stats;
        if stats.is_empty() {
            return;
        }

        let constraints: Vec<Constraint> = stats
            .iter()
            .map(|_| Constraint::Ratio(1, stats.len() as u32))
            .collect();
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (stat, cell) in stats.iter().zip(cells.iter()) {
            let paragraph = Paragraph::new(vec![
                Line::from(Span::styled(
                    stat.value.clone(),
                    Style::default()
                        .fg(app.theme.accent)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    stat.label.clone(),
                    Style::default().fg(app.theme.grey1),
                )),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(paragraph, *cell);
        }
    }
}
