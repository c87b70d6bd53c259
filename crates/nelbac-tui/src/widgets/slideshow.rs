use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::orbit::icon_glyph;
use crate::app::App;

/// The scroll-linked Home variant: a snapping slideshow, one vision
/// item at a time, driven by the same engine scalar as the orbit.
pub struct SlideshowWidget;

impl SlideshowWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        Self::render_hero(frame, rows[0], app);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(22)])
            .split(rows[1]);

        Self::render_slide(frame, columns[0], app);
        Self::render_rail(frame, columns[1], app);
        Self::render_progress(frame, rows[2], app);
    }

    fn render_hero(frame: &mut Frame, area: Rect, app: &App) {
        let company = &app.catalog.company;
        let hero = Paragraph::new(vec![
            Line::from(Span::styled(
                company.name.to_uppercase(),
                Style::default()
                    .fg(app.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                company.tagline.clone(),
                Style::default().fg(app.theme.fg0),
            )),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().bg(app.theme.bg0));

        frame.render_widget(hero, area);
    }

    fn render_slide(frame: &mut Frame, area: Rect, app: &App) {
        let index = app.engine.active_index();
        let item = &app.catalog.vision[index];

        let block = Block::default()
            .title(format!(
                " {} {} ",
                icon_glyph(&item.icon),
                item.short_label
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.accent))
            .style(Style::default().bg(app.theme.bg1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let body = Paragraph::new(vec![
            Line::from(Span::styled(
                item.title.clone(),
                Style::default()
                    .fg(app.theme.fg0)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                item.subtitle.clone(),
                Style::default().fg(app.theme.accent),
            )),
            Line::from(""),
            Line::from(Span::styled(
                item.body.clone(),
                Style::default().fg(app.theme.fg1),
            )),
        ])
        .wrap(Wrap { trim: true });
        frame.render_widget(body, inner);
    }

    fn render_rail(frame: &mut Frame, area: Rect, app: &App) {
        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(app.theme.grey0))
            .style(Style::default().bg(app.theme.bg0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let active = app.engine.active_index();
        let lines: Vec<Line> = app
            .catalog
            .vision
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if i == active {
                    Line::from(vec![
                        Span::styled("● ", Style::default().fg(app.theme.accent)),
                        Span::styled(
                            item.short_label.clone(),
                            Style::default()
                                .fg(app.theme.fg0)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ])
                } else {
                    Line::from(vec![
                        Span::styled("○ ", Style::default().fg(app.theme.grey0)),
                        Span::styled(
                            item.short_label.clone(),
                            Style::default().fg(app.theme.grey1),
                        ),
                    ])
                }
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }

    /// Overall progress through the sequence, eased along with the
    /// displayed scalar.
    fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
        let usable = usize::from(area.width.saturating_sub(2));
        let fraction = app.displayed_fraction().clamp(0.0, 1.0);
        let filled = ((fraction * usable as f64) as usize).min(usable);
        let bar = format!(" {}{}", "━".repeat(filled), "┄".repeat(usable - filled));
        let line = Paragraph::new(Span::styled(bar, Style::default().fg(app.theme.accent)))
            .style(Style::default().bg(app.theme.bg0));
        frame.render_widget(line, area);
    }
}
