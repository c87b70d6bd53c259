use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use nelbac_core::engine::{project, OrbitGeometry, ProjectedVisual};

use crate::app::App;

/// The home page: hero copy on top, the vision orbit below, a nav rail
/// on the right.
pub struct OrbitWidget;

impl OrbitWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(area);

        Self::render_hero(frame, rows[0], app);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(22)])
            .split(rows[1]);

        Self::render_orbit(frame, columns[0], app);
        Self::render_rail(frame, columns[1], app);
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
            Line::from(Span::styled(
                "Scroll or press j/k to explore our vision",
                Style::default().fg(app.theme.grey1),
            )),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().bg(app.theme.bg0));

        frame.render_widget(hero, area);
    }

    fn render_orbit(frame: &mut Frame, area: Rect, app: &App) {
        frame.render_widget(
            Block::default().style(Style::default().bg(app.theme.bg0)),
            area,
        );
        if area.width < 20 || area.height < 8 {
            return;
        }

        let count = app.catalog.vision.len();
        let geometry = OrbitGeometry {
            radius_x: app.config.orbit.radius_x_ratio * f64::from(area.width) / 2.0,
            radius_y: app.config.orbit.radius_y_ratio * f64::from(area.height) / 2.0,
        };

        let scalar = app.displayed_scalar();
        let mut visuals: Vec<(usize, ProjectedVisual)> = (0..count)
            .map(|i| (i, project(scalar, i, count, &geometry)))
            .collect();
        // Painter's order: back nodes first, front nodes overdraw them
        visuals.sort_by_key(|(_, v)| v.stack_order);

        Self::render_hub(frame, area, app);
        for (index, visual) in &visuals {
            Self::render_node(frame, area, app, *index, visual);
        }
    }

    fn render_hub(frame: &mut Frame, area: Rect, app: &App) {
        let label = " NELBAC ";
        let width = label.len() as u16;
        let hub = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + area.height / 2,
            width: width.min(area.width),
            height: 1,
        };
        let paragraph = Paragraph::new(Span::styled(
            label,
            Style::default()
                .fg(app.theme.bg0)
                .bg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(paragraph, hub);
    }

    fn render_node(
        frame: &mut Frame,
        area: Rect,
        app: &App,
        index: usize,
        visual: &ProjectedVisual,
    ) {
        let item = &app.catalog.vision[index];

        // Compact node stays small; the focused card morphs open
        let compact_width = (item.short_label.len() + 6) as u16;
        let expanded_width = 34u16.min(area.width.saturating_sub(2));
        let expanded_height = 9u16.min(area.height.saturating_sub(2));
        let morph = visual.morph_progress;
        let width = lerp_u16(compact_width, expanded_width, morph);
        let height = lerp_u16(3, expanded_height, morph);

        let center_x = f64::from(area.x) + f64::from(area.width) / 2.0 + visual.x;
        // Terminal rows grow downward; the front of the ellipse lands
        // below the hub
        let center_y = f64::from(area.y) + f64::from(area.height) / 2.0 - visual.y / 2.0;

        let node = clamp_rect(center_x, center_y, width, height, area);
        if node.width < 4 || node.height < 3 {
            return;
        }
        frame.render_widget(Clear, node);

        let fg = if visual.is_focused {
            app.theme.fg0
        } else {
            app.theme.depth_fg(visual.opacity)
        };
        let border = if visual.is_focused {
            app.theme.accent
        } else {
            app.theme.grey0
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(app.theme.bg1));
        let inner = block.inner(node);
        frame.render_widget(block, node);

        let mut lines = vec![Line::from(vec![
            Span::styled(
                format!("{} ", icon_glyph(&item.icon)),
                Style::default().fg(app.theme.accent),
            ),
            Span::styled(
                item.short_label.clone(),
                Style::default().fg(fg).add_modifier(Modifier::BOLD),
            ),
        ])];
        if morph > 0.5 {
            lines.push(Line::from(Span::styled(
                item.title.clone(),
                Style::default().fg(fg).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                item.subtitle.clone(),
                Style::default().fg(app.theme.accent),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                item.body.clone(),
                Style::default().fg(app.theme.fg1),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn render_rail(frame: &mut Frame, area: Rect, app: &App) {
        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(app.theme.grey0))
            .style(Style::default().bg(app.theme.bg0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let active = app.engine.active_index();
        let mut lines = Vec::new();
        for (i, item) in app.catalog.vision.iter().enumerate() {
            if i == active {
                lines.push(Line::from(vec![
                    Span::styled("● ", Style::default().fg(app.theme.accent)),
                    Span::styled(
                        item.short_label.clone(),
                        Style::default()
                            .fg(app.theme.fg0)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]));
                lines.push(dwell_gauge(app, inner.width));
            } else {
                lines.push(Line::from(vec![
                    Span::styled("○ ", Style::default().fg(app.theme.grey0)),
                    Span::styled(item.short_label.clone(), Style::default().fg(app.theme.grey1)),
                ]));
            }
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

pub(super) fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "digging" => "⛏",
        "shield" => "⛨",
        "droplet" => "◉",
        "cloud" => "☁",
        "leaf" => "❧",
        "chart" => "▤",
        "layers" => "≡",
        _ => "◆",
    }
}

/// Progress bar toward the next auto-advance.
fn dwell_gauge(app: &App, width: u16) -> Line<'static> {
    let usable = usize::from(width.saturating_sub(3));
    let filled = ((app.engine.within_item_progress() * usable as f64) as usize).min(usable);
    let bar = format!("  {}{}", "━".repeat(filled), "┄".repeat(usable - filled));
    Line::from(Span::styled(bar, Style::default().fg(app.theme.accent)))
}

fn lerp_u16(from: u16, to: u16, t: f64) -> u16 {
    let t = t.clamp(0.0, 1.0);
    (f64::from(from) + (f64::from(to) - f64::from(from)) * t).round() as u16
}

/// Center a node on fractional coordinates and clip it to the canvas.
fn clamp_rect(center_x: f64, center_y: f64, width: u16, height: u16, bounds: Rect) -> Rect {
    let x = (center_x - f64::from(width) / 2.0).round().max(f64::from(bounds.x)) as u16;
    let y = (center_y - f64::from(height) / 2.0).round().max(f64::from(bounds.y)) as u16;
    let node = Rect {
        x,
        y,
        width,
        height,
    };
    node.intersection(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp_u16(3, 30, 0.0), 3);
        assert_eq!(lerp_u16(3, 30, 1.0), 30);
        assert_eq!(lerp_u16(3, 30, 2.0), 30);
    }

    #[test]
    fn clamp_rect_stays_inside_bounds() {
        let bounds = Rect::new(2, 2, 40, 20);
        let node = clamp_rect(0.0, 0.0, 10, 5, bounds);
        assert!(node.x >= bounds.x && node.y >= bounds.y);
        assert!(node.right() <= bounds.right() && node.bottom() <= bounds.bottom());
    }
}
