use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Tabs,
    Frame,
};

use crate::app::{App, Page};

const PAGES: [Page; 4] = [Page::Home, Page::Products, Page::About, Page::Cart];

pub struct NavBarWidget;

impl NavBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let selected = PAGES.iter().position(|p| *p == app.page).unwrap_or(0);

        let titles: Vec<Line> = PAGES
            .iter()
            .map(|page| {
                let label = if *page == Page::Cart && !app.cart.is_empty() {
                    format!("{} ({})", page.title(), app.cart.count())
                } else {
                    page.title().to_string()
                };
                Line::from(label)
            })
            .collect();

        let tabs = Tabs::new(titles)
            .select(selected)
            .style(Style::default().fg(app.theme.grey1).bg(app.theme.bg1))
            .highlight_style(
                Style::default()
                    .fg(app.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .divider(Span::styled("|", Style::default().fg(app.theme.grey0)));

        frame.render_widget(tabs, area);
    }
}
