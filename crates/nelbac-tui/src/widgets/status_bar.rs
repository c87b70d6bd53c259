use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Page};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " {} | Slide {}/{} | Cart: {} item(s)",
                app.page.title(),
                app.engine.active_index() + 1,
                app.engine.item_count(),
                app.cart.count(),
            )
        };

        let help_hint = match app.page {
            Page::Home => format!(
                " q:quit Tab:pages j/k:slides 1-{}:jump a:advisor ",
                app.engine.item_count().min(9),
            ),
            Page::Products => " q:quit Tab:pages j/k:move Enter:add a:advisor ".to_string(),
            Page::Cart => " q:quit Tab:pages j/k:move +/-:qty x:remove ".to_string(),
            Page::About => " q:quit Tab:pages a:advisor ".to_string(),
        };

        let padding_len = usize::from(area.width)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(app.theme.fg0).bg(app.theme.bg2),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(app.theme.bg2),
            ),
            Span::styled(
                help_hint,
                Style::default().fg(app.theme.grey1).bg(app.theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use nelbac_core::{catalog::Catalog, config::AppConfig};
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::theme::Theme;

    #[test]
    fn home_hint_reflects_item_count() {
        let app = App::new(
            Arc::new(AppConfig::default()),
            Catalog::builtin(),
            Theme::default(),
        )
        .unwrap();
        let slides = app.engine.item_count();

        let mut terminal = Terminal::new(TestBackend::new(100, 1)).unwrap();
        terminal
            .draw(|frame| StatusBarWidget::render(frame, frame.area(), &app))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..100u16).map(|x| buffer[(x, 0)].symbol()).collect();
        assert!(row.contains(&format!("1-{}:jump", slides)));
    }
}
