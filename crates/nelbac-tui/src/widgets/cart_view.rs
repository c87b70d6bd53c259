use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::App;

pub struct CartWidget;

impl CartWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let block = Block::default()
            .title(" Cart ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.grey0))
            .style(Style::default().bg(app.theme.bg0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if app.cart.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Your cart is empty.",
                    Style::default().fg(app.theme.grey1),
                )),
                Line::from(Span::styled(
                    "Browse Products and press Enter to add a controller.",
                    Style::default().fg(app.theme.grey0),
                )),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(2)])
            .split(inner);

        let items: Vec<ListItem> = app
            .cart
            .items()
            .iter()
            .map(|line| {
                let subtotal = line.product.price * f64::from(line.quantity);
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<12}", line.product.name),
                        Style::default().fg(app.theme.fg0),
                    ),
                    Span::styled(
                        format!(" x{:<3}", line.quantity),
                        Style::default().fg(app.theme.accent),
                    ),
                    Span::styled(
                        format!(" ${:>8.2}", line.product.price),
                        Style::default().fg(app.theme.grey1),
                    ),
                    Span::styled(
                        format!("  ${:>8.2}", subtotal),
                        Style::default().fg(app.theme.fg1),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).highlight_style(
            Style::default()
                .bg(app.theme.selection)
                .add_modifier(Modifier::BOLD),
        );
        let mut state = ListState::default();
        state.select(Some(app.selected_cart_line.min(app.cart.items().len() - 1)));
        frame.render_stateful_widget(list, rows[0], &mut state);

        let footer = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("Total: ${:.2}", app.cart.total()),
                Style::default()
                    .fg(app.theme.success)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "j/k: select  +/-: quantity  x: remove",
                Style::default().fg(app.theme.grey1),
            )),
        ])
        .alignment(Alignment::Right);
        frame.render_widget(footer, rows[1]);
    }
}
