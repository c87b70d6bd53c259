use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

pub struct ProductsWidget;

impl ProductsWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(32), Constraint::Min(0)])
            .split(area);

        Self::render_list(frame, columns[0], app);
        Self::render_detail(frame, columns[1], app);
    }

    fn render_list(frame: &mut Frame, area: Rect, app: &App) {
        let items: Vec<ListItem> = app
            .catalog
            .products
            .iter()
            .map(|product| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        product.name.clone(),
                        Style::default().fg(app.theme.fg0),
                    )),
                    Line::from(Span::styled(
                        format!("  ${:.0}  {}", product.price, product.category),
                        Style::default().fg(app.theme.grey1),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Products ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.grey0))
                    .style(Style::default().bg(app.theme.bg0)),
            )
            .highlight_style(
                Style::default()
                    .bg(app.theme.selection)
                    .fg(app.theme.accent)
                    .add_modifier(Modifier::BOLD),
            );

        let mut state = ListState::default();
        state.select(Some(app.selected_product));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_detail(frame: &mut Frame, area: Rect, app: &App) {
        let Some(product) = app.catalog.products.get(app.selected_product) else {
            return;
        };

        let block = Block::default()
            .title(format!(" {} ", product.name))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.accent))
            .style(Style::default().bg(app.theme.bg0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(Span::styled(
                product.tagline.clone(),
                Style::default()
                    .fg(app.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("${:.2}", product.price),
                Style::default().fg(app.theme.success),
            )),
            Line::from(""),
            Line::from(Span::styled(
                product.description.clone(),
                Style::default().fg(app.theme.fg1),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Features",
                Style::default()
                    .fg(app.theme.fg0)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        for feature in &product.features {
            lines.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(app.theme.accent)),
                Span::styled(feature.clone(), Style::default().fg(app.theme.fg1)),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Specifications",
            Style::default()
                .fg(app.theme.fg0)
                .add_modifier(Modifier::BOLD),
        )));
        for (label, value) in &product.specs {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<14}", label), Style::default().fg(app.theme.grey1)),
                Span::styled(value.clone(), Style::default().fg(app.theme.fg1)),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Enter: add to cart",
            Style::default().fg(app.theme.grey1),
        )));

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }
}
