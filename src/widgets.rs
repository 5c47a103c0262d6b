//! Reusable UI components.
//!
//! Each component encapsulates its own rendering, keeping the scene code in
//! `game::render` declarative.

use ratzilla::ratatui::layout::{Alignment, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratzilla::ratatui::Frame;

/// Soft pastel pink of the original art style.
pub const PINK: Color = Color::Rgb(255, 195, 197);
/// Dusty brown used for borders and titles.
pub const BROWN: Color = Color::Rgb(172, 124, 120);

/// A rounded shop button: offer name on top, price at the bottom.
///
/// Hovering swaps the fill and border colors, mirroring the original's
/// two-tone hover feedback.
///
/// # Example
/// ```ignore
/// ShopButton::new("Pts Mult", 50)
///     .highlighted(hovered)
///     .render(f, cell);
/// ```
pub struct ShopButton<'a> {
    name: &'a str,
    price: u64,
    highlighted: bool,
}

impl<'a> ShopButton<'a> {
    pub fn new(name: &'a str, price: u64) -> Self {
        Self {
            name,
            price,
            highlighted: false,
        }
    }

    /// Use the hover style when the pointer sits inside the cell.
    pub fn highlighted(mut self, on: bool) -> Self {
        self.highlighted = on;
        self
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let (text, border) = if self.highlighted {
            (PINK, BROWN)
        } else {
            (BROWN, PINK)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        f.render_widget(block, area);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let name_style = Style::default().fg(text).add_modifier(Modifier::BOLD);
        let price_style = Style::default().fg(text);

        if inner.height >= 2 {
            let name = Paragraph::new(Line::from(Span::styled(self.name.to_string(), name_style)))
                .alignment(Alignment::Center);
            f.render_widget(name, Rect::new(inner.x, inner.y, inner.width, 1));

            let price = Paragraph::new(Line::from(Span::styled(
                format!("{} pts", self.price),
                price_style,
            )))
            .alignment(Alignment::Center);
            let bottom = inner.y + inner.height - 1;
            f.render_widget(price, Rect::new(inner.x, bottom, inner.width, 1));
        } else {
            // One-row cell on short terminals: fold name and price together.
            let folded = Paragraph::new(Line::from(Span::styled(
                format!("{} {}p", self.name, self.price),
                name_style,
            )))
            .alignment(Alignment::Center);
            f.render_widget(folded, inner);
        }
    }
}
