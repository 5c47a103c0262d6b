//! Scene rendering: the cat, the score card, and the shop grid.
//!
//! Core geometry is virtual 480x800 pixels; everything here scales those
//! rects into terminal cells for the frame being drawn.

use ratzilla::ratatui::layout::{Alignment, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::widgets::{ShopButton, BROWN, PINK};

use super::layout::{self, VRect};
use super::state::GameState;

/// Idle cat, mouth closed.
const CAT_IDLE: &[&str] = &[
    r"    /\_____/\    ",
    r"   /  ^   ^  \   ",
    r"  |  >     <  |  ",
    r"  |    ___    |  ",
    r"   \  (___)  /   ",
    r"    \_______/    ",
    r"   /         \   ",
    r"  (  |  |  |  )  ",
    r"   \_|__|__|_/   ",
];

/// Pressed cat, mouth open mid-pop.
const CAT_PRESSED: &[&str] = &[
    r"    /\_____/\    ",
    r"   /  o   o  \   ",
    r"  |   _____   |  ",
    r"  |  |     |  |  ",
    r"  |  |_____|  |  ",
    r"    \_______/    ",
    r"   /         \   ",
    r"  (  |  |  |  )  ",
    r"   \_|__|__|_/   ",
];

pub fn render(state: &GameState, f: &mut Frame, area: Rect) {
    if area.width < 12 || area.height < 12 {
        return;
    }
    render_cat(state, f, area);
    render_score(state, f, area);
    render_shop(state, f, area);
    render_help(f, area);
}

/// Terminal card shown after a quit event; a web page cannot exit the
/// process, so the loop just stops feeding the game.
pub fn render_goodbye(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Thanks for popping!",
            Style::default().fg(PINK).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "(reload the page to play again)",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let card = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BROWN)),
    );
    f.render_widget(card, area);
}

fn render_score(state: &GameState, f: &mut Frame, area: Rect) {
    let card = Paragraph::new(Line::from(format!("Score: {}", state.score)))
        .alignment(Alignment::Center)
        .style(Style::default().fg(BROWN).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(PINK)),
        );
    f.render_widget(card, to_cells(layout::score_rect(), area));
}

fn render_cat(state: &GameState, f: &mut Frame, area: Rect) {
    let rect = to_cells(layout::cat_rect(), area);
    let pressed = state.pressed || state.pressed_ticks > 0;
    let art = if pressed { CAT_PRESSED } else { CAT_IDLE };
    let color = if pressed { Color::White } else { PINK };

    let lines: Vec<Line> = art.iter().map(|row| Line::from(*row)).collect();
    let pad = rect.height.saturating_sub(lines.len() as u16) / 2;
    let art_area = Rect::new(rect.x, rect.y + pad, rect.width, rect.height.saturating_sub(pad));
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    f.render_widget(widget, art_area);
}

fn render_shop(state: &GameState, f: &mut Frame, area: Rect) {
    let panel = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BROWN))
        .title(Line::from(Span::styled(
            " Shop ",
            Style::default().fg(BROWN).add_modifier(Modifier::BOLD),
        )));
    f.render_widget(panel, to_cells(layout::shop_rect(), area));

    for (idx, offer) in state.visible_offers().iter().enumerate() {
        let cell = layout::offer_cell(idx, state.scroll_offset);
        let hovered = state
            .cursor
            .map(|(cx, cy)| cell.contains(cx, cy))
            .unwrap_or(false);
        ShopButton::new(&offer.name, offer.cost)
            .highlighted(hovered)
            .render(f, to_cells(cell, area));
    }
}

fn render_help(f: &mut Frame, area: Rect) {
    let row = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
    let help = Paragraph::new(Line::from("tap the cat · [Space] pop · [Esc] quit"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, row);
}

/// Scale a virtual rect into terminal cells inside `area`.
fn to_cells(v: VRect, area: Rect) -> Rect {
    let col = |vx: i32| -> u16 {
        let vx = vx.clamp(0, layout::VIRTUAL_WIDTH) as i64;
        area.x + (vx * area.width as i64 / layout::VIRTUAL_WIDTH as i64) as u16
    };
    let row = |vy: i32| -> u16 {
        let vy = vy.clamp(0, layout::VIRTUAL_HEIGHT) as i64;
        area.y + (vy * area.height as i64 / layout::VIRTUAL_HEIGHT as i64) as u16
    };
    let x = col(v.x);
    let y = row(v.y);
    let w = col(v.x + v.w).saturating_sub(x).max(1);
    let h = row(v.y + v.h).saturating_sub(y).max(1);
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_cells_scales_into_area() {
        let area = Rect::new(0, 0, 48, 40);
        let cat = to_cells(layout::cat_rect(), area);
        assert_eq!(cat, Rect::new(2, 2, 44, 22));
    }

    #[test]
    fn to_cells_respects_area_offset() {
        let area = Rect::new(10, 5, 48, 40);
        let cat = to_cells(layout::cat_rect(), area);
        assert_eq!(cat.x, 12);
        assert_eq!(cat.y, 7);
    }

    #[test]
    fn to_cells_never_collapses_to_zero() {
        let area = Rect::new(0, 0, 30, 20);
        let tiny = to_cells(VRect { x: 0, y: 0, w: 1, h: 1 }, area);
        assert!(tiny.width >= 1);
        assert!(tiny.height >= 1);
    }

    #[test]
    fn to_cells_clamps_out_of_range_virtual_coords() {
        let area = Rect::new(0, 0, 48, 40);
        let off = to_cells(VRect { x: -100, y: -100, w: 50, h: 50 }, area);
        assert_eq!((off.x, off.y), (0, 0));
    }

    #[test]
    fn to_cells_stays_inside_area() {
        let area = Rect::new(0, 0, 48, 40);
        for idx in 0..layout::VISIBLE_OFFERS {
            let cell = to_cells(layout::offer_cell(idx, 0), area);
            assert!(cell.x + cell.width <= area.width);
            assert!(cell.y + cell.height <= area.height);
        }
    }
}
