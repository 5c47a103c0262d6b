//! Input normalization: pointer events in virtual coordinates.
//!
//! The browser reports mouse positions in CSS pixels over the DOM grid; the
//! game core works in a fixed 480x800 virtual space. The conversion here is
//! pure and tested; the DOM query that feeds it lives in `main.rs`.

use crate::game::layout;

/// All input events the game loop consumes, drained once per frame in
/// arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Close the game (Esc).
    Quit,
    /// Pointer pressed at virtual coordinates, stamped with the wall clock.
    PointerDown { x: i32, y: i32, at_ms: f64 },
    /// Pointer moved (hover or drag).
    PointerMove { x: i32, y: i32 },
    /// Pointer released.
    PointerUp,
}

/// Map a pixel position inside a `grid_w` x `grid_h` surface into the
/// virtual 480x800 space. Returns `None` outside the surface or for a
/// degenerate surface.
pub fn to_virtual(px: f64, py: f64, grid_w: f64, grid_h: f64) -> Option<(i32, i32)> {
    if grid_w <= 0.0 || grid_h <= 0.0 {
        return None;
    }
    if px < 0.0 || py < 0.0 || px >= grid_w || py >= grid_h {
        return None;
    }
    let vx = (px * layout::VIRTUAL_WIDTH as f64 / grid_w) as i32;
    let vy = (py * layout::VIRTUAL_HEIGHT as f64 / grid_h) as i32;
    Some((vx, vy))
}
