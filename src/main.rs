mod audio;
mod game;
mod input;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};

use audio::SoundPlayer;
use game::{layout, PopGame};
use input::InputEvent;
use time::FrameClock;

/// Wall-clock milliseconds from `performance.now()`; 0.0 when unavailable.
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Query the grid container's bounding rect and convert a pixel position
/// into virtual 480x800 coordinates.
fn dom_to_virtual(mouse_x: u32, mouse_y: u32) -> Option<(i32, i32)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    input::to_virtual(
        mouse_x as f64 - rect.left(),
        mouse_y as f64 - rect.top(),
        rect.width(),
        rect.height(),
    )
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    let sounds: Box<dyn SoundPlayer> = Box::new(audio::WebPlayer::new());
    #[cfg(not(target_arch = "wasm32"))]
    let sounds: Box<dyn SoundPlayer> = Box::new(audio::NullPlayer);

    let mut boot = PopGame::new(sounds);
    // Seed the shop RNG from the clock; the xorshift word must be nonzero.
    boot.state.rng_state = (now_ms() as u32) | 1;

    let game = Rc::new(RefCell::new(boot));
    let queue: Rc<RefCell<Vec<InputEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let clock = Rc::new(RefCell::new(FrameClock::new(time::TICKS_PER_SEC)));

    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Pointer events are queued here and drained once per frame, so the
    // loop sees them in arrival order.
    terminal.on_mouse_event({
        let queue = queue.clone();
        move |mouse_event| {
            let event = match mouse_event.event {
                MouseEventKind::Pressed => {
                    if mouse_event.button != MouseButton::Left {
                        return;
                    }
                    match dom_to_virtual(mouse_event.x, mouse_event.y) {
                        Some((x, y)) => InputEvent::PointerDown {
                            x,
                            y,
                            at_ms: now_ms(),
                        },
                        None => return,
                    }
                }
                MouseEventKind::Moved => match dom_to_virtual(mouse_event.x, mouse_event.y) {
                    Some((x, y)) => InputEvent::PointerMove { x, y },
                    None => return,
                },
                MouseEventKind::Released => InputEvent::PointerUp,
                _ => return,
            };
            queue.borrow_mut().push(event);
        }
    });

    // Keyboard: Space taps the cat at its center, Esc quits.
    terminal.on_key_event({
        let queue = queue.clone();
        move |key_event| {
            let mut q = queue.borrow_mut();
            match key_event.code {
                KeyCode::Esc => q.push(InputEvent::Quit),
                KeyCode::Char(' ') => {
                    let r = layout::cat_rect();
                    q.push(InputEvent::PointerDown {
                        x: r.x + r.w / 2,
                        y: r.y + r.h / 2,
                        at_ms: now_ms(),
                    });
                    q.push(InputEvent::PointerUp);
                }
                _ => {}
            }
        }
    });

    terminal.draw_web({
        let game = game.clone();
        let queue = queue.clone();
        let clock = clock.clone();
        move |f| {
            let mut g = game.borrow_mut();
            let area = f.area();

            if g.running() {
                let pending: Vec<InputEvent> = queue.borrow_mut().drain(..).collect();
                for event in &pending {
                    g.handle_event(event);
                }
                let ticks = clock.borrow_mut().advance(now_ms());
                g.tick(ticks);
                g.render(f, area);
            } else {
                queue.borrow_mut().clear();
                game::render::render_goodbye(f, area);
            }
        }
    });

    Ok(())
}
