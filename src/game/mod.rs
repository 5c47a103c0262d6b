//! Pop Cat — tap the cat, buy upgrades, watch the shop grow.
//!
//! `PopGame` is the loop controller: it owns the state, applies drained
//! input events to it, advances logic ticks, and renders. The per-frame
//! order (drain events, clamp scroll, tick, render) lives in `main.rs`.

pub mod layout;
pub mod logic;
pub mod offers;
pub mod render;
pub mod state;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::audio::SoundPlayer;
use crate::input::InputEvent;

use state::GameState;

pub struct PopGame {
    pub state: GameState,
    audio: Box<dyn SoundPlayer>,
}

impl PopGame {
    pub fn new(audio: Box<dyn SoundPlayer>) -> Self {
        Self {
            state: GameState::new(),
            audio,
        }
    }

    /// Whether the loop should keep running (no quit event seen yet).
    pub fn running(&self) -> bool {
        self.state.running
    }

    /// Apply one input event to the state.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Quit => self.state.running = false,
            InputEvent::PointerDown { x, y, at_ms } => self.pointer_down(x, y, at_ms),
            InputEvent::PointerMove { x, y } => self.pointer_move(x, y),
            InputEvent::PointerUp => {
                self.state.dragging = false;
                self.state.pressed = false;
            }
        }
    }

    fn pointer_down(&mut self, x: i32, y: i32, at_ms: f64) {
        if layout::cat_rect().contains(x, y) {
            self.state.pressed = true;
            if let Some(sound) = logic::register_click(&mut self.state, at_ms) {
                self.audio.play(sound);
            }
            return;
        }

        let visible = self.state.visible_offers().len();
        if let Some(idx) = layout::hit_offer(x, y, self.state.scroll_offset, visible) {
            logic::try_purchase(&mut self.state, idx);
            return;
        }

        // Missed everything: grab the shop for inverted drag-to-scroll.
        self.state.dragging = true;
        self.state.drag_origin_y = self.state.scroll_offset + y;
    }

    fn pointer_move(&mut self, x: i32, y: i32) {
        self.state.cursor = Some((x, y));
        if self.state.dragging {
            self.state.scroll_offset = self.state.drag_origin_y - y;
        }
    }

    /// Advance logic ticks, then clamp the scroll offset for this frame.
    pub fn tick(&mut self, delta_ticks: u32) {
        logic::tick(&mut self.state, delta_ticks);
        self.state.scroll_offset = layout::clamp_scroll(self.state.scroll_offset);
    }

    /// Render the current state into the frame.
    pub fn render(&self, f: &mut Frame, area: Rect) {
        render::render(&self.state, f, area);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Test sink that records every index it was asked to play.
    struct Recorder(Rc<RefCell<Vec<usize>>>);

    impl SoundPlayer for Recorder {
        fn play(&self, index: usize) {
            self.0.borrow_mut().push(index);
        }
    }

    fn game_with_recorder() -> (PopGame, Rc<RefCell<Vec<usize>>>) {
        let played = Rc::new(RefCell::new(Vec::new()));
        let game = PopGame::new(Box::new(Recorder(played.clone())));
        (game, played)
    }

    fn tap(x: i32, y: i32, at_ms: f64) -> InputEvent {
        InputEvent::PointerDown { x, y, at_ms }
    }

    #[test]
    fn tap_on_cat_scores_and_plays_a_sound() {
        let (mut game, played) = game_with_recorder();
        game.handle_event(&tap(240, 266, 10.0));
        assert_eq!(game.state.score, 1);
        assert!(game.state.pressed);
        assert_eq!(played.borrow().len(), 1);
    }

    #[test]
    fn tap_on_cat_within_cooldown_is_silent() {
        let (mut game, played) = game_with_recorder();
        game.handle_event(&tap(240, 266, 10.0));
        game.handle_event(&InputEvent::PointerUp);
        game.handle_event(&tap(240, 266, 60.0));
        assert_eq!(game.state.score, 1);
        assert_eq!(played.borrow().len(), 1);
    }

    #[test]
    fn sounds_never_repeat_the_recent_window() {
        let (mut game, played) = game_with_recorder();
        for i in 0..30 {
            game.handle_event(&tap(240, 266, i as f64 * 150.0));
            game.handle_event(&InputEvent::PointerUp);
        }
        let played = played.borrow();
        assert_eq!(played.len(), 30);
        for pair in played.windows(3) {
            assert_ne!(pair[2], pair[1]);
            assert_ne!(pair[2], pair[0]);
        }
    }

    #[test]
    fn tap_on_offer_purchases_when_affordable() {
        let (mut game, _) = game_with_recorder();
        game.state.score = 50;
        let cell = layout::offer_cell(0, 0);
        game.handle_event(&tap(cell.x + 5, cell.y + 5, 0.0));
        assert_eq!(game.state.score, 0);
        assert_eq!(game.state.points_per_click, 2);
        assert!(!game.state.dragging, "offer taps must not start a drag");
    }

    #[test]
    fn tap_on_unaffordable_offer_is_a_quiet_noop() {
        let (mut game, played) = game_with_recorder();
        let cell = layout::offer_cell(8, 0); // costs 450
        game.handle_event(&tap(cell.x + 1, cell.y + 1, 0.0));
        assert_eq!(game.state.score, 0);
        assert!(played.borrow().is_empty());
        assert!(!game.state.dragging);
    }

    #[test]
    fn tap_in_the_gutter_starts_a_drag() {
        let (mut game, _) = game_with_recorder();
        game.handle_event(&tap(170, 580, 0.0)); // between offer columns
        assert!(game.state.dragging);
        assert_eq!(game.state.score, 0);

        game.handle_event(&InputEvent::PointerMove { x: 170, y: 560 });
        // Inverted drag: moving the pointer up scrolls down.
        assert_eq!(game.state.scroll_offset, 20);

        game.handle_event(&InputEvent::PointerUp);
        assert!(!game.state.dragging);
    }

    #[test]
    fn drag_scroll_is_clamped_each_frame() {
        let (mut game, _) = game_with_recorder();
        game.handle_event(&tap(170, 580, 0.0));
        game.handle_event(&InputEvent::PointerMove { x: 170, y: 100 });
        assert!(game.state.scroll_offset > 0);
        game.tick(1);
        // The 9-offer window leaves no scroll room at all.
        assert_eq!(game.state.scroll_offset, 0);
    }

    #[test]
    fn move_without_drag_only_tracks_hover() {
        let (mut game, _) = game_with_recorder();
        game.handle_event(&InputEvent::PointerMove { x: 30, y: 560 });
        assert_eq!(game.state.cursor, Some((30, 560)));
        assert_eq!(game.state.scroll_offset, 0);
        assert!(!game.state.dragging);
    }

    #[test]
    fn pointer_up_releases_the_cat() {
        let (mut game, _) = game_with_recorder();
        game.handle_event(&tap(240, 266, 0.0));
        assert!(game.state.pressed);
        game.handle_event(&InputEvent::PointerUp);
        assert!(!game.state.pressed);
    }

    #[test]
    fn quit_stops_the_loop() {
        let (mut game, _) = game_with_recorder();
        assert!(game.running());
        game.handle_event(&InputEvent::Quit);
        assert!(!game.running());
    }

    #[test]
    fn auto_clickers_pay_out_through_tick() {
        let (mut game, _) = game_with_recorder();
        game.state.score = 100;
        let cell = layout::offer_cell(1, 0); // {100, AutoClicker, 1}
        game.handle_event(&tap(cell.x + 5, cell.y + 5, 0.0));
        assert_eq!(game.state.auto_click_rate, 1);
        game.tick(logic::ACCRUAL_TICKS);
        assert_eq!(game.state.score, 1);
    }

    #[test]
    fn events_drain_in_arrival_order() {
        let (mut game, _) = game_with_recorder();
        game.state.score = 49;
        let cell = layout::offer_cell(0, 0);
        let events = [
            tap(240, 266, 0.0), // click -> 50
            InputEvent::PointerUp,
            tap(cell.x + 5, cell.y + 5, 200.0), // buy {50, Multiplier, 1}
            InputEvent::PointerUp,
        ];
        for event in &events {
            game.handle_event(event);
        }
        assert_eq!(game.state.score, 0);
        assert_eq!(game.state.points_per_click, 2);
    }
}
