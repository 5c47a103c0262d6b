//! Game rules: clicks, purchases, and passive accrual. Pure functions over
//! the state, fully testable without a browser.

use crate::audio::SOUND_COUNT;

use super::offers;
use super::state::{GameState, OfferKind};

/// Minimum interval between two registered cat clicks.
pub const CLICK_COOLDOWN_MS: f64 = 100.0;

/// Ticks per auto-click accrual step: one real second at the 60 Hz tick
/// rate. The rate field is drained into the score once per step.
pub const ACCRUAL_TICKS: u32 = 60;

/// How long the cat stays visually pressed after a registered click.
const PRESS_FLASH_TICKS: u32 = 6;

/// Register a tap on the cat at wall-clock `now_ms`.
///
/// Applies the 100ms cooldown; on success adds `points_per_click` to the
/// score and returns the sound index to hand to the audio sink, drawn
/// uniformly from the indices not in the recent history. Within the
/// cooldown this is a no-op returning `None`.
pub fn register_click(state: &mut GameState, now_ms: f64) -> Option<usize> {
    if let Some(last) = state.last_click_ms {
        if now_ms - last <= CLICK_COOLDOWN_MS {
            return None;
        }
    }
    state.last_click_ms = Some(now_ms);
    state.score += state.points_per_click;
    state.pressed_ticks = PRESS_FLASH_TICKS;

    let sound = pick_sound(state);
    state.sound_history.push(sound);
    Some(sound)
}

/// Uniform draw over the sound indices not present in the recent history.
/// The candidate set is never empty: history capacity 2 < SOUND_COUNT.
fn pick_sound(state: &mut GameState) -> usize {
    let candidates: Vec<usize> = (0..SOUND_COUNT)
        .filter(|idx| !state.sound_history.contains(*idx))
        .collect();
    let roll = state.next_random() as usize % candidates.len();
    candidates[roll]
}

/// Attempt to buy the offer at `index`. Returns whether the purchase
/// happened; an unaffordable or out-of-range index is a silent no-op.
///
/// On success: deduct the cost, apply the effect, raise the offer's cost by
/// x1.5, and with probability 1/2 append a freshly rolled offer to the
/// catalog.
pub fn try_purchase(state: &mut GameState, index: usize) -> bool {
    let cost = match state.catalog.get(index) {
        Some(offer) => offer.cost,
        None => return false,
    };
    if state.score < cost {
        return false;
    }
    state.score -= cost;

    let offer = &mut state.catalog[index];
    match offer.kind {
        OfferKind::Multiplier => state.points_per_click += offer.value,
        OfferKind::AutoClicker => state.auto_click_rate += offer.value,
    }
    offer.raise_cost();

    // Half the time a purchase restocks the shop with a new roll.
    if state.next_random() % 2 == 0 {
        let fresh = offers::generate_offer(state);
        state.catalog.push(fresh);
    }
    true
}

/// Advance passive logic by `delta_ticks` ticks at 60 ticks/sec: drain the
/// auto-click rate into the score once per accrual step and decay the
/// pressed flash.
pub fn tick(state: &mut GameState, delta_ticks: u32) {
    if delta_ticks == 0 {
        return;
    }
    state.pressed_ticks = state.pressed_ticks.saturating_sub(delta_ticks);

    state.accrual_ticks += delta_ticks;
    while state.accrual_ticks >= ACCRUAL_TICKS {
        state.accrual_ticks -= ACCRUAL_TICKS;
        state.score += state.auto_click_rate;
    }
}
