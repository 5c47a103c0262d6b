//! Pop Cat game state definitions.

use super::layout;
use super::offers;

/// What an upgrade does when purchased.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OfferKind {
    /// Permanently increases points earned per click.
    Multiplier,
    /// Adds to the passive points-per-second rate.
    AutoClicker,
}

impl OfferKind {
    /// Display name stem, shared by the seed table and generated offers.
    pub fn label(&self) -> &'static str {
        match self {
            OfferKind::Multiplier => "Pts Mult",
            OfferKind::AutoClicker => "Auto Click",
        }
    }
}

/// A purchasable shop upgrade. Immutable once created except for `cost`,
/// which grows after every purchase.
#[derive(Clone, Debug)]
pub struct UpgradeOffer {
    pub name: String,
    pub cost: u64,
    pub kind: OfferKind,
    pub value: u64,
}

impl UpgradeOffer {
    /// Cost growth applied after each purchase: x1.5, truncated to integer.
    pub fn raise_cost(&mut self) {
        self.cost = self.cost * 3 / 2;
    }
}

/// Ring of the most recently played sound indices (capacity 2). Sound
/// selection excludes these to avoid immediate repeats.
#[derive(Clone, Debug, Default)]
pub struct SoundHistory {
    recent: [Option<usize>; 2],
    next: usize,
}

impl SoundHistory {
    /// Remember a played index, evicting the oldest entry.
    pub fn push(&mut self, index: usize) {
        self.recent[self.next] = Some(index);
        self.next = (self.next + 1) % self.recent.len();
    }

    pub fn contains(&self, index: usize) -> bool {
        self.recent.iter().any(|slot| *slot == Some(index))
    }

    pub fn len(&self) -> usize {
        self.recent.iter().filter(|slot| slot.is_some()).count()
    }
}

/// Full state of a Pop Cat session: the economy, the catalog, and the
/// loop-level flags the frame algorithm reads and writes.
pub struct GameState {
    /// Points accumulated; never goes negative (purchases check first).
    pub score: u64,
    /// Points earned per registered cat click.
    pub points_per_click: u64,
    /// Passive points per second, drained by the accrual tick.
    pub auto_click_rate: u64,
    /// Shop catalog; insertion order is display order. Only the first nine
    /// entries are reachable through the 3x3 grid.
    pub catalog: Vec<UpgradeOffer>,

    /// True until a quit event is seen.
    pub running: bool,
    /// True between a pointer-down that missed the cat and the offers, and
    /// the matching pointer-up.
    pub dragging: bool,
    /// Virtual Y captured at drag start so that
    /// `scroll_offset = drag_origin_y - pointer_y` while dragging.
    pub drag_origin_y: i32,
    /// Shop scroll, clamped every frame.
    pub scroll_offset: i32,
    /// Cat held pressed between pointer-down on it and pointer-up.
    pub pressed: bool,
    /// Short pressed flash after a registered click, so keyboard taps
    /// (down and up in the same frame) stay visible.
    pub pressed_ticks: u32,
    /// Last known pointer position, for hover highlighting.
    pub cursor: Option<(i32, i32)>,

    /// Wall-clock of the last registered click, for the cooldown.
    pub last_click_ms: Option<f64>,
    pub sound_history: SoundHistory,
    /// Ticks accumulated toward the next auto-click accrual.
    pub accrual_ticks: u32,

    /// xorshift32 word for shop rolls and sound selection. Must stay
    /// nonzero; reseeded from the clock at startup.
    pub rng_state: u32,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            score: 0,
            points_per_click: 1,
            auto_click_rate: 0,
            catalog: offers::seed_catalog(),
            running: true,
            dragging: false,
            drag_origin_y: 0,
            scroll_offset: 0,
            pressed: false,
            pressed_ticks: 0,
            cursor: None,
            last_click_ms: None,
            sound_history: SoundHistory::default(),
            accrual_ticks: 0,
            rng_state: 0x9E37_79B9,
        }
    }

    /// Advance the xorshift32 word and return it. Never returns 0.
    pub fn next_random(&mut self) -> u32 {
        let mut x = self.rng_state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.rng_state = x;
        x
    }

    /// The slice of the catalog the 3x3 grid can actually show.
    pub fn visible_offers(&self) -> &[UpgradeOffer] {
        let cap = layout::VISIBLE_OFFERS.min(self.catalog.len());
        &self.catalog[..cap]
    }
}
