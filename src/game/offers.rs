//! Shop catalog: the fixed launch offers and the random offer generator.

use super::state::{GameState, OfferKind, UpgradeOffer};

/// Cost range for generated offers, inclusive.
const GEN_COST_MIN: u64 = 200;
const GEN_COST_MAX: u64 = 500;

/// Largest rollable value per kind (minimum is always 1).
const MULT_VALUE_MAX: u64 = 3;
const AUTO_VALUE_MAX: u64 = 5;

/// The nine offers the shop opens with: alternating click multipliers and
/// auto-clickers at climbing costs.
pub fn seed_catalog() -> Vec<UpgradeOffer> {
    const SEED: [(u64, OfferKind, u64); 9] = [
        (50, OfferKind::Multiplier, 1),
        (100, OfferKind::AutoClicker, 1),
        (150, OfferKind::Multiplier, 2),
        (200, OfferKind::AutoClicker, 2),
        (250, OfferKind::Multiplier, 3),
        (300, OfferKind::AutoClicker, 3),
        (350, OfferKind::Multiplier, 4),
        (400, OfferKind::AutoClicker, 4),
        (450, OfferKind::Multiplier, 5),
    ];
    SEED.iter()
        .map(|&(cost, kind, value)| UpgradeOffer {
            name: kind.label().to_string(),
            cost,
            kind,
            value,
        })
        .collect()
}

/// Roll a fresh offer: cost uniform in [200, 500], kind 50/50, value bounded
/// by the kind, name derived from both.
pub fn generate_offer(state: &mut GameState) -> UpgradeOffer {
    let cost = GEN_COST_MIN + state.next_random() as u64 % (GEN_COST_MAX - GEN_COST_MIN + 1);
    let kind = if state.next_random() % 2 == 0 {
        OfferKind::Multiplier
    } else {
        OfferKind::AutoClicker
    };
    let value_max = match kind {
        OfferKind::Multiplier => MULT_VALUE_MAX,
        OfferKind::AutoClicker => AUTO_VALUE_MAX,
    };
    let value = 1 + state.next_random() as u64 % value_max;
    UpgradeOffer {
        name: format!("{} Lv{}", kind.label(), value),
        cost,
        kind,
        value,
    }
}
