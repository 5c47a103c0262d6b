//! Sound playback behind a small fire-and-forget trait.
//!
//! The core picks which pop sound to play (see `game::logic`); playing it is
//! an external concern. On wasm the sink drives one `HtmlAudioElement` per
//! asset; on other targets (and in tests) sinks discard or record requests.

/// Pop sound assets, indexed by position.
pub const SOUND_PATHS: &[&str] = &[
    "assets/sounds/sound1.mp3",
    "assets/sounds/sound2.mp3",
    "assets/sounds/sound3.mp3",
];

/// Number of distinct pop sounds.
pub const SOUND_COUNT: usize = SOUND_PATHS.len();

/// Fire-and-forget sound sink. Overlapping playback is permitted; a failed
/// play degrades to silence.
pub trait SoundPlayer {
    fn play(&self, index: usize);
}

/// Sink that drops every request; used where audio is unavailable.
pub struct NullPlayer;

impl SoundPlayer for NullPlayer {
    fn play(&self, _index: usize) {}
}

#[cfg(target_arch = "wasm32")]
pub use web::WebPlayer;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{SoundPlayer, SOUND_PATHS};

    use web_sys::HtmlAudioElement;

    /// One `<audio>` element per asset, created eagerly at startup. An asset
    /// that fails to construct is simply skipped at play time.
    pub struct WebPlayer {
        sounds: Vec<Option<HtmlAudioElement>>,
    }

    impl WebPlayer {
        pub fn new() -> Self {
            let sounds = SOUND_PATHS
                .iter()
                .map(|path| HtmlAudioElement::new_with_src(path).ok())
                .collect();
            Self { sounds }
        }
    }

    impl SoundPlayer for WebPlayer {
        fn play(&self, index: usize) {
            if let Some(Some(sound)) = self.sounds.get(index) {
                // Rewind so rapid taps restart the pop instead of silently
                // overlapping an in-flight element.
                sound.set_current_time(0.0);
                let _ = sound.play();
            }
        }
    }
}
