//! Background audio
//!
//! There is exactly one background track per session. It sits in a
//! thread-local slot owned by the UI thread and is reached through the free
//! functions below, so unrelated screens can start or fade it without
//! passing a handle around:
//! - `install_music`: register how to build the player (once per session)
//! - `start_music` / `toggle_music` / `fade_music` / `tick_music`
//! - `music_is_playing`: hardware playback state, for polling
//! - `shutdown_music`: stop and release on window close
//!
//! The player is built lazily by the first start, toggle or fade; queries
//! never build it. If building fails the slot stays unavailable and every
//! call becomes a no-op.

mod output;
mod player;

use std::cell::RefCell;
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub use output::RodioPlayback;
pub use player::BackgroundMusic;
#[cfg(test)]
pub(crate) use player::fake;

/// Errors from the audio output
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("failed to open audio output: {0}")]
    Output(String),
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode audio: {0}")]
    Decode(String),
    #[error("background music is disabled")]
    Disabled,
}

type MusicFactory = Box<dyn FnOnce() -> Result<BackgroundMusic, AudioError>>;

enum MusicSlot {
    /// Nothing installed yet
    Empty,
    /// Installed, not built yet
    Pending(MusicFactory),
    Ready(BackgroundMusic),
    /// Building failed; stays silent for the rest of the session
    Unavailable,
    /// Shut down with the window
    Released,
}

thread_local! {
    static MUSIC: RefCell<MusicSlot> = const { RefCell::new(MusicSlot::Empty) };
}

/// Register the player factory
///
/// Returns false (and keeps the existing player) if one is already
/// installed for this session.
pub fn install_music(
    factory: impl FnOnce() -> Result<BackgroundMusic, AudioError> + 'static,
) -> bool {
    MUSIC.with(|slot| {
        let mut slot = slot.borrow_mut();
        if matches!(*slot, MusicSlot::Empty | MusicSlot::Released) {
            *slot = MusicSlot::Pending(Box::new(factory));
            true
        } else {
            tracing::warn!("Background music already installed, ignoring");
            false
        }
    })
}

/// Run `f` against the player, building it first if needed
fn with_music<R>(f: impl FnOnce(&mut BackgroundMusic) -> R) -> Option<R> {
    MUSIC.with(|slot| {
        let mut slot = slot.borrow_mut();
        if matches!(*slot, MusicSlot::Pending(_)) {
            if let MusicSlot::Pending(factory) =
                std::mem::replace(&mut *slot, MusicSlot::Unavailable)
            {
                match factory() {
                    Ok(music) => *slot = MusicSlot::Ready(music),
                    Err(e) => tracing::warn!("Background music unavailable: {}", e),
                }
            }
        }

        match &mut *slot {
            MusicSlot::Ready(music) => Some(f(music)),
            _ => None,
        }
    })
}

/// Run `f` against the player only if it has been built already
fn peek_music<R>(f: impl FnOnce(&mut BackgroundMusic) -> R) -> Option<R> {
    MUSIC.with(|slot| match &mut *slot.borrow_mut() {
        MusicSlot::Ready(music) => Some(f(music)),
        _ => None,
    })
}

/// Start playback. No-op if already playing; refusals are dropped.
pub fn start_music() {
    with_music(|music| music.start());
}

/// Music button
pub fn toggle_music() {
    with_music(|music| music.toggle());
}

/// Fade the music out over `duration`, then pause
pub fn fade_music(duration: Duration) {
    peek_music(|music| music.fade_out(duration, Instant::now()));
}

/// Advance a running fade. Returns true while still fading.
pub fn tick_music() -> bool {
    peek_music(|music| music.tick(Instant::now())).unwrap_or(false)
}

pub fn music_is_fading() -> bool {
    peek_music(|music| music.is_fading()).unwrap_or(false)
}

/// Whether sound is actually coming out right now
pub fn music_is_playing() -> bool {
    peek_music(|music| music.is_playing()).unwrap_or(false)
}

/// Stop the music and release the output
pub fn shutdown_music() {
    let previous =
        MUSIC.with(|slot| std::mem::replace(&mut *slot.borrow_mut(), MusicSlot::Released));
    if let MusicSlot::Ready(mut music) = previous {
        music.stop();
        tracing::info!("Background music released");
    }
}
