//! Intro clip that plays while the visitor is at the top of the page.
//!
//! The controller is a pure state machine; an [`AudioSink`] does the actual
//! playback. Browsers may block autoplay, in which case the sink reports it and
//! the controller retries on the first click.

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AudioCommand {
    Play,
    /// Pause and rewind
    Stop,
}

#[derive(Clone, Debug)]
pub struct IntroAudio {
    threshold: f32,
    started: bool,
    stopped: bool,
    awaiting_first_click: bool,
}

impl IntroAudio {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            started: false,
            stopped: false,
            awaiting_first_click: true,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.started && !self.stopped
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Called once at startup.
    pub fn on_load(&mut self, scroll_y: f32) -> Option<AudioCommand> {
        self.try_play(scroll_y)
    }

    /// Leaving the top stops the clip for good; returning to it before that
    /// retries a blocked start.
    pub fn on_scroll(&mut self, scroll_y: f32) -> Option<AudioCommand> {
        if scroll_y >= self.threshold && !self.stopped {
            self.stopped = true;
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_audio_events {
                log::info!("[audio] stopped at scroll {scroll_y}");
            }
            return Some(AudioCommand::Stop);
        }
        self.try_play(scroll_y)
    }

    /// Only the first click of the session counts.
    pub fn on_click(&mut self, scroll_y: f32) -> Option<AudioCommand> {
        if !self.awaiting_first_click {
            return None;
        }
        self.awaiting_first_click = false;
        self.try_play(scroll_y)
    }

    /// The sink could not start playback; allow another attempt.
    pub fn on_play_blocked(&mut self) {
        log::debug!("Intro audio blocked by the browser");
        self.started = false;
    }

    fn try_play(&mut self, scroll_y: f32) -> Option<AudioCommand> {
        if self.started || self.stopped || scroll_y >= self.threshold {
            return None;
        }
        self.started = true;
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_audio_events {
            log::info!("[audio] play requested at scroll {scroll_y}");
        }
        Some(AudioCommand::Play)
    }
}

/// Playback backend.
pub trait AudioSink {
    fn play(&mut self, volume: f64);
    fn stop(&mut self);
    /// True once after a play attempt was rejected.
    fn take_blocked(&mut self) -> bool;
}

/// Applies a command, if any, to a sink.
pub fn dispatch(command: Option<AudioCommand>, sink: &mut dyn AudioSink, volume: f64) {
    match command {
        Some(AudioCommand::Play) => sink.play(volume),
        Some(AudioCommand::Stop) => sink.stop(),
        None => {}
    }
}

/// Native builds have no page audio.
#[derive(Default)]
pub struct SilentSink;

impl AudioSink for SilentSink {
    fn play(&mut self, _volume: f64) {
        log::debug!("Intro audio is not available in this build");
    }

    fn stop(&mut self) {}

    fn take_blocked(&mut self) -> bool {
        false
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::HtmlAudioSink;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::AudioSink;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_futures::{JsFuture, spawn_local};
    use web_sys::HtmlAudioElement;

    /// Plays through an `<audio>` element created for the clip.
    pub struct HtmlAudioSink {
        element: Option<HtmlAudioElement>,
        blocked: Rc<Cell<bool>>,
    }

    impl HtmlAudioSink {
        pub fn new(src: &str) -> Self {
            let element = HtmlAudioElement::new_with_src(src).ok();
            if element.is_none() {
                log::debug!("Could not create audio element for {src}");
            }
            Self {
                element,
                blocked: Rc::new(Cell::new(false)),
            }
        }
    }

    impl AudioSink for HtmlAudioSink {
        fn play(&mut self, volume: f64) {
            let Some(element) = &self.element else {
                return;
            };
            element.set_volume(volume);
            match element.play() {
                Ok(promise) => {
                    let blocked = Rc::clone(&self.blocked);
                    spawn_local(async move {
                        if JsFuture::from(promise).await.is_err() {
                            blocked.set(true);
                        }
                    });
                }
                Err(_) => self.blocked.set(true),
            }
        }

        fn stop(&mut self) {
            if let Some(element) = &self.element {
                let _ = element.pause();
                element.set_current_time(0.0);
            }
        }

        fn take_blocked(&mut self) -> bool {
            self.blocked.replace(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        commands: Vec<AudioCommand>,
        block_next: bool,
        blocked: bool,
    }

    impl AudioSink for RecordingSink {
        fn play(&mut self, _volume: f64) {
            self.commands.push(AudioCommand::Play);
            if self.block_next {
                self.block_next = false;
                self.blocked = true;
            }
        }

        fn stop(&mut self) {
            self.commands.push(AudioCommand::Stop);
        }

        fn take_blocked(&mut self) -> bool {
            std::mem::take(&mut self.blocked)
        }
    }

    #[test]
    fn plays_on_load_at_top_only() {
        let mut at_top = IntroAudio::new(100.0);
        assert_eq!(at_top.on_load(0.0), Some(AudioCommand::Play));
        assert!(at_top.is_playing());

        let mut scrolled = IntroAudio::new(100.0);
        assert_eq!(scrolled.on_load(250.0), None);
        assert!(!scrolled.is_playing());
    }

    #[test]
    fn scrolling_away_stops_permanently() {
        let mut audio = IntroAudio::new(100.0);
        audio.on_load(0.0);
        assert_eq!(audio.on_scroll(150.0), Some(AudioCommand::Stop));
        assert_eq!(audio.on_scroll(160.0), None);
        assert_eq!(audio.on_scroll(0.0), None);
        assert!(audio.is_stopped());
    }

    #[test]
    fn blocked_autoplay_retries_on_first_click() {
        let mut audio = IntroAudio::new(100.0);
        let mut sink = RecordingSink {
            block_next: true,
            ..Default::default()
        };

        dispatch(audio.on_load(0.0), &mut sink, 0.7);
        if sink.take_blocked() {
            audio.on_play_blocked();
        }
        assert!(!audio.is_playing());

        dispatch(audio.on_click(10.0), &mut sink, 0.7);
        assert!(audio.is_playing());
        assert_eq!(sink.commands, vec![AudioCommand::Play, AudioCommand::Play]);

        // Later clicks are ignored
        assert_eq!(audio.on_click(0.0), None);
    }

    #[test]
    fn first_click_while_scrolled_down_is_spent() {
        let mut audio = IntroAudio::new(100.0);
        audio.on_load(300.0);
        assert_eq!(audio.on_click(300.0), None);
        assert_eq!(audio.on_click(0.0), None);
    }

    #[test]
    fn returning_to_top_retries_blocked_start() {
        let mut audio = IntroAudio::new(100.0);
        audio.on_load(0.0);
        audio.on_play_blocked();
        assert_eq!(audio.on_scroll(50.0), Some(AudioCommand::Play));
    }
}
