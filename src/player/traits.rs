use crate::player::position::{PlaybackPosition, PLAY_INCREMENT_SECS, SKIP_STEP_SECS};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which podcast app an instance belongs to 🎧
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AppVariant {
    Google,
    Apple,
}

impl AppVariant {
    /// Human readable app name, used in the "now playing" event.
    pub fn label(self) -> &'static str {
        match self {
            AppVariant::Google => "Google Podcast",
            AppVariant::Apple => "Apple Podcast",
        }
    }

    /// Key used on the command line and in config.toml
    pub fn key(self) -> &'static str {
        match self {
            AppVariant::Google => "google",
            AppVariant::Apple => "apple",
        }
    }
}

impl fmt::Display for AppVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A running podcast app. Both variants share the same playback rules and
/// only differ in how they announce themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct PodcastApp {
    variant: AppVariant,
    position: PlaybackPosition,
}

impl PodcastApp {
    pub fn new(variant: AppVariant) -> Self {
        Self {
            variant,
            position: PlaybackPosition::ZERO,
        }
    }

    pub fn variant(&self) -> AppVariant {
        self.variant
    }

    pub fn position(&self) -> PlaybackPosition {
        self.position
    }

    pub fn set_position(&mut self, position: impl Into<PlaybackPosition>) {
        self.position = position.into();
    }

    pub fn now_playing(&self) -> String {
        format!("Playing Podcast from {}...", self.variant.label())
    }

    pub fn play(&mut self) {
        self.position = self.position.advance(PLAY_INCREMENT_SECS);
        tracing::info!(app = self.variant.key(), position = %self.position, "{}", self.now_playing());
    }

    pub fn rewind(&mut self) {
        self.position = self.position.retreat(SKIP_STEP_SECS);
        tracing::debug!(app = self.variant.key(), position = %self.position, "rewind");
    }

    pub fn forward(&mut self) {
        self.position = self.position.advance(SKIP_STEP_SECS);
        tracing::debug!(app = self.variant.key(), position = %self.position, "forward");
    }

    /// Take over the other app's position.
    pub fn sync_from(&mut self, other: &PodcastApp) {
        self.position = other.position;
    }
}

/// Builds podcast apps of one variant.
pub trait PodcastAppFactory {
    fn variant(&self) -> AppVariant;

    /// Fresh app at position zero.
    fn create_app(&self) -> PodcastApp;

    /// Fresh app already synced to `existing`. `existing` is left untouched.
    fn create_synced_from(&self, existing: &PodcastApp) -> PodcastApp {
        let mut app = self.create_app();
        app.sync_from(existing);
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLog {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    /// Run `f` with a subscriber writing into the returned buffer.
    fn capture_logs(f: impl FnOnce()) -> String {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        log.contents()
    }

    #[test]
    fn test_play_announces_variant() {
        let output = capture_logs(|| PodcastApp::new(AppVariant::Apple).play());
        assert!(output.contains("Playing Podcast from Apple Podcast..."));
        assert!(!output.contains("Google Podcast"));

        let output = capture_logs(|| PodcastApp::new(AppVariant::Google).play());
        assert!(output.contains("Playing Podcast from Google Podcast..."));
        assert!(!output.contains("Apple Podcast"));
    }

    #[test]
    fn test_skips_do_not_announce() {
        let output = capture_logs(|| {
            let mut app = PodcastApp::new(AppVariant::Google);
            app.forward();
            app.rewind();
        });
        assert!(!output.contains("Playing Podcast"));
    }

    #[test]
    fn test_forward_then_rewind_is_identity() {
        // Exactly representable starts come back bit for bit
        for start in [0.0, 7.5, 15.0, 100.0, 12345.25] {
            let mut app = PodcastApp::new(AppVariant::Google);
            app.set_position(start);
            app.forward();
            app.rewind();
            assert_eq!(app.position().as_secs(), start);
        }
    }

    #[test]
    fn test_forward_then_rewind_within_rounding() {
        for start in [0.1, 0.3, 2.718281828, 99.99, 1.0e6 + 0.01] {
            let mut app = PodcastApp::new(AppVariant::Apple);
            app.set_position(start);
            app.forward();
            app.rewind();
            let drift = (app.position().as_secs() - start).abs();
            assert!(drift < 1e-9, "start {start} drifted by {drift}");
        }
    }

    #[test]
    fn test_rewind_never_negative() {
        for start in [0.0, 1.0, 14.9, 15.0] {
            let mut app = PodcastApp::new(AppVariant::Apple);
            app.set_position(start);
            app.rewind();
            assert_eq!(app.position().as_secs(), 0.0);
        }
    }

    #[test]
    fn test_play_adds_hundred_for_every_variant() {
        for variant in [AppVariant::Google, AppVariant::Apple] {
            let mut app = PodcastApp::new(variant);
            app.set_position(20.0);
            app.play();
            assert_eq!(app.position().as_secs(), 120.0);
        }
    }

    #[test]
    fn test_sync_overwrites_position() {
        let mut source = PodcastApp::new(AppVariant::Apple);
        source.set_position(73.0);
        let mut target = PodcastApp::new(AppVariant::Google);
        target.set_position(999.0);

        target.sync_from(&source);
        assert_eq!(target.position(), source.position());
        assert_eq!(target.variant(), AppVariant::Google);
    }

    #[test]
    fn test_set_position_clamps() {
        let mut app = PodcastApp::new(AppVariant::Google);
        app.set_position(-40.0);
        assert_eq!(app.position().as_secs(), 0.0);
    }

    #[test]
    fn test_now_playing_names_variant() {
        assert_eq!(
            PodcastApp::new(AppVariant::Apple).now_playing(),
            "Playing Podcast from Apple Podcast..."
        );
        assert_eq!(
            PodcastApp::new(AppVariant::Google).now_playing(),
            "Playing Podcast from Google Podcast..."
        );
    }
}
