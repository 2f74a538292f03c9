use crate::player::{PodcastApp, PodcastAppFactory};

/// Holds the app currently in use. Switching hands the playback position
/// over to the new app.
#[derive(Debug, Default)]
pub struct Client {
    current: Option<PodcastApp>,
}

impl Client {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&PodcastApp> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut PodcastApp> {
        self.current.as_mut()
    }

    /// Open a new app from `factory`, carry over the position of the previous
    /// app (if any) and start playing.
    pub fn switch_to<F>(&mut self, factory: &F) -> &mut PodcastApp
    where
        F: PodcastAppFactory + ?Sized,
    {
        let mut app = factory.create_app();

        if let Some(previous) = self.current.as_ref() {
            tracing::debug!(
                from = previous.variant().key(),
                to = app.variant().key(),
                position = %previous.position(),
                "syncing position"
            );
            app.sync_from(previous);
        }

        let app = self.current.insert(app);
        app.play();
        app
    }
}
