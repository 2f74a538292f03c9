use crate::player::traits::{AppVariant, PodcastApp, PodcastAppFactory};

pub struct GooglePodcastFactory;

impl PodcastAppFactory for GooglePodcastFactory {
    fn variant(&self) -> AppVariant {
        AppVariant::Google
    }

    fn create_app(&self) -> PodcastApp {
        PodcastApp::new(AppVariant::Google)
    }
}
