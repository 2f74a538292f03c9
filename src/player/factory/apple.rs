use crate::player::traits::{AppVariant, PodcastApp, PodcastAppFactory};

pub struct ApplePodcastFactory;

impl PodcastAppFactory for ApplePodcastFactory {
    fn variant(&self) -> AppVariant {
        AppVariant::Apple
    }

    fn create_app(&self) -> PodcastApp {
        PodcastApp::new(AppVariant::Apple)
    }
}
