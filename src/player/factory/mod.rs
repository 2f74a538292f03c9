pub mod apple;
pub mod google;

use crate::player::traits::{AppVariant, PodcastAppFactory};

pub use apple::ApplePodcastFactory;
pub use google::GooglePodcastFactory;

/// Factory to get the correct podcast app factory for a variant
pub fn factory_for(variant: AppVariant) -> Box<dyn PodcastAppFactory> {
    match variant {
        AppVariant::Google => Box::new(GooglePodcastFactory),
        AppVariant::Apple => Box::new(ApplePodcastFactory),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PodcastApp;

    #[test]
    fn test_factories_start_at_zero() {
        for variant in [AppVariant::Google, AppVariant::Apple] {
            let factory = factory_for(variant);
            assert_eq!(factory.variant(), variant);

            let app = factory.create_app();
            assert_eq!(app.variant(), variant);
            assert_eq!(app.position().as_secs(), 0.0);
        }
    }

    #[test]
    fn test_create_synced_from_leaves_source_alone() {
        let mut source = PodcastApp::new(AppVariant::Apple);
        source.set_position(215.0);

        let synced = GooglePodcastFactory.create_synced_from(&source);
        assert_eq!(synced.variant(), AppVariant::Google);
        assert_eq!(synced.position().as_secs(), 215.0);
        assert_eq!(source.position().as_secs(), 215.0);
        assert_eq!(source.variant(), AppVariant::Apple);
    }
}
