pub mod factory;
pub mod position;
pub mod traits;

pub use factory::{factory_for, ApplePodcastFactory, GooglePodcastFactory};
pub use position::PlaybackPosition;
pub use traits::{AppVariant, PodcastApp, PodcastAppFactory};
