pub mod cli;
pub mod client;
pub mod config;

pub use client::Client;

use crate::player::{factory_for, AppVariant, PodcastApp};

/// Switch through `apps` in order, skipping `forward` / `rewind` times after
/// each switch. Returns the state of every app right after its turn.
pub fn play_sequence(
    client: &mut Client,
    apps: &[AppVariant],
    forward: u32,
    rewind: u32,
) -> Vec<PodcastApp> {
    apps.iter()
        .map(|&variant| {
            let app = client.switch_to(factory_for(variant).as_ref());
            for _ in 0..forward {
                app.forward();
            }
            for _ in 0..rewind {
                app.rewind();
            }
            app.clone()
        })
        .collect()
}
