//! Audio playback (render-only).
//!
//! Turns `AudioRequest` messages into `AudioPlayer` entities. Needs the asset
//! server and an audio output, so it is only registered with `DefaultPlugins`.

use bevy::prelude::*;

use super::AudioRequest;

/// Marks the looping background music entity.
#[derive(Component)]
pub struct BackgroundMusic;

pub fn plugin(app: &mut App) {
    app.add_systems(PostUpdate, play_audio_requests);
}

fn play_audio_requests(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut requests: MessageReader<AudioRequest>,
    q_music: Query<Entity, With<BackgroundMusic>>,
) {
    for request in requests.read() {
        match request {
            AudioRequest::PlayMusic(clip) => {
                q_music.iter().for_each(|e| commands.entity(e).despawn());
                commands.spawn((
                    Name::new("BackgroundMusic"),
                    BackgroundMusic,
                    AudioPlayer::new(asset_server.load(clip.path().to_owned())),
                    PlaybackSettings::LOOP,
                ));
            }
            AudioRequest::StopMusic => {
                q_music.iter().for_each(|e| commands.entity(e).despawn());
            }
            AudioRequest::PlaySound(clip) => {
                commands.spawn((
                    AudioPlayer::new(asset_server.load(clip.path().to_owned())),
                    PlaybackSettings::DESPAWN,
                ));
            }
        }
    }
}
