//! Sound plugin: background music + one-shot effects.
//!
//! Gameplay code never touches audio entities. It goes through `SoundManager`,
//! which records intent as `AudioRequest` messages:
//!
//! ```text
//!   SoundManager::play_music / stop_music / play_sound
//!        -> AudioRequest (message)
//!        -> consumer: log (headless) or AudioPlayer entities (render build)
//! ```
//!
//! A clip that is not configured is simply never requested.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

pub mod playback;

/// Asset path of an audio clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundClip(pub String);

impl SoundClip {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &str {
        &self.0
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct SoundLibrary {
    pub background: Option<SoundClip>,
    pub game_over: Option<SoundClip>,
}

/// Music currently requested to play.
#[derive(Resource, Debug, Default)]
pub struct MusicState {
    playing: Option<SoundClip>,
}

impl MusicState {
    pub fn playing(&self) -> Option<&SoundClip> {
        self.playing.as_ref()
    }
}

#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub enum AudioRequest {
    PlayMusic(SoundClip),
    StopMusic,
    PlaySound(SoundClip),
}

#[derive(SystemParam)]
pub struct SoundManager<'w> {
    library: Res<'w, SoundLibrary>,
    music: ResMut<'w, MusicState>,
    requests: MessageWriter<'w, AudioRequest>,
}

impl SoundManager<'_> {
    pub fn background(&self) -> Option<SoundClip> {
        self.library.background.clone()
    }

    pub fn game_over_clip(&self) -> Option<SoundClip> {
        self.library.game_over.clone()
    }

    pub fn is_music_playing(&self) -> bool {
        self.music.playing.is_some()
    }

    /// Replaces whatever music is playing.
    pub fn play_music(&mut self, clip: SoundClip) {
        self.music.playing = Some(clip.clone());
        self.requests.write(AudioRequest::PlayMusic(clip));
    }

    pub fn stop_music(&mut self) {
        if self.music.playing.take().is_some() {
            self.requests.write(AudioRequest::StopMusic);
        }
    }

    pub fn play_sound(&mut self, clip: SoundClip) {
        self.requests.write(AudioRequest::PlaySound(clip));
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<SoundLibrary>()
        .init_resource::<MusicState>()
        .add_message::<AudioRequest>()
        .add_systems(PostUpdate, log_audio_requests);
}

fn log_audio_requests(mut requests: MessageReader<AudioRequest>) {
    for request in requests.read() {
        debug!("Audio: {request:?}");
    }
}
