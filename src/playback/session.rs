//! Playback session for one verse page.
//!
//! The session never touches audio itself. Every transition returns the
//! [`PlaybackEffect`]s the media layer must carry out, and every asynchronous
//! completion (probe, `play()` promise) comes back with the [`SessionTicket`]
//! it was issued. Tickets from before the last `open`/`close` are ignored.

use crate::playback::{ListenLog, Playlist, VerseKey};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_VOLUME: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Traditional,
    Vibe,
}

impl Channel {
    pub const ALL: [Channel; 2] = [Channel::Traditional, Channel::Vibe];

    /// Value stored in the listen log's `track_type` column.
    pub fn track_type(self) -> &'static str {
        match self {
            Channel::Traditional => "traditional",
            Channel::Vibe => "vibe",
        }
    }

    pub fn other(self) -> Channel {
        match self {
            Channel::Traditional => Channel::Vibe,
            Channel::Vibe => Channel::Traditional,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VibeAvailability {
    Unchecked,
    Probing,
    Available,
    Unavailable,
}

/// At most one channel is ever playing; the type makes two impossible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Idle,
    Playing(Channel),
    Stopped,
}

/// Combined view of transport and vibe availability for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Probing,
    Available,
    Unavailable,
    PlayingTraditional,
    PlayingVibe,
    Stopped,
}

/// Identifies the verse visit an asynchronous result belongs to, and for
/// `play()` results the single play request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTicket {
    pub key: VerseKey,
    generation: u64,
    play: u64,
}

/// Asset locations for the verse being opened.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackSources {
    pub vibe: String,
    pub traditional: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackEffect {
    Pause(Channel),
    Play {
        channel: Channel,
        ticket: SessionTicket,
    },
    LoadSource {
        channel: Channel,
        url: Option<String>,
    },
    ApplyVolume {
        volume: f64,
        muted: bool,
    },
    Probe {
        ticket: SessionTicket,
        url: String,
    },
    LogListen {
        key: VerseKey,
        channel: Channel,
    },
    Navigate(VerseKey),
}

#[derive(Debug, Clone)]
pub struct PlaybackSession {
    playlist: Playlist,
    key: Option<VerseKey>,
    generation: u64,
    play_seq: u64,
    sources: TrackSources,
    vibe: VibeAvailability,
    transport: Transport,
    volume: f64,
    muted: bool,
    auto_advance: bool,
    listen_log: ListenLog,
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self::new(Playlist::vibe())
    }
}

impl PlaybackSession {
    pub fn new(playlist: Playlist) -> Self {
        Self {
            playlist,
            key: None,
            generation: 0,
            play_seq: 0,
            sources: TrackSources::default(),
            vibe: VibeAvailability::Unchecked,
            transport: Transport::Idle,
            volume: DEFAULT_VOLUME,
            muted: false,
            auto_advance: true,
            listen_log: ListenLog::default(),
        }
    }

    pub fn key(&self) -> Option<VerseKey> {
        self.key
    }

    pub fn playlist(&self) -> Playlist {
        self.playlist
    }

    pub fn transport(&self) -> Transport {
        self.transport
    }

    pub fn vibe_availability(&self) -> VibeAvailability {
        self.vibe
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    pub fn is_playing(&self, channel: Channel) -> bool {
        self.transport == Transport::Playing(channel)
    }

    pub fn state(&self) -> PlaybackState {
        match self.transport {
            Transport::Playing(Channel::Traditional) => PlaybackState::PlayingTraditional,
            Transport::Playing(Channel::Vibe) => PlaybackState::PlayingVibe,
            Transport::Stopped => PlaybackState::Stopped,
            Transport::Idle => match self.vibe {
                VibeAvailability::Unchecked => PlaybackState::Idle,
                VibeAvailability::Probing => PlaybackState::Probing,
                VibeAvailability::Available => PlaybackState::Available,
                VibeAvailability::Unavailable => PlaybackState::Unavailable,
            },
        }
    }

    /// Whether the control for `channel` should be enabled.
    pub fn can_play(&self, channel: Channel) -> bool {
        if self.key.is_none() {
            return false;
        }
        match channel {
            Channel::Traditional => self.sources.traditional.is_some(),
            Channel::Vibe => self.vibe == VibeAvailability::Available,
        }
    }

    pub fn previous_in_playlist(&self) -> Option<VerseKey> {
        self.key.and_then(|key| self.playlist.previous(key))
    }

    pub fn next_in_playlist(&self) -> Option<VerseKey> {
        self.key.and_then(|key| self.playlist.next(key))
    }

    fn current_ticket(&self) -> Option<SessionTicket> {
        self.key.map(|key| SessionTicket {
            key,
            generation: self.generation,
            play: self.play_seq,
        })
    }

    fn is_current(&self, ticket: SessionTicket) -> bool {
        self.key == Some(ticket.key) && self.generation == ticket.generation
    }

    /// A `play()` outcome only counts for the latest play request.
    fn is_current_play(&self, ticket: SessionTicket) -> bool {
        self.is_current(ticket) && ticket.play == self.play_seq
    }

    fn volume_effect(&self) -> PlaybackEffect {
        PlaybackEffect::ApplyVolume {
            volume: self.volume,
            muted: self.muted,
        }
    }

    /// Reset for a verse and start probing its vibe asset.
    ///
    /// Reopening the verse already open changes nothing.
    pub fn open(&mut self, key: VerseKey, sources: TrackSources) -> Vec<PlaybackEffect> {
        if self.key == Some(key) && self.sources == sources {
            return Vec::new();
        }

        self.generation += 1;
        self.key = Some(key);
        self.transport = Transport::Idle;
        self.vibe = VibeAvailability::Probing;
        self.sources = sources;

        let ticket = SessionTicket {
            key,
            generation: self.generation,
            play: self.play_seq,
        };
        tracing::debug!(verse = %key, generation = self.generation, "playback session opened");

        vec![
            PlaybackEffect::Pause(Channel::Traditional),
            PlaybackEffect::Pause(Channel::Vibe),
            PlaybackEffect::LoadSource {
                channel: Channel::Traditional,
                url: self.sources.traditional.clone(),
            },
            PlaybackEffect::LoadSource {
                channel: Channel::Vibe,
                url: None,
            },
            self.volume_effect(),
            PlaybackEffect::Probe {
                ticket,
                url: self.sources.vibe.clone(),
            },
        ]
    }

    /// Tear down: pause everything and invalidate outstanding tickets.
    pub fn close(&mut self) -> Vec<PlaybackEffect> {
        self.generation += 1;
        self.key = None;
        self.transport = Transport::Idle;
        self.vibe = VibeAvailability::Unchecked;
        self.sources = TrackSources::default();
        vec![
            PlaybackEffect::Pause(Channel::Traditional),
            PlaybackEffect::Pause(Channel::Vibe),
        ]
    }

    /// Apply the vibe probe result. Available autoplays unless the listener
    /// already started the traditional chant.
    pub fn on_probe_result(&mut self, ticket: SessionTicket, available: bool) -> Vec<PlaybackEffect> {
        if !self.is_current(ticket) || self.vibe != VibeAvailability::Probing {
            tracing::debug!(verse = %ticket.key, "discarding stale probe result");
            return Vec::new();
        }

        if !available {
            self.vibe = VibeAvailability::Unavailable;
            return Vec::new();
        }

        self.vibe = VibeAvailability::Available;
        let mut effects = vec![PlaybackEffect::LoadSource {
            channel: Channel::Vibe,
            url: Some(self.sources.vibe.clone()),
        }];
        if matches!(self.transport, Transport::Idle | Transport::Stopped) {
            effects.extend(self.start(Channel::Vibe));
        }
        effects
    }

    /// Play/pause button for a channel. Starting one channel stops the other
    /// first; a disabled channel ignores the press.
    pub fn toggle(&mut self, channel: Channel) -> Vec<PlaybackEffect> {
        if self.is_playing(channel) {
            self.transport = Transport::Stopped;
            return vec![PlaybackEffect::Pause(channel)];
        }
        if !self.can_play(channel) {
            return Vec::new();
        }
        self.start(channel)
    }

    fn start(&mut self, channel: Channel) -> Vec<PlaybackEffect> {
        if self.key.is_none() {
            return Vec::new();
        }
        self.play_seq += 1;
        let Some(ticket) = self.current_ticket() else {
            return Vec::new();
        };
        let mut effects = Vec::with_capacity(2);
        if self.is_playing(channel.other()) {
            effects.push(PlaybackEffect::Pause(channel.other()));
        }
        self.transport = Transport::Playing(channel);
        effects.push(PlaybackEffect::Play { channel, ticket });
        effects
    }

    /// The runtime confirmed playback; log the listen if it is not a repeat.
    pub fn on_play_started(
        &mut self,
        ticket: SessionTicket,
        channel: Channel,
        now: DateTime<Utc>,
    ) -> Vec<PlaybackEffect> {
        if !self.is_current_play(ticket) || !self.is_playing(channel) {
            return Vec::new();
        }
        if self.listen_log.should_log(ticket.key, channel, now) {
            vec![PlaybackEffect::LogListen {
                key: ticket.key,
                channel,
            }]
        } else {
            Vec::new()
        }
    }

    /// The runtime refused to play (autoplay policy, decode error).
    pub fn on_play_rejected(&mut self, ticket: SessionTicket, channel: Channel) -> Vec<PlaybackEffect> {
        if !self.is_current_play(ticket) {
            tracing::debug!(verse = %ticket.key, channel = channel.track_type(), "ignoring outcome of a superseded play");
            return Vec::new();
        }
        if self.is_playing(channel) {
            tracing::warn!(verse = %ticket.key, channel = channel.track_type(), "playback rejected");
            self.transport = Transport::Stopped;
        }
        Vec::new()
    }

    /// A channel played to the end. The vibe channel may auto-advance.
    pub fn on_track_ended(&mut self, channel: Channel) -> Vec<PlaybackEffect> {
        if self.is_playing(channel) {
            self.transport = Transport::Stopped;
        }
        if channel != Channel::Vibe || !self.auto_advance {
            return Vec::new();
        }
        match self.next_in_playlist() {
            Some(next) => {
                tracing::info!(to = %next, "auto-advancing to next vibe verse");
                vec![PlaybackEffect::Navigate(next)]
            }
            None => Vec::new(),
        }
    }

    pub fn go_previous(&self) -> Vec<PlaybackEffect> {
        self.previous_in_playlist()
            .map(PlaybackEffect::Navigate)
            .into_iter()
            .collect()
    }

    pub fn go_next(&self) -> Vec<PlaybackEffect> {
        self.next_in_playlist()
            .map(PlaybackEffect::Navigate)
            .into_iter()
            .collect()
    }

    /// Set the session volume. Turning it up while muted unmutes.
    pub fn set_volume(&mut self, volume: f64) -> Vec<PlaybackEffect> {
        if !volume.is_finite() {
            return Vec::new();
        }
        self.volume = volume.clamp(0.0, 1.0);
        if self.muted && self.volume > 0.0 {
            self.muted = false;
        }
        vec![self.volume_effect()]
    }

    pub fn toggle_mute(&mut self) -> Vec<PlaybackEffect> {
        self.muted = !self.muted;
        vec![self.volume_effect()]
    }

    pub fn set_auto_advance(&mut self, enabled: bool) {
        self.auto_advance = enabled;
    }
}
