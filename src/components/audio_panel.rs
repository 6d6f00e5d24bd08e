//! Verse audio: traditional chant and vibe version, playlist stepping,
//! volume and the auto-advance toggle.
//!
//! All decisions live in [`PlaybackSession`]; this component renders its
//! state and carries out the effects it returns.

use crate::api::{asset_exists, ListenEvent};
use crate::components::media_deck::{self, element_id};
use crate::components::{backend_client, persist_preferences, AppView, Icon, PrefsSignal};
use crate::config::AppConfig;
use crate::playback::{
    Channel, PlaybackEffect, PlaybackSession, PlaybackState, SessionTicket, TrackSources,
    VerseKey, VibeAvailability,
};
use crate::prefs::Preferences;
use chrono::Utc;
use dioxus::prelude::*;

#[derive(Clone, Copy)]
struct PlaybackDriver {
    session: Signal<PlaybackSession>,
    prefs: Signal<Preferences>,
}

impl PlaybackDriver {
    fn apply(self, effects: Vec<PlaybackEffect>) {
        for effect in effects {
            match effect {
                PlaybackEffect::Pause(channel) => media_deck::pause(channel),
                PlaybackEffect::LoadSource { channel, url } => {
                    media_deck::load_source(channel, url.as_deref())
                }
                PlaybackEffect::ApplyVolume { volume, muted } => {
                    media_deck::apply_volume(volume, muted)
                }
                PlaybackEffect::Play { channel, ticket } => self.play(channel, ticket),
                PlaybackEffect::Probe { ticket, url } => self.probe(ticket, url),
                PlaybackEffect::LogListen { key, channel } => self.log_listen(key, channel),
                PlaybackEffect::Navigate(key) => {
                    tracing::info!(to = %key, "opening playlist verse");
                    navigator().push(AppView::verse(key));
                }
            }
        }
    }

    fn play(self, channel: Channel, ticket: SessionTicket) {
        let mut session = self.session;
        spawn(async move {
            let follow = match media_deck::play(channel).await {
                Ok(()) => session
                    .write()
                    .on_play_started(ticket, channel, Utc::now()),
                Err(e) => {
                    tracing::warn!(verse = %ticket.key, channel = channel.track_type(), error = %e, "could not start audio");
                    session.write().on_play_rejected(ticket, channel)
                }
            };
            self.apply(follow);
        });
    }

    fn probe(self, ticket: SessionTicket, url: String) {
        let mut session = self.session;
        spawn(async move {
            let available = asset_exists(&url).await;
            tracing::debug!(verse = %ticket.key, available, "vibe probe finished");
            let follow = session.write().on_probe_result(ticket, available);
            self.apply(follow);
        });
    }

    fn log_listen(self, key: VerseKey, channel: Channel) {
        let prefs = self.prefs.peek().clone();
        let Some(auth) = prefs.session.as_ref() else {
            tracing::debug!(verse = %key, "not signed in; listen not recorded");
            return;
        };
        let event = ListenEvent {
            user_id: auth.user_id.clone(),
            chapter: key.chapter,
            verse: key.verse,
            track_type: channel.track_type().to_string(),
        };
        let client = backend_client(&consume_context::<AppConfig>(), &prefs);
        spawn(async move {
            if let Err(e) = client.insert_listen_event(&event).await {
                tracing::warn!(verse = %key, error = %e, "failed to record listen");
            }
        });
    }
}

fn status_label(state: PlaybackState) -> &'static str {
    match state {
        PlaybackState::Idle => "Ready",
        PlaybackState::Probing => "Looking for the vibe version...",
        PlaybackState::Available => "Vibe version ready",
        PlaybackState::Unavailable => "Vibe version coming soon",
        PlaybackState::PlayingTraditional => "Playing traditional chant",
        PlaybackState::PlayingVibe => "Playing vibe version",
        PlaybackState::Stopped => "Paused",
    }
}

#[component]
pub fn AudioPanel(chapter: u32, verse: u32) -> Element {
    let config = use_context::<AppConfig>();
    let PrefsSignal(mut prefs) = use_context::<PrefsSignal>();
    let mut session = use_signal(PlaybackSession::default);
    let driver = PlaybackDriver { session, prefs };

    // Saved preference drives the session flag
    use_effect(move || {
        let enabled = prefs.read().auto_advance;
        session.write().set_auto_advance(enabled);
    });

    use_effect(use_reactive((&chapter, &verse), move |(chapter, verse)| {
        let key = VerseKey::new(chapter, verse);
        let sources = TrackSources {
            vibe: config.vibe_audio_url(key),
            traditional: config.traditional_audio_url(key),
        };
        let effects = session.write().open(key, sources);
        driver.apply(effects);
    }));

    use_drop(move || {
        for channel in Channel::ALL {
            media_deck::pause(channel);
        }
    });

    let snapshot = session.read();
    let state = snapshot.state();
    let availability = snapshot.vibe_availability();
    let traditional_playing = snapshot.is_playing(Channel::Traditional);
    let vibe_playing = snapshot.is_playing(Channel::Vibe);
    let can_traditional = snapshot.can_play(Channel::Traditional) || traditional_playing;
    let can_vibe = snapshot.can_play(Channel::Vibe) || vibe_playing;
    let previous = snapshot.previous_in_playlist();
    let next = snapshot.next_in_playlist();
    let playlist_len = snapshot.playlist().len();
    let position = snapshot
        .key()
        .and_then(|key| snapshot.playlist().position(key));
    let volume = snapshot.volume();
    let muted = snapshot.is_muted();
    drop(snapshot);

    let auto_advance = prefs.read().auto_advance;
    let volume_percent = (volume * 100.0).round();
    let (mute_icon, mute_title) = if muted {
        ("volume-mute", "Unmute")
    } else {
        ("volume", "Mute")
    };
    let traditional_detail = if can_traditional {
        "Sanskrit recitation"
    } else {
        "Not available"
    };
    let vibe_detail = match availability {
        VibeAvailability::Unchecked | VibeAvailability::Probing => "Checking...",
        VibeAvailability::Available => "Devotional music",
        VibeAvailability::Unavailable => "Coming Soon",
    };

    rsx! {
        section { id: "listen", class: "glass-card p-5 space-y-4",
            div { class: "flex items-center justify-between",
                h2 { class: "text-lg font-semibold text-white", "Listen" }
                span { class: "text-xs uppercase tracking-widest text-stone-500", "{status_label(state)}" }
            }

            audio {
                id: element_id(Channel::Traditional),
                preload: "none",
                onended: move |_| {
                    let effects = session.write().on_track_ended(Channel::Traditional);
                    driver.apply(effects);
                },
            }
            audio {
                id: element_id(Channel::Vibe),
                preload: "none",
                onended: move |_| {
                    let effects = session.write().on_track_ended(Channel::Vibe);
                    driver.apply(effects);
                },
            }

            div { class: "grid gap-3 sm:grid-cols-2",
                ChannelButton {
                    label: "Traditional Chant",
                    detail: traditional_detail,
                    playing: traditional_playing,
                    enabled: can_traditional,
                    busy: false,
                    onclick: move |_| {
                        let effects = session.write().toggle(Channel::Traditional);
                        driver.apply(effects);
                    },
                }
                ChannelButton {
                    label: "Vibe Version",
                    detail: vibe_detail,
                    playing: vibe_playing,
                    enabled: can_vibe,
                    busy: availability == VibeAvailability::Probing,
                    onclick: move |_| {
                        let effects = session.write().toggle(Channel::Vibe);
                        driver.apply(effects);
                    },
                }
            }

            div { class: "flex items-center justify-between gap-3",
                button {
                    class: "control-button",
                    disabled: previous.is_none(),
                    title: "Previous playlist verse",
                    onclick: move |_| {
                        let effects = session.read().go_previous();
                        driver.apply(effects);
                    },
                    Icon { name: "prev".to_string(), class: "w-4 h-4".to_string() }
                }
                span { class: "text-sm text-stone-400",
                    if let Some(index) = position {
                        "Vibe playlist · {index + 1} of {playlist_len}"
                    } else {
                        "Not in the vibe playlist"
                    }
                }
                button {
                    class: "control-button",
                    disabled: next.is_none(),
                    title: "Next playlist verse",
                    onclick: move |_| {
                        let effects = session.read().go_next();
                        driver.apply(effects);
                    },
                    Icon { name: "next".to_string(), class: "w-4 h-4".to_string() }
                }
            }

            div { class: "flex flex-wrap items-center gap-4",
                div { class: "flex items-center gap-2 flex-1 min-w-[12rem]",
                    button {
                        class: "control-button",
                        title: mute_title,
                        onclick: move |_| {
                            let effects = session.write().toggle_mute();
                            driver.apply(effects);
                        },
                        Icon { name: mute_icon.to_string(), class: "w-4 h-4".to_string() }
                    }
                    input {
                        r#type: "range",
                        class: "flex-1 accent-amber-500",
                        min: "0",
                        max: "100",
                        step: "1",
                        value: "{volume_percent}",
                        oninput: move |evt| {
                            if let Ok(percent) = evt.value().parse::<f64>() {
                                let effects = session.write().set_volume(percent / 100.0);
                                driver.apply(effects);
                            }
                        },
                    }
                }
                label { class: "flex items-center gap-2 text-sm text-stone-300 cursor-pointer",
                    input {
                        r#type: "checkbox",
                        class: "accent-amber-500",
                        checked: auto_advance,
                        onchange: move |evt| {
                            let mut updated = prefs.peek().clone();
                            updated.auto_advance = evt.checked();
                            prefs.set(updated.clone());
                            persist_preferences(updated);
                        },
                    }
                    Icon { name: "repeat".to_string(), class: "w-4 h-4".to_string() }
                    "Auto-advance"
                }
            }
        }
    }
}

#[component]
fn ChannelButton(
    label: String,
    detail: String,
    playing: bool,
    enabled: bool,
    busy: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let state_class = if playing {
        "border-amber-400/60 bg-amber-500/15 text-amber-200"
    } else if enabled {
        "border-stone-700 hover:border-amber-400/40 text-stone-100"
    } else {
        "border-stone-800 text-stone-500 cursor-not-allowed opacity-70"
    };
    let icon = if busy {
        "loader"
    } else if playing {
        "pause"
    } else {
        "play"
    };

    rsx! {
        button {
            class: "flex items-center gap-3 rounded-xl border px-4 py-3 text-left transition-colors {state_class}",
            disabled: !enabled,
            onclick: move |e| onclick.call(e),
            Icon { name: icon.to_string(), class: "w-5 h-5".to_string() }
            div {
                p { class: "font-medium", "{label}" }
                p { class: "text-xs text-stone-400", "{detail}" }
            }
        }
    }
}
