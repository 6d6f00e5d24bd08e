//! Imperative control of the two verse audio elements.
//! The elements themselves are rendered by `AudioPanel`; this module looks
//! them up by id so playback survives unrelated re-renders.

use crate::playback::Channel;
#[cfg(not(target_arch = "wasm32"))]
use dioxus::prelude::*;
use thiserror::Error;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::JsFuture;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("audio element for the {0} channel is not mounted")]
    Missing(&'static str),

    #[error("playback was rejected: {0}")]
    Rejected(String),
}

pub fn element_id(channel: Channel) -> &'static str {
    match channel {
        Channel::Traditional => "gitavibe-traditional-audio",
        Channel::Vibe => "gitavibe-vibe-audio",
    }
}

#[cfg(target_arch = "wasm32")]
fn audio_element(channel: Channel) -> Option<HtmlAudioElement> {
    let document = window()?.document()?;
    document
        .get_element_by_id(element_id(channel))?
        .dyn_into::<HtmlAudioElement>()
        .ok()
}

#[cfg(target_arch = "wasm32")]
fn describe(value: JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(target_arch = "wasm32")]
pub fn pause(channel: Channel) {
    if let Some(audio) = audio_element(channel) {
        let _ = audio.pause();
    }
}

/// Point a channel at a new source, or clear it. Always leaves the element paused.
#[cfg(target_arch = "wasm32")]
pub fn load_source(channel: Channel, url: Option<&str>) {
    let Some(audio) = audio_element(channel) else {
        tracing::debug!(channel = channel.track_type(), "audio element not mounted yet");
        return;
    };
    let _ = audio.pause();
    match url {
        Some(url) => audio.set_src(url),
        None => {
            let _ = audio.remove_attribute("src");
        }
    }
    audio.load();
}

#[cfg(target_arch = "wasm32")]
pub fn apply_volume(volume: f64, muted: bool) {
    for channel in Channel::ALL {
        if let Some(audio) = audio_element(channel) {
            audio.set_volume(volume.clamp(0.0, 1.0));
            audio.set_muted(muted);
        }
    }
}

/// Start a channel and wait for the browser to accept or refuse it.
#[cfg(target_arch = "wasm32")]
pub async fn play(channel: Channel) -> Result<(), MediaError> {
    let audio = audio_element(channel).ok_or(MediaError::Missing(channel.track_type()))?;
    let promise = audio
        .play()
        .map_err(|e| MediaError::Rejected(describe(e)))?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| MediaError::Rejected(describe(e)))
}

// Native builds render the same elements inside the webview and drive them
// through script evaluation.
#[cfg(not(target_arch = "wasm32"))]
fn element_script(channel: Channel, body: &str) -> String {
    format!(
        r#"(function () {{
            const el = document.getElementById({id:?});
            if (!el) return false;
            {body}
            return true;
        }})();"#,
        id = element_id(channel),
    )
}

#[cfg(not(target_arch = "wasm32"))]
pub fn pause(channel: Channel) {
    let _ = document::eval(&element_script(channel, "el.pause();"));
}

/// Point a channel at a new source, or clear it. Always leaves the element paused.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_source(channel: Channel, url: Option<&str>) {
    let body = match url {
        Some(url) => {
            let src = serde_json::to_string(url).unwrap_or_else(|_| "\"\"".to_string());
            format!("el.pause(); el.src = {src}; el.load();")
        }
        None => "el.pause(); el.removeAttribute('src'); el.load();".to_string(),
    };
    let _ = document::eval(&element_script(channel, &body));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_volume(volume: f64, muted: bool) {
    let body = format!("el.volume = {}; el.muted = {muted};", volume.clamp(0.0, 1.0));
    for channel in Channel::ALL {
        let _ = document::eval(&element_script(channel, &body));
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn play_script(channel: Channel) -> String {
    format!(
        r#"return (async function () {{
            const el = document.getElementById({id:?});
            if (!el) return "missing";
            try {{
                await el.play();
                return "ok";
            }} catch (e) {{
                return String((e && e.message) || e);
            }}
        }})();"#,
        id = element_id(channel),
    )
}

/// Start a channel and wait for the webview to accept or refuse it.
#[cfg(not(target_arch = "wasm32"))]
pub async fn play(channel: Channel) -> Result<(), MediaError> {
    let outcome = document::eval(&play_script(channel))
        .join::<String>()
        .await
        .map_err(|e| MediaError::Rejected(e.to_string()))?;
    match outcome.as_str() {
        "ok" => Ok(()),
        "missing" => Err(MediaError::Missing(channel.track_type())),
        _ => Err(MediaError::Rejected(outcome)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_use_distinct_elements() {
        assert_ne!(element_id(Channel::Traditional), element_id(Channel::Vibe));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn scripts_address_the_channel_element() {
        let script = play_script(Channel::Vibe);
        assert!(script.contains("\"gitavibe-vibe-audio\""));
        assert!(script.contains("await el.play()"));

        let pause = element_script(Channel::Traditional, "el.pause();");
        assert!(pause.contains("\"gitavibe-traditional-audio\""));
        assert!(pause.contains("el.pause();"));
    }
}
