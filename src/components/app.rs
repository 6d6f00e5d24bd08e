use crate::api::BackendClient;
use crate::components::{AppView, Header};
use crate::config::AppConfig;
use crate::prefs::{load_preferences, save_preferences, Preferences};
use dioxus::prelude::*;

/// Persisted preferences, shared through context.
#[derive(Clone, Copy)]
pub struct PrefsSignal(pub Signal<Preferences>);

/// Client for the verse backend carrying the signed-in session, if any.
pub fn backend_client(config: &AppConfig, prefs: &Preferences) -> BackendClient {
    BackendClient::new(config).with_session(prefs.session.clone())
}

/// Write preferences in the background; failures only cost persistence.
pub fn persist_preferences(prefs: Preferences) {
    spawn(async move {
        if let Err(e) = save_preferences(prefs).await {
            tracing::warn!(error = %e, "failed to save preferences");
        }
    });
}

#[component]
pub fn AppShell() -> Element {
    let config = use_context_provider(AppConfig::from_build_env);
    let mut prefs = use_signal(Preferences::default);
    let current_view = use_route::<AppView>();

    use_context_provider(|| PrefsSignal(prefs));

    use_hook(move || {
        if config.backend_url.is_empty() {
            tracing::warn!("GITA_BACKEND_URL is not set; verse data will be unavailable");
        }
        tracing::info!(
            audio = %config.audio_base_url,
            line_policy = config.line_policy.as_str(),
            traditional = config.traditional_audio_base_url.is_some(),
            "configuration loaded"
        );
    });

    // Load saved preferences on mount
    use_effect(move || {
        spawn(async move {
            match load_preferences().await {
                Ok(saved) => {
                    tracing::debug!(
                        auto_advance = saved.auto_advance,
                        signed_in = saved.session.is_some(),
                        "preferences loaded"
                    );
                    prefs.set(saved);
                }
                Err(e) => tracing::warn!(error = %e, "failed to load preferences"),
            }
        });
    });

    rsx! {
        div { class: "app-container min-h-screen flex flex-col",
            Header { view: current_view }
            main { class: "flex-1 main-scroll",
                div { class: "page-shell", Outlet::<AppView> {} }
            }
        }
    }
}
