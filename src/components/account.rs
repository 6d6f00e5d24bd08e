use crate::components::{backend_client, persist_preferences, Icon, PrefsSignal};
use crate::config::AppConfig;
use dioxus::prelude::*;

/// Email/password sign-in. The session is saved with the preferences so
/// listens can be recorded against the user.
#[component]
pub fn AccountPanel() -> Element {
    let config = use_context::<AppConfig>();
    let PrefsSignal(mut prefs) = use_context::<PrefsSignal>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let session = prefs.read().session.clone();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let email_value = email().trim().to_string();
        let password_value = password();
        if email_value.is_empty() || password_value.is_empty() {
            error.set(Some("Enter your email and password.".to_string()));
            return;
        }
        let client = backend_client(&config, &prefs.peek());
        busy.set(true);
        error.set(None);
        spawn(async move {
            match client.sign_in(&email_value, &password_value).await {
                Ok(auth) => {
                    tracing::info!(user = %auth.user_id, "signed in");
                    let mut updated = prefs.peek().clone();
                    updated.session = Some(auth);
                    prefs.set(updated.clone());
                    persist_preferences(updated);
                    password.set(String::new());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "sign-in failed");
                    error.set(Some(e.to_string()));
                }
            }
            busy.set(false);
        });
    };

    let on_sign_out = move |_: MouseEvent| {
        let mut updated = prefs.peek().clone();
        updated.session = None;
        prefs.set(updated.clone());
        persist_preferences(updated);
        tracing::info!("signed out");
    };

    rsx! {
        section { class: "glass-card p-5 space-y-4",
            h2 { class: "text-lg font-semibold text-white", "Account" }
            {match session {
                Some(auth) => rsx! {
                    div { class: "flex items-center justify-between gap-4",
                        div { class: "flex items-center gap-3",
                            Icon { name: "user".to_string(), class: "w-5 h-5 text-amber-300".to_string() }
                            div {
                                p { class: "text-stone-100", "{auth.email.clone().unwrap_or_else(|| auth.user_id.clone())}" }
                                p { class: "text-xs text-stone-500", "Listening history is being recorded" }
                            }
                        }
                        button { class: "secondary-button", onclick: on_sign_out, "Sign out" }
                    }
                },
                None => rsx! {
                    form { class: "space-y-3", onsubmit: on_submit,
                        input {
                            class: "text-input",
                            r#type: "email",
                            placeholder: "Email",
                            autocomplete: "email",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                        input {
                            class: "text-input",
                            r#type: "password",
                            placeholder: "Password",
                            autocomplete: "current-password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                        if let Some(message) = error() {
                            p { class: "text-sm text-red-400", "{message}" }
                        }
                        button {
                            class: "primary-button w-full flex items-center justify-center gap-2",
                            r#type: "submit",
                            disabled: busy(),
                            if busy() {
                                Icon { name: "loader".to_string(), class: "w-4 h-4".to_string() }
                            }
                            "Sign in"
                        }
                        p { class: "text-xs text-stone-500", "Sign in to keep a record of the verses you listen to." }
                    }
                },
            }}
        }
    }
}
