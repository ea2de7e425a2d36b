//! Authentication context and hooks for the UI.
//!
//! The provider fetches the current account and, when one exists, the
//! caller's profile — both exactly once on mount. Pages read the combined
//! state through [`use_auth`]; mutations that change either call
//! [`refresh_auth`] instead of polling.

use api::{UserInfo, UserProfile};
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub profile: Option<UserProfile>,
    /// Account fetch still in flight.
    pub loading: bool,
    /// Profile fetch finished (only meaningful while `user` is set).
    pub profile_loaded: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            profile: None,
            loading: true,
            profile_loaded: false,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map(|u| u.role.is_admin()).unwrap_or(false)
    }

    pub fn role(&self) -> api::UserRole {
        self.user
            .as_ref()
            .map(|u| u.role)
            .unwrap_or(api::UserRole::Guest)
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Re-fetch account and profile into the signal. Called after login,
/// profile save, and a successful claim.
pub async fn refresh_auth(mut auth_state: Signal<AuthState>) {
    match api::get_current_user().await {
        Ok(Some(user)) => match api::profile::get_caller_user_profile().await {
            Ok(profile) => {
                auth_state.set(AuthState {
                    user: Some(user),
                    profile,
                    loading: false,
                    profile_loaded: true,
                });
            }
            Err(e) => {
                // A failed fetch is not the same as "no profile": leaving
                // profile_loaded unset keeps the shell in its loading state
                // instead of dropping the user into profile setup.
                tracing::error!("Failed to fetch user profile: {}", e);
                auth_state.set(AuthState {
                    user: Some(user),
                    profile: None,
                    loading: false,
                    profile_loaded: false,
                });
            }
        },
        Ok(None) => {
            auth_state.set(AuthState {
                user: None,
                profile: None,
                loading: false,
                profile_loaded: false,
            });
        }
        Err(e) => {
            tracing::error!("Failed to fetch current user: {}", e);
            auth_state.set(AuthState {
                user: None,
                profile: None,
                loading: false,
                profile_loaded: false,
            });
        }
    }
}

/// Provider component that manages authentication state.
/// Wrap the app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(AuthState::default);

    // Fetch account + profile on mount.
    let _ = use_resource(move || async move {
        refresh_auth(auth_state).await;
    });

    // Periodic session re-check (every 30s): only notices a vanished or
    // changed session, never re-polls the profile.
    use_effect(move || {
        let mut auth_state = auth_state;
        spawn(async move {
            loop {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(std::time::Duration::from_secs(30)).await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(std::time::Duration::from_secs(30)).await;

                if auth_state().loading {
                    continue;
                }
                match api::get_current_user().await {
                    Ok(user) => {
                        if auth_state().user != user {
                            refresh_auth(auth_state).await;
                        }
                    }
                    Err(_) => {
                        if auth_state().user.is_some() {
                            auth_state.set(AuthState {
                                user: None,
                                profile: None,
                                loading: false,
                                profile_loaded: false,
                            });
                        }
                    }
                }
            }
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| async move {
        if let Ok(()) = api::logout().await {
            auth_state.set(AuthState {
                user: None,
                profile: None,
                loading: false,
                profile_loaded: false,
            });
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
