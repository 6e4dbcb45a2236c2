//! Page routes: the game board and the authentication view.

use dioxus::prelude::*;

use crate::ports::outbound::storage_keys;
use crate::ui::{use_platform, SessionContext};

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    GameBoard {},
    #[route("/auth")]
    Auth {},
}

/// Main board view.
#[component]
fn GameBoard() -> Element {
    let session = use_context::<SessionContext>();
    let phase = session.phase();
    let announced = session.announced_phase();

    rsx! {
        div { class: "game-board",
            h1 { "Gameroom" }
            p { "Session phase: {phase}" }
            p { "Server phase: {announced}" }
            Link { to: Route::Auth {}, "Sign in" }
        }
    }
}

/// Authentication view.
///
/// Writes the credential token the session tracker later reads.
#[component]
fn Auth() -> Element {
    let platform = use_platform();
    let session = use_context::<SessionContext>();
    let mut token = use_signal(String::new);

    let save_platform = platform.clone();
    let clear_platform = platform;

    rsx! {
        div { class: "auth",
            h1 { "Sign in" }
            input {
                r#type: "password",
                placeholder: "Paste your token",
                value: "{token}",
                oninput: move |event| token.set(event.value()),
            }
            button {
                onclick: move |_| {
                    let mut tracker = session.tracker;
                    save_platform.save(storage_keys::TOKEN, &token());
                    tracker.write().refresh_login(save_platform.as_ref());
                },
                "Save token"
            }
            button {
                onclick: move |_| {
                    let mut tracker = session.tracker;
                    clear_platform.remove(storage_keys::TOKEN);
                    tracker.write().refresh_login(clear_platform.as_ref());
                },
                "Log out"
            }
            Link { to: Route::GameBoard {}, "Back to the board" }
        }
    }
}
