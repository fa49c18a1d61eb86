use dioxus::prelude::*;

use crate::routes::Route;
use crate::stores::auth_store;

#[component]
pub fn Home() -> Element {
    let mut user_id_input = use_signal(String::new);
    let mut error_msg = use_signal(|| None::<String>);
    let navigator = navigator();
    let signed_in_as = auth_store::get_user_id();

    let mut submit = move || {
        match auth_store::sign_in(&user_id_input.read()) {
            Ok(()) => {
                error_msg.set(None);
                navigator.push(Route::SellerLeaderboardPage {});
            }
            Err(e) => error_msg.set(Some(e)),
        }
    };

    rsx! {
        div {
            class: "space-y-6",

            h1 {
                class: "text-3xl font-bold",
                "Seller Leaderboard"
            }

            if let Some(user_id) = signed_in_as {
                div {
                    class: "bg-card p-6 rounded-lg border border-border space-y-3",
                    p {
                        class: "text-muted-foreground",
                        "Signed in as {user_id}."
                    }
                    Link {
                        to: Route::SellerLeaderboardPage {},
                        class: "inline-block px-4 py-2 bg-primary text-primary-foreground rounded-full hover:bg-primary/90 transition",
                        "View your standings"
                    }
                }
            } else {
                div {
                    class: "bg-card p-6 rounded-lg border border-border space-y-3",
                    p {
                        class: "text-muted-foreground",
                        "Enter your seller profile ID to see your standings."
                    }
                    input {
                        r#type: "text",
                        class: "w-full px-3 py-2 bg-background border border-border rounded-lg",
                        placeholder: "Profile ID",
                        value: "{user_id_input}",
                        oninput: move |evt| user_id_input.set(evt.value()),
                        onkeydown: move |evt| {
                            if evt.key() == Key::Enter {
                                submit();
                            }
                        },
                    }
                    if let Some(err) = error_msg.read().as_ref() {
                        p {
                            class: "text-sm text-destructive",
                            "{err}"
                        }
                    }
                    button {
                        class: "px-4 py-2 bg-primary text-primary-foreground rounded-full hover:bg-primary/90 transition",
                        onclick: move |_| submit(),
                        "Sign in"
                    }
                }
            }
        }
    }
}
