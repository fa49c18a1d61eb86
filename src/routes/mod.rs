use dioxus::prelude::*;

pub mod home;
pub mod leaderboard;

use home::Home;
use leaderboard::SellerLeaderboardPage;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/leaderboard")]
        SellerLeaderboardPage {},
}

#[component]
fn Layout() -> Element {
    use crate::stores::auth_store;

    let auth = auth_store::AUTH_STATE.read();
    let navigator = navigator();

    rsx! {
        div {
            class: "min-h-screen bg-background transition-colors",

            header {
                class: "border-b border-border",
                div {
                    class: "max-w-4xl mx-auto p-4 flex items-center justify-between",

                    nav {
                        class: "flex items-center gap-4",
                        NavLink { to: Route::Home {}, label: "Home" }
                        NavLink { to: Route::SellerLeaderboardPage {}, label: "Leaderboard" }
                    }

                    if let Some(user_id) = auth.user_id.as_ref() {
                        div {
                            class: "flex items-center gap-3 text-sm",
                            span {
                                class: "text-muted-foreground truncate max-w-[200px]",
                                "{user_id}"
                            }
                            button {
                                class: "px-3 py-1 bg-muted hover:bg-muted/80 rounded-full transition",
                                onclick: move |_| {
                                    auth_store::sign_out();
                                    navigator.push(Route::Home {});
                                },
                                "Sign out"
                            }
                        }
                    }
                }
            }

            main {
                class: "max-w-4xl mx-auto p-4",
                Outlet::<Route> {}
            }

            footer {
                class: "max-w-4xl mx-auto p-4 text-xs text-muted-foreground",
                "Seller Leaderboard - {env!(\"CARGO_PKG_VERSION\")}"
            }
        }
    }
}

// Navigation Link Component
#[component]
fn NavLink(to: Route, label: &'static str) -> Element {
    let current_route = use_route::<Route>();
    let font_class = if current_route == to { "font-bold" } else { "" };

    rsx! {
        Link {
            to: to.clone(),
            class: "hover:underline {font_class}",
            "{label}"
        }
    }
}
