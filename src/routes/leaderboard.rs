use dioxus::prelude::*;

use crate::components::SellerLeaderboard;
use crate::stores::auth_store;

/// Route wrapper: resolves the caller from the auth store and hands it to the view
#[component]
pub fn SellerLeaderboardPage() -> Element {
    let user_id = auth_store::get_user_id();

    rsx! {
        SellerLeaderboard { user_id: user_id }
    }
}
