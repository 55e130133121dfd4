use dioxus::prelude::*;

pub mod account;
pub mod dashboard;
pub mod explore;
pub mod home;
pub mod login;
pub mod not_found;
pub mod pricing;
pub mod pricing_success;
pub mod signup;
pub mod wishlist;

use account::Account;
use dashboard::Dashboard;
use explore::Explore;
use home::Home;
use login::Login;
use not_found::PageNotFound;
use pricing::Pricing;
use pricing_success::PricingSuccess;
use signup::Signup;
use wishlist::Wishlist;

use crate::components::Navbar;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/explore?:q")]
        Explore { q: String },

        #[route("/wishlist")]
        Wishlist {},

        #[route("/account")]
        Account {},

        #[route("/dashboard")]
        Dashboard {},

        #[route("/login")]
        Login {},

        #[route("/signup")]
        Signup {},

        #[route("/pricing")]
        Pricing {},

        #[route("/pricing/success")]
        PricingSuccess {},

        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    let current_route = use_route::<Route>();

    // Home's hero runs under the fixed navbar; every other page is pushed below it
    let main_class = if matches!(current_route, Route::Home {}) {
        ""
    } else {
        "pt-20"
    };

    rsx! {
        div {
            class: "min-h-screen bg-background",
            Navbar {}
            main {
                class: main_class,
                Outlet::<Route> {}
            }
        }
    }
}
