use dioxus::prelude::*;

use crate::context::use_auth;
use crate::routes::Route;

#[component]
pub fn PricingSuccess() -> Element {
    let auth = use_auth();

    rsx! {
        div {
            class: "container mx-auto px-4 py-24 max-w-2xl text-center",
            h1 { class: "text-3xl font-semibold mb-4", "Thanks for upgrading!" }
            if auth.is_pro() {
                p { class: "text-muted-foreground", "Your payment succeeded and your account is now Pro." }
            } else {
                p {
                    class: "text-muted-foreground",
                    "Your payment succeeded. Your account will be marked as Pro within a minute after the payment is processed."
                }
            }
            Link {
                to: Route::Dashboard {},
                class: "inline-block mt-8 px-4 py-2 rounded-md bg-primary text-primary-foreground hover:bg-primary/90",
                "Go to Dashboard"
            }
        }
    }
}
