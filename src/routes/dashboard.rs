use dioxus::prelude::*;

use crate::context::use_auth;
use crate::routes::Route;

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // Wait for the session restore before deciding the visitor is anonymous
    use_effect(move || {
        if !auth.is_loading() && auth.user().is_none() {
            nav.replace(Route::Login {});
        }
    });

    let Some(user) = auth.user() else {
        return rsx! {
            div {
                class: "container mx-auto px-4 py-24 text-center text-muted-foreground",
                if auth.is_loading() { "Loading your account..." }
            }
        };
    };

    let email = user.email_or_id().to_string();

    rsx! {
        div {
            class: "container mx-auto px-4 py-24",
            h1 { class: "text-2xl font-semibold mb-6", "Welcome, {email}" }
            div {
                class: "grid md:grid-cols-2 gap-6",
                div {
                    class: "rounded-xl border border-border/50 bg-card p-6 space-y-2",
                    h3 { class: "text-lg font-semibold", "General Access" }
                    p { class: "text-sm text-muted-foreground", "Everyone can use these features" }
                    p { class: "text-sm text-muted-foreground pt-2", "Basic dashboard content..." }
                }
                div {
                    class: "rounded-xl border border-border/50 bg-card p-6 space-y-2",
                    h3 { class: "text-lg font-semibold", "Pro Features" }
                    p { class: "text-sm text-muted-foreground", "Restricted to Pro users" }
                    if auth.is_pro() {
                        p { class: "text-sm pt-2", "Thanks for being Pro!" }
                    } else {
                        div {
                            class: "space-y-3 pt-2",
                            p { class: "text-sm text-muted-foreground", "Unlock advanced features with Pro." }
                            Link {
                                to: Route::Pricing {},
                                class: "inline-block px-4 py-2 rounded-md bg-primary text-primary-foreground hover:bg-primary/90",
                                "View Pricing"
                            }
                        }
                    }
                }
            }
        }
    }
}
