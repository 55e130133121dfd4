use dioxus::prelude::*;

use crate::components::icons::BookOpenIcon;
use crate::routes::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    log::warn!("No route for {}", path);

    rsx! {
        div {
            class: "min-h-[60vh] flex items-center justify-center px-4",
            div {
                class: "text-center",
                BookOpenIcon { class: "h-12 w-12 mx-auto mb-4 text-muted-gold" }
                h1 { class: "text-4xl font-bold mb-4", "404" }
                p { class: "text-xl text-muted-foreground mb-2", "Oops! Page not found" }
                p { class: "text-sm text-muted-foreground mb-6 font-mono", "{path}" }
                Link {
                    to: Route::Home {},
                    class: "text-muted-gold hover:text-rich-gold underline",
                    "Return to Home"
                }
            }
        }
    }
}
