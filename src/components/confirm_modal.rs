use dioxus::prelude::*;

/// Yes/no dialog; clicking the backdrop cancels
#[component]
pub fn ConfirmModal(
    title: String,
    message: String,
    confirm_text: Option<String>,
    cancel_text: Option<String>,
    #[props(default = false)] destructive: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let confirm_class = if destructive {
        "px-4 py-2 rounded-lg border border-red-400/50 text-red-400 hover:bg-red-400/10 transition"
    } else {
        "px-4 py-2 rounded-lg bg-gradient-to-r from-muted-gold to-rich-gold text-midnight-navy font-medium transition"
    };

    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 backdrop-blur-sm z-50 flex items-center justify-center p-4",
            onclick: move |_| on_cancel.call(()),

            div {
                class: "bg-card/95 border border-border/50 rounded-xl max-w-sm w-full p-6 shadow-xl",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "confirm-title",
                aria_describedby: "confirm-message",
                onclick: move |e| e.stop_propagation(),

                h2 {
                    class: "font-playfair text-lg font-semibold mb-2",
                    id: "confirm-title",
                    "{title}"
                }
                p {
                    class: "text-sm text-muted-foreground mb-6",
                    id: "confirm-message",
                    "{message}"
                }

                div {
                    class: "flex gap-3 justify-end",
                    button {
                        class: "px-4 py-2 rounded-lg hover:bg-card/50 transition",
                        onclick: move |_| on_cancel.call(()),
                        { cancel_text.clone().unwrap_or_else(|| "Cancel".to_string()) }
                    }
                    button {
                        class: "{confirm_class}",
                        onclick: move |_| on_confirm.call(()),
                        { confirm_text.clone().unwrap_or_else(|| "Confirm".to_string()) }
                    }
                }
            }
        }
    }
}
