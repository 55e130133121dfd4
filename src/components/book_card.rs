use dioxus::prelude::*;

use crate::components::icons::{BookOpenIcon, DownloadIcon, HeartIcon, PlayIcon, ShoppingCartIcon, StarIcon, TrashIcon};
use crate::services::catalog::Book;

fn star_class(lit: bool) -> String {
    if lit {
        "h-3 w-3 text-muted-gold".to_string()
    } else {
        "h-3 w-3 text-muted-foreground/30".to_string()
    }
}

fn heart_button_class(wishlisted: bool) -> &'static str {
    if wishlisted {
        "absolute top-2 right-2 p-2 rounded-full backdrop-blur-sm transition-colors duration-200 bg-muted-gold/20 text-muted-gold"
    } else {
        "absolute top-2 right-2 p-2 rounded-full backdrop-blur-sm transition-colors duration-200 bg-background/20 text-muted-foreground hover:text-muted-gold hover:bg-muted-gold/20"
    }
}

/// Home page card: subscription price, audio badge and a local wishlist heart
#[component]
pub fn BookCard(book: Book, wishlisted: bool, on_toggle_wishlist: EventHandler<u32>) -> Element {
    let id = book.id;
    let full = book.full_stars();
    let rating = format!("{:.1}", book.rating);
    let read_label = if book.available { "Read Now" } else { "Soon" };

    rsx! {
        div {
            class: "group card-royal bg-card/60 backdrop-blur-sm p-4 hover:bg-card/80 transition-all duration-300",

            div {
                class: "relative overflow-hidden rounded-lg mb-4",
                img {
                    src: book.cover,
                    alt: "{book.title} book cover",
                    class: "w-full h-64 object-cover group-hover:scale-105 transition-transform duration-500",
                }

                div {
                    class: "absolute inset-0 bg-midnight-navy/60 opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex items-center justify-center",
                    div {
                        class: "flex gap-2",
                        button {
                            class: "inline-flex items-center px-3 py-1.5 rounded-md text-sm bg-muted-gold/90 hover:bg-muted-gold text-midnight-navy font-medium",
                            BookOpenIcon { class: "mr-2 h-4 w-4" }
                            "Preview"
                        }
                        if book.has_audio {
                            button {
                                class: "px-3 py-1.5 rounded-md border border-muted-gold/50 text-muted-gold bg-background/20 backdrop-blur-sm",
                                aria_label: "Play sample",
                                PlayIcon { class: "h-4 w-4" }
                            }
                        }
                    }
                }

                button {
                    class: heart_button_class(wishlisted),
                    aria_label: if wishlisted { "Remove from wishlist" } else { "Add to wishlist" },
                    onclick: move |_| on_toggle_wishlist.call(id),
                    HeartIcon { class: "h-4 w-4", filled: wishlisted }
                }

                div {
                    class: "absolute bottom-2 left-2",
                    span {
                        class: "px-2 py-1 text-xs font-medium bg-aubergine/80 text-warm-cream rounded-full backdrop-blur-sm",
                        "{book.genre}"
                    }
                }
            }

            div {
                class: "space-y-2",
                h3 {
                    class: "font-playfair text-lg font-semibold text-foreground line-clamp-1 group-hover:text-muted-gold transition-colors",
                    "{book.title}"
                }
                p { class: "text-sm text-muted-foreground", "by {book.author}" }

                div {
                    class: "flex items-center space-x-1",
                    for i in 0..5usize {
                        StarIcon { key: "{i}", class: star_class(i < full), filled: i < full }
                    }
                    span { class: "text-xs text-muted-foreground ml-2", "{rating}" }
                }

                div {
                    class: "flex items-center justify-between pt-2",
                    div {
                        class: "flex flex-col",
                        span { class: "font-semibold text-muted-gold text-lg", "{book.price}" }
                        if !book.available {
                            span { class: "text-xs text-muted-foreground", "Coming Soon" }
                        }
                    }
                    div {
                        class: "flex gap-1",
                        button {
                            class: "inline-flex items-center rounded-md bg-gradient-to-r from-muted-gold to-rich-gold hover:from-rich-gold hover:to-warm-gold text-midnight-navy text-xs px-3 py-1.5 disabled:opacity-50",
                            disabled: !book.available,
                            DownloadIcon { class: "mr-1 h-3 w-3" }
                            "{read_label}"
                        }
                        if book.has_audio && book.available {
                            button {
                                class: "rounded-md border border-muted-gold/30 text-muted-gold hover:bg-muted-gold hover:text-midnight-navy text-xs px-2 py-1.5",
                                aria_label: "Listen",
                                PlayIcon { class: "h-3 w-3" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// What the corner button of a [`CatalogCard`] does
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAction {
    /// Heart that flips the local wishlist selection
    Wishlist { active: bool },
    /// Trash can on the wishlist page
    Remove,
}

impl CardAction {
    fn cta_label(&self, available: bool) -> &'static str {
        match (self, available) {
            (CardAction::Wishlist { .. }, true) => "Read Now",
            (CardAction::Wishlist { .. }, false) => "Coming Soon",
            (CardAction::Remove, true) => "Add to Cart",
            (CardAction::Remove, false) => "Unavailable",
        }
    }

    fn unavailable_badge(&self) -> &'static str {
        match self {
            CardAction::Wishlist { .. } => "Coming Soon",
            CardAction::Remove => "Out of Stock",
        }
    }
}

/// Card used by the explore and wishlist listings
#[component]
pub fn CatalogCard(book: Book, action: CardAction, on_action: EventHandler<u32>) -> Element {
    let id = book.id;
    let added_on = match action {
        CardAction::Remove => book.added_on(),
        CardAction::Wishlist { .. } => None,
    };
    let badge = action.unavailable_badge();
    let cta = action.cta_label(book.available);

    rsx! {
        div {
            class: "card-royal group overflow-hidden hover:shadow-mystical transition-all duration-300",
            div {
                class: "relative",
                img {
                    src: book.cover,
                    alt: book.title,
                    class: "w-full aspect-[3/4] object-cover group-hover:scale-105 transition-transform duration-300",
                }

                div {
                    class: "absolute top-3 left-3 flex flex-wrap gap-1",
                    for tag in book.tags.iter() {
                        span {
                            key: "{tag}",
                            class: "px-2 py-0.5 rounded-full text-xs bg-midnight-navy/80 text-muted-gold",
                            "{tag}"
                        }
                    }
                }

                div {
                    class: "absolute top-3 right-3",
                    button {
                        class: "p-2 rounded-md bg-background/80 backdrop-blur-sm hover:bg-background",
                        onclick: move |_| on_action.call(id),
                        match action {
                            CardAction::Wishlist { active: true } => rsx! {
                                HeartIcon { class: "h-4 w-4 transition-colors text-red-500", filled: true }
                            },
                            CardAction::Wishlist { active: false } => rsx! {
                                HeartIcon { class: "h-4 w-4 transition-colors text-muted-foreground hover:text-muted-gold" }
                            },
                            CardAction::Remove => rsx! {
                                TrashIcon { class: "h-4 w-4 text-red-400 hover:text-red-500" }
                            },
                        }
                    }
                }

                if !book.available {
                    div {
                        class: "absolute inset-0 bg-background/80 flex items-center justify-center",
                        span {
                            class: "px-3 py-1 rounded-full text-sm bg-muted-gold/20 text-muted-gold",
                            "{badge}"
                        }
                    }
                }
            }

            div {
                class: "p-4",
                h3 {
                    class: "font-playfair text-lg font-semibold text-foreground mb-1 line-clamp-2",
                    "{book.title}"
                }
                p { class: "text-sm text-muted-foreground mb-2", "{book.author}" }
                p { class: "text-xs text-muted-foreground mb-3 line-clamp-2", "{book.description}" }

                div {
                    class: "flex items-center gap-2 mb-3",
                    div {
                        class: "flex items-center",
                        StarIcon { class: "h-4 w-4 text-muted-gold", filled: true }
                        span { class: "ml-1 text-sm font-medium", "{book.rating}" }
                    }
                    span {
                        class: "px-2 py-0.5 rounded-full border border-border/50 text-xs",
                        "{book.genre}"
                    }
                }

                div {
                    class: "flex items-center justify-between mb-3",
                    div {
                        class: "flex items-center gap-2",
                        span { class: "font-semibold text-muted-gold", "{book.price}" }
                        if let Some(original) = book.original_price {
                            span { class: "text-xs text-muted-foreground line-through", "{original}" }
                        }
                    }
                }

                if let Some(date) = added_on {
                    div { class: "text-xs text-muted-foreground mb-3", "Added on {date}" }
                }

                button {
                    class: "w-full inline-flex items-center justify-center rounded-md px-3 py-2 text-sm bg-gradient-to-r from-muted-gold to-rich-gold hover:from-rich-gold hover:to-warm-gold text-midnight-navy disabled:opacity-50",
                    disabled: !book.available,
                    ShoppingCartIcon { class: "h-4 w-4 mr-1" }
                    "{cta}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cta_labels_by_listing() {
        let explore = CardAction::Wishlist { active: false };
        assert_eq!(explore.cta_label(true), "Read Now");
        assert_eq!(explore.cta_label(false), "Coming Soon");
        assert_eq!(CardAction::Remove.cta_label(true), "Add to Cart");
        assert_eq!(CardAction::Remove.cta_label(false), "Unavailable");
    }

    #[test]
    fn test_unavailable_badge() {
        assert_eq!(CardAction::Wishlist { active: true }.unavailable_badge(), "Coming Soon");
        assert_eq!(CardAction::Remove.unavailable_badge(), "Out of Stock");
    }

    #[test]
    fn test_star_and_heart_classes() {
        assert!(star_class(true).contains("text-muted-gold"));
        assert!(star_class(false).contains("/30"));
        assert!(heart_button_class(true).contains("bg-muted-gold/20 text-muted-gold"));
        assert!(heart_button_class(false).contains("hover:text-muted-gold"));
    }
}
