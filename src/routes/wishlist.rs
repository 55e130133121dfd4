use dioxus::prelude::*;

use crate::components::icons::HeartIcon;
use crate::components::{CardAction, CatalogCard, Footer, SortSelect, ViewToggle};
use crate::routes::Route;
use crate::services::catalog::{sort_books, Book, SortOrder, ViewMode, WishlistStats, WISHLIST_BOOKS};
use crate::utils::format::{format_inr, pluralize};

#[component]
pub fn Wishlist() -> Element {
    let mut books = use_signal(|| WISHLIST_BOOKS.to_vec());
    let sort = use_signal(|| SortOrder::Newest);
    let view = use_signal(ViewMode::default);

    let sorted = use_memo(move || {
        let mut sorted: Vec<Book> = books();
        sort_books(&mut sorted, sort());
        sorted
    });

    let stats = WishlistStats::of(&books.read());
    let intro = if stats.count > 0 {
        format!("{} in your library.", pluralize(stats.count, "book"))
    } else {
        "Start building your digital library today.".to_string()
    };
    let in_wishlist = format!("{} in your wishlist", pluralize(stats.count, "book"));
    let library_value = format_inr(stats.total_value);
    let out_of_stock = stats.out_of_stock();

    rsx! {
        section {
            class: "py-16 bg-gradient-to-b from-midnight-navy/20 to-background",
            div {
                class: "container mx-auto px-4 lg:px-8",
                div {
                    class: "text-center mb-12",
                    h1 {
                        class: "heading-hero mb-4",
                        "Your Personal"
                        br {}
                        span { class: "gradient-text-mystical", "Digital Library" }
                    }
                    p {
                        class: "body-elegant text-lg max-w-2xl mx-auto",
                        "Your collection of purchased and downloaded books, ready to read anytime, anywhere. {intro}"
                    }
                }

                if stats.count > 0 {
                    div {
                        class: "flex flex-wrap justify-center gap-8 mb-8",
                        div {
                            class: "text-center",
                            div { class: "heading-secondary mb-1", "{stats.count}" }
                            p { class: "text-sm text-muted-foreground", "Books Owned" }
                        }
                        div {
                            class: "text-center",
                            div { class: "heading-secondary mb-1", "{library_value}" }
                            p { class: "text-sm text-muted-foreground", "Library Value" }
                        }
                        div {
                            class: "text-center",
                            div { class: "heading-secondary mb-1", "{stats.in_stock}" }
                            p { class: "text-sm text-muted-foreground", "Ready to Read" }
                        }
                    }
                }
            }
        }

        if stats.count > 0 {
            section {
                class: "py-8",
                div {
                    class: "container mx-auto px-4 lg:px-8",
                    div {
                        class: "bg-card/30 backdrop-blur-sm rounded-xl p-6 border border-border/30",
                        div {
                            class: "flex flex-col sm:flex-row gap-4 items-center justify-between",
                            div {
                                class: "flex items-center gap-4",
                                p { class: "text-sm text-muted-foreground", "{in_wishlist}" }
                                if out_of_stock > 0 {
                                    span {
                                        class: "px-2 py-0.5 rounded-full border border-border/50 text-xs",
                                        "{out_of_stock} out of stock"
                                    }
                                }
                            }
                            div {
                                class: "flex items-center gap-3",
                                SortSelect { sort, options: SortOrder::WISHLIST }
                                ViewToggle { view }
                            }
                        }
                    }
                }
            }

            section {
                class: "py-8",
                div {
                    class: "container mx-auto px-4 lg:px-8",
                    div {
                        class: view().container_class(),
                        for book in sorted.read().iter().cloned() {
                            div {
                                key: "{book.id}",
                                class: "animate-fade-in",
                                CatalogCard {
                                    book,
                                    action: CardAction::Remove,
                                    on_action: move |id: u32| books.write().retain(|b| b.id != id),
                                }
                            }
                        }
                    }
                }
            }
        } else {
            section {
                class: "py-16",
                div {
                    class: "container mx-auto px-4 lg:px-8",
                    div {
                        class: "text-center max-w-md mx-auto",
                        div {
                            class: "w-24 h-24 mx-auto mb-6 rounded-full bg-gradient-to-br from-muted-gold/20 to-rich-gold/20 flex items-center justify-center",
                            HeartIcon { class: "h-8 w-8 text-muted-gold" }
                        }
                        h3 { class: "heading-secondary mb-4", "Your library is empty" }
                        p {
                            class: "body-elegant mb-6",
                            "Start building your digital library by exploring our vast collection of eBooks and audiobooks. Get instant access with our subscription plans."
                        }
                        Link {
                            to: Route::Explore { q: String::new() },
                            class: "inline-block px-4 py-2 rounded-md bg-gradient-to-r from-muted-gold to-rich-gold hover:from-rich-gold hover:to-warm-gold text-midnight-navy",
                            "Explore Books"
                        }
                    }
                }
            }
        }

        Footer {}
    }
}
