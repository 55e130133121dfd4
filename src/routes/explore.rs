use dioxus::prelude::*;

use crate::components::icons::SearchIcon;
use crate::components::{CardAction, CatalogCard, EmptyResults, Footer, GenreSelect, SortSelect, ViewToggle};
use crate::services::catalog::{
    filter_books, genres, results_summary, sort_books, toggle_id, BookFilter, SortOrder, ViewMode, ALL_GENRES,
    EXPLORE_BOOKS,
};

/// Full catalog; `q` pre-fills the search box (the navbar search lands here)
#[component]
pub fn Explore(q: String) -> Element {
    let mut search = use_signal(|| q.clone());
    let mut genre = use_signal(|| ALL_GENRES.to_string());
    let sort = use_signal(SortOrder::default);
    let view = use_signal(ViewMode::default);
    let mut wishlisted = use_signal(Vec::<u32>::new);

    // A new navbar search while already on this page only changes the prop
    use_effect(use_reactive(&q, move |q| {
        search.set(q);
    }));

    let filter = use_memo(move || BookFilter {
        query: search(),
        genre: genre(),
        match_description: true,
    });

    let books = use_memo(move || {
        let mut books = filter_books(&EXPLORE_BOOKS, &filter.read());
        sort_books(&mut books, sort());
        books
    });

    let count = books.read().len();
    let summary = results_summary(count, &filter.read());

    rsx! {
        section {
            class: "py-16 bg-gradient-to-b from-midnight-navy/20 to-background",
            div {
                class: "container mx-auto px-4 lg:px-8",
                div {
                    class: "text-center mb-12",
                    h1 {
                        class: "heading-hero mb-4",
                        "Explore Our"
                        br {}
                        span { class: "gradient-text-mystical", "Digital Library" }
                    }
                    p {
                        class: "body-elegant text-lg max-w-3xl mx-auto",
                        "Instant access to thousands of eBooks and audiobooks. Start reading immediately with our premium subscription plans."
                    }
                }
            }
        }

        section {
            class: "py-8",
            div {
                class: "container mx-auto px-4 lg:px-8",
                div {
                    class: "bg-card/30 backdrop-blur-sm rounded-xl p-6 border border-border/30",
                    div {
                        class: "flex flex-col lg:flex-row gap-4 items-center justify-between",
                        div {
                            class: "relative flex-1 max-w-2xl w-full",
                            input {
                                class: "w-full h-12 pl-10 pr-3 rounded-md bg-background/50 border border-border/50",
                                placeholder: "Search by title, author, or description...",
                                value: "{search}",
                                oninput: move |e| search.set(e.value()),
                            }
                            SearchIcon { class: "absolute left-3 top-1/2 -translate-y-1/2 h-5 w-5 text-muted-foreground" }
                        }
                        div {
                            class: "flex items-center gap-3 flex-wrap",
                            GenreSelect { genre, genres: genres(&EXPLORE_BOOKS) }
                            SortSelect { sort, options: SortOrder::EXPLORE }
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
                    class: "mb-6",
                    p { class: "text-sm text-muted-foreground", "{summary}" }
                }

                div {
                    class: view().container_class(),
                    for book in books.read().iter().cloned() {
                        div {
                            key: "{book.id}",
                            class: "animate-fade-in",
                            CatalogCard {
                                action: CardAction::Wishlist { active: wishlisted.read().contains(&book.id) },
                                book,
                                on_action: move |id| toggle_id(&mut *wishlisted.write(), id),
                            }
                        }
                    }
                }

                if count == 0 {
                    EmptyResults {
                        button {
                            class: "mt-4 px-4 py-2 rounded-md border border-border/50 hover:bg-card/50",
                            onclick: move |_| {
                                search.set(String::new());
                                genre.set(ALL_GENRES.to_string());
                            },
                            "Clear Filters"
                        }
                    }
                }
            }
        }

        Footer {}
    }
}
