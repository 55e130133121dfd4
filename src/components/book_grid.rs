use dioxus::prelude::*;

use crate::components::book_card::BookCard;
use crate::components::icons::{GridIcon, ListIcon, SearchIcon};
use crate::services::catalog::{
    filter_books, genres, sort_books, toggle_id, BookFilter, SortOrder, ViewMode, ALL_GENRES, FEATURED_BOOKS,
};
use crate::utils::format::pluralize;

/// Grid/list switch shared by every listing
#[component]
pub fn ViewToggle(mut view: Signal<ViewMode>) -> Element {
    let current = view();

    rsx! {
        div {
            class: "flex bg-background/50 rounded-lg p-1 border border-border/30",
            button {
                class: ViewMode::Grid.toggle_class(current),
                aria_label: "Grid view",
                onclick: move |_| view.set(ViewMode::Grid),
                GridIcon { class: "h-4 w-4" }
            }
            button {
                class: ViewMode::List.toggle_class(current),
                aria_label: "List view",
                onclick: move |_| view.set(ViewMode::List),
                ListIcon { class: "h-4 w-4" }
            }
        }
    }
}

#[component]
pub fn SortSelect(mut sort: Signal<SortOrder>, options: &'static [SortOrder]) -> Element {
    rsx! {
        select {
            class: "w-36 px-3 py-2 rounded-md bg-background/50 border border-border/50 text-sm",
            value: sort().as_str(),
            onchange: move |e| {
                if let Some(order) = SortOrder::from_id(&e.value()) {
                    sort.set(order);
                }
            },
            for order in options.iter() {
                option {
                    key: "{order.as_str()}",
                    value: order.as_str(),
                    selected: *order == sort(),
                    "{order.label()}"
                }
            }
        }
    }
}

#[component]
pub fn GenreSelect(mut genre: Signal<String>, genres: Vec<&'static str>) -> Element {
    rsx! {
        select {
            class: "w-40 px-3 py-2 rounded-md bg-background/50 border border-border/50 text-sm",
            value: "{genre}",
            onchange: move |e| genre.set(e.value()),
            option { value: ALL_GENRES, selected: genre() == ALL_GENRES, "All Genres" }
            for name in genres {
                option {
                    key: "{name}",
                    value: name,
                    selected: genre() == name,
                    "{name}"
                }
            }
        }
    }
}

/// Featured catalog on the home page
#[component]
pub fn BookGrid() -> Element {
    let mut search = use_signal(String::new);
    let genre = use_signal(|| ALL_GENRES.to_string());
    let sort = use_signal(SortOrder::default);
    let view = use_signal(ViewMode::default);
    let mut wishlisted = use_signal(|| {
        FEATURED_BOOKS
            .iter()
            .filter(|b| b.wishlisted)
            .map(|b| b.id)
            .collect::<Vec<u32>>()
    });

    let books = use_memo(move || {
        let filter = BookFilter {
            query: search(),
            genre: genre(),
            match_description: false,
        };
        let mut books = filter_books(&FEATURED_BOOKS, &filter);
        sort_books(&mut books, sort());
        books
    });

    let count = books.read().len();
    let found = format!("{} found", pluralize(count, "book"));

    rsx! {
        section {
            class: "py-16 md:py-24",
            div {
                class: "container mx-auto px-4 lg:px-8",
                div {
                    class: "text-center mb-12",
                    h2 { class: "heading-primary mb-4", "Featured in Your Digital Library" }
                    p {
                        class: "body-elegant max-w-2xl mx-auto",
                        "Start reading instantly with our curated collection of premium eBooks and audiobooks. New titles added every week with unlimited access."
                    }
                }

                div {
                    class: "bg-card/30 backdrop-blur-sm rounded-xl p-6 mb-8 border border-border/30",
                    div {
                        class: "flex flex-col lg:flex-row gap-4 items-center justify-between",
                        div {
                            class: "relative flex-1 max-w-md w-full",
                            input {
                                class: "w-full pl-10 pr-3 py-2 rounded-md bg-background/50 border border-border/50",
                                placeholder: "Search by title or author...",
                                value: "{search}",
                                oninput: move |e| search.set(e.value()),
                            }
                            SearchIcon { class: "absolute left-3 top-1/2 -translate-y-1/2 h-4 w-4 text-muted-foreground" }
                        }
                        div {
                            class: "flex items-center gap-3",
                            GenreSelect { genre, genres: genres(&FEATURED_BOOKS) }
                            SortSelect { sort, options: SortOrder::FEATURED }
                            ViewToggle { view }
                        }
                    }
                }

                div {
                    class: "mb-6",
                    p { class: "text-sm text-muted-foreground", "{found}" }
                }

                div {
                    class: view().container_class(),
                    for book in books.read().iter().cloned() {
                        div {
                            key: "{book.id}",
                            class: "animate-fade-in",
                            BookCard {
                                wishlisted: wishlisted.read().contains(&book.id),
                                book,
                                on_toggle_wishlist: move |id| toggle_id(&mut *wishlisted.write(), id),
                            }
                        }
                    }
                }

                if count == 0 {
                    EmptyResults {}
                }
            }
        }
    }
}

/// "No books found" block; the explore page adds a reset button as a child
#[component]
pub fn EmptyResults(children: Element) -> Element {
    rsx! {
        div {
            class: "text-center py-12",
            div {
                class: "w-24 h-24 mx-auto mb-4 rounded-full bg-muted/20 flex items-center justify-center",
                SearchIcon { class: "h-8 w-8 text-muted-foreground" }
            }
            h3 { class: "heading-secondary mb-2", "No books found" }
            p {
                class: "body-elegant",
                "Try adjusting your search terms or filters to discover more amazing digital books."
            }
            {children}
        }
    }
}
