use dioxus::prelude::*;

use crate::components::icons::{HeartIcon, MenuIcon, SearchIcon, SparklesIcon, XIcon};
use crate::context::use_auth;
use crate::routes::Route;

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub to: Route,
}

/// Top-level links; signed-in readers get their library and dashboard instead of pricing
pub fn nav_items(signed_in: bool) -> Vec<NavItem> {
    let mut items = vec![
        NavItem { label: "Home", to: Route::Home {} },
        NavItem { label: "Explore Books", to: Route::Explore { q: String::new() } },
    ];

    if signed_in {
        items.push(NavItem { label: "My Library", to: Route::Wishlist {} });
        items.push(NavItem { label: "Dashboard", to: Route::Dashboard {} });
    } else {
        items.push(NavItem { label: "Pricing", to: Route::Pricing {} });
    }
    items
}

fn is_current(item: &Route, current: &Route) -> bool {
    std::mem::discriminant(item) == std::mem::discriminant(current)
}

fn link_class(active: bool) -> &'static str {
    if active {
        "text-sm font-medium text-muted-gold transition-colors duration-300"
    } else {
        "text-sm font-medium text-muted-foreground hover:text-muted-gold transition-colors duration-300"
    }
}

#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let current_route = use_route::<Route>();
    let mut menu_open = use_signal(|| false);
    let mut search = use_signal(String::new);

    let signed_in = auth.is_signed_in();
    let items = nav_items(signed_in);
    let mobile_items = items.clone();

    let mut submit_search = move || {
        let q = search.read().trim().to_string();
        menu_open.set(false);
        nav.push(Route::Explore { q });
    };

    let sign_out = move |_: MouseEvent| {
        menu_open.set(false);
        spawn(async move {
            auth.sign_out().await;
        });
    };

    rsx! {
        nav {
            class: "fixed top-0 left-0 right-0 z-50 bg-background/80 backdrop-blur-md border-b border-border/50",
            div {
                class: "container mx-auto px-4 lg:px-8",
                div {
                    class: "flex items-center justify-between h-16 md:h-20",

                    // Logo
                    Link {
                        to: Route::Home {},
                        class: "flex items-center space-x-3",
                        div {
                            class: "p-2 rounded-xl bg-gradient-to-br from-muted-gold/20 to-rich-gold/20 border border-muted-gold/30",
                            SparklesIcon { class: "h-6 w-6 text-muted-gold" }
                        }
                        div {
                            h1 {
                                class: "font-playfair text-xl md:text-2xl font-bold gradient-text-gold",
                                "BookBuddy"
                            }
                            p {
                                class: "text-xs text-muted-foreground hidden md:block",
                                "Digital Reading Platform"
                            }
                        }
                    }

                    // Desktop navigation
                    div {
                        class: "hidden md:flex items-center space-x-8",
                        for item in items {
                            Link {
                                key: "{item.label}",
                                to: item.to.clone(),
                                class: link_class(is_current(&item.to, &current_route)).to_string(),
                                "{item.label}"
                            }
                        }
                    }

                    div {
                        class: "flex items-center space-x-3",

                        div {
                            class: "hidden sm:flex relative",
                            input {
                                r#type: "search",
                                class: "w-32 md:w-40 lg:w-48 pl-10 pr-3 py-2 rounded-md bg-card/50 border border-border/50 focus:border-muted-gold/50 text-sm",
                                placeholder: "Search magical books...",
                                value: "{search}",
                                oninput: move |e| search.set(e.value()),
                                onkeydown: move |e| {
                                    if e.key() == Key::Enter {
                                        e.prevent_default();
                                        submit_search();
                                    }
                                },
                            }
                            SearchIcon { class: "absolute left-3 top-1/2 -translate-y-1/2 h-4 w-4 text-muted-foreground" }
                        }

                        if signed_in {
                            div {
                                class: "flex items-center space-x-2",
                                Link {
                                    to: Route::Wishlist {},
                                    class: "p-2 rounded-md hover:bg-card/50",
                                    HeartIcon { class: "h-5 w-5 text-muted-foreground hover:text-muted-gold transition-colors" }
                                }
                                button {
                                    class: "px-3 py-1.5 rounded-md text-sm bg-secondary text-secondary-foreground hover:bg-secondary/80",
                                    onclick: sign_out,
                                    "Logout"
                                }
                            }
                        } else {
                            div {
                                class: "flex items-center space-x-2",
                                Link {
                                    to: Route::Login {},
                                    class: "text-sm text-muted-foreground hover:text-muted-gold",
                                    "Login"
                                }
                                Link {
                                    to: Route::Signup {},
                                    class: "px-3 py-1.5 rounded-md text-sm bg-primary text-primary-foreground hover:bg-primary/90",
                                    "Sign up"
                                }
                            }
                        }

                        button {
                            class: "md:hidden p-2 rounded-md hover:bg-card/50",
                            aria_label: "Toggle menu",
                            onclick: move |_| {
                                let open = *menu_open.read();
                                menu_open.set(!open);
                            },
                            if *menu_open.read() {
                                XIcon { class: "h-5 w-5 text-muted-foreground" }
                            } else {
                                MenuIcon { class: "h-5 w-5 text-muted-foreground" }
                            }
                        }
                    }
                }

                // Mobile menu
                if *menu_open.read() {
                    div {
                        class: "md:hidden py-4 border-t border-border/30 animate-fade-in",
                        div {
                            class: "flex flex-col space-y-2",
                            for item in mobile_items {
                                Link {
                                    key: "mobile-{item.label}",
                                    to: item.to.clone(),
                                    class: "px-3 py-2 text-sm font-medium text-muted-foreground hover:text-muted-gold hover:bg-card/30 rounded-lg transition-all duration-200",
                                    onclick: move |_| menu_open.set(false),
                                    "{item.label}"
                                }
                            }
                            div {
                                class: "pt-2 border-t border-border/20 flex flex-col",
                                if signed_in {
                                    button {
                                        class: "w-full text-left px-3 py-2 text-sm font-medium text-muted-foreground hover:text-muted-gold hover:bg-card/30 rounded-lg",
                                        onclick: sign_out,
                                        "Logout"
                                    }
                                } else {
                                    Link {
                                        to: Route::Login {},
                                        class: "px-3 py-2 text-sm font-medium text-muted-foreground hover:text-muted-gold hover:bg-card/30 rounded-lg",
                                        onclick: move |_| menu_open.set(false),
                                        "Login"
                                    }
                                    Link {
                                        to: Route::Signup {},
                                        class: "px-3 py-2 text-sm font-medium text-muted-foreground hover:text-muted-gold hover:bg-card/30 rounded-lg",
                                        onclick: move |_| menu_open.set(false),
                                        "Sign up"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[NavItem]) -> Vec<&'static str> {
        items.iter().map(|i| i.label).collect()
    }

    #[test]
    fn test_nav_items_signed_out() {
        let items = nav_items(false);
        assert_eq!(labels(&items), vec!["Home", "Explore Books", "Pricing"]);
        assert_eq!(items[2].to, Route::Pricing {});
    }

    #[test]
    fn test_nav_items_signed_in() {
        let items = nav_items(true);
        assert_eq!(labels(&items), vec!["Home", "Explore Books", "My Library", "Dashboard"]);
        assert_eq!(items[3].to, Route::Dashboard {});
    }

    #[test]
    fn test_current_route_ignores_query() {
        let explore = Route::Explore { q: String::new() };
        assert!(is_current(&explore, &Route::Explore { q: "grimoire".to_string() }));
        assert!(!is_current(&explore, &Route::Home {}));
    }
}
