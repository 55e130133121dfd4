use dioxus::prelude::*;

use crate::components::icons::{FacebookIcon, HeartIcon, InstagramIcon, MailIcon, SparklesIcon, TwitterIcon};
use crate::utils::validation::is_valid_email;

const EXPLORE_LINKS: [&str; 5] = [
    "New Arrivals",
    "Best Sellers",
    "Rare Collections",
    "Author Spotlights",
    "Book Reviews",
];

const GENRE_LINKS: [&str; 5] = [
    "Dark Fantasy",
    "Historical Fiction",
    "Philosophy",
    "Mystery",
    "Epic Fantasy",
];

const SUPPORT_LINKS: [&str; 5] = [
    "Help Center",
    "Contact Us",
    "Shipping Info",
    "Returns",
    "Privacy Policy",
];

#[derive(Clone, Debug, PartialEq)]
enum Newsletter {
    Idle,
    Invalid,
    Subscribed(String),
}

/// Newsletter signup is local only; nothing is sent anywhere
fn subscribe(email: &str) -> Newsletter {
    let email = email.trim();
    if is_valid_email(email) {
        log::info!("Newsletter signup for {}", email);
        Newsletter::Subscribed(email.to_string())
    } else {
        Newsletter::Invalid
    }
}

#[component]
pub fn Footer() -> Element {
    let mut email = use_signal(String::new);
    let mut newsletter = use_signal(|| Newsletter::Idle);

    let mut submit = move || {
        let result = subscribe(&email.read());
        if matches!(result, Newsletter::Subscribed(_)) {
            email.set(String::new());
        }
        newsletter.set(result);
    };

    rsx! {
        footer {
            class: "bg-subtle border-t border-muted-gold/20",

            // Newsletter
            div {
                class: "border-b border-border/30",
                div {
                    class: "container mx-auto px-4 lg:px-8 py-12",
                    div {
                        class: "max-w-2xl mx-auto text-center",
                        div {
                            class: "flex items-center justify-center mb-4",
                            SparklesIcon { class: "h-6 w-6 text-muted-gold mr-3" }
                            h3 { class: "heading-secondary", "Join Our Mystical Circle" }
                        }
                        p {
                            class: "body-elegant mb-6",
                            "Receive curated book recommendations, exclusive previews of rare collections, and insights from the literary world."
                        }
                        match newsletter() {
                            Newsletter::Subscribed(address) => rsx! {
                                p {
                                    class: "text-sm text-muted-gold",
                                    "Thanks! Look out for our next letter at {address}."
                                }
                            },
                            state => rsx! {
                                div {
                                    class: "flex flex-col sm:flex-row gap-3 max-w-md mx-auto",
                                    input {
                                        r#type: "email",
                                        class: "flex-1 px-3 py-2 rounded-md bg-card/50 border border-border/50",
                                        placeholder: "Your email address",
                                        value: "{email}",
                                        oninput: move |e| email.set(e.value()),
                                        onkeydown: move |e| {
                                            if e.key() == Key::Enter {
                                                submit();
                                            }
                                        },
                                    }
                                    button {
                                        class: "px-6 py-2 rounded-md bg-gradient-to-r from-muted-gold to-rich-gold hover:from-rich-gold hover:to-warm-gold text-midnight-navy font-medium",
                                        onclick: move |_| submit(),
                                        "Subscribe"
                                    }
                                }
                                if state == Newsletter::Invalid {
                                    p {
                                        class: "text-sm text-red-400 mt-2",
                                        "Please enter a valid email address"
                                    }
                                }
                            },
                        }
                    }
                }
            }

            div {
                class: "container mx-auto px-4 lg:px-8 py-12",
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8 mb-8",

                    // Brand
                    div {
                        class: "lg:col-span-1",
                        div {
                            class: "flex items-center space-x-3 mb-4",
                            div {
                                class: "p-2 rounded-xl bg-gradient-to-br from-muted-gold/20 to-rich-gold/20 border border-muted-gold/30",
                                SparklesIcon { class: "h-6 w-6 text-muted-gold" }
                            }
                            div {
                                h2 {
                                    class: "font-playfair text-xl font-bold gradient-text-gold",
                                    "BookBuddy"
                                }
                                p {
                                    class: "text-xs text-muted-foreground",
                                    "Gateway to Magical Worlds"
                                }
                            }
                        }
                        p {
                            class: "body-elegant text-sm mb-4",
                            "Curating the finest collection of mystical literature, rare books, and enchanting tales for discerning readers worldwide."
                        }
                        div {
                            class: "flex space-x-3",
                            button {
                                class: "p-2 rounded-md hover:bg-muted-gold/10 hover:text-muted-gold",
                                aria_label: "Instagram",
                                InstagramIcon { class: "h-4 w-4" }
                            }
                            button {
                                class: "p-2 rounded-md hover:bg-muted-gold/10 hover:text-muted-gold",
                                aria_label: "Twitter",
                                TwitterIcon { class: "h-4 w-4" }
                            }
                            button {
                                class: "p-2 rounded-md hover:bg-muted-gold/10 hover:text-muted-gold",
                                aria_label: "Facebook",
                                FacebookIcon { class: "h-4 w-4" }
                            }
                        }
                    }

                    LinkColumn { title: "Explore", links: &EXPLORE_LINKS }
                    LinkColumn { title: "Genres", links: &GENRE_LINKS }
                    LinkColumn { title: "Support", links: &SUPPORT_LINKS }
                }

                div { class: "divider-flourish" }

                div {
                    class: "flex flex-col md:flex-row items-center justify-between pt-8 text-sm text-muted-foreground",
                    p {
                        "© 2024 BookBuddy. Crafted with "
                        HeartIcon { class: "inline h-4 w-4 text-muted-gold mx-1", filled: true }
                        " for book lovers everywhere."
                    }
                    div {
                        class: "flex items-center space-x-6 mt-4 md:mt-0",
                        a { href: "#", class: "hover:text-muted-gold transition-colors", "Terms of Service" }
                        a { href: "#", class: "hover:text-muted-gold transition-colors", "Privacy Policy" }
                        a {
                            href: "#",
                            class: "hover:text-muted-gold transition-colors flex items-center",
                            MailIcon { class: "h-4 w-4 mr-1" }
                            "Contact"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LinkColumn(title: &'static str, links: &'static [&'static str]) -> Element {
    rsx! {
        div {
            h4 {
                class: "font-playfair text-lg font-semibold text-muted-gold mb-4",
                "{title}"
            }
            ul {
                class: "space-y-2",
                for link in links.iter() {
                    li {
                        key: "{link}",
                        a {
                            href: "#",
                            class: "text-sm text-muted-foreground hover:text-muted-gold transition-colors duration-200",
                            "{link}"
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

    #[test]
    fn test_subscribe_accepts_valid_email() {
        assert_eq!(
            subscribe("  reader@bookbuddy.test "),
            Newsletter::Subscribed("reader@bookbuddy.test".to_string())
        );
    }

    #[test]
    fn test_subscribe_rejects_invalid_email() {
        assert_eq!(subscribe(""), Newsletter::Invalid);
        assert_eq!(subscribe("not-an-email"), Newsletter::Invalid);
    }
}
