use dioxus::prelude::*;

use crate::components::icons::{ArrowRightIcon, BookOpenIcon, SparklesIcon, StarIcon};
use crate::routes::Route;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1507842217343-583bb7270b66?w=1920&h=1080&fit=crop";

const HERO_STATS: [(&str, &str); 3] = [
    ("10,000+", "Digital Books"),
    ("50,000+", "Active Readers"),
    ("24/7", "Instant Access"),
];

#[component]
pub fn Hero() -> Element {
    rsx! {
        section {
            class: "relative min-h-screen flex items-center justify-center overflow-hidden",

            div {
                class: "absolute inset-0",
                img {
                    src: HERO_IMAGE,
                    alt: "Mystical Royal Library",
                    class: "w-full h-full object-cover",
                }
                div { class: "absolute inset-0 bg-gradient-to-r from-midnight-navy/90 via-midnight-navy/70 to-aubergine/80" }
                div { class: "absolute inset-0 bg-gradient-to-t from-background/60 via-transparent to-transparent" }
            }

            // Floating decorations
            div {
                class: "absolute top-20 left-10 animate-float opacity-30",
                BookOpenIcon { class: "h-8 w-8 text-muted-gold" }
            }
            div {
                class: "absolute top-40 right-20 animate-float opacity-40",
                style: "animation-delay: 2s",
                StarIcon { class: "h-6 w-6 text-rich-gold" }
            }
            div {
                class: "absolute bottom-32 left-16 animate-float opacity-35",
                style: "animation-delay: 4s",
                SparklesIcon { class: "h-10 w-10 text-warm-gold" }
            }

            div {
                class: "relative z-10 container mx-auto px-4 lg:px-8 text-center",
                div {
                    class: "max-w-4xl mx-auto pt-20",

                    div {
                        class: "inline-flex items-center space-x-2 bg-card/20 backdrop-blur-sm border border-muted-gold/30 rounded-full px-4 py-2 mb-8 animate-fade-in",
                        SparklesIcon { class: "h-4 w-4 text-muted-gold" }
                        span {
                            class: "text-sm font-medium text-muted-gold",
                            "Discover Rare & Magical Literature"
                        }
                    }

                    h1 {
                        class: "heading-hero mb-6 animate-slide-up",
                        "Your Gateway to"
                        br {}
                        span { class: "text-mystical", "Magical Worlds" }
                    }

                    p {
                        class: "body-elegant text-lg md:text-xl leading-relaxed mb-8 max-w-2xl mx-auto animate-fade-in",
                        style: "animation-delay: 0.3s",
                        "Instant access to thousands of eBooks and audiobooks. Build your personal digital library with our premium subscription and start reading immediately. No waiting, no limits."
                    }

                    div {
                        class: "flex flex-col sm:flex-row items-center justify-center gap-4 mb-12 animate-fade-in",
                        style: "animation-delay: 0.6s",
                        Link {
                            to: Route::Signup {},
                            class: "inline-flex items-center bg-gradient-to-r from-muted-gold to-rich-gold hover:from-rich-gold hover:to-warm-gold text-midnight-navy font-semibold px-8 py-3 rounded-xl shadow-lg hover:shadow-xl transition-all duration-300 group",
                            "Start Reading Free"
                            ArrowRightIcon { class: "ml-2 h-5 w-5 group-hover:translate-x-1 transition-transform" }
                        }
                        Link {
                            to: Route::Pricing {},
                            class: "inline-flex items-center border border-muted-gold/50 text-muted-gold hover:bg-muted-gold/10 px-8 py-3 rounded-xl backdrop-blur-sm",
                            "View Subscription Plans"
                        }
                    }

                    div {
                        class: "flex flex-wrap items-center justify-center gap-8 md:gap-12 animate-fade-in",
                        style: "animation-delay: 0.9s",
                        for (value, label) in HERO_STATS {
                            div {
                                key: "{label}",
                                class: "text-center",
                                div { class: "heading-secondary mb-1", "{value}" }
                                p { class: "text-sm text-muted-foreground", "{label}" }
                            }
                        }
                    }
                }
            }

            div {
                class: "absolute bottom-0 left-0 right-0",
                div { class: "divider-flourish" }
            }
        }
    }
}
