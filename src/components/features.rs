use dioxus::prelude::*;

use crate::components::icons::{BookOpenIcon, DownloadIcon, HeadphonesIcon, RefreshIcon, ShieldIcon, StarIcon};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FeatureIcon {
    BookOpen,
    Download,
    Headphones,
    Refresh,
    Star,
    Shield,
}

struct Feature {
    icon: FeatureIcon,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        icon: FeatureIcon::BookOpen,
        title: "Instant Reading",
        description: "Start reading immediately with our instant access technology. No downloads, no waiting.",
    },
    Feature {
        icon: FeatureIcon::Download,
        title: "Offline Library",
        description: "Download books to your personal library and read anywhere, even without internet.",
    },
    Feature {
        icon: FeatureIcon::Headphones,
        title: "Audiobooks Included",
        description: "Switch between reading and listening seamlessly with our premium audiobook collection.",
    },
    Feature {
        icon: FeatureIcon::Refresh,
        title: "Sync Across Devices",
        description: "Your reading progress, bookmarks, and library sync perfectly across all your devices.",
    },
    Feature {
        icon: FeatureIcon::Star,
        title: "Personalized Recommendations",
        description: "Discover your next favorite book with recommendations based on your taste.",
    },
    Feature {
        icon: FeatureIcon::Shield,
        title: "Premium Subscription",
        description: "Unlimited access to our entire catalog with flexible monthly and yearly plans.",
    },
];

#[component]
pub fn Features() -> Element {
    rsx! {
        section {
            class: "py-24 bg-gradient-to-b from-background to-card/30",
            div {
                class: "container mx-auto px-4 lg:px-8",
                div {
                    class: "text-center mb-16",
                    h2 {
                        class: "heading-hero mb-4",
                        "Why Choose Our"
                        br {}
                        span { class: "gradient-text-mystical", "Digital Reading Platform" }
                    }
                    p {
                        class: "body-elegant text-lg max-w-2xl mx-auto",
                        "Experience the future of reading with instant access, seamless synchronization, and a library that grows with you."
                    }
                }

                div {
                    class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
                    for feature in FEATURES.iter() {
                        div {
                            key: "{feature.title}",
                            class: "card-royal p-6 bg-card/40 backdrop-blur-sm hover:bg-card/60 transition-all duration-300 group",
                            div {
                                class: "mb-4 group-hover:scale-110 transition-transform duration-300",
                                {render_icon(feature.icon)}
                            }
                            h3 {
                                class: "font-playfair text-xl font-semibold text-foreground mb-3 group-hover:text-muted-gold transition-colors",
                                "{feature.title}"
                            }
                            p { class: "body-elegant", "{feature.description}" }
                        }
                    }
                }
            }
        }
    }
}

fn render_icon(icon: FeatureIcon) -> Element {
    let class = "h-8 w-8 text-muted-gold".to_string();
    match icon {
        FeatureIcon::BookOpen => rsx! { BookOpenIcon { class } },
        FeatureIcon::Download => rsx! { DownloadIcon { class } },
        FeatureIcon::Headphones => rsx! { HeadphonesIcon { class } },
        FeatureIcon::Refresh => rsx! { RefreshIcon { class } },
        FeatureIcon::Star => rsx! { StarIcon { class } },
        FeatureIcon::Shield => rsx! { ShieldIcon { class } },
    }
}
