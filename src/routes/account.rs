use dioxus::prelude::*;

use crate::components::icons::{
    BookOpenIcon, CreditCardIcon, EditIcon, GiftIcon, HeartIcon, LockIcon, LogOutIcon, SettingsIcon, ShieldIcon,
    ShoppingBagIcon, StarIcon, UserIcon,
};
use crate::components::{ConfirmModal, Footer};
use crate::context::use_auth;
use crate::routes::Route;
use crate::services::account::{
    parse_goal, tier_label, AccountTab, Notification, NotificationPrefs, ReaderProfile, StatIcon, BILLING_HISTORY,
    ORDER_HISTORY, PREMIUM_BENEFITS, READING_STATS, SAVED_CARDS,
};
use crate::utils::format::initials;

#[component]
pub fn Account() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let profile = use_signal(|| {
        let email = auth.user().and_then(|u| u.email);
        ReaderProfile::sample(email.as_deref())
    });
    let mut editing = use_signal(|| false);
    let mut tab = use_signal(AccountTab::default);
    let mut confirm_sign_out = use_signal(|| false);

    let is_pro = auth.is_pro();
    let info = profile.read().clone();
    let avatar_fallback = initials(&info.name);
    let tier_class = if is_pro {
        "px-2 py-0.5 rounded-full text-xs bg-muted-gold/20 text-muted-gold"
    } else {
        "px-2 py-0.5 rounded-full text-xs bg-secondary text-secondary-foreground"
    };

    rsx! {
        section {
            class: "py-16 bg-gradient-to-b from-midnight-navy/20 to-background",
            div {
                class: "container mx-auto px-4 lg:px-8",
                div {
                    class: "flex flex-col md:flex-row items-center gap-8 mb-12",
                    div {
                        class: "relative",
                        div {
                            class: "w-24 h-24 rounded-full overflow-hidden border-4 border-muted-gold/30 bg-gradient-to-br from-muted-gold/20 to-rich-gold/20 flex items-center justify-center text-2xl",
                            if info.avatar.is_empty() {
                                "{avatar_fallback}"
                            } else {
                                img { src: "{info.avatar}", alt: "{info.name}", class: "w-full h-full object-cover" }
                            }
                        }
                        button {
                            class: "absolute -bottom-2 -right-2 w-8 h-8 rounded-full border border-background bg-card flex items-center justify-center",
                            aria_label: "Edit profile",
                            onclick: move |_| {
                                tab.set(AccountTab::Profile);
                                editing.set(true);
                            },
                            EditIcon { class: "h-4 w-4" }
                        }
                    }

                    div {
                        class: "text-center md:text-left flex-1",
                        h1 { class: "heading-primary mb-2", "{info.name}" }
                        p { class: "text-muted-foreground mb-2", "{info.email}" }
                        div {
                            class: "flex flex-wrap gap-4 justify-center md:justify-start",
                            span {
                                class: "px-2 py-0.5 rounded-full border border-border/50 text-xs",
                                "Member since {info.member_since}"
                            }
                            span { class: tier_class, "{tier_label(is_pro)}" }
                        }
                    }

                    if auth.is_signed_in() {
                        button {
                            class: "inline-flex items-center px-4 py-2 rounded-md border border-red-400/50 text-red-400 hover:bg-red-400/10",
                            onclick: move |_| confirm_sign_out.set(true),
                            LogOutIcon { class: "h-4 w-4 mr-2" }
                            "Sign Out"
                        }
                    }
                }

                div {
                    class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                    for stat in READING_STATS.iter() {
                        div {
                            key: "{stat.label}",
                            class: "rounded-xl bg-card/50 border border-border/30 p-4 text-center",
                            {stat_icon(stat.icon)}
                            div { class: "text-2xl font-bold text-foreground mb-1", "{stat.value}" }
                            p { class: "text-sm text-muted-foreground", "{stat.label}" }
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
                    class: "grid w-full grid-cols-5 mb-8 bg-card/30 border border-border/30 rounded-lg p-1",
                    for t in AccountTab::ALL {
                        button {
                            key: "{t.label()}",
                            class: if tab() == t {
                                "flex items-center justify-center gap-2 py-2 rounded-md text-sm bg-card text-foreground"
                            } else {
                                "flex items-center justify-center gap-2 py-2 rounded-md text-sm text-muted-foreground hover:text-foreground"
                            },
                            onclick: move |_| tab.set(t),
                            {tab_icon(t)}
                            span { class: "hidden sm:inline", "{t.label()}" }
                        }
                    }
                }

                match tab() {
                    AccountTab::Profile => rsx! {
                        ProfileTab { profile, editing }
                    },
                    AccountTab::Subscription => rsx! {
                        SubscriptionTab { is_pro }
                    },
                    AccountTab::Payments => rsx! {
                        PaymentsTab { name: info.name.clone() }
                    },
                    AccountTab::Settings => rsx! {
                        SettingsTab {}
                    },
                    AccountTab::Premium => rsx! {
                        PremiumTab { is_pro }
                    },
                }
            }
        }

        Footer {}

        if confirm_sign_out() {
            ConfirmModal {
                title: "Sign out?".to_string(),
                message: "You will need to sign in again to access your library.".to_string(),
                confirm_text: "Sign Out".to_string(),
                destructive: true,
                on_confirm: move |_| {
                    confirm_sign_out.set(false);
                    spawn(async move {
                        auth.sign_out().await;
                        nav.push(Route::Home {});
                    });
                },
                on_cancel: move |_| confirm_sign_out.set(false),
            }
        }
    }
}

fn stat_icon(icon: StatIcon) -> Element {
    let class = "h-6 w-6 text-muted-gold mx-auto mb-2".to_string();
    match icon {
        StatIcon::Book => rsx! { BookOpenIcon { class } },
        StatIcon::Heart => rsx! { HeartIcon { class } },
        StatIcon::Star => rsx! { StarIcon { class } },
        StatIcon::Edit => rsx! { EditIcon { class } },
    }
}

fn tab_icon(tab: AccountTab) -> Element {
    let class = "h-4 w-4".to_string();
    match tab {
        AccountTab::Profile => rsx! { UserIcon { class } },
        AccountTab::Subscription => rsx! { ShoppingBagIcon { class } },
        AccountTab::Payments => rsx! { CreditCardIcon { class } },
        AccountTab::Settings => rsx! { SettingsIcon { class } },
        AccountTab::Premium => rsx! { GiftIcon { class } },
    }
}

#[component]
fn Field(
    id: &'static str,
    label: &'static str,
    value: String,
    disabled: bool,
    #[props(default)] placeholder: Option<&'static str>,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "space-y-2",
            label { r#for: id, class: "text-sm font-medium", "{label}" }
            input {
                id,
                class: "w-full px-3 py-2 rounded-md bg-background/50 border border-border/50 disabled:opacity-70",
                value: "{value}",
                disabled,
                placeholder: placeholder.unwrap_or_default(),
                oninput: move |e| on_change.call(e.value()),
            }
        }
    }
}

#[component]
fn ProfileTab(mut profile: Signal<ReaderProfile>, mut editing: Signal<bool>) -> Element {
    let info = profile.read().clone();
    let locked = !editing();
    let progress = info.goal_percent();

    rsx! {
        div {
            class: "rounded-xl bg-card/50 border border-border/30 p-6 space-y-6",
            div {
                class: "flex flex-row items-center justify-between",
                div {
                    h3 { class: "text-lg font-semibold", "Profile Information" }
                    p { class: "text-sm text-muted-foreground", "Manage your account details and preferences" }
                }
                button {
                    class: "px-4 py-2 rounded-md border border-border/50 hover:bg-card/50",
                    onclick: move |_| {
                        if editing() {
                            log::info!("Saved reader profile for {}", profile.read().email);
                            editing.set(false);
                        } else {
                            editing.set(true);
                        }
                    },
                    if editing() { "Save Changes" } else { "Edit Profile" }
                }
            }

            div {
                class: "space-y-4",
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    Field {
                        id: "name", label: "Full Name", value: info.name.clone(), disabled: locked,
                        on_change: move |v| profile.write().name = v,
                    }
                    Field {
                        id: "email", label: "Email", value: info.email.clone(), disabled: locked,
                        on_change: move |v| profile.write().email = v,
                    }
                }
                Field {
                    id: "bio", label: "Reading Bio", value: info.bio.clone(), disabled: locked,
                    placeholder: "Tell us about your reading preferences...",
                    on_change: move |v| profile.write().bio = v,
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    Field {
                        id: "location", label: "Location", value: info.location.clone(), disabled: locked,
                        on_change: move |v| profile.write().location = v,
                    }
                    Field {
                        id: "website", label: "Website", value: info.website.clone(), disabled: locked,
                        on_change: move |v| profile.write().website = v,
                    }
                }
                Field {
                    id: "genre", label: "Favorite Genre", value: info.favorite_genre.clone(), disabled: locked,
                    on_change: move |v| profile.write().favorite_genre = v,
                }

                div {
                    class: "space-y-4",
                    h4 { class: "font-semibold text-sm text-muted-gold", "Reading Preferences" }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                        div {
                            class: "space-y-2",
                            label { r#for: "readingGoal", class: "text-sm font-medium", "Annual Reading Goal" }
                            div {
                                class: "flex items-center gap-2",
                                input {
                                    id: "readingGoal",
                                    r#type: "number",
                                    min: "0",
                                    class: "w-full px-3 py-2 rounded-md bg-background/50 border border-border/50 disabled:opacity-70",
                                    value: "{info.reading_goal}",
                                    disabled: locked,
                                    oninput: move |e| {
                                        let previous = profile.read().reading_goal;
                                        profile.write().reading_goal = parse_goal(&e.value(), previous);
                                    },
                                }
                                span { class: "text-sm text-muted-foreground", "books" }
                            }
                            div {
                                class: "w-full bg-card/30 rounded-full h-2",
                                div {
                                    class: "bg-gradient-to-r from-muted-gold to-rich-gold h-2 rounded-full transition-all duration-300",
                                    style: "width: {progress}%",
                                }
                            }
                            p {
                                class: "text-xs text-muted-foreground",
                                "{info.books_this_year} of {info.reading_goal} completed"
                            }
                        }
                        Field {
                            id: "preferredFormat", label: "Preferred Format", value: info.preferred_format.clone(),
                            disabled: locked,
                            on_change: move |v| profile.write().preferred_format = v,
                        }
                    }
                }

                div {
                    class: "space-y-4",
                    h4 { class: "font-semibold text-sm text-muted-gold", "Social Links" }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                        Field {
                            id: "twitter", label: "Twitter", value: info.twitter.clone(), disabled: locked,
                            on_change: move |v| profile.write().twitter = v,
                        }
                        Field {
                            id: "instagram", label: "Instagram", value: info.instagram.clone(), disabled: locked,
                            on_change: move |v| profile.write().instagram = v,
                        }
                        Field {
                            id: "goodreads", label: "Goodreads", value: info.goodreads.clone(), disabled: locked,
                            on_change: move |v| profile.write().goodreads = v,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SubscriptionTab(is_pro: bool) -> Element {
    let (plan_name, plan_price, status) = if is_pro {
        ("Premium Monthly", "₹499/month", "Active")
    } else {
        ("Free Reader", "₹0 forever", "Free")
    };

    rsx! {
        div {
            class: "rounded-xl bg-card/50 border border-border/30 p-6 space-y-6",
            div {
                h3 { class: "text-lg font-semibold", "Subscription Status" }
                p { class: "text-sm text-muted-foreground", "Manage your premium digital library subscription" }
            }

            div {
                class: "p-4 bg-gradient-to-r from-muted-gold/10 to-rich-gold/10 rounded-lg border border-muted-gold/30",
                div {
                    class: "flex items-center justify-between mb-2",
                    h4 { class: "font-semibold text-muted-gold", "{plan_name}" }
                    span { class: "px-2 py-0.5 rounded-full text-xs bg-green-500/20 text-green-400", "{status}" }
                }
                p { class: "text-sm text-muted-foreground mb-3", "Unlimited access to our entire digital library" }
                div {
                    class: "flex items-center justify-between",
                    span { class: "text-lg font-semibold", "{plan_price}" }
                    if is_pro {
                        span { class: "text-sm text-muted-foreground", "Renews on Feb 15, 2024" }
                    } else {
                        Link {
                            to: Route::Pricing {},
                            class: "text-sm text-muted-gold underline",
                            "Upgrade"
                        }
                    }
                }
            }

            if let Some(card) = SAVED_CARDS.iter().find(|c| c.is_default) {
                div {
                    class: "p-4 bg-card/30 rounded-lg border border-border/30",
                    h4 { class: "font-semibold mb-3", "Payment Method" }
                    div {
                        class: "flex items-center justify-between",
                        div {
                            class: "flex items-center gap-3",
                            div {
                                class: "w-10 h-6 bg-gradient-to-r {card.badge_class} rounded flex items-center justify-center",
                                span { class: "text-white text-xs font-bold", "{card.brand}" }
                            }
                            div {
                                p { class: "font-medium", "•••• •••• •••• {card.last4}" }
                                p { class: "text-sm text-muted-foreground", "Expires {card.expiry}" }
                            }
                        }
                        button { class: "px-3 py-1.5 rounded-md border border-border/50 text-sm", "Update" }
                    }
                }
            }

            div {
                class: "grid grid-cols-3 gap-4",
                div {
                    class: "text-center p-4 bg-card/30 rounded-lg",
                    div { class: "text-2xl font-bold text-muted-gold", "47" }
                    p { class: "text-sm text-muted-foreground", "Books Read" }
                }
                div {
                    class: "text-center p-4 bg-card/30 rounded-lg",
                    div { class: "text-2xl font-bold text-muted-gold", "156" }
                    p { class: "text-sm text-muted-foreground", "Hours Reading" }
                }
                div {
                    class: "text-center p-4 bg-card/30 rounded-lg",
                    div { class: "text-2xl font-bold text-muted-gold", "12" }
                    p { class: "text-sm text-muted-foreground", "This Month" }
                }
            }

            div {
                class: "space-y-3",
                h4 { class: "font-semibold", "Recent Orders" }
                for order in ORDER_HISTORY.iter() {
                    div {
                        key: "{order.id}",
                        class: "flex items-center justify-between p-3 bg-card/30 rounded-lg",
                        div {
                            p { class: "font-medium", "{order.id}" }
                            p {
                                class: "text-sm text-muted-foreground",
                                "{order.date} · {order.item_count()} items · {order.titles()}"
                            }
                        }
                        div {
                            class: "text-right",
                            p { class: "font-medium", "{order.total}" }
                            span { class: "px-2 py-0.5 rounded-full text-xs {order.status_class()}", "{order.status}" }
                        }
                    }
                }
            }

            div {
                class: "space-y-3",
                h4 { class: "font-semibold", "Billing History" }
                for entry in BILLING_HISTORY.iter() {
                    div {
                        key: "{entry.date}",
                        class: "flex items-center justify-between p-3 bg-card/30 rounded-lg",
                        div {
                            p { class: "font-medium", "{entry.plan}" }
                            p { class: "text-sm text-muted-foreground", "{entry.date}" }
                        }
                        div {
                            class: "text-right",
                            p { class: "font-medium", "{entry.amount}" }
                            p { class: "text-sm text-green-500", "Paid" }
                        }
                    }
                }
            }

            div {
                class: "flex flex-wrap gap-3",
                Link {
                    to: Route::Pricing {},
                    class: "px-4 py-2 rounded-md border border-border/50 hover:bg-card/50",
                    "Change Plan"
                }
                button { class: "px-4 py-2 rounded-md border border-border/50 hover:bg-card/50", "Manage Payment" }
                if is_pro {
                    button {
                        class: "px-4 py-2 rounded-md border border-red-400/30 text-red-400 hover:bg-red-400/10",
                        "Cancel Subscription"
                    }
                }
            }
        }
    }
}

#[component]
fn PaymentsTab(name: String) -> Element {
    rsx! {
        div {
            class: "rounded-xl bg-card/50 border border-border/30 p-6 space-y-6",
            div {
                h3 { class: "text-lg font-semibold", "Payment Methods" }
                p { class: "text-sm text-muted-foreground", "Manage your payment methods and billing information" }
            }

            div {
                class: "space-y-4",
                h4 { class: "font-semibold", "Saved Payment Methods" }
                div {
                    class: "space-y-3",
                    for card in SAVED_CARDS.iter() {
                        div {
                            key: "{card.last4}",
                            class: "flex items-center justify-between p-4 bg-card/30 rounded-lg border border-border/30",
                            div {
                                class: "flex items-center gap-3",
                                div {
                                    class: "w-12 h-8 bg-gradient-to-r {card.badge_class} rounded flex items-center justify-center",
                                    span { class: "text-white text-xs font-bold", "{card.brand}" }
                                }
                                div {
                                    p { class: "font-medium", "•••• •••• •••• {card.last4}" }
                                    p {
                                        class: "text-sm text-muted-foreground",
                                        if card.is_default {
                                            "Expires {card.expiry} • Default"
                                        } else {
                                            "Expires {card.expiry}"
                                        }
                                    }
                                }
                            }
                            div {
                                class: "flex gap-2",
                                button { class: "px-3 py-1.5 rounded-md border border-border/50 text-sm", "Edit" }
                                button {
                                    class: "px-3 py-1.5 rounded-md border border-red-400/30 text-red-400 hover:bg-red-400/10 text-sm",
                                    "Remove"
                                }
                            }
                        }
                    }
                }
                button {
                    class: "w-full inline-flex items-center justify-center px-4 py-2 rounded-md border border-border/50 hover:bg-card/50",
                    CreditCardIcon { class: "h-4 w-4 mr-2" }
                    "Add New Payment Method"
                }
            }

            div {
                class: "space-y-4",
                h4 { class: "font-semibold", "Billing Address" }
                div {
                    class: "p-4 bg-card/30 rounded-lg border border-border/30 flex items-start justify-between",
                    div {
                        p { class: "font-medium", "{name}" }
                        p { class: "text-sm text-muted-foreground", "123 Bookworm Lane" }
                        p { class: "text-sm text-muted-foreground", "Mumbai, Maharashtra 400001" }
                        p { class: "text-sm text-muted-foreground", "India" }
                    }
                    button { class: "px-3 py-1.5 rounded-md border border-border/50 text-sm", "Edit" }
                }
            }

            div {
                class: "space-y-4",
                h4 { class: "font-semibold", "Payment Security" }
                div {
                    class: "space-y-3",
                    div {
                        class: "flex items-center justify-between p-3 bg-green-500/10 rounded-lg border border-green-500/20",
                        div {
                            class: "flex items-center gap-2",
                            ShieldIcon { class: "h-4 w-4 text-green-500" }
                            span { class: "text-sm text-green-400", "SSL Encryption" }
                        }
                        span { class: "px-2 py-0.5 rounded-full text-xs bg-green-500/20 text-green-400", "Active" }
                    }
                    div {
                        class: "flex items-center justify-between p-3 bg-green-500/10 rounded-lg border border-green-500/20",
                        div {
                            class: "flex items-center gap-2",
                            LockIcon { class: "h-4 w-4 text-green-500" }
                            span { class: "text-sm text-green-400", "PCI DSS Compliant" }
                        }
                        span { class: "px-2 py-0.5 rounded-full text-xs bg-green-500/20 text-green-400", "Active" }
                    }
                }
            }
        }
    }
}

#[component]
fn SettingsTab() -> Element {
    let mut prefs = use_signal(NotificationPrefs::default);

    rsx! {
        div {
            class: "space-y-6",
            div {
                class: "rounded-xl bg-card/50 border border-border/30 p-6 space-y-4",
                div {
                    h3 { class: "text-lg font-semibold", "Notification Preferences" }
                    p { class: "text-sm text-muted-foreground", "Choose what updates you'd like to receive" }
                }
                for kind in Notification::ALL {
                    div {
                        key: "{kind.title()}",
                        class: "flex items-center justify-between",
                        div {
                            class: "space-y-0.5",
                            p { class: "text-sm font-medium", "{kind.title()}" }
                            p { class: "text-xs text-muted-foreground", "{kind.description()}" }
                        }
                        Switch {
                            checked: prefs.read().get(kind),
                            label: kind.title(),
                            on_toggle: move |_| prefs.write().toggle(kind),
                        }
                    }
                }
            }

            div {
                class: "rounded-xl bg-card/50 border border-border/30 p-6 space-y-4",
                div {
                    h3 { class: "text-lg font-semibold", "Account Security" }
                    p { class: "text-sm text-muted-foreground", "Manage your password and security settings" }
                }
                button {
                    class: "w-full inline-flex items-center justify-start px-4 py-2 rounded-md border border-border/50 hover:bg-card/50",
                    LockIcon { class: "h-4 w-4 mr-2" }
                    "Change Password"
                }
                button {
                    class: "w-full inline-flex items-center justify-start px-4 py-2 rounded-md border border-border/50 hover:bg-card/50",
                    CreditCardIcon { class: "h-4 w-4 mr-2" }
                    "Manage Payment Methods"
                }
            }
        }
    }
}

#[component]
fn Switch(checked: bool, label: &'static str, on_toggle: EventHandler<()>) -> Element {
    let track = if checked { "bg-muted-gold" } else { "bg-input" };
    let knob = if checked { "translate-x-5" } else { "translate-x-0" };

    rsx! {
        button {
            r#type: "button",
            role: "switch",
            aria_checked: "{checked}",
            aria_label: label,
            class: "relative inline-flex h-6 w-11 shrink-0 items-center rounded-full transition-colors {track}",
            onclick: move |_| on_toggle.call(()),
            span { class: "inline-block h-5 w-5 rounded-full bg-background shadow transition-transform {knob}" }
        }
    }
}

#[component]
fn PremiumTab(is_pro: bool) -> Element {
    rsx! {
        div {
            class: "rounded-xl bg-gradient-to-br from-muted-gold/10 to-rich-gold/10 border border-muted-gold/30 p-6 space-y-4",
            div {
                h3 {
                    class: "flex items-center gap-2 text-lg font-semibold",
                    GiftIcon { class: "h-5 w-5 text-muted-gold" }
                    "Premium Membership"
                }
                p {
                    class: "text-sm text-muted-foreground",
                    if is_pro { "You're currently on the Premium plan" } else { "You're currently on the Free plan" }
                }
            }

            div {
                class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                div {
                    class: "space-y-2",
                    h4 { class: "font-medium", "Current Plan" }
                    p { class: "text-sm text-muted-foreground", "{tier_label(is_pro)}" }
                }
                if is_pro {
                    div {
                        class: "space-y-2",
                        h4 { class: "font-medium", "Next Billing" }
                        p { class: "text-sm text-muted-foreground", "February 15, 2024" }
                    }
                }
            }

            div {
                class: "space-y-3",
                h4 { class: "font-medium", "Premium Benefits" }
                ul {
                    class: "space-y-2 text-sm text-muted-foreground",
                    for benefit in PREMIUM_BENEFITS {
                        li { key: "{benefit}", "• {benefit}" }
                    }
                }
            }

            div {
                class: "flex gap-3 pt-4",
                if is_pro {
                    button { class: "px-4 py-2 rounded-md border border-border/50 hover:bg-card/50", "Manage Subscription" }
                    button { class: "px-4 py-2 rounded-md border border-border/50 hover:bg-card/50", "View Invoice History" }
                } else {
                    Link {
                        to: Route::Pricing {},
                        class: "px-4 py-2 rounded-md bg-gradient-to-r from-muted-gold to-rich-gold text-midnight-navy",
                        "Go Premium"
                    }
                }
            }
        }
    }
}
