use dioxus::prelude::*;

use crate::components::icons::{
    BookOpenIcon, CheckIcon, ClockIcon, CreditCardIcon, CrownIcon, DownloadIcon, HeadphonesIcon, LockIcon,
    ShieldIcon, SparklesIcon, StarIcon, ZapIcon,
};
use crate::context::use_auth;
use crate::routes::Route;
use crate::services::pricing::{default_plan, validate_checkout, CardDetails, PaymentMethod, Plan, PlanIcon, PLANS};
use crate::utils::FormState;

#[component]
pub fn Pricing() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut selected_plan = use_signal(default_plan);
    let mut payment_method = use_signal(PaymentMethod::default);
    let mut show_payment = use_signal(|| false);
    let mut card = use_signal(CardDetails::default);
    let mut state = use_signal(|| FormState::Idle);

    let mut choose_plan = move |plan: &'static Plan| {
        selected_plan.set(plan);
        state.set(FormState::Idle);
        show_payment.set(true);
    };

    let submit_payment = move |_: MouseEvent| {
        let plan = selected_plan();
        if let Err(e) = validate_checkout(payment_method(), &card.read()) {
            state.set(FormState::Failed(e));
            return;
        }

        state.set(FormState::Submitting);
        spawn(async move {
            if !auth.is_mock() {
                log::info!("Processing {} payment for {}", payment_method().as_str(), plan.name);
            }
            match auth.upgrade_to_pro().await {
                Ok(()) if auth.is_mock() => {
                    state.set(FormState::Done);
                    show_payment.set(false);
                    nav.push(Route::PricingSuccess {});
                }
                Ok(()) => {
                    state.set(FormState::Failed(
                        "Online payments are not available yet. You have not been charged.".to_string(),
                    ));
                }
                Err(e) => state.set(FormState::Failed(e)),
            }
        });
    };

    let plan = selected_plan();

    rsx! {
        section {
            class: "py-16 bg-gradient-to-b from-midnight-navy/20 to-background",
            div {
                class: "container mx-auto px-4 lg:px-8 text-center",
                h1 { class: "heading-hero mb-4", "Choose Your Reading Journey" }
                p {
                    class: "body-elegant max-w-2xl mx-auto mb-8",
                    "Unlock unlimited access to magical worlds with our premium digital library. Choose the plan that fits your reading lifestyle."
                }
                div {
                    class: "flex items-center justify-center gap-4 mb-8",
                    span {
                        class: "inline-flex items-center px-2 py-0.5 rounded-full border border-border/50 text-xs",
                        ShieldIcon { class: "h-3 w-3 mr-1" }
                        "Secure Payment"
                    }
                    span {
                        class: "inline-flex items-center px-2 py-0.5 rounded-full border border-border/50 text-xs",
                        LockIcon { class: "h-3 w-3 mr-1" }
                        "SSL Encrypted"
                    }
                    span {
                        class: "inline-flex items-center px-2 py-0.5 rounded-full border border-border/50 text-xs",
                        StarIcon { class: "h-3 w-3 mr-1" }
                        "30-Day Money Back"
                    }
                }
            }
        }

        section {
            class: "py-16",
            div {
                class: "container mx-auto px-4 lg:px-8",
                div {
                    class: "grid lg:grid-cols-3 gap-8 max-w-6xl mx-auto",
                    for p in PLANS.iter() {
                        PlanCard {
                            key: "{p.id}",
                            plan: p,
                            on_select: move |plan| choose_plan(plan),
                        }
                    }
                }
            }
        }

        if show_payment() {
            div {
                class: "fixed inset-0 bg-black/50 backdrop-blur-sm z-50 flex items-center justify-center p-4",
                div {
                    class: "w-full max-w-md bg-card/95 backdrop-blur-sm border border-border/50 rounded-xl p-6 space-y-6",
                    role: "dialog",
                    aria_modal: "true",

                    div {
                        h2 {
                            class: "flex items-center gap-2 text-xl font-semibold",
                            LockIcon { class: "h-5 w-5 text-muted-gold" }
                            "Secure Payment"
                        }
                        p { class: "text-sm text-muted-foreground", "Complete your {plan.name} subscription" }
                    }

                    div {
                        class: "p-4 bg-gradient-to-r from-muted-gold/10 to-rich-gold/10 rounded-lg border border-muted-gold/30",
                        div {
                            class: "flex items-center justify-between mb-2",
                            h4 { class: "font-semibold", "{plan.name}" }
                            span { class: "text-lg font-bold", "{plan.price}" }
                        }
                        p { class: "text-sm text-muted-foreground", "{plan.period}" }
                    }

                    div {
                        class: "space-y-4",
                        label { class: "text-sm font-medium", "Payment Method" }
                        div {
                            class: "grid w-full grid-cols-2 gap-1 p-1 rounded-lg bg-background/50",
                            for method in PaymentMethod::ALL {
                                button {
                                    key: "{method.as_str()}",
                                    class: if payment_method() == method {
                                        "py-1.5 rounded-md text-sm bg-card text-foreground"
                                    } else {
                                        "py-1.5 rounded-md text-sm text-muted-foreground"
                                    },
                                    onclick: move |_| payment_method.set(method),
                                    "{method.label()}"
                                }
                            }
                        }

                        match payment_method() {
                            PaymentMethod::Card => rsx! {
                                div {
                                    class: "space-y-3",
                                    div {
                                        label { r#for: "cardNumber", class: "text-sm", "Card Number" }
                                        input {
                                            id: "cardNumber",
                                            class: "w-full px-3 py-2 rounded-md bg-background/50 border border-border/50",
                                            placeholder: "1234 5678 9012 3456",
                                            value: "{card.read().number}",
                                            oninput: move |e| card.write().number = e.value(),
                                        }
                                    }
                                    div {
                                        class: "grid grid-cols-2 gap-3",
                                        div {
                                            label { r#for: "expiry", class: "text-sm", "Expiry Date" }
                                            input {
                                                id: "expiry",
                                                class: "w-full px-3 py-2 rounded-md bg-background/50 border border-border/50",
                                                placeholder: "MM/YY",
                                                value: "{card.read().expiry}",
                                                oninput: move |e| card.write().expiry = e.value(),
                                            }
                                        }
                                        div {
                                            label { r#for: "cvv", class: "text-sm", "CVV" }
                                            input {
                                                id: "cvv",
                                                class: "w-full px-3 py-2 rounded-md bg-background/50 border border-border/50",
                                                placeholder: "123",
                                                value: "{card.read().cvv}",
                                                oninput: move |e| card.write().cvv = e.value(),
                                            }
                                        }
                                    }
                                    div {
                                        label { r#for: "cardName", class: "text-sm", "Cardholder Name" }
                                        input {
                                            id: "cardName",
                                            class: "w-full px-3 py-2 rounded-md bg-background/50 border border-border/50",
                                            placeholder: "John Doe",
                                            value: "{card.read().name}",
                                            oninput: move |e| card.write().name = e.value(),
                                        }
                                    }
                                }
                            },
                            PaymentMethod::PayPal => rsx! {
                                div {
                                    class: "text-center py-8 space-y-4",
                                    CreditCardIcon { class: "h-12 w-12 mx-auto text-muted-gold" }
                                    p {
                                        class: "text-sm text-muted-foreground",
                                        "You'll be redirected to PayPal to complete your payment securely."
                                    }
                                }
                            },
                        }
                    }

                    div {
                        class: "flex items-start gap-2 p-3 bg-green-500/10 rounded-lg border border-green-500/20",
                        ShieldIcon { class: "h-4 w-4 text-green-500 mt-0.5 flex-shrink-0" }
                        div {
                            class: "text-xs text-green-400",
                            p { class: "font-medium", "Secure Payment" }
                            p { "Your payment information is encrypted and secure. We never store your card details." }
                        }
                    }

                    if let Some(error) = state.read().error() {
                        p { class: "text-sm text-red-400", "{error}" }
                    }

                    div {
                        class: "flex gap-3",
                        button {
                            class: "flex-1 px-4 py-2 rounded-md border border-border/50 hover:bg-card/50",
                            onclick: move |_| {
                                show_payment.set(false);
                                state.set(FormState::Idle);
                            },
                            "Cancel"
                        }
                        button {
                            class: "flex-1 inline-flex items-center justify-center px-4 py-2 rounded-md bg-gradient-to-r from-muted-gold to-rich-gold text-midnight-navy hover:from-muted-gold/90 hover:to-rich-gold/90 disabled:opacity-50",
                            disabled: state.read().is_submitting(),
                            onclick: submit_payment,
                            ZapIcon { class: "h-4 w-4 mr-2" }
                            if state.read().is_submitting() {
                                "Processing..."
                            } else {
                                "Pay {plan.price}"
                            }
                        }
                    }
                }
            }
        }

        section {
            class: "py-16 bg-gradient-to-t from-midnight-navy/20 to-background",
            div {
                class: "container mx-auto px-4 lg:px-8",
                h2 { class: "heading-primary text-center mb-12", "Why Choose BookBuddy Premium?" }
                div {
                    class: "grid md:grid-cols-3 gap-8 max-w-4xl mx-auto",
                    PerkTile {
                        title: "Premium Audiobooks",
                        description: "Access our exclusive collection of professionally narrated audiobooks.",
                        HeadphonesIcon { class: "h-8 w-8 text-muted-gold" }
                    }
                    PerkTile {
                        title: "Offline Reading",
                        description: "Download books and read anywhere, even without internet connection.",
                        DownloadIcon { class: "h-8 w-8 text-muted-gold" }
                    }
                    PerkTile {
                        title: "Early Access",
                        description: "Be the first to read new releases and exclusive content.",
                        ClockIcon { class: "h-8 w-8 text-muted-gold" }
                    }
                }
            }
        }
    }
}

#[component]
fn PlanCard(plan: &'static Plan, on_select: EventHandler<&'static Plan>) -> Element {
    let card_class = if plan.popular {
        "relative rounded-xl p-6 bg-card/50 border border-border/30 hover:border-border/50 transition-all duration-300 ring-2 ring-muted-gold/50 scale-105"
    } else {
        "relative rounded-xl p-6 bg-card/50 border border-border/30 hover:border-border/50 transition-all duration-300"
    };
    let cta_class = if plan.popular {
        "w-full py-2 rounded-md bg-gradient-to-r from-muted-gold to-rich-gold text-midnight-navy hover:from-muted-gold/90 hover:to-rich-gold/90"
    } else {
        "w-full py-2 rounded-md bg-primary text-primary-foreground hover:bg-primary/90"
    };

    rsx! {
        div {
            class: card_class,
            if plan.popular {
                div {
                    class: "absolute -top-4 left-1/2 -translate-x-1/2",
                    span {
                        class: "inline-flex items-center px-3 py-1 rounded-full text-xs bg-gradient-to-r from-muted-gold to-rich-gold text-midnight-navy font-semibold",
                        CrownIcon { class: "h-3 w-3 mr-1" }
                        "Most Popular"
                    }
                }
            }

            div {
                class: "text-center pb-6",
                div {
                    class: "w-16 h-16 mx-auto mb-4 rounded-full bg-gradient-to-br {plan.accent_class} flex items-center justify-center",
                    match plan.icon {
                        PlanIcon::Book => rsx! { BookOpenIcon { class: "h-8 w-8 text-muted-gold" } },
                        PlanIcon::Crown => rsx! { CrownIcon { class: "h-8 w-8 text-muted-gold" } },
                        PlanIcon::Sparkles => rsx! { SparklesIcon { class: "h-8 w-8 text-muted-gold" } },
                    }
                }
                h3 { class: "text-2xl font-bold", "{plan.name}" }
                p { class: "text-base text-muted-foreground", "{plan.description}" }
                div {
                    class: "mt-4",
                    span { class: "text-4xl font-bold text-foreground", "{plan.price}" }
                    span { class: "text-muted-foreground ml-2", "{plan.period}" }
                }
            }

            div {
                class: "space-y-6",
                div {
                    class: "space-y-3",
                    h4 { class: "font-semibold text-sm text-muted-gold", "What's included:" }
                    ul {
                        class: "space-y-2",
                        for feature in plan.features.iter() {
                            li {
                                key: "{feature}",
                                class: "flex items-start gap-2 text-sm",
                                CheckIcon { class: "h-4 w-4 text-green-500 mt-0.5 flex-shrink-0" }
                                span { "{feature}" }
                            }
                        }
                    }
                }

                if !plan.limitations.is_empty() {
                    div {
                        class: "space-y-3",
                        h4 { class: "font-semibold text-sm text-muted-foreground", "Limitations:" }
                        ul {
                            class: "space-y-2",
                            for limitation in plan.limitations.iter() {
                                li {
                                    key: "{limitation}",
                                    class: "flex items-start gap-2 text-sm text-muted-foreground",
                                    span { class: "w-4 h-4 mt-0.5 flex-shrink-0", "•" }
                                    span { "{limitation}" }
                                }
                            }
                        }
                    }
                }

                button {
                    class: cta_class,
                    onclick: move |_| on_select.call(plan),
                    "{plan.cta_label()}"
                }
            }
        }
    }
}

#[component]
fn PerkTile(title: &'static str, description: &'static str, children: Element) -> Element {
    rsx! {
        div {
            class: "text-center space-y-4",
            div {
                class: "w-16 h-16 mx-auto rounded-full bg-gradient-to-br from-muted-gold/20 to-rich-gold/20 flex items-center justify-center",
                {children}
            }
            h3 { class: "heading-secondary", "{title}" }
            p { class: "body-elegant", "{description}" }
        }
    }
}
