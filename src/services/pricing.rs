//! Subscription plans and the checkout form model
//!
//! There is no payment processor behind this; a validated submission is
//! what the pricing page turns into an upgrade.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanIcon {
    Book,
    Crown,
    Sparkles,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub limitations: &'static [&'static str],
    pub popular: bool,
    pub icon: PlanIcon,
    /// Gradient behind the plan icon
    pub accent_class: &'static str,
}

impl Plan {
    pub fn is_free(&self) -> bool {
        self.price == "₹0"
    }

    pub fn cta_label(&self) -> &'static str {
        if self.is_free() {
            "Get Started Free"
        } else {
            "Choose Plan"
        }
    }
}

pub static PLANS: [Plan; 3] = [
    Plan {
        id: "free",
        name: "Free Reader",
        price: "₹0",
        period: "forever",
        description: "Perfect for casual readers",
        features: &[
            "Access to 100+ public books",
            "Basic reading progress tracking",
            "Create personal wishlist",
            "Standard customer support",
        ],
        limitations: &[
            "Limited to public domain books",
            "Basic reading analytics",
            "No offline access",
        ],
        popular: false,
        icon: PlanIcon::Book,
        accent_class: "from-gray-500/20 to-gray-600/20",
    },
    Plan {
        id: "premium",
        name: "Premium Reader",
        price: "₹799",
        period: "per month",
        description: "For serious book lovers",
        features: &[
            "Unlimited access to entire library",
            "Premium audiobook collection",
            "Offline reading on all devices",
            "Advanced reading analytics",
            "Priority customer support",
            "Ad-free reading experience",
            "Early access to new releases",
        ],
        limitations: &[],
        popular: true,
        icon: PlanIcon::Crown,
        accent_class: "from-muted-gold/20 to-rich-gold/20",
    },
    Plan {
        id: "family",
        name: "Family Plan",
        price: "₹1,499",
        period: "per month",
        description: "Share the magic with your family",
        features: &[
            "Everything in Premium",
            "Up to 6 family members",
            "Individual reading profiles",
            "Family reading challenges",
            "Parental controls",
            "Shared family library",
            "Family reading statistics",
        ],
        limitations: &[],
        popular: false,
        icon: PlanIcon::Sparkles,
        accent_class: "from-purple-500/20 to-pink-500/20",
    },
];

pub fn find_plan(id: &str) -> Option<&'static Plan> {
    PLANS.iter().find(|p| p.id == id)
}

/// Plan preselected before the reader picks one
pub fn default_plan() -> &'static Plan {
    &PLANS[1]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    Card,
    PayPal,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::Card, PaymentMethod::PayPal];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::PayPal => "paypal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Card",
            PaymentMethod::PayPal => "PayPal",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardDetails {
    pub number: String,
    pub expiry: String,
    pub cvv: String,
    pub name: String,
}

impl CardDetails {
    /// Shape checks only; nothing is sent anywhere
    pub fn validate(&self) -> Result<(), String> {
        let digits: String = self.number.chars().filter(|c| !c.is_whitespace()).collect();
        if digits.len() < 12 || digits.len() > 19 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err("Enter a valid card number".to_string());
        }

        if !valid_expiry(self.expiry.trim()) {
            return Err("Expiry must be in MM/YY format".to_string());
        }

        let cvv = self.cvv.trim();
        if !(3..=4).contains(&cvv.len()) || !cvv.chars().all(|c| c.is_ascii_digit()) {
            return Err("CVV must be 3 or 4 digits".to_string());
        }

        if self.name.trim().is_empty() {
            return Err("Cardholder name is required".to_string());
        }
        Ok(())
    }
}

fn valid_expiry(expiry: &str) -> bool {
    let Some((month, year)) = expiry.split_once('/') else {
        return false;
    };
    let month_ok = month.len() == 2 && matches!(month.parse::<u8>(), Ok(1..=12));
    let year_ok = year.len() == 2 && year.chars().all(|c| c.is_ascii_digit());
    month_ok && year_ok
}

/// Card details are only required for card checkout
pub fn validate_checkout(method: PaymentMethod, card: &CardDetails) -> Result<(), String> {
    match method {
        PaymentMethod::Card => card.validate(),
        PaymentMethod::PayPal => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> CardDetails {
        CardDetails {
            number: "4111 1111 1111 1111".to_string(),
            expiry: "08/27".to_string(),
            cvv: "123".to_string(),
            name: "Asha Reader".to_string(),
        }
    }

    #[test]
    fn test_plans() {
        assert_eq!(PLANS.len(), 3);
        assert!(PLANS[0].is_free());
        assert_eq!(PLANS[0].cta_label(), "Get Started Free");
        assert_eq!(PLANS[1].cta_label(), "Choose Plan");
        assert_eq!(PLANS.iter().filter(|p| p.popular).count(), 1);
        assert_eq!(default_plan().name, "Premium Reader");
        assert_eq!(find_plan("family").map(|p| p.price), Some("₹1,499"));
        assert!(find_plan("enterprise").is_none());
    }

    #[test]
    fn test_valid_card() {
        assert_eq!(card().validate(), Ok(()));
    }

    #[test]
    fn test_invalid_card_fields() {
        let mut c = card();
        c.number = "4111-1111".to_string();
        assert_eq!(c.validate(), Err("Enter a valid card number".to_string()));

        let mut c = card();
        c.expiry = "13/27".to_string();
        assert_eq!(c.validate(), Err("Expiry must be in MM/YY format".to_string()));

        let mut c = card();
        c.expiry = "0827".to_string();
        assert!(c.validate().is_err());

        let mut c = card();
        c.cvv = "12".to_string();
        assert_eq!(c.validate(), Err("CVV must be 3 or 4 digits".to_string()));

        let mut c = card();
        c.name = "   ".to_string();
        assert_eq!(c.validate(), Err("Cardholder name is required".to_string()));
    }

    #[test]
    fn test_paypal_skips_card_checks() {
        assert!(validate_checkout(PaymentMethod::PayPal, &CardDetails::default()).is_ok());
        assert!(validate_checkout(PaymentMethod::Card, &CardDetails::default()).is_err());
        assert_eq!(PaymentMethod::default(), PaymentMethod::Card);
        assert_eq!(PaymentMethod::PayPal.as_str(), "paypal");
    }
}
