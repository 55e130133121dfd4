//! Reader account showcase data and the small bits of logic the account page needs

#[derive(Clone, Debug, PartialEq)]
pub struct ReaderProfile {
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub member_since: String,
    pub bio: String,
    pub location: String,
    pub website: String,
    pub favorite_genre: String,
    pub preferred_format: String,
    pub reading_goal: u32,
    pub books_this_year: u32,
    pub twitter: String,
    pub instagram: String,
    pub goodreads: String,
}

impl ReaderProfile {
    /// Sample reader; the email is replaced by the signed-in account's when known
    pub fn sample(email: Option<&str>) -> Self {
        Self {
            name: "Arjun Sharma".to_string(),
            email: email.unwrap_or("arjun.sharma@example.com").to_string(),
            avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face"
                .to_string(),
            member_since: "January 2024".to_string(),
            bio: "Passionate reader exploring magical realms and dark academia. Always on the hunt for the next great story."
                .to_string(),
            location: "Mumbai, India".to_string(),
            website: "https://arjunsharma.dev".to_string(),
            favorite_genre: "Dark Fantasy".to_string(),
            preferred_format: "E-book".to_string(),
            reading_goal: 50,
            books_this_year: 47,
            twitter: "@arjunsharma".to_string(),
            instagram: "@arjun.reads".to_string(),
            goodreads: "arjun-sharma".to_string(),
        }
    }

    /// Annual goal progress, 0..=100
    pub fn goal_percent(&self) -> u32 {
        goal_percent(self.books_this_year, self.reading_goal)
    }
}

pub fn goal_percent(done: u32, goal: u32) -> u32 {
    if goal == 0 {
        return 0;
    }
    ((u64::from(done) * 100 / u64::from(goal)).min(100)) as u32
}

/// Goal input; anything unparseable keeps the previous value
pub fn parse_goal(input: &str, previous: u32) -> u32 {
    input.trim().parse().unwrap_or(previous)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatIcon {
    Book,
    Heart,
    Star,
    Edit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadingStat {
    pub label: &'static str,
    pub value: u32,
    pub icon: StatIcon,
}

pub static READING_STATS: [ReadingStat; 4] = [
    ReadingStat { label: "Books Read", value: 47, icon: StatIcon::Book },
    ReadingStat { label: "Wishlist Items", value: 12, icon: StatIcon::Heart },
    ReadingStat { label: "Day Streak", value: 15, icon: StatIcon::Star },
    ReadingStat { label: "Reviews Written", value: 23, icon: StatIcon::Edit },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Order {
    pub id: &'static str,
    pub date: &'static str,
    pub status: &'static str,
    pub total: &'static str,
    pub books: &'static [&'static str],
}

pub static ORDER_HISTORY: [Order; 3] = [
    Order {
        id: "ORD-2024-001",
        date: "2024-01-20",
        status: "Delivered",
        total: "₹1,247",
        books: &["The Midnight Grimoire", "Crystal Prophecy", "Shadow Realm"],
    },
    Order {
        id: "ORD-2024-002",
        date: "2024-01-15",
        status: "Processing",
        total: "₹899",
        books: &["Alchemist's Daughter", "Ember Court Chronicles"],
    },
    Order {
        id: "ORD-2024-003",
        date: "2024-01-10",
        status: "Delivered",
        total: "₹649",
        books: &["Velvet Library Secrets", "Philosopher's Codex"],
    },
];

impl Order {
    pub fn item_count(&self) -> usize {
        self.books.len()
    }

    pub fn titles(&self) -> String {
        self.books.join(", ")
    }

    pub fn status_class(&self) -> &'static str {
        match self.status {
            "Delivered" => "bg-green-500/20 text-green-400",
            _ => "bg-muted-gold/20 text-muted-gold",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SavedCard {
    pub brand: &'static str,
    pub last4: &'static str,
    pub expiry: &'static str,
    pub is_default: bool,
    pub badge_class: &'static str,
}

pub static SAVED_CARDS: [SavedCard; 2] = [
    SavedCard {
        brand: "VISA",
        last4: "4242",
        expiry: "12/25",
        is_default: true,
        badge_class: "from-blue-500 to-purple-600",
    },
    SavedCard {
        brand: "MC",
        last4: "8888",
        expiry: "08/26",
        is_default: false,
        badge_class: "from-orange-500 to-red-600",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BillingEntry {
    pub plan: &'static str,
    pub date: &'static str,
    pub amount: &'static str,
}

pub static BILLING_HISTORY: [BillingEntry; 2] = [
    BillingEntry { plan: "Premium Monthly", date: "January 15, 2024", amount: "₹499" },
    BillingEntry { plan: "Premium Monthly", date: "December 15, 2023", amount: "₹499" },
];

pub const PREMIUM_BENEFITS: [&str; 6] = [
    "Unlimited access to entire digital library",
    "Premium audiobook collection included",
    "Offline reading on all devices",
    "Early access to new releases",
    "Priority customer support",
    "Ad-free reading experience",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AccountTab {
    #[default]
    Profile,
    Subscription,
    Payments,
    Settings,
    Premium,
}

impl AccountTab {
    pub const ALL: [AccountTab; 5] = [
        AccountTab::Profile,
        AccountTab::Subscription,
        AccountTab::Payments,
        AccountTab::Settings,
        AccountTab::Premium,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AccountTab::Profile => "Profile",
            AccountTab::Subscription => "Subscription",
            AccountTab::Payments => "Payments",
            AccountTab::Settings => "Settings",
            AccountTab::Premium => "Premium",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notification {
    EmailUpdates,
    NewReleases,
    OrderUpdates,
    Recommendations,
}

impl Notification {
    pub const ALL: [Notification; 4] = [
        Notification::EmailUpdates,
        Notification::NewReleases,
        Notification::OrderUpdates,
        Notification::Recommendations,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Notification::EmailUpdates => "Email Updates",
            Notification::NewReleases => "New Book Releases",
            Notification::OrderUpdates => "Order Status Updates",
            Notification::Recommendations => "Personalized Recommendations",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Notification::EmailUpdates => "Receive important account updates via email",
            Notification::NewReleases => "Get notified about new books in your favorite genres",
            Notification::OrderUpdates => "Track your order status and delivery updates",
            Notification::Recommendations => "Receive book suggestions based on your reading history",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationPrefs {
    pub email_updates: bool,
    pub new_releases: bool,
    pub order_updates: bool,
    pub recommendations: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email_updates: true,
            new_releases: true,
            order_updates: true,
            recommendations: false,
        }
    }
}

impl NotificationPrefs {
    pub fn get(&self, kind: Notification) -> bool {
        match kind {
            Notification::EmailUpdates => self.email_updates,
            Notification::NewReleases => self.new_releases,
            Notification::OrderUpdates => self.order_updates,
            Notification::Recommendations => self.recommendations,
        }
    }

    pub fn set(&mut self, kind: Notification, enabled: bool) {
        let slot = match kind {
            Notification::EmailUpdates => &mut self.email_updates,
            Notification::NewReleases => &mut self.new_releases,
            Notification::OrderUpdates => &mut self.order_updates,
            Notification::Recommendations => &mut self.recommendations,
        };
        *slot = enabled;
    }

    pub fn toggle(&mut self, kind: Notification) {
        self.set(kind, !self.get(kind));
    }
}

/// Badge text for the account header
pub fn tier_label(is_pro: bool) -> &'static str {
    if is_pro {
        "Premium Reader"
    } else {
        "Free Reader"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_profile_uses_account_email() {
        let profile = ReaderProfile::sample(Some("demo@bookbuddy.test"));
        assert_eq!(profile.email, "demo@bookbuddy.test");
        assert_eq!(ReaderProfile::sample(None).email, "arjun.sharma@example.com");
        assert_eq!(profile.goal_percent(), 94);
    }

    #[test]
    fn test_goal_percent_bounds() {
        assert_eq!(goal_percent(0, 0), 0);
        assert_eq!(goal_percent(10, 0), 0);
        assert_eq!(goal_percent(25, 50), 50);
        assert_eq!(goal_percent(80, 50), 100);
    }

    #[test]
    fn test_parse_goal() {
        assert_eq!(parse_goal("60", 50), 60);
        assert_eq!(parse_goal(" 12 ", 50), 12);
        assert_eq!(parse_goal("", 50), 50);
        assert_eq!(parse_goal("lots", 50), 50);
    }

    #[test]
    fn test_notification_toggle() {
        let mut prefs = NotificationPrefs::default();
        assert!(!prefs.get(Notification::Recommendations));

        prefs.toggle(Notification::Recommendations);
        assert!(prefs.recommendations);

        prefs.toggle(Notification::EmailUpdates);
        assert!(!prefs.email_updates);
        assert!(prefs.new_releases);
    }

    #[test]
    fn test_orders_and_tiers() {
        assert_eq!(ORDER_HISTORY[0].item_count(), 3);
        assert_eq!(ORDER_HISTORY[1].titles(), "Alchemist's Daughter, Ember Court Chronicles");
        assert!(ORDER_HISTORY[1].status_class().contains("muted-gold"));
        assert_eq!(tier_label(true), "Premium Reader");
        assert_eq!(tier_label(false), "Free Reader");
        assert_eq!(AccountTab::default(), AccountTab::Profile);
    }
}
