//! Sample catalog and the search/sort/view logic behind the book listings
//!
//! The data is static showcase content; pages filter and sort copies of it.

use chrono::NaiveDate;
use std::cmp::Ordering;

use crate::utils::format::pluralize;

#[derive(Clone, Debug, PartialEq)]
pub struct Book {
    pub id: u32,
    pub title: &'static str,
    pub author: &'static str,
    pub cover: &'static str,
    pub rating: f32,
    /// Display price, e.g. "₹399" or "₹199/month"
    pub price: &'static str,
    pub original_price: Option<&'static str>,
    pub genre: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub available: bool,
    pub has_audio: bool,
    pub wishlisted: bool,
    /// ISO date (YYYY-MM-DD) the book was saved to the wishlist
    pub added_date: Option<&'static str>,
}

const BLANK: Book = Book {
    id: 0,
    title: "",
    author: "",
    cover: "",
    rating: 0.0,
    price: "",
    original_price: None,
    genre: "",
    description: "",
    tags: &[],
    available: true,
    has_audio: false,
    wishlisted: false,
    added_date: None,
};

const COVER_GRIMOIRE: &str = "https://images.unsplash.com/photo-1544716278-ca5e3f4abd8c?w=400&h=600&fit=crop";
const COVER_VELVET: &str = "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=600&fit=crop";
const COVER_ALCHEMIST: &str = "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=400&h=600&fit=crop";
const COVER_EMBER: &str = "https://images.unsplash.com/photo-1512820790803-83ca734da794?w=400&h=600&fit=crop";
const COVER_CODEX: &str = "https://images.unsplash.com/photo-1543002588-bfa74002ed7e?w=400&h=600&fit=crop";
const COVER_SHADOW: &str = "https://images.unsplash.com/photo-1589998059171-988d887df646?w=400&h=600&fit=crop";
const COVER_CRYSTAL: &str = "https://images.unsplash.com/photo-1532012197267-da84d127e765?w=400&h=600&fit=crop";
const COVER_TIMEKEEPER: &str = "https://images.unsplash.com/photo-1495640388908-05fa85288e61?w=400&h=600&fit=crop";

const DESC_GRIMOIRE: &str =
    "A mesmerizing tale of ancient magic and forbidden knowledge that will keep you spellbound.";
const DESC_EMBER: &str = "An epic journey through realms of fire and shadow in this fantasy masterpiece.";
const DESC_CRYSTAL: &str = "A young mage must fulfill an ancient prophecy to save her world from darkness.";

/// Subscription titles shown on the home page
pub static FEATURED_BOOKS: [Book; 6] = [
    Book {
        id: 1,
        title: "The Midnight Grimoire",
        author: "Evangeline Thornfield",
        cover: COVER_GRIMOIRE,
        rating: 4.8,
        price: "₹199/month",
        genre: "Dark Fantasy",
        has_audio: true,
        wishlisted: true,
        ..BLANK
    },
    Book {
        id: 2,
        title: "Secrets of the Velvet Library",
        author: "Cornelius Blackwood",
        cover: COVER_VELVET,
        rating: 4.6,
        price: "₹149/month",
        genre: "Mystery",
        ..BLANK
    },
    Book {
        id: 3,
        title: "The Alchemist's Daughter",
        author: "Seraphina Vale",
        cover: COVER_ALCHEMIST,
        rating: 4.9,
        price: "₹249/month",
        genre: "Historical Fiction",
        has_audio: true,
        ..BLANK
    },
    Book {
        id: 4,
        title: "Chronicles of the Ember Court",
        author: "Magnus Drakewood",
        cover: COVER_EMBER,
        rating: 4.7,
        price: "₹299/month",
        genre: "Epic Fantasy",
        available: false,
        has_audio: true,
        wishlisted: true,
        ..BLANK
    },
    Book {
        id: 5,
        title: "The Philosopher's Stone Codex",
        author: "Arabella Mystique",
        cover: COVER_CODEX,
        rating: 4.5,
        price: "₹179/month",
        genre: "Philosophy",
        ..BLANK
    },
    Book {
        id: 6,
        title: "Whispers from the Shadow Realm",
        author: "Damien Ashcroft",
        cover: COVER_SHADOW,
        rating: 4.4,
        price: "₹189/month",
        genre: "Horror",
        has_audio: true,
        ..BLANK
    },
];

/// Store listing on the explore page
pub static EXPLORE_BOOKS: [Book; 8] = [
    Book {
        id: 1,
        title: "The Midnight Grimoire",
        author: "Evangeline Thornfield",
        cover: COVER_GRIMOIRE,
        rating: 4.8,
        price: "₹399",
        original_price: Some("₹499"),
        genre: "Dark Fantasy",
        description: DESC_GRIMOIRE,
        tags: &["Bestseller", "New Release"],
        ..BLANK
    },
    Book {
        id: 2,
        title: "Secrets of the Velvet Library",
        author: "Cornelius Blackwood",
        cover: COVER_VELVET,
        rating: 4.6,
        price: "₹299",
        original_price: Some("₹399"),
        genre: "Mystery",
        description: "Uncover the mysteries hidden within the walls of an ancient library.",
        tags: &["Editor's Choice"],
        ..BLANK
    },
    Book {
        id: 3,
        title: "The Alchemist's Daughter",
        author: "Seraphina Vale",
        cover: COVER_ALCHEMIST,
        rating: 4.9,
        price: "₹349",
        original_price: Some("₹449"),
        genre: "Historical Fiction",
        description: "A captivating story of love, loss, and the pursuit of forbidden knowledge.",
        tags: &["Award Winner"],
        ..BLANK
    },
    Book {
        id: 4,
        title: "Chronicles of the Ember Court",
        author: "Magnus Drakewood",
        cover: COVER_EMBER,
        rating: 4.7,
        price: "₹449",
        original_price: Some("₹549"),
        genre: "Epic Fantasy",
        description: DESC_EMBER,
        tags: &["Series", "Fantasy Epic"],
        available: false,
        ..BLANK
    },
    Book {
        id: 5,
        title: "The Philosopher's Stone Codex",
        author: "Arabella Mystique",
        cover: COVER_CODEX,
        rating: 4.5,
        price: "₹329",
        original_price: Some("₹429"),
        genre: "Philosophy",
        description: "Explore the deepest questions of existence through this philosophical journey.",
        tags: &["Philosophy", "Wisdom"],
        ..BLANK
    },
    Book {
        id: 6,
        title: "Whispers from the Shadow Realm",
        author: "Damien Ashcroft",
        cover: COVER_SHADOW,
        rating: 4.4,
        price: "₹379",
        original_price: Some("₹479"),
        genre: "Horror",
        description: "A spine-chilling tale that blurs the line between reality and nightmare.",
        tags: &["Horror", "Thriller"],
        ..BLANK
    },
    Book {
        id: 7,
        title: "The Crystal Prophecy",
        author: "Lyra Moonwhisper",
        cover: COVER_CRYSTAL,
        rating: 4.8,
        price: "₹389",
        original_price: Some("₹489"),
        genre: "Fantasy",
        description: DESC_CRYSTAL,
        tags: &["New Release", "Young Adult"],
        ..BLANK
    },
    Book {
        id: 8,
        title: "The Timekeeper's Journal",
        author: "Benedict Clocksworth",
        cover: COVER_TIMEKEEPER,
        rating: 4.6,
        price: "₹359",
        original_price: Some("₹459"),
        genre: "Science Fiction",
        description: "Journey through time itself in this mind-bending sci-fi adventure.",
        tags: &["Time Travel", "Sci-Fi"],
        ..BLANK
    },
];

/// Starting contents of the wishlist page
pub static WISHLIST_BOOKS: [Book; 3] = [
    Book {
        id: 1,
        title: "The Midnight Grimoire",
        author: "Evangeline Thornfield",
        cover: COVER_GRIMOIRE,
        rating: 4.8,
        price: "₹399",
        original_price: Some("₹499"),
        genre: "Dark Fantasy",
        description: DESC_GRIMOIRE,
        tags: &["Bestseller", "New Release"],
        wishlisted: true,
        added_date: Some("2024-01-15"),
        ..BLANK
    },
    Book {
        id: 4,
        title: "Chronicles of the Ember Court",
        author: "Magnus Drakewood",
        cover: COVER_EMBER,
        rating: 4.7,
        price: "₹449",
        original_price: Some("₹549"),
        genre: "Epic Fantasy",
        description: DESC_EMBER,
        tags: &["Series", "Fantasy Epic"],
        available: false,
        wishlisted: true,
        added_date: Some("2024-01-10"),
        ..BLANK
    },
    Book {
        id: 7,
        title: "The Crystal Prophecy",
        author: "Lyra Moonwhisper",
        cover: COVER_CRYSTAL,
        rating: 4.8,
        price: "₹389",
        original_price: Some("₹489"),
        genre: "Fantasy",
        description: DESC_CRYSTAL,
        tags: &["New Release", "Young Adult"],
        wishlisted: true,
        added_date: Some("2024-01-12"),
        ..BLANK
    },
];

/// Rupee amount in a display price; anything without digits is 0
pub fn parse_price(price: &str) -> u32 {
    price
        .chars()
        .filter(|c| c.is_ascii_digit())
        .try_fold(0u32, |acc, c| {
            acc.checked_mul(10)?.checked_add(c.to_digit(10)?)
        })
        .unwrap_or(u32::MAX)
}

impl Book {
    pub fn price_value(&self) -> u32 {
        parse_price(self.price)
    }

    fn added_on_date(&self) -> Option<NaiveDate> {
        self.added_date
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }

    /// "Jan 15, 2024"
    pub fn added_on(&self) -> Option<String> {
        self.added_on_date().map(|d| d.format("%b %-d, %Y").to_string())
    }

    /// Number of filled stars out of five
    pub fn full_stars(&self) -> usize {
        (self.rating.floor().max(0.0) as usize).min(5)
    }
}

/// Distinct genres in first-seen order
pub fn genres(books: &[Book]) -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for book in books {
        if !seen.contains(&book.genre) {
            seen.push(book.genre);
        }
    }
    seen
}

/// Genre value that disables genre filtering
pub const ALL_GENRES: &str = "all";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookFilter {
    pub query: String,
    pub genre: String,
    /// Explore also searches descriptions
    pub match_description: bool,
}

impl BookFilter {
    pub fn matches(&self, book: &Book) -> bool {
        let query = self.query.to_lowercase();
        let matches_search = book.title.to_lowercase().contains(&query)
            || book.author.to_lowercase().contains(&query)
            || (self.match_description && book.description.to_lowercase().contains(&query));
        let matches_genre = self.genre.is_empty() || self.genre == ALL_GENRES || self.genre == book.genre;
        matches_search && matches_genre
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || !(self.genre.is_empty() || self.genre == ALL_GENRES)
    }
}

pub fn filter_books(books: &[Book], filter: &BookFilter) -> Vec<Book> {
    books.iter().filter(|b| filter.matches(b)).cloned().collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Popularity,
    Rating,
    PriceLow,
    PriceHigh,
    Name,
    Newest,
    Oldest,
}

impl SortOrder {
    /// Options offered by the home page grid
    pub const FEATURED: &'static [SortOrder] = &[
        SortOrder::Popularity,
        SortOrder::Rating,
        SortOrder::PriceLow,
        SortOrder::PriceHigh,
        SortOrder::Newest,
    ];

    pub const EXPLORE: &'static [SortOrder] = &[
        SortOrder::Popularity,
        SortOrder::Rating,
        SortOrder::PriceLow,
        SortOrder::PriceHigh,
        SortOrder::Name,
    ];

    pub const WISHLIST: &'static [SortOrder] = &[
        SortOrder::Newest,
        SortOrder::Oldest,
        SortOrder::Rating,
        SortOrder::PriceLow,
        SortOrder::PriceHigh,
        SortOrder::Name,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Popularity => "popularity",
            SortOrder::Rating => "rating",
            SortOrder::PriceLow => "price-low",
            SortOrder::PriceHigh => "price-high",
            SortOrder::Name => "name",
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
        }
    }

    pub fn from_id(s: &str) -> Option<Self> {
        match s {
            "popularity" => Some(SortOrder::Popularity),
            "rating" => Some(SortOrder::Rating),
            "price-low" => Some(SortOrder::PriceLow),
            "price-high" => Some(SortOrder::PriceHigh),
            "name" => Some(SortOrder::Name),
            "newest" => Some(SortOrder::Newest),
            "oldest" => Some(SortOrder::Oldest),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Popularity => "Popular",
            SortOrder::Rating => "Rating",
            SortOrder::PriceLow => "Price: Low",
            SortOrder::PriceHigh => "Price: High",
            SortOrder::Name => "Name A-Z",
            SortOrder::Newest => "Newest",
            SortOrder::Oldest => "Oldest",
        }
    }

    fn compare(&self, a: &Book, b: &Book) -> Ordering {
        match self {
            SortOrder::Popularity => Ordering::Equal,
            SortOrder::Rating => b.rating.total_cmp(&a.rating),
            SortOrder::PriceLow => a.price_value().cmp(&b.price_value()),
            SortOrder::PriceHigh => b.price_value().cmp(&a.price_value()),
            SortOrder::Name => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortOrder::Newest => b.added_on_date().cmp(&a.added_on_date()),
            SortOrder::Oldest => a.added_on_date().cmp(&b.added_on_date()),
        }
    }
}

/// Stable sort; ties keep catalog order
pub fn sort_books(books: &mut [Book], order: SortOrder) {
    books.sort_by(|a, b| order.compare(a, b));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn container_class(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid gap-6 grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4",
            ViewMode::List => "grid gap-6 grid-cols-1 max-w-4xl mx-auto",
        }
    }

    pub fn toggle_class(&self, active: ViewMode) -> &'static str {
        if *self == active {
            "p-2 rounded-md bg-muted-gold/20 text-muted-gold"
        } else {
            "p-2 rounded-md text-muted-foreground hover:text-foreground"
        }
    }
}

/// Add or remove an id from a local selection
pub fn toggle_id(ids: &mut Vec<u32>, id: u32) {
    if let Some(pos) = ids.iter().position(|&existing| existing == id) {
        ids.remove(pos);
    } else {
        ids.push(id);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WishlistStats {
    pub count: usize,
    pub total_value: u32,
    pub in_stock: usize,
}

impl WishlistStats {
    pub fn of(books: &[Book]) -> Self {
        Self {
            count: books.len(),
            total_value: books.iter().map(Book::price_value).fold(0u32, u32::saturating_add),
            in_stock: books.iter().filter(|b| b.available).count(),
        }
    }

    pub fn out_of_stock(&self) -> usize {
        self.count - self.in_stock
    }
}

/// "3 books found in Fantasy for \"crystal\""
pub fn results_summary(count: usize, filter: &BookFilter) -> String {
    let mut summary = format!("{} found", pluralize(count, "book"));
    if !filter.genre.is_empty() && filter.genre != ALL_GENRES {
        summary.push_str(&format!(" in {}", filter.genre));
    }
    if !filter.query.is_empty() {
        summary.push_str(&format!(" for \"{}\"", filter.query));
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(books: &[Book]) -> Vec<u32> {
        books.iter().map(|b| b.id).collect()
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("₹399"), 399);
        assert_eq!(parse_price("₹1,499"), 1499);
        assert_eq!(parse_price("₹199/month"), 199);
        assert_eq!(parse_price("free"), 0);
        assert_eq!(parse_price(""), 0);
    }

    #[test]
    fn test_genres_first_seen_order() {
        let all = genres(&EXPLORE_BOOKS);
        assert_eq!(all.len(), 8);
        assert_eq!(all[0], "Dark Fantasy");
        assert_eq!(all[7], "Science Fiction");

        let wishlist_genres = genres(&WISHLIST_BOOKS);
        assert_eq!(wishlist_genres, vec!["Dark Fantasy", "Epic Fantasy", "Fantasy"]);
    }

    #[test]
    fn test_filter_by_query_and_genre() {
        let filter = BookFilter {
            query: "SHADOW".to_string(),
            genre: ALL_GENRES.to_string(),
            match_description: false,
        };
        assert_eq!(ids(&filter_books(&FEATURED_BOOKS, &filter)), vec![6]);

        let filter = BookFilter {
            query: "magnus".to_string(),
            genre: "Epic Fantasy".to_string(),
            match_description: false,
        };
        assert_eq!(ids(&filter_books(&EXPLORE_BOOKS, &filter)), vec![4]);

        let filter = BookFilter {
            query: "magnus".to_string(),
            genre: "Horror".to_string(),
            match_description: false,
        };
        assert!(filter_books(&EXPLORE_BOOKS, &filter).is_empty());
    }

    #[test]
    fn test_description_search_only_when_enabled() {
        let mut filter = BookFilter {
            query: "prophecy to save".to_string(),
            genre: ALL_GENRES.to_string(),
            match_description: false,
        };
        assert!(filter_books(&EXPLORE_BOOKS, &filter).is_empty());

        filter.match_description = true;
        assert_eq!(ids(&filter_books(&EXPLORE_BOOKS, &filter)), vec![7]);
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = BookFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter_books(&EXPLORE_BOOKS, &filter).len(), 8);
    }

    #[test]
    fn test_sort_orders() {
        let mut books = EXPLORE_BOOKS.to_vec();

        sort_books(&mut books, SortOrder::Rating);
        // 4.8 tie keeps catalog order (1 before 7)
        assert_eq!(ids(&books)[..3], [3, 1, 7]);

        sort_books(&mut books, SortOrder::PriceLow);
        assert_eq!(books[0].id, 2);
        assert_eq!(books[7].id, 4);

        sort_books(&mut books, SortOrder::PriceHigh);
        assert_eq!(books[0].id, 4);

        sort_books(&mut books, SortOrder::Name);
        assert_eq!(books[0].title, "Chronicles of the Ember Court");
        assert_eq!(books[7].title, "Whispers from the Shadow Realm");
    }

    #[test]
    fn test_popularity_keeps_source_order() {
        let mut books = FEATURED_BOOKS.to_vec();
        sort_books(&mut books, SortOrder::Popularity);
        assert_eq!(ids(&books), vec![1, 2, 3, 4, 5, 6]);

        // No dates on featured titles, so newest is a no-op as well
        sort_books(&mut books, SortOrder::Newest);
        assert_eq!(ids(&books), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_sort_by_added_date() {
        let mut books = WISHLIST_BOOKS.to_vec();
        sort_books(&mut books, SortOrder::Newest);
        assert_eq!(ids(&books), vec![1, 7, 4]);
        sort_books(&mut books, SortOrder::Oldest);
        assert_eq!(ids(&books), vec![4, 7, 1]);
    }

    #[test]
    fn test_sort_order_ids() {
        for order in SortOrder::WISHLIST.iter().chain(SortOrder::EXPLORE) {
            assert_eq!(SortOrder::from_id(order.as_str()), Some(*order));
        }
        assert_eq!(SortOrder::from_id("bogus"), None);
        assert_eq!(SortOrder::default(), SortOrder::Popularity);
    }

    #[test]
    fn test_wishlist_stats() {
        let stats = WishlistStats::of(&WISHLIST_BOOKS);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.total_value, 399 + 449 + 389);
        assert_eq!(stats.in_stock, 2);
        assert_eq!(stats.out_of_stock(), 1);

        let empty = WishlistStats::of(&[]);
        assert_eq!(empty.total_value, 0);
        assert_eq!(empty.out_of_stock(), 0);
    }

    #[test]
    fn test_results_summary() {
        let mut filter = BookFilter::default();
        assert_eq!(results_summary(1, &filter), "1 book found");

        filter.genre = "Fantasy".to_string();
        filter.query = "crystal".to_string();
        assert_eq!(results_summary(0, &filter), "0 books found in Fantasy for \"crystal\"");

        filter.genre = ALL_GENRES.to_string();
        assert_eq!(results_summary(2, &filter), "2 books found for \"crystal\"");
    }

    #[test]
    fn test_toggle_id() {
        let mut ids = vec![];
        toggle_id(&mut ids, 3);
        toggle_id(&mut ids, 5);
        assert_eq!(ids, vec![3, 5]);
        toggle_id(&mut ids, 3);
        assert_eq!(ids, vec![5]);
    }

    #[test]
    fn test_book_helpers() {
        assert_eq!(WISHLIST_BOOKS[0].added_on().as_deref(), Some("Jan 15, 2024"));
        assert_eq!(FEATURED_BOOKS[0].added_on(), None);
        assert_eq!(FEATURED_BOOKS[0].full_stars(), 4);
    }

    #[test]
    fn test_view_mode_classes() {
        assert!(ViewMode::Grid.container_class().contains("xl:grid-cols-4"));
        assert!(ViewMode::List.container_class().contains("max-w-4xl"));
        assert!(ViewMode::Grid.toggle_class(ViewMode::Grid).contains("text-muted-gold"));
        assert!(ViewMode::List.toggle_class(ViewMode::Grid).contains("text-muted-foreground"));
    }
}
