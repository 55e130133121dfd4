// UI Components
// Reusable storefront pieces shared by the pages

pub mod book_card;
pub mod book_grid;
pub mod confirm_modal;
pub mod features;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod navbar;

pub use book_card::{BookCard, CardAction, CatalogCard};
pub use book_grid::{BookGrid, EmptyResults, GenreSelect, SortSelect, ViewToggle};
pub use confirm_modal::ConfirmModal;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
