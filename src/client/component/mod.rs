pub mod category_filter;
pub mod fact_form;
pub mod fact_item;
pub mod header;
pub mod layout;
pub mod modal;
pub mod page;
pub mod protected_layout;
pub mod sort_by;
pub mod vote_buttons;

pub use category_filter::CategoryFilter;
pub use fact_form::FactFormModal;
pub use fact_item::FactItem;
pub use header::Header;
pub use layout::Layout;
pub use modal::{ConfirmationModal, Modal};
pub use page::Page;
pub use protected_layout::RequiresLoggedIn;
pub use sort_by::SortBy;
pub use vote_buttons::VoteButtons;
