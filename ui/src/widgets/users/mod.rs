//! The roster page: search box, sortable and resizable users table, and the
//! details overlay for the clicked row.

mod capture;
mod details;
mod panel;
mod search;
pub mod table;

pub use capture::{EguiPointerCapture, is_pointer_captured};
pub use details::user_details;
pub use panel::users_page;
pub use search::search_bar;
pub use table::users_table;
