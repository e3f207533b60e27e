//! Domain layer of the roster page: user records, the row engine that filters and
//! sorts them, the column resize state machine, and the users data source.
//!
//! Nothing in here renders. The UI crate reads state through [`Roster`] and
//! [`ColumnResizer`] and feeds user intents back into them.

mod config;
mod error;
mod fetch_service;
mod resize;
mod roster;
mod rows;
mod sort;
mod source;
mod user;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{BusinessConfig, DEFAULT_USERS_URL};
pub use error::{FetchError, FetchPhase, RowError};
#[cfg(any(test, feature = "test-utils"))]
pub use fetch_service::MockFetcher;
pub use fetch_service::{EhttpFetcher, FetchService};
pub use resize::{ColumnResizer, DragSession, MIN_COLUMN_WIDTH, PointerCapture};
pub use roster::{Roster, SourceEvent};
pub use rows::{DisplayGeneration, RowEngine, SearchPlan, SearchTicket};
pub use sort::{SortDirection, SortKey, SortState, SortValue};
pub use source::{FetchUsersResult, UserSource};
pub use user::{Address, UserRecord, UsersResponse, filter_users};
