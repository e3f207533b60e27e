//! Row engine: canonical users, the displayed (filtered/sorted) users, and the
//! search + sort state machine that derives one from the other.
//!
//! ## Flow
//! 1) The initial load lands in [`RowEngine::load_complete`] and becomes both sets.
//! 2) [`RowEngine::search`] with a non-empty query hands out a [`SearchTicket`]; the
//!    caller re-fetches the full users document and feeds it to
//!    [`RowEngine::complete_search`].
//! 3) [`RowEngine::sort`] reorders the displayed set in place, or restores the
//!    filtered baseline when the column cycles back to inactive.
//!
//! Every replacement of the displayed set bumps [`RowEngine::generation`].

use log::{debug, info, warn};

use crate::error::{FetchError, FetchPhase, RowError};
use crate::sort::{SortKey, SortState};
use crate::user::{UserRecord, filter_users};

/// Identity of one displayed set. Changes whenever the displayed set is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DisplayGeneration(u64);

/// Handle for one in-flight search re-fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchTicket(u64);

/// What the caller has to do after [`RowEngine::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPlan {
    /// The query was blank; the displayed set is already the canonical set.
    Reset,
    /// Re-fetch the users and hand the outcome to [`RowEngine::complete_search`].
    Refetch(SearchTicket),
}

/// Owner of the users table rows.
#[derive(Debug, Default)]
pub struct RowEngine {
    canonical: Vec<UserRecord>,
    displayed: Vec<UserRecord>,
    query: String,
    sort: SortState,
    error: Option<RowError>,
    generation: DisplayGeneration,
    latest_ticket: u64,
}

impl RowEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine whose canonical and displayed sets are already `users`.
    pub fn with_users(users: Vec<UserRecord>) -> Self {
        let mut engine = Self::new();
        engine.load_complete(Ok(users));
        engine
    }

    pub fn canonical(&self) -> &[UserRecord] {
        &self.canonical
    }

    pub fn displayed(&self) -> &[UserRecord] {
        &self.displayed
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn error(&self) -> Option<&RowError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn generation(&self) -> DisplayGeneration {
        self.generation
    }

    /// Applies the outcome of the startup fetch.
    ///
    /// On failure both sets stay empty and every later operation works on an empty
    /// canonical set. A query typed before the load landed keeps filtering the
    /// displayed set.
    pub fn load_complete(&mut self, outcome: Result<Vec<UserRecord>, FetchError>) {
        match outcome {
            Ok(users) => {
                info!("RowEngine: loaded {} users", users.len());
                let displayed = if self.query.trim().is_empty() {
                    users.clone()
                } else {
                    filter_users(&users, &self.query)
                };
                self.canonical = users;
                self.replace_displayed(displayed);
            }
            Err(err) => {
                warn!("RowEngine: initial load failed: {err}");
                self.error = Some(RowError::fetch_failed(FetchPhase::InitialLoad, err));
            }
        }
    }

    /// Stores the lowercased query and plans the resulting displayed set.
    ///
    /// A blank query restores the canonical set right away, without reapplying the
    /// active sort and without touching the error. Any other query needs a fresh copy
    /// of the users, so a ticket is handed out and earlier tickets go stale.
    pub fn search(&mut self, raw: &str) -> SearchPlan {
        self.query = raw.to_lowercase();
        self.latest_ticket += 1;

        if self.query.trim().is_empty() {
            debug!("RowEngine: blank query, restoring canonical users");
            let canonical = self.canonical.clone();
            self.replace_displayed(canonical);
            SearchPlan::Reset
        } else {
            SearchPlan::Refetch(SearchTicket(self.latest_ticket))
        }
    }

    /// Applies a search re-fetch. Returns `false` when the ticket was stale and the
    /// outcome got dropped.
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<Vec<UserRecord>, FetchError>,
    ) -> bool {
        if ticket.0 != self.latest_ticket {
            debug!(
                "RowEngine: dropping stale search result {} (latest {})",
                ticket.0, self.latest_ticket
            );
            return false;
        }

        match outcome {
            Ok(users) => {
                let matched = filter_users(&users, &self.query);
                if matched.is_empty() {
                    info!("RowEngine: no users match {:?}", self.query);
                    self.error = Some(RowError::NoResults);
                } else {
                    info!("RowEngine: {} users match {:?}", matched.len(), self.query);
                    self.error = None;
                }
                self.replace_displayed(matched);
            }
            Err(err) => {
                warn!("RowEngine: search re-fetch failed: {err}");
                self.error = Some(RowError::fetch_failed(FetchPhase::Search, err));
            }
        }
        true
    }

    /// Advances the sort cycle for `key`.
    ///
    /// An active direction sorts the current displayed set, so it composes with the
    /// active filter. Cycling back to inactive re-filters the canonical set with the
    /// stored query.
    pub fn sort(&mut self, key: SortKey) {
        self.sort = self.sort.toggle(key);

        if self.sort.is_active() {
            let sort = self.sort;
            let mut sorted = self.displayed.clone();
            // `sort_by` is stable: equal values keep their displayed order.
            sorted.sort_by(|a, b| sort.compare(a, b));
            self.replace_displayed(sorted);
        } else {
            let baseline = filter_users(&self.canonical, &self.query);
            self.replace_displayed(baseline);
        }
    }

    fn replace_displayed(&mut self, users: Vec<UserRecord>) {
        self.displayed = users;
        self.generation.0 += 1;
    }
}
