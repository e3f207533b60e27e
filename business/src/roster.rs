//! The roster controller: wires the row engine to the users data source.
//!
//! Network completions never touch the engine directly. They are sent over a `flume`
//! channel and applied by [`Roster::poll`], which the UI calls once per frame, so all
//! state changes happen on the UI loop.

use std::sync::Arc;

use flume::{Receiver, Sender};
use log::{debug, info};

use crate::config::BusinessConfig;
use crate::fetch_service::FetchService;
use crate::rows::{RowEngine, SearchPlan, SearchTicket};
use crate::sort::SortKey;
use crate::source::{FetchUsersResult, UserSource};
use crate::user::UserRecord;

/// A finished fetch waiting to be applied.
#[derive(Debug)]
pub enum SourceEvent {
    Loaded(FetchUsersResult),
    Searched(SearchTicket, FetchUsersResult),
}

type Waker = Arc<dyn Fn() + Send + Sync>;

pub struct Roster {
    rows: RowEngine,
    source: UserSource,
    selected: Option<UserRecord>,
    sender: Sender<SourceEvent>,
    receiver: Receiver<SourceEvent>,
    waker: Option<Waker>,
    started: bool,
    loading: bool,
}

impl Roster {
    pub fn new(config: &BusinessConfig, fetcher: Arc<dyn FetchService>) -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            rows: RowEngine::new(),
            source: UserSource::new(config.users_url(), fetcher),
            selected: None,
            sender,
            receiver,
            waker: None,
            started: false,
            loading: false,
        }
    }

    /// Called after every completion is queued, from whatever thread finished the
    /// fetch. The UI uses it to request a repaint.
    pub fn set_waker(&mut self, waker: impl Fn() + Send + Sync + 'static) {
        self.waker = Some(Arc::new(waker));
    }

    pub fn rows(&self) -> &RowEngine {
        &self.rows
    }

    pub fn selected(&self) -> Option<&UserRecord> {
        self.selected.as_ref()
    }

    /// True until the initial load has completed, successfully or not.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Issues the initial load. Later calls do nothing.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.loading = true;
        info!("Roster: starting initial load");
        self.fetch(SourceEvent::Loaded);
    }

    pub fn search(&mut self, raw: &str) {
        match self.rows.search(raw) {
            SearchPlan::Reset => {}
            SearchPlan::Refetch(ticket) => {
                debug!("Roster: re-fetching users for search {ticket:?}");
                self.fetch(move |result| SourceEvent::Searched(ticket, result));
            }
        }
    }

    pub fn sort(&mut self, key: SortKey) {
        self.rows.sort(key);
    }

    pub fn select(&mut self, user: UserRecord) {
        self.selected = Some(user);
    }

    pub fn close_details(&mut self) {
        self.selected = None;
    }

    /// Applies every completion that arrived since the last call, in arrival order.
    ///
    /// Returns `true` when at least one completion was applied.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.receiver.try_recv() {
            match event {
                SourceEvent::Loaded(result) => {
                    self.loading = false;
                    self.rows.load_complete(result);
                    changed = true;
                }
                SourceEvent::Searched(ticket, result) => {
                    changed |= self.rows.complete_search(ticket, result);
                }
            }
        }
        changed
    }

    fn fetch(&self, wrap: impl FnOnce(FetchUsersResult) -> SourceEvent + Send + 'static) {
        let sender = self.sender.clone();
        let waker = self.waker.clone();
        self.source.fetch_users(move |result| {
            // The receiver lives as long as the roster; a closed channel means the
            // page is gone and the result has nowhere to go.
            if sender.send(wrap(result)).is_err() {
                debug!("Roster: dropped a completion after shutdown");
                return;
            }
            if let Some(waker) = waker {
                waker();
            }
        });
    }
}

impl std::fmt::Debug for Roster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Roster")
            .field("rows", &self.rows)
            .field("source", &self.source)
            .field("selected", &self.selected)
            .field("started", &self.started)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}
