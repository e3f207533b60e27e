use std::sync::Arc;

use roster_business::{BusinessConfig, ColumnResizer, EhttpFetcher, FetchService, Roster};

/// Everything the roster page keeps between frames.
#[derive(Debug)]
pub struct State {
    pub roster: Roster,
    pub resizer: ColumnResizer,
    /// Contents of the search box, echoed to the roster on every edit.
    pub search_input: String,
    started: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(&BusinessConfig::from_env(), Arc::new(EhttpFetcher))
    }
}

impl State {
    pub fn new(config: &BusinessConfig, fetcher: Arc<dyn FetchService>) -> Self {
        Self {
            roster: Roster::new(config, fetcher),
            resizer: ColumnResizer::new(),
            search_input: String::new(),
            started: false,
        }
    }

    /// State pointed at a mock server, fetching over real HTTP.
    pub fn test(base_url: String) -> Self {
        Self::new(&BusinessConfig::with_base_url(&base_url), Arc::new(EhttpFetcher))
    }

    /// Hooks completions up to repaints and issues the initial load, once.
    pub fn ensure_started(&mut self, ctx: &egui::Context) {
        if self.started {
            return;
        }
        self.started = true;
        let ctx = ctx.clone();
        self.roster.set_waker(move || ctx.request_repaint());
        self.roster.start();
    }
}
