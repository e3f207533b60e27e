#[cfg(any(test, feature = "test-utils"))]
use std::collections::VecDeque;
use std::fmt::Debug;
#[cfg(any(test, feature = "test-utils"))]
use std::sync::Mutex;

use ehttp::{Request, Response, Result};

/// Callback-style HTTP transport. `on_done` may run on another thread (native) or on
/// the JS event loop (web).
pub trait FetchService: Send + Sync + Debug {
    fn fetch(&self, request: Request, on_done: Box<dyn FnOnce(Result<Response>) + Send + 'static>);
}

#[derive(Debug, Default)]
pub struct EhttpFetcher;

impl FetchService for EhttpFetcher {
    fn fetch(&self, request: Request, on_done: Box<dyn FnOnce(Result<Response>) + Send + 'static>) {
        ehttp::fetch(request, on_done)
    }
}

/// Answers requests synchronously from a queue of canned responses.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default)]
pub struct MockFetcher {
    responses: Mutex<VecDeque<Result<Response>>>,
    requested: Mutex<Vec<String>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockFetcher {
    pub fn new(responses: impl IntoIterator<Item = Result<Response>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// A `200 OK` response carrying `body` as JSON.
    pub fn json(body: &serde_json::Value) -> Result<Response> {
        Ok(Self::status(200, body.to_string().into_bytes()))
    }

    /// A response with `status` and raw `bytes`.
    pub fn status(status: u16, bytes: Vec<u8>) -> Response {
        Response {
            url: String::new(),
            ok: (200..300).contains(&status),
            status,
            status_text: String::new(),
            headers: ehttp::Headers::default(),
            bytes,
        }
    }

    /// URLs requested so far, oldest first.
    pub fn requested(&self) -> Vec<String> {
        self.requested
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_default()
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl FetchService for MockFetcher {
    fn fetch(
        &self,
        request: Request,
        on_done: Box<dyn FnOnce(Result<Response>) + Send + 'static>,
    ) {
        if let Ok(mut urls) = self.requested.lock() {
            urls.push(request.url);
        }
        let next = self
            .responses
            .lock()
            .ok()
            .and_then(|mut queue| queue.pop_front());
        on_done(next.unwrap_or_else(|| Err("MockFetcher: no response set".to_owned())));
    }
}
