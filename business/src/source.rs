//! The users data source: one GET of the whole users document.

use std::sync::Arc;

use log::{error, info};
use ustr::Ustr;

use crate::error::FetchError;
use crate::fetch_service::FetchService;
use crate::user::{UserRecord, UsersResponse};

pub type FetchUsersResult = Result<Vec<UserRecord>, FetchError>;

/// Read-only users endpoint. Filtering always happens client-side.
#[derive(Debug, Clone)]
pub struct UserSource {
    url: Ustr,
    fetcher: Arc<dyn FetchService>,
}

impl UserSource {
    pub fn new(url: Ustr, fetcher: Arc<dyn FetchService>) -> Self {
        Self { url, fetcher }
    }

    /// Fetch every user. `on_done` runs once, off the UI loop on native targets.
    pub fn fetch_users(&self, on_done: impl FnOnce(FetchUsersResult) + Send + 'static) {
        info!("UserSource: fetching users from {}", self.url);
        let request = ehttp::Request::get(self.url.as_str());
        self.fetcher.fetch(
            request,
            Box::new(move |result| on_done(parse_users_response(result))),
        );
    }
}

fn parse_users_response(result: ehttp::Result<ehttp::Response>) -> FetchUsersResult {
    let response = result.map_err(|err| {
        error!("UserSource: request failed: {err}");
        FetchError::Network(err)
    })?;

    if !(200..300).contains(&response.status) {
        error!("UserSource: API returned status: {}", response.status);
        return Err(FetchError::Status(response.status));
    }

    match serde_json::from_slice::<UsersResponse>(&response.bytes) {
        Ok(body) => {
            info!("UserSource: fetched {} users", body.users.len());
            Ok(body.users)
        }
        Err(err) => {
            error!("UserSource: failed to parse users response: {err}");
            Err(FetchError::Parse(err.to_string()))
        }
    }
}
