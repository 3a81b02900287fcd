//! Fragment routing
//!
//! Short links look like `<origin>/#/<code>`; the part after `#` is the route.
//! `/` is the shorten form, `/stats` the statistics table, and any other
//! single segment is a code to resolve.

use tracing::{debug, instrument};

use crate::errors::Result;
use crate::services::LinkStore;
use crate::storage::LinkRecord;

pub const HOME_PATH: &str = "/";
pub const STATS_PATH: &str = "/stats";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Shorten,
    Stats,
    Redirect(String),
    Unmatched(String),
}

impl Route {
    /// Parse a route from a fragment path, a bare fragment (`#/abc`) or a
    /// full short link (`https://host/#/abc`).
    ///
    /// The literal `stats` segment always wins over a code of the same name.
    pub fn parse(input: &str) -> Self {
        let path = match input.split_once('#') {
            Some((_, fragment)) => fragment,
            None => input,
        };
        let path = path.split(['?', '#']).next().unwrap_or_default();

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Shorten,
            ["stats"] => Route::Stats,
            [code] => match urlencoding::decode(code) {
                Ok(decoded) => Route::Redirect(decoded.into_owned()),
                Err(_) => Route::Redirect((*code).to_string()),
            },
            _ => Route::Unmatched(format!("/{}", segments.join("/"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    ShortenForm,
    Stats(Vec<LinkRecord>),
    /// Full navigation to the original URL
    Redirect(String),
    /// In-app navigation, used when a code is unknown
    Navigate(String),
    Unmatched(String),
}

pub struct RedirectService;

impl RedirectService {
    #[instrument(skip(store))]
    pub fn dispatch(store: &LinkStore, route: Route, referrer: &str) -> Result<RouteOutcome> {
        let outcome = match route {
            Route::Shorten => RouteOutcome::ShortenForm,
            Route::Stats => RouteOutcome::Stats(store.list_all()),
            Route::Redirect(code) => Self::handle_redirect(store, &code, referrer)?,
            Route::Unmatched(path) => RouteOutcome::Unmatched(path),
        };
        Ok(outcome)
    }

    /// `/:code`: count the visit and redirect, or fall back to the home route.
    pub fn handle_redirect(store: &LinkStore, code: &str, referrer: &str) -> Result<RouteOutcome> {
        match store.record_visit(code, referrer)? {
            Some(target) => {
                debug!("Redirecting '{}' to {}", code, target);
                Ok(RouteOutcome::Redirect(target))
            }
            None => {
                debug!("Unknown code '{}', navigating home", code);
                Ok(RouteOutcome::Navigate(HOME_PATH.to_string()))
            }
        }
    }
}
