//! View-state machine for the search screen.
//!
//! ```text
//! Idle -> Loading -> Ready | Error -> (submit) -> Loading -> ...
//! ```
//!
//! Every submit gets a new generation. A completion is applied only when its
//! ticket matches the latest submit, so an older search that finishes late
//! cannot overwrite a newer one.

use tracing::{debug, warn};

use crate::{error::WeatherError, model::WeatherViewModel, service::WeatherService};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewStatus {
    #[default]
    Idle,
    Loading,
    Error(String),
    Ready(WeatherViewModel),
}

impl ViewStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewStatus::Loading)
    }

    pub fn result(&self) -> Option<&WeatherViewModel> {
        match self {
            ViewStatus::Ready(vm) => Some(vm),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewStatus::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Identifies one submitted search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Sole owner of the [`ViewStatus`].
#[derive(Debug, Default)]
pub struct Controller {
    status: ViewStatus,
    generation: u64,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    /// Start a search. Blank queries leave the state untouched.
    pub fn submit(&mut self, query: &str) -> Option<SearchTicket> {
        if query.trim().is_empty() {
            debug!("Ignoring blank query");
            return None;
        }

        self.generation += 1;
        self.status = ViewStatus::Loading;

        Some(SearchTicket { generation: self.generation })
    }

    /// Finish a search. Returns false if a newer search superseded it.
    pub fn complete(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<WeatherViewModel, WeatherError>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                stale = ticket.generation,
                latest = self.generation,
                "Discarding superseded search result"
            );
            return false;
        }

        self.status = match outcome {
            Ok(vm) => ViewStatus::Ready(vm),
            Err(err) => {
                warn!(error = %err, "Search failed");
                ViewStatus::Error(err.display_message())
            }
        };

        true
    }

    /// Submit, look up and complete in one step.
    pub async fn search(&mut self, service: &WeatherService, query: &str) -> &ViewStatus {
        if let Some(ticket) = self.submit(query) {
            let outcome = service.lookup(query.trim()).await;
            self.complete(ticket, outcome);
        }

        &self.status
    }
}
