// Passenger view state
//
// Owns the current search, the fetched passengers and their class breakdown.
// All updates go through three transitions: a search is confirmed, a fetch
// succeeds, a fetch fails. Each search gets a request id; only the outcome of
// the latest request is applied, so a slow earlier search can never overwrite
// a newer one.

use crate::chart::{aggregate, ClassBreakdown};
use crate::error::FetchError;
use crate::model::Passenger;

/// Where the view is in its fetch cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Fetching {
        search: String,
    },
    Loaded {
        count: usize,
    },
    /// Last fetch failed; the previous passengers are still displayed
    Failed {
        reason: String,
    },
}

/// A fetch the UI loop must run on behalf of the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub id: u64,
    pub search: String,
}

#[derive(Debug, Default)]
pub struct PassengerView {
    search: String,
    passengers: Vec<Passenger>,
    breakdown: ClassBreakdown,
    status: FetchStatus,
    next_request: u64,
    in_flight: Option<u64>,
}

impl PassengerView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn breakdown(&self) -> &ClassBreakdown {
        &self.breakdown
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// A search was confirmed: start a new fetch
    ///
    /// Any request still in flight is superseded; its outcome will be ignored.
    pub fn on_search(&mut self, search: impl Into<String>) -> FetchRequest {
        let search = search.into();
        self.next_request += 1;
        let id = self.next_request;

        if let Some(previous) = self.in_flight.replace(id) {
            tracing::debug!(previous, id, "Superseding in-flight search");
        }

        self.search = search.clone();
        self.status = FetchStatus::Fetching {
            search: search.clone(),
        };

        FetchRequest { id, search }
    }

    /// Apply a successful fetch. Returns false if the response was stale.
    pub fn on_fetch_success(&mut self, id: u64, passengers: Vec<Passenger>) -> bool {
        if self.in_flight != Some(id) {
            tracing::debug!(id, "Discarding stale search response");
            return false;
        }

        self.in_flight = None;
        self.breakdown = aggregate(&passengers);
        self.status = FetchStatus::Loaded {
            count: passengers.len(),
        };
        self.passengers = passengers;
        true
    }

    /// Record a failed fetch, keeping the current passengers on screen.
    /// Returns false if the failure belongs to a superseded request.
    pub fn on_fetch_error(&mut self, id: u64, error: &FetchError) -> bool {
        if self.in_flight != Some(id) {
            tracing::debug!(id, %error, "Ignoring error from stale search");
            return false;
        }

        self.in_flight = None;
        self.status = FetchStatus::Failed {
            reason: error.to_string(),
        };
        true
    }
}
