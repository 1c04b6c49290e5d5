//! Discovery page state.
//!
//! The page keeps two independent filter inputs and re-queries whenever
//! either changes. Several requests may be in flight at once, so each one
//! is tagged with a generation number and only the response to the most
//! recent request is applied.

use crate::client::DiscoverySource;
use crate::error::Result;
use crate::view::PageView;
use skillswap_core::{DiscoveryFilter, PublicProfile};
use tracing::{debug, error};

/// A request the page wants issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    /// Pass back to [`DiscoveryPage::apply`] with the response
    pub generation: u64,
    /// Query to send
    pub filter: DiscoveryFilter,
}

/// What [`DiscoveryPage::apply`] did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseOutcome {
    /// Results replaced with `count` profiles
    Applied { count: usize },
    /// Request failed; previous results kept
    Failed,
    /// A newer request was issued since; response dropped
    Stale,
}

/// State behind the public discovery page.
#[derive(Debug, Clone)]
pub struct DiscoveryPage {
    results: Vec<PublicProfile>,
    loading: bool,
    search_term: String,
    selected_skill: String,
    generation: u64,
}

impl Default for DiscoveryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl DiscoveryPage {
    /// A fresh page: no results, loading until the first response lands.
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
            loading: true,
            search_term: String::new(),
            selected_skill: String::new(),
            generation: 0,
        }
    }

    pub fn results(&self) -> &[PublicProfile] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected_skill(&self) -> &str {
        &self.selected_skill
    }

    /// Generation of the most recently issued request (0 before any).
    pub fn latest_generation(&self) -> u64 {
        self.generation
    }

    /// Query for the current inputs; empty inputs are left out.
    pub fn filter(&self) -> DiscoveryFilter {
        DiscoveryFilter {
            skill: Some(self.selected_skill.clone()),
            search: Some(self.search_term.clone()),
        }
        .normalized()
    }

    /// Issue a request for the current inputs (initial load).
    pub fn begin_request(&mut self) -> PendingRequest {
        self.generation += 1;
        let request = PendingRequest {
            generation: self.generation,
            filter: self.filter(),
        };
        debug!(generation = request.generation, filter = ?request.filter, "Discovery request issued");
        request
    }

    /// Update the search box. Returns a request when the value changed.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> Option<PendingRequest> {
        let term = term.into();
        if term == self.search_term {
            return None;
        }
        self.search_term = term;
        Some(self.begin_request())
    }

    /// Update the skill box. Returns a request when the value changed.
    pub fn set_selected_skill(&mut self, skill: impl Into<String>) -> Option<PendingRequest> {
        let skill = skill.into();
        if skill == self.selected_skill {
            return None;
        }
        self.selected_skill = skill;
        Some(self.begin_request())
    }

    /// Apply the outcome of the request tagged `generation`.
    ///
    /// Success replaces the results wholesale. Failure is logged and keeps
    /// whatever was shown before. Either way loading ends. Responses to
    /// superseded requests change nothing.
    pub fn apply(
        &mut self,
        generation: u64,
        result: Result<Vec<PublicProfile>>,
    ) -> ResponseOutcome {
        if generation != self.generation {
            debug!(
                generation,
                latest = self.generation,
                "Dropping response to superseded request"
            );
            return ResponseOutcome::Stale;
        }

        self.loading = false;

        match result {
            Ok(users) => {
                let count = users.len();
                self.results = users;
                ResponseOutcome::Applied { count }
            }
            Err(e) => {
                error!(error = %e, "Error fetching users");
                ResponseOutcome::Failed
            }
        }
    }

    /// Issue a request for the current inputs and apply its response.
    pub async fn refresh<S>(&mut self, source: &S) -> ResponseOutcome
    where
        S: DiscoverySource + ?Sized,
    {
        let request = self.begin_request();
        let result = source.discover_users(&request.filter).await;
        self.apply(request.generation, result)
    }

    /// Current render state.
    pub fn view(&self) -> PageView {
        PageView::build(self.loading, &self.results)
    }
}
