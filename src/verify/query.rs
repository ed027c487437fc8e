use log::{debug, info};
use url::Url;

use crate::api::client::Transport;
use crate::api::models::{InputRecord, Verdict};
use crate::api::request::{self, OutboundRequest};
use crate::api::response;
use crate::error::{NetworkError, QueryError};
use crate::verify::extract::extract;
use crate::verify::notice::Notice;
use crate::verify::validate::validate;

/// Where the current submission is. `Done` and `Failed` are resting states
/// like `Idle`: a new submission may start from any of them.
#[derive(Debug)]
pub enum QueryState {
    Idle,
    Validating,
    Fetching,
    Interpreting,
    Done(Verdict),
    Failed(QueryError),
}

/// Identifies one submission. A completion is only accepted for the latest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Owns the form values and drives validation, fetch and interpretation.
///
/// A submission made while another fetch is outstanding supersedes it: the
/// epoch moves on and the older response is dropped when it arrives.
/// Clearing the form does the same.
pub struct QueryOrchestrator {
    endpoint: Url,
    input: InputRecord,
    state: QueryState,
    epoch: u64,
}

impl QueryOrchestrator {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            input: InputRecord::default(),
            state: QueryState::Idle,
            epoch: 0,
        }
    }

    pub fn input(&self) -> &InputRecord {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputRecord {
        &mut self.input
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn is_fetching(&self) -> bool {
        matches!(self.state, QueryState::Fetching)
    }

    fn transition(&mut self, next: QueryState) {
        debug!("query state {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Validate the current input and, if it passes, hand out the request to
    /// send. A validation failure puts the orchestrator back to `Idle`.
    pub fn begin(&mut self) -> Result<(Ticket, OutboundRequest), Notice> {
        let superseding = self.is_fetching();
        self.transition(QueryState::Validating);

        let normalized = match validate(&self.input) {
            Ok(normalized) => normalized,
            Err(err) => {
                debug!("submission rejected: {err}");
                self.transition(QueryState::Idle);
                return Err(Notice::from(&QueryError::from(err)));
            }
        };

        self.epoch += 1;
        if superseding {
            debug!("submission {} supersedes an outstanding fetch", self.epoch);
        }
        info!("verifying {}", normalized.masked());
        let outbound = request::build(&self.endpoint, &normalized);
        self.transition(QueryState::Fetching);
        Ok((Ticket(self.epoch), outbound))
    }

    /// Accept the fetch result for `ticket`. Returns `None` when the ticket was
    /// superseded or cleared, in which case nothing is reported.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<String, NetworkError>,
    ) -> Option<Notice> {
        if ticket.0 != self.epoch || !self.is_fetching() {
            debug!("discarding stale response for submission {}", ticket.0);
            return None;
        }
        Some(self.finish(result))
    }

    fn finish(&mut self, result: Result<String, NetworkError>) -> Notice {
        let outcome = result
            .map_err(QueryError::from)
            .and_then(|body| {
                self.transition(QueryState::Interpreting);
                response::interpret(&body).map_err(QueryError::from)
            });

        match outcome {
            Ok(verdict) => {
                info!("verdict: {verdict:?}");
                let notice = Notice::from(verdict.clone());
                self.transition(QueryState::Done(verdict));
                notice
            }
            Err(err) => {
                info!("verification failed: {err}");
                let notice = Notice::from(Verdict::Error(err.user_message()));
                self.transition(QueryState::Failed(err));
                notice
            }
        }
    }

    /// Run one full submission against `transport`.
    pub async fn submit<T: Transport>(&mut self, transport: &T) -> Notice {
        match self.begin() {
            Ok((_, outbound)) => {
                let result = transport.send(outbound).await;
                self.finish(result)
            }
            Err(notice) => notice,
        }
    }

    /// Merge whatever fields `text` yields into the form. Returns true when
    /// at least one field was found, meaning a submission should follow.
    pub fn apply_clipboard(&mut self, text: Option<&str>) -> bool {
        let Some(text) = text else {
            return false;
        };
        let found = extract(text);
        if found.is_empty() {
            debug!("clipboard text had no usable fields");
            return false;
        }
        self.input.merge(found);
        true
    }

    /// Apply clipboard text and submit if anything was picked up.
    pub async fn paste<T: Transport>(&mut self, text: Option<&str>, transport: &T) -> Option<Notice> {
        if self.apply_clipboard(text) {
            Some(self.submit(transport).await)
        } else {
            None
        }
    }

    /// Empty the form and forget any pending fetch.
    pub fn clear(&mut self) -> Notice {
        self.input = InputRecord::default();
        self.epoch += 1;
        self.transition(QueryState::Idle);
        Notice::FieldsCleared
    }
}
