use std::time::{Duration, Instant};

/// Wall-clock limit for one solve, checked once per outer iteration.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Deadline(Option<Instant>);

impl Deadline {
    pub(crate) fn start(limit: Option<Duration>) -> Self {
        Self(limit.map(|d| Instant::now() + d))
    }

    pub(crate) fn expired(&self) -> bool {
        self.0.is_some_and(|t| Instant::now() >= t)
    }
}
