// src/job_market/policy.rs
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

use crate::core::{CollectorSettings, DelayRange, MAX_DELAY_SECS};

const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:122.0) Gecko/20100101 Firefox/122.0",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0",
];

/// Client identity and pacing for outgoing requests
pub trait ThrottlePolicy: Send + Sync {
    fn user_agent(&self) -> String;

    /// Pause after each processed posting
    fn posting_delay(&self) -> Duration;

    /// Pause after each search-result page
    fn page_delay(&self) -> Duration;
}

/// Random browser user agent and uniformly random pauses
#[derive(Debug, Clone)]
pub struct RandomizedPolicy {
    posting_delay: DelayRange,
    page_delay: DelayRange,
}

impl RandomizedPolicy {
    pub fn new(posting_delay: DelayRange, page_delay: DelayRange) -> Self {
        Self {
            posting_delay,
            page_delay,
        }
    }

    pub fn from_settings(settings: &CollectorSettings) -> Self {
        Self::new(settings.posting_delay_secs, settings.page_delay_secs)
    }

    /// Random agents, no pauses
    pub fn without_delays() -> Self {
        Self::new(DelayRange(0.0, 0.0), DelayRange(0.0, 0.0))
    }

    fn sample(range: DelayRange) -> Duration {
        let clamp = |secs: f64| {
            if secs.is_nan() {
                0.0
            } else {
                secs.clamp(0.0, MAX_DELAY_SECS)
            }
        };
        let (low, high) = (clamp(range.min()), clamp(range.max()));
        let secs = if high <= low {
            low
        } else {
            rand::thread_rng().gen_range(low..=high)
        };
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO)
    }
}

impl ThrottlePolicy for RandomizedPolicy {
    fn user_agent(&self) -> String {
        USER_AGENTS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(USER_AGENTS[0])
            .to_string()
    }

    fn posting_delay(&self) -> Duration {
        Self::sample(self.posting_delay)
    }

    fn page_delay(&self) -> Duration {
        Self::sample(self.page_delay)
    }
}

/// Fixed agent and zero pauses, for offline runs and tests
#[derive(Debug, Clone, Default)]
pub struct NoDelayPolicy;

impl ThrottlePolicy for NoDelayPolicy {
    fn user_agent(&self) -> String {
        USER_AGENTS[0].to_string()
    }

    fn posting_delay(&self) -> Duration {
        Duration::ZERO
    }

    fn page_delay(&self) -> Duration {
        Duration::ZERO
    }
}
