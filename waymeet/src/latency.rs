//! Simulated network latency for the mock-backed operations.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// The operations that pretend to talk to a server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Login,
    Signup,
    SocialLogin,
    ResetPassword,
    ResendVerification,
    FetchEvents,
    FetchMessages,
}

impl Operation {
    /// Base delay before scaling.
    pub const fn base(self) -> Duration {
        match self {
            Operation::Login => Duration::from_millis(1_000),
            Operation::Signup => Duration::from_millis(1_200),
            Operation::SocialLogin => Duration::from_millis(800),
            Operation::ResetPassword => Duration::from_millis(800),
            Operation::ResendVerification => Duration::from_millis(500),
            Operation::FetchEvents => Duration::from_millis(500),
            Operation::FetchMessages => Duration::from_millis(300),
        }
    }
}

/// Upper bound on any simulated delay, whatever the configured scale.
pub const MAX_DELAY: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Latency {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Multiplier applied to every base delay.
    #[serde(default = "default_scale")]
    pub scale: f64,
}

fn default_enabled() -> bool {
    true
}

fn default_scale() -> f64 {
    1.0
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            scale: default_scale(),
        }
    }
}

impl Latency {
    /// No artificial delay at all.
    pub const fn none() -> Self {
        Self {
            enabled: false,
            scale: 0.0,
        }
    }

    pub fn delay_for(&self, operation: Operation) -> Duration {
        if !self.enabled || !self.scale.is_finite() || self.scale <= 0.0 {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f64(operation.base().as_secs_f64() * self.scale)
            .map_or(MAX_DELAY, |delay| delay.min(MAX_DELAY))
    }

    pub async fn simulate(&self, operation: Operation) {
        let delay = self.delay_for(operation);
        if !delay.is_zero() {
            log::trace!("simulating {operation:?} latency of {delay:?}");
            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_base_delays() {
        let latency = Latency::default();
        assert_eq!(latency.delay_for(Operation::Login), Duration::from_millis(1_000));
        assert_eq!(latency.delay_for(Operation::FetchMessages), Duration::from_millis(300));
    }

    #[test]
    fn scale_and_disable() {
        let half = Latency {
            enabled: true,
            scale: 0.5,
        };
        assert_eq!(half.delay_for(Operation::Signup), Duration::from_millis(600));
        assert_eq!(Latency::none().delay_for(Operation::Signup), Duration::ZERO);
    }

    #[test]
    fn huge_scale_is_capped() {
        let config: crate::config::WaymeetConfig =
            toml::from_str("[latency]\nenabled = true\nscale = 1e30\n").unwrap();
        assert_eq!(config.latency.delay_for(Operation::Login), MAX_DELAY);

        let slow = Latency {
            enabled: true,
            scale: 1_000.0,
        };
        assert_eq!(slow.delay_for(Operation::FetchMessages), MAX_DELAY);
        assert_eq!(slow.delay_for(Operation::ResendVerification), MAX_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn simulate_advances_the_clock() {
        let started = tokio::time::Instant::now();
        Latency::default().simulate(Operation::FetchEvents).await;
        assert!(started.elapsed() >= Duration::from_millis(500));
    }
}
