//! Simulated latency at the engines' suspension points.
//!
//! The pause length is always drawn from the report's stream so that results
//! do not depend on whether sleeping is enabled.

use std::time::Duration;

use tracing::trace;

use crate::constants::latency::MAX_SCALE;

/// Scaled artificial pause
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedLatency {
    scale: f64,
}

impl SimulatedLatency {
    /// Real-time pauses (scale 1.0)
    pub fn realtime() -> Self {
        Self { scale: 1.0 }
    }

    /// No sleeping at all; draws are still consumed by callers
    pub fn disabled() -> Self {
        Self { scale: 0.0 }
    }

    /// Custom scale, clamped to `0.0..=MAX_SCALE`; non-finite values disable pauses
    pub fn scaled(scale: f64) -> Self {
        let scale = if scale.is_finite() {
            scale.clamp(0.0, MAX_SCALE)
        } else {
            0.0
        };
        Self { scale }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn is_enabled(&self) -> bool {
        self.scale > 0.0
    }

    /// Pause length for `base_ms + draw * jitter_ms`, after scaling.
    pub fn duration_for(&self, base_ms: f64, jitter_ms: f64, draw: f64) -> Duration {
        let millis = (base_ms + draw * jitter_ms) * self.scale;
        Duration::from_secs_f64(millis.max(0.0) / 1000.0)
    }

    /// Suspend for the scaled pause, or return immediately when disabled.
    pub async fn pause(&self, base_ms: f64, jitter_ms: f64, draw: f64) {
        if !self.is_enabled() {
            return;
        }
        let duration = self.duration_for(base_ms, jitter_ms, draw);
        trace!("Simulated latency: {:?}", duration);
        tokio::time::sleep(duration).await;
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::realtime()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_scaling() {
        let latency = SimulatedLatency::realtime();
        assert_eq!(
            latency.duration_for(1500.0, 1500.0, 0.5),
            Duration::from_millis(2250)
        );

        let half = SimulatedLatency::scaled(0.5);
        assert_eq!(
            half.duration_for(600.0, 800.0, 0.5),
            Duration::from_millis(500)
        );
    }

    #[test]
    fn test_scale_is_clamped() {
        assert_eq!(SimulatedLatency::scaled(-3.0).scale(), 0.0);
        assert_eq!(SimulatedLatency::scaled(1e9).scale(), MAX_SCALE);
        assert_eq!(SimulatedLatency::scaled(f64::NAN).scale(), 0.0);
        assert!(!SimulatedLatency::disabled().is_enabled());
    }

    #[tokio::test]
    async fn test_disabled_pause_returns_immediately() {
        let start = std::time::Instant::now();
        SimulatedLatency::disabled().pause(10_000.0, 0.0, 0.0).await;
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
