//! Time-based downsampling gate.
//!
//! The gate keeps one "last logged time" for the whole trace, not one per
//! RNTI. A sample retained for one terminal therefore pushes back the next
//! eligible sample of every other terminal as well.

use crate::utils::config::{GATE_INTERVAL, GATE_START_TIME};

/// Gate parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateConfig {
    /// Samples earlier than this (seconds) are never retained
    pub start_time: f64,

    /// Minimum spacing (seconds) between two retained samples
    pub interval: f64,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            start_time: GATE_START_TIME,
            interval: GATE_INTERVAL,
        }
    }
}

/// Global monotonic gate state
#[derive(Debug, Clone)]
pub struct TimeGate {
    config: GateConfig,
    last_logged: Option<f64>,
}

impl TimeGate {
    pub fn new(config: GateConfig) -> Self {
        Self {
            config,
            last_logged: None,
        }
    }

    /// Decide whether a sample at `time` is retained
    ///
    /// **Public** - main entry point of the gate
    ///
    /// On acceptance the gate advances to `time`; on rejection it is untouched.
    pub fn admit(&mut self, time: f64) -> bool {
        if !self.would_admit(time) {
            return false;
        }
        self.last_logged = Some(time);
        true
    }

    /// Check a time against the gate without advancing it
    pub fn would_admit(&self, time: f64) -> bool {
        if time.is_nan() || time < self.config.start_time {
            return false;
        }
        match self.last_logged {
            Some(last) => time >= last + self.config.interval,
            None => true,
        }
    }

    /// Time of the last retained sample, if any
    pub fn last_logged(&self) -> Option<f64> {
        self.last_logged
    }

    pub fn config(&self) -> GateConfig {
        self.config
    }
}

impl Default for TimeGate {
    fn default() -> Self {
        Self::new(GateConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_before_start() {
        let mut gate = TimeGate::default();
        assert!(!gate.admit(0.05));
        assert!(!gate.admit(0.0999));
        assert_eq!(gate.last_logged(), None);
    }

    #[test]
    fn test_first_sample_at_start_time() {
        let mut gate = TimeGate::default();
        assert!(gate.admit(0.1));
        assert_eq!(gate.last_logged(), Some(0.1));
    }

    #[test]
    fn test_interval_enforced() {
        let mut gate = TimeGate::default();
        assert!(gate.admit(0.1));
        assert!(!gate.admit(0.102));
        assert!(gate.admit(0.105));
        assert!(!gate.admit(0.107));
        assert!(gate.admit(0.11));
        assert_eq!(gate.last_logged(), Some(0.11));
    }

    #[test]
    fn test_rejection_does_not_advance() {
        let mut gate = TimeGate::default();
        assert!(gate.admit(0.2));
        assert!(!gate.admit(0.201));
        // Still measured from 0.2, not from the rejected 0.201
        assert!(gate.admit(0.203));
    }

    #[test]
    fn test_nan_never_admitted() {
        let mut gate = TimeGate::default();
        assert!(!gate.admit(f64::NAN));
        assert!(gate.admit(0.3));
        assert!(!gate.admit(f64::NAN));
    }

    #[test]
    fn test_custom_config() {
        let mut gate = TimeGate::new(GateConfig {
            start_time: 0.0,
            interval: 1.0,
        });
        assert!(gate.admit(0.0));
        assert!(!gate.admit(0.5));
        assert!(gate.admit(1.0));
        assert_eq!(gate.config().interval, 1.0);
    }
}
