//! Metrics registry for portfolio-agent
//!
//! - Counters only, monotonic
//! - Reset only on process start
//! - Thread-safe, lock-free

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Selection counters shared across requests
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    requests_received: AtomicU64,
    requests_rejected: AtomicU64,
    plans_translated: AtomicU64,
    plans_defaulted: AtomicU64,
    plans_empty: AtomicU64,
    selections_completed: AtomicU64,
    selections_failed: AtomicU64,
    llm_failures: AtomicU64,
}

/// Point-in-time copy of every counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub requests_received: u64,
    pub requests_rejected: u64,
    pub plans_translated: u64,
    pub plans_defaulted: u64,
    pub plans_empty: u64,
    pub selections_completed: u64,
    pub selections_failed: u64,
    pub llm_failures: u64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_requests_received(&self) {
        self.requests_received.fetch_add(1, Ordering::Relaxed);
    }

    /// Request missing required fields
    pub fn increment_requests_rejected(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_plans_translated(&self) {
        self.plans_translated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_plans_defaulted(&self) {
        self.plans_defaulted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_plans_empty(&self) {
        self.plans_empty.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_selections_completed(&self) {
        self.selections_completed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_selections_failed(&self) {
        self.selections_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_llm_failures(&self) {
        self.llm_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_received: self.requests_received.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
            plans_translated: self.plans_translated.load(Ordering::Relaxed),
            plans_defaulted: self.plans_defaulted.load(Ordering::Relaxed),
            plans_empty: self.plans_empty.load(Ordering::Relaxed),
            selections_completed: self.selections_completed.load(Ordering::Relaxed),
            selections_failed: self.selections_failed.load(Ordering::Relaxed),
            llm_failures: self.llm_failures.load(Ordering::Relaxed),
        }
    }
}
