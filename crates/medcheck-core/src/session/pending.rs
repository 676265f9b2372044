//! Single-flight gates for simulated operations.
//!
//! While an operation of a kind is in flight its gate is closed, and a second
//! start is refused rather than queued. The gate reopens when the guard drops,
//! whether the operation finished or its future was abandoned.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Kinds of simulated slow operations, one per screen that starts them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    Scan,
    BatchSearch,
    Sms,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Scan, Operation::BatchSearch, Operation::Sms];

    pub fn key(&self) -> &'static str {
        match self {
            Operation::Scan => "scan",
            Operation::BatchSearch => "batch-search",
            Operation::Sms => "sms",
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct PendingGates {
    scan: Arc<AtomicBool>,
    batch_search: Arc<AtomicBool>,
    sms: Arc<AtomicBool>,
}

impl PendingGates {
    fn flag(&self, op: Operation) -> &Arc<AtomicBool> {
        match op {
            Operation::Scan => &self.scan,
            Operation::BatchSearch => &self.batch_search,
            Operation::Sms => &self.sms,
        }
    }

    /// Close the gate for `op`. Returns `None` if it is already closed.
    pub fn try_begin(&self, op: Operation) -> Option<PendingGuard> {
        let flag = self.flag(op);
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| PendingGuard {
                op,
                flag: Arc::clone(flag),
            })
    }

    pub fn is_pending(&self, op: Operation) -> bool {
        self.flag(op).load(Ordering::Acquire)
    }
}

/// Holds a gate closed until dropped.
#[must_use = "the operation is only pending while the guard is alive"]
#[derive(Debug)]
pub struct PendingGuard {
    op: Operation,
    flag: Arc<AtomicBool>,
}

impl PendingGuard {
    pub fn operation(&self) -> Operation {
        self.op
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
