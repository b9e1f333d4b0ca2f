//! Render-result cache and preview supersession.
//!
//! Both structures are explicit objects owned by `AppState` and passed into
//! the render path, not ambient module state. The cache skips redundant
//! compilation when (flavor, source) is unchanged; the preview slot makes
//! the most recent render request authoritative, discarding results of
//! requests it superseded.

use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, VecDeque};
use std::hash::{Hash, Hasher};

use bytes::Bytes;

use crate::render::TemplateFlavor;

pub const DEFAULT_CACHE_CAPACITY: usize = 10;

/// Cache key: 64-bit hash over the dialect and the complete markup source
/// (the source already encodes template and document contents).
pub fn render_cache_key(flavor: TemplateFlavor, source: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    flavor.hash(&mut hasher);
    source.hash(&mut hasher);
    hasher.finish()
}

/// Bounded map of compiled PDFs, evict-oldest on overflow.
pub struct RenderCache {
    capacity: usize,
    entries: HashMap<u64, Bytes>,
    order: VecDeque<u64>,
}

impl RenderCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    pub fn get(&self, key: u64) -> Option<Bytes> {
        self.entries.get(&key).cloned()
    }

    pub fn insert(&mut self, key: u64, pdf: Bytes) {
        if self.entries.contains_key(&key) {
            self.entries.insert(key, pdf);
            return;
        }
        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
        self.entries.insert(key, pdf);
        self.order.push_back(key);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Generation-token preview slot.
///
/// `begin` issues a monotonically increasing token per render request;
/// `publish` applies a result only when its token is still the latest
/// issued. A compile that finishes after a newer request has started is
/// discarded — effective cancellation without cancelling the in-flight
/// call.
#[derive(Default)]
pub struct PreviewSlot {
    latest_issued: u64,
    published: Option<(u64, Bytes)>,
    discarded: u64,
}

impl PreviewSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the token for a new render request.
    pub fn begin(&mut self) -> u64 {
        self.latest_issued += 1;
        self.latest_issued
    }

    /// Apply a completed result. Returns whether it became authoritative.
    pub fn publish(&mut self, token: u64, pdf: Bytes) -> bool {
        if token != self.latest_issued {
            self.discarded += 1;
            tracing::debug!(token, latest = self.latest_issued, "discarding stale render result");
            return false;
        }
        self.published = Some((token, pdf));
        true
    }

    /// The latest authoritative PDF, if any render has completed.
    pub fn latest(&self) -> Option<Bytes> {
        self.published.as_ref().map(|(_, pdf)| pdf.clone())
    }

    /// Number of stale results dropped so far.
    pub fn discarded(&self) -> u64 {
        self.discarded
    }
}
