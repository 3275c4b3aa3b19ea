//! Memoizing wrapper around any [`TextLayoutEngine`].

use std::{
    hash::{Hash, Hasher},
    num::NonZeroUsize,
};

use lru::LruCache;
use parking_lot::Mutex;

use super::{MeasureError, TextLayoutEngine};
use crate::{Dp, DpSize, StyledText};

const DEFAULT_CAPACITY: NonZeroUsize = NonZeroUsize::new(128).expect("non-zero");

/// Hashed by fingerprint, compared by the full text so that fingerprint
/// collisions never share an entry.
#[derive(Debug, Clone, PartialEq)]
struct MeasureKey {
    fingerprint: u64,
    text: StyledText,
    width: u64,
    max_rows: Option<usize>,
}

impl MeasureKey {
    fn new(text: &StyledText, width: Dp, max_rows: Option<usize>) -> Self {
        Self {
            fingerprint: text.fingerprint(),
            text: text.clone(),
            width: width.0.to_bits(),
            max_rows,
        }
    }
}

impl Eq for MeasureKey {}

impl Hash for MeasureKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fingerprint.hash(state);
        self.width.hash(state);
        self.max_rows.hash(state);
    }
}

struct Caches {
    row_counts: LruCache<MeasureKey, usize>,
    sizes: LruCache<MeasureKey, DpSize>,
}

/// Memoizes the results of another [`TextLayoutEngine`].
///
/// Results are keyed by the text (bucketed by its
/// [fingerprint](StyledText::fingerprint)), the width and the row limit. Failures are never cached, so a transient
/// engine failure is retried on the next request.
pub struct CachedLayoutEngine<E> {
    inner: E,
    caches: Mutex<Caches>,
}

impl<E: TextLayoutEngine> CachedLayoutEngine<E> {
    /// Wraps `inner` with room for 128 entries per measurement kind.
    pub fn new(inner: E) -> Self {
        Self::with_capacity(inner, DEFAULT_CAPACITY)
    }

    /// Wraps `inner` with room for `capacity` entries per measurement kind.
    pub fn with_capacity(inner: E, capacity: NonZeroUsize) -> Self {
        Self {
            inner,
            caches: Mutex::new(Caches {
                row_counts: LruCache::new(capacity),
                sizes: LruCache::new(capacity),
            }),
        }
    }

    /// The wrapped engine.
    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Drops every cached result, e.g. after fonts were added to the font
    /// system.
    pub fn clear(&self) {
        let mut caches = self.caches.lock();
        caches.row_counts.clear();
        caches.sizes.clear();
    }
}

impl<E> std::fmt::Debug for CachedLayoutEngine<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let caches = self.caches.lock();
        f.debug_struct("CachedLayoutEngine")
            .field("row_counts", &caches.row_counts.len())
            .field("sizes", &caches.sizes.len())
            .finish_non_exhaustive()
    }
}

impl<E: TextLayoutEngine> TextLayoutEngine for CachedLayoutEngine<E> {
    fn measure_row_count(
        &self,
        text: &StyledText,
        container_width: Dp,
    ) -> Result<usize, MeasureError> {
        let key = MeasureKey::new(text, container_width, None);
        if let Some(rows) = self.caches.lock().row_counts.get(&key) {
            return Ok(*rows);
        }

        let rows = self.inner.measure_row_count(text, container_width)?;
        self.caches.lock().row_counts.put(key, rows);
        Ok(rows)
    }

    fn measure(
        &self,
        text: &StyledText,
        max_width: Dp,
        max_rows: Option<usize>,
    ) -> Result<DpSize, MeasureError> {
        let key = MeasureKey::new(text, max_width, max_rows);
        if let Some(size) = self.caches.lock().sizes.get(&key) {
            return Ok(*size);
        }

        let size = self.inner.measure(text, max_width, max_rows)?;
        self.caches.lock().sizes.put(key, size);
        Ok(size)
    }
}
