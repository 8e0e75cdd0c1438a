//! Result cache
//!
//! A sweep is a pure function of its request, so repeated requests (an
//! interactive front-end redrawing after a threshold tweak and back, for
//! instance) can be served from memory.
//!
//! Floats are keyed by their bit pattern: `0.5` and `0.5000000000000001`
//! are different keys, `-0.0` and `0.0` too. Failed sweeps are not cached.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::SweepError;
use crate::sweep::{Axis, SweepEngine, SweepRequest, SweepResult, VolumeUnit};

/// Exact identity of a [`SweepRequest`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SweepKey {
    bits: Vec<u64>,
    names: Vec<&'static str>,
}

impl SweepKey {
    /// Key of `request`
    pub fn from_request(request: &SweepRequest) -> Self {
        let mut bits = vec![
            request.target_ppm.to_bits(),
            request.faradaic_efficiency.to_bits(),
            request.voltage.to_bits(),
        ];
        push_axis(&mut bits, &request.spec.volume);
        push_axis(&mut bits, &request.spec.resistance);
        bits.push(match request.spec.volume_unit {
            VolumeUnit::Liters => 0,
            VolumeUnit::FluidOunces => 1,
        });

        let mut names = Vec::new();
        for entry in request.classifications() {
            bits.push(entry.thresholds.low().to_bits());
            bits.push(entry.thresholds.high().to_bits());
            names.push(entry.field.name());
            names.extend_from_slice(&entry.labeler.names);
            names.push(entry.labeler.unit);
        }

        Self { bits, names }
    }
}

fn push_axis(bits: &mut Vec<u64>, axis: &Axis) {
    bits.push(axis.min().to_bits());
    bits.push(axis.max().to_bits());
    bits.push(axis.samples() as u64);
}

/// Memoizing front of a [`SweepEngine`]
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use hocl_rs::sweep::{SweepCache, SweepEngine, SweepRequest};
///
/// let mut cache = SweepCache::new(SweepEngine::default());
/// let request = SweepRequest::default();
///
/// let first = cache.get_or_run(&request).unwrap();
/// let second = cache.get_or_run(&request).unwrap();
///
/// assert!(Arc::ptr_eq(&first, &second));
/// assert_eq!((cache.hits(), cache.misses()), (1, 1));
/// ```
#[derive(Debug)]
pub struct SweepCache {
    engine: SweepEngine,
    entries: HashMap<SweepKey, Arc<SweepResult>>,
    hits: u64,
    misses: u64,
}

impl SweepCache {
    /// Empty cache in front of `engine`
    pub fn new(engine: SweepEngine) -> Self {
        Self {
            engine,
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Underlying engine
    pub fn engine(&self) -> &SweepEngine {
        &self.engine
    }

    /// Cached result of `request`, running the sweep on a miss
    pub fn get_or_run(&mut self, request: &SweepRequest) -> Result<Arc<SweepResult>, SweepError> {
        let key = SweepKey::from_request(request);

        if let Some(result) = self.entries.get(&key) {
            self.hits += 1;
            log::trace!("sweep cache hit ({} entries)", self.entries.len());
            return Ok(Arc::clone(result));
        }

        self.misses += 1;
        log::trace!("sweep cache miss ({} entries)", self.entries.len());

        let result = Arc::new(self.engine.run(request)?);
        self.entries.insert(key, Arc::clone(&result));
        Ok(result)
    }

    /// Number of cached results
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached result (counters are kept)
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Requests served from memory
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Requests that ran the engine
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

impl Default for SweepCache {
    fn default() -> Self {
        Self::new(SweepEngine::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::{BandLabeler, CategoryThresholds, Classification, OutputField};
    use crate::sweep::SweepSpec;

    fn small_request() -> SweepRequest {
        SweepRequest::new(
            100.0,
            0.5,
            7.2,
            SweepSpec::new(Axis::new(0.1, 0.3, 3), Axis::new(1.0, 4.0, 4)),
        )
    }

    #[test]
    fn test_key_equality() {
        assert_eq!(
            SweepKey::from_request(&small_request()),
            SweepKey::from_request(&small_request())
        );

        let mut other = small_request();
        other.voltage = 7.3;
        assert_ne!(SweepKey::from_request(&small_request()), SweepKey::from_request(&other));
    }

    #[test]
    fn test_key_covers_classification() {
        let base = SweepKey::from_request(&small_request());

        let thresholds = small_request().with_time_thresholds(CategoryThresholds::new(1.0, 5.0));
        assert_ne!(base, SweepKey::from_request(&thresholds));

        let relabeled = small_request().with_classification(
            Classification::time(CategoryThresholds::new(2.0, 5.0))
                .labeler(BandLabeler::new(["Quick", "Okay", "Sluggish"], "s")),
        );
        assert_ne!(base, SweepKey::from_request(&relabeled));

        let mut unit = small_request();
        unit.spec = unit.spec.in_fluid_ounces();
        assert_ne!(base, SweepKey::from_request(&unit));
    }

    #[test]
    fn test_hit_and_miss() {
        let mut cache = SweepCache::default();
        assert!(cache.is_empty());

        let a = cache.get_or_run(&small_request()).unwrap();
        let b = cache.get_or_run(&small_request()).unwrap();
        assert!(Arc::ptr_eq(&a, &b));

        let power = small_request().with_power_thresholds(CategoryThresholds::new(10.0, 30.0));
        let c = cache.get_or_run(&power).unwrap();
        assert!(c.legend(OutputField::PowerWatts).is_some());

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 2);
    }

    #[test]
    fn test_errors_not_cached() {
        let mut cache = SweepCache::default();
        let mut bad = small_request();
        bad.spec.resistance = Axis::new(0.0, 4.0, 4);

        assert!(cache.get_or_run(&bad).is_err());
        assert!(cache.get_or_run(&bad).is_err());
        assert!(cache.is_empty());
        assert_eq!(cache.misses(), 2);
    }

    #[test]
    fn test_clear() {
        let mut cache = SweepCache::default();
        cache.get_or_run(&small_request()).unwrap();
        cache.clear();
        assert!(cache.is_empty());
        cache.get_or_run(&small_request()).unwrap();
        assert_eq!(cache.misses(), 2);
    }
}
