//! Thread-safe handle for sharing one component between callers.
//!
//! Components are plain single-owner values. When several threads must feed
//! the same instance, wrap it in [`Shared`]: each call runs its computation
//! and its history append under one lock, so the history order is the
//! order in which calls acquired the lock.

use crate::efficiency::EfficiencyEstimator;
use crate::regulator::VoltageCorrector;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable, mutex-guarded handle to a component.
///
/// # Example
///
/// ```rust
/// use powerwise::{Shared, VoltageCorrector};
/// use std::thread;
///
/// let regulator = Shared::new(VoltageCorrector::default());
///
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let regulator = regulator.clone();
///         thread::spawn(move || regulator.regulate(12.0))
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(regulator.with(|r| r.history().len()), 4);
/// ```
#[derive(Debug)]
pub struct Shared<C> {
    inner: Arc<Mutex<C>>,
}

impl<C> Clone for Shared<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C> Shared<C> {
    pub fn new(component: C) -> Self {
        Self {
            inner: Arc::new(Mutex::new(component)),
        }
    }

    /// Run `f` with exclusive access to the component.
    pub fn with<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }
}

impl Shared<VoltageCorrector> {
    pub fn regulate(&self, input_voltage: f64) -> f64 {
        self.with(|regulator| regulator.regulate(input_voltage))
    }

    /// Regulate a whole batch without interleaving other callers.
    pub fn simulate(&self, input_voltages: &[f64]) -> Vec<f64> {
        self.with(|regulator| regulator.simulate(input_voltages))
    }
}

impl Shared<EfficiencyEstimator> {
    pub fn optimize(&self, input_voltage: f64, load_current: f64) -> f64 {
        self.with(|estimator| estimator.optimize(input_voltage, load_current))
    }
}
