use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use macropanel_core::{PanelError, RawSeries, SeriesSource};

/// Instruction for how `load` should behave for a given key.
#[derive(Clone)]
pub enum MockBehavior {
    /// Return the provided series.
    Return(RawSeries),
    /// Fail with the provided error.
    Fail(PanelError),
}

#[derive(Default)]
struct InternalState {
    rules: HashMap<String, MockBehavior>,
    requests: Vec<String>,
}

/// Controller handle used by tests to drive the dynamic source from the outside.
pub struct DynamicSourceController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicSourceController {
    /// Set the behavior for `load` calls for a specific key.
    pub fn set_behavior(&self, key: impl Into<String>, behavior: MockBehavior) {
        lock(&self.state).rules.insert(key.into(), behavior);
    }

    /// Forget the behavior for a key; the source stops providing it.
    pub fn clear_behavior(&self, key: &str) {
        lock(&self.state).rules.remove(key);
    }

    /// Keys passed to `load`, in call order.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        lock(&self.state).requests.clone()
    }
}

/// A source whose per-key behavior is configured at runtime.
pub struct DynamicSource {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicSource {
    /// Create a source and the controller that drives it.
    #[must_use]
    pub fn new_with_controller(name: &'static str) -> (Arc<Self>, DynamicSourceController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let source = Arc::new(Self {
            name,
            state: Arc::clone(&state),
        });
        (source, DynamicSourceController { state })
    }
}

impl SeriesSource for DynamicSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn provides(&self, key: &str) -> bool {
        lock(&self.state).rules.contains_key(key)
    }

    fn load(&self, key: &str) -> Result<RawSeries, PanelError> {
        let mut guard = lock(&self.state);
        guard.requests.push(key.to_string());
        match guard.rules.get(key) {
            Some(MockBehavior::Return(series)) => Ok(series.clone()),
            Some(MockBehavior::Fail(err)) => Err(err.clone()),
            None => Err(PanelError::not_found(format!("{} series {key}", self.name))),
        }
    }
}

// A panicking test thread must not wedge the other assertions.
fn lock(state: &Mutex<InternalState>) -> MutexGuard<'_, InternalState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
