use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info, warn};

use crate::{
    backend::PropertyBackend, config::FluidConfig, dispatch::FlashDispatchTable, engine,
    property::PropertyId, state::StatePoint, StateError,
};

/// The loaded fluid together with the backend that computes for it.
///
/// The backend is a stateful resource: every query runs against whatever fluid
/// was last set up. Owning it here, behind `&mut self`, keeps fluid switches
/// and queries from interleaving.
pub struct FluidContext<B> {
    backend: B,
    config: FluidConfig,
    table: &'static FlashDispatchTable,
    fluid: Option<String>,
}

impl<B: PropertyBackend> FluidContext<B> {
    pub fn new(backend: B, config: FluidConfig) -> Self {
        Self {
            backend,
            config,
            table: FlashDispatchTable::global(),
            fluid: None,
        }
    }

    /// Loads `name` from `<fluids_dir>/<name>.FLD`. Asking for the fluid that is
    /// already loaded does nothing.
    ///
    /// # Errors
    ///
    /// - Returns `StateError::FluidLoadError` with the backend's message if setup
    ///   fails. The context then has no fluid loaded.
    pub fn set_fluid(&mut self, name: &str) -> Result<(), StateError> {
        if self.fluid.as_deref() == Some(name) {
            debug!(fluid = name, "fluid already loaded");
            return Ok(());
        }

        let request = self.config.setup_request(name);
        info!(fluid = name, file = %request.fluid_file.display(), "loading fluid");

        // A failed setup leaves the backend in an unknown state.
        self.fluid = None;
        self.backend.setup(&request).map_err(|err| {
            warn!(fluid = name, code = err.code, message = %err.message, "fluid load failed");
            StateError::FluidLoadError(err.message)
        })?;

        self.fluid = Some(name.to_string());
        Ok(())
    }

    /// The loaded fluid name, empty until a fluid has been loaded.
    pub fn fluid(&self) -> &str {
        self.fluid.as_deref().unwrap_or("")
    }

    /// Resolves the state fixed by two typed property values.
    ///
    /// # Errors
    ///
    /// - Returns `StateError::NoFluidLoaded` before the first successful `set_fluid`.
    /// - Otherwise as [`engine::resolve_state`].
    pub fn resolve_state(
        &mut self,
        a: PropertyId,
        value_a: f64,
        b: PropertyId,
        value_b: f64,
    ) -> Result<StatePoint, StateError> {
        if self.fluid.is_none() {
            return Err(StateError::NoFluidLoaded);
        }
        engine::resolve_state(&mut self.backend, self.table, a, value_a, b, value_b)
    }

    /// Resolves a state from `(key, value)` coordinates such as `[("T", 300.0), ("P", 101325.0)]`.
    ///
    /// Keys are the uppercase letters `TPDHSEQ`. Values use
    /// Pa, kg/m³, J/kg and J/kg-K.
    ///
    /// # Errors
    ///
    /// - Returns `StateError::InvalidInputShape` unless there are exactly two
    ///   entries with distinct recognized keys.
    /// - Otherwise as [`FluidContext::resolve_state`].
    pub fn state_point<I, K>(&mut self, coords: I) -> Result<StatePoint, StateError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let [(a, value_a), (b, value_b)] = parse_coordinates(coords)?;
        self.resolve_state(a, value_a, b, value_b)
    }

    pub fn config(&self) -> &FluidConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}

fn parse_coordinates<I, K>(coords: I) -> Result<[(PropertyId, f64); 2], StateError>
where
    I: IntoIterator<Item = (K, f64)>,
    K: AsRef<str>,
{
    let parsed = coords
        .into_iter()
        .map(|(key, value)| key.as_ref().parse::<PropertyId>().map(|id| (id, value)))
        .collect::<Result<Vec<_>, _>>()?;

    match parsed.as_slice() {
        [(a, _), (b, _)] if a == b => Err(StateError::InvalidInputShape(format!(
            "property {a} given twice"
        ))),
        &[first, second] => Ok([first, second]),
        other => Err(StateError::InvalidInputShape(format!(
            "a state is fixed by exactly 2 values, got {}",
            other.len()
        ))),
    }
}

/// A [`FluidContext`] shared between threads.
///
/// Every operation holds the lock for its whole duration, so a query never
/// observes a fluid switch made by another thread mid-flight.
pub struct SharedFluidContext<B> {
    inner: Mutex<FluidContext<B>>,
}

impl<B: PropertyBackend> SharedFluidContext<B> {
    pub fn new(context: FluidContext<B>) -> Self {
        Self {
            inner: Mutex::new(context),
        }
    }

    /// Locks the context for a sequence of operations.
    pub fn lock(&self) -> Result<MutexGuard<'_, FluidContext<B>>, StateError> {
        self.inner.lock().map_err(|_| StateError::MutexPoisoned)
    }

    pub fn set_fluid(&self, name: &str) -> Result<(), StateError> {
        self.lock()?.set_fluid(name)
    }

    pub fn fluid(&self) -> Result<String, StateError> {
        Ok(self.lock()?.fluid().to_string())
    }

    pub fn state_point<I, K>(&self, coords: I) -> Result<StatePoint, StateError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        self.lock()?.state_point(coords)
    }

    /// Switches to `fluid` (if needed) and resolves the state under one lock.
    pub fn state_point_for<I, K>(&self, fluid: &str, coords: I) -> Result<StatePoint, StateError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut context = self.lock()?;
        context.set_fluid(fluid)?;
        context.state_point(coords)
    }

    pub fn into_inner(self) -> Result<FluidContext<B>, StateError> {
        self.inner.into_inner().map_err(|_| StateError::MutexPoisoned)
    }
}
