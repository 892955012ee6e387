//! Thermodynamic state queries over a property backend such as NIST REFPROP.
//!
//! Given a fluid and two independent properties out of `T, P, D, H, S, E, Q`,
//! a [`FluidContext`] resolves the full equilibrium state and attaches the
//! transport properties that match its phase.
//!
//! ```no_run
//! # #[cfg(feature = "refprop")]
//! # fn main() -> Result<(), refprop_state::StateError> {
//! use refprop_state::{FluidConfig, FluidContext, RefpropBackend};
//!
//! let mut context = FluidContext::new(RefpropBackend::new()?, FluidConfig::from_env());
//! context.set_fluid("WATER")?;
//!
//! let point = context.state_point([("T", 373.15), ("Q", 0.5)])?;
//! println!("P = {} Pa", point.state.P);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "refprop"))]
//! # fn main() {}
//! ```
#![allow(non_snake_case)]

pub mod backend;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod engine;
pub mod errors;
pub mod flash_routines;
pub mod property;
#[cfg(feature = "refprop")]
mod refprop;
pub mod state;
pub mod units;

pub use backend::{
    BackendError, BackendResult, HeatCapacities, PropertyBackend, SetupRequest, TransportOutput,
};
pub use config::FluidConfig;
pub use context::{FluidContext, SharedFluidContext};
pub use dispatch::FlashDispatchTable;
pub use errors::StateError;
pub use flash_routines::{FlashOutput, FlashRoutine};
pub use property::PropertyId;
#[cfg(feature = "refprop")]
pub use refprop::RefpropBackend;
pub use state::{
    SinglePhaseTransport, StatePoint, ThermodynamicState, TransportProperties, TwoPhaseTransport,
};
