mod common;

use std::{path::PathBuf, sync::Arc, thread};

use common::ToyWater;
use refprop_state::{FluidConfig, FluidContext, SharedFluidContext, StateError};

fn context() -> FluidContext<ToyWater> {
    FluidContext::new(ToyWater::new(), FluidConfig::new("/opt/refprop/fluids"))
}

#[test]
fn starts_with_no_fluid() {
    let context = context();
    assert_eq!(context.fluid(), "");
    assert!(context.backend().setups.is_empty());
}

#[test]
fn loading_the_same_fluid_twice_sets_up_once() {
    let mut context = context();
    context.set_fluid("WATER").unwrap();
    context.set_fluid("WATER").unwrap();
    assert_eq!(context.fluid(), "WATER");
    assert_eq!(context.backend().setups.len(), 1);

    context.set_fluid("NITROGEN").unwrap();
    context.set_fluid("WATER").unwrap();
    assert_eq!(context.fluid(), "WATER");
    assert_eq!(context.backend().setups.len(), 3);
}

#[test]
fn setup_request_comes_from_the_config() {
    let mut context = context();
    context.set_fluid("NITROGEN").unwrap();

    let request = &context.backend().setups[0];
    assert_eq!(request.fluid, "NITROGEN");
    assert_eq!(
        request.fluid_file,
        PathBuf::from("/opt/refprop/fluids/NITROGEN.FLD")
    );
    assert_eq!(
        request.mixture_file,
        PathBuf::from("/opt/refprop/fluids/HMX.BNC")
    );
    assert_eq!(request.reference_state, "DEF");
}

#[test]
fn unknown_fluid_reports_the_backend_message() {
    let mut context = context();
    context.set_fluid("WATER").unwrap();

    let err = context.set_fluid("urine").unwrap_err();
    assert_eq!(
        err,
        StateError::FluidLoadError(
            "[SETUP error 101] error in opening file /opt/refprop/fluids/urine.FLD".to_string()
        )
    );
    assert_eq!(context.fluid(), "");

    let err = context
        .state_point([("T", 300.0), ("P", 101_325.0)])
        .unwrap_err();
    assert_eq!(err, StateError::NoFluidLoaded);
}

#[test]
fn retrying_after_a_failed_load_sets_up_again() {
    let mut context = context();
    context.set_fluid("WATER").unwrap();
    let _ = context.set_fluid("urine");
    context.set_fluid("WATER").unwrap();
    assert_eq!(context.backend().setups.len(), 3);
}

#[test]
fn config_is_kept() {
    let context = context();
    assert_eq!(
        context.config().fluids_dir,
        PathBuf::from("/opt/refprop/fluids")
    );
    let backend = context.into_backend();
    assert!(backend.calls.is_empty());
}

#[test]
fn shared_context_switches_and_queries_atomically() {
    let shared = Arc::new(SharedFluidContext::new(context()));
    let handles: Vec<_> = ["WATER", "NITROGEN"]
        .into_iter()
        .map(|fluid| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for i in 0..50 {
                    let point = shared
                        .state_point_for(fluid, [("T", 300.0 + i as f64), ("P", 101_325.0)])
                        .unwrap();
                    assert_eq!(point.state.T, 300.0 + i as f64);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let context = Arc::try_unwrap(shared)
        .ok()
        .expect("threads joined")
        .into_inner()
        .unwrap();
    let routines = context.backend().routines();

    assert_eq!(routines.iter().filter(|r| **r == "WMOL").count(), 100);
    // A setup is always followed by the query that asked for it.
    for pair in routines.windows(2) {
        if pair[0] == "SETUP" {
            assert_eq!(pair[1], "WMOL");
        }
    }
    assert!(context.fluid() == "WATER" || context.fluid() == "NITROGEN");
}

#[test]
fn shared_context_reports_the_loaded_fluid() {
    let shared = SharedFluidContext::new(context());
    assert_eq!(shared.fluid().unwrap(), "");
    shared.set_fluid("WATER").unwrap();
    assert_eq!(shared.fluid().unwrap(), "WATER");

    let point = shared.state_point([("T", 373.15), ("Q", 1.0)]).unwrap();
    assert!(point.transport.two_phase().is_some());

    let guard = shared.lock().unwrap();
    assert_eq!(guard.backend().setups.len(), 1);
}
