//! A deterministic stand-in for REFPROP that knows just enough about water.
//!
//! Saturation follows Clausius-Clapeyron anchored at the normal boiling point,
//! the vapor is an ideal gas, and the liquid is incompressible. Every call is
//! recorded so tests can check what reached the backend and in which units.
#![allow(dead_code, non_snake_case)]

use refprop_state::{
    BackendError, BackendResult, FlashOutput, HeatCapacities, PropertyBackend, PropertyId,
    SetupRequest, TransportOutput,
};

pub const WATER_MOLAR_MASS: f64 = 18.015268;

/// J/(mol-K), equal to kPa-L/(mol-K).
const R: f64 = 8.314462618;
const T_BOIL: f64 = 373.15;
const P_BOIL: f64 = 101.325;
const H_VAP: f64 = 40_650.0;
const T_REF: f64 = 273.15;
const D_LIQUID: f64 = 55.3;
const CP_LIQUID: f64 = 75.9;
const CV_LIQUID: f64 = 67.9;
const CP_VAPOR: f64 = 37.5;
const CV_VAPOR: f64 = 28.0;

/// REFPROP's quality markers for subcooled liquid and superheated vapor.
pub const Q_LIQUID: f64 = -998.0;
pub const Q_VAPOR: f64 = 998.0;

pub const SIGMA: f64 = 0.0589;

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub routine: &'static str,
    pub args: Vec<f64>,
}

pub struct ToyWater {
    pub known_fluids: Vec<String>,
    pub setups: Vec<SetupRequest>,
    pub calls: Vec<Call>,
    /// Routine name that reports an error instead of computing.
    pub fail_on: Option<&'static str>,
}

impl ToyWater {
    pub fn new() -> Self {
        Self {
            known_fluids: vec!["WATER".to_string(), "NITROGEN".to_string()],
            setups: Vec::new(),
            calls: Vec::new(),
            fail_on: None,
        }
    }

    pub fn failing_on(routine: &'static str) -> Self {
        Self {
            fail_on: Some(routine),
            ..Self::new()
        }
    }

    pub fn routines(&self) -> Vec<&'static str> {
        self.calls.iter().map(|c| c.routine).collect()
    }

    pub fn last_flash(&self) -> Option<&Call> {
        self.calls.iter().rev().find(|c| c.routine.ends_with("FLSH"))
    }

    fn record(&mut self, routine: &'static str, args: &[f64]) -> BackendResult<()> {
        self.calls.push(Call {
            routine,
            args: args.to_vec(),
        });
        if self.fail_on == Some(routine) {
            return Err(BackendError::new(
                1,
                format!("[{routine} error 1] iteration did not converge"),
            ));
        }
        Ok(())
    }
}

pub fn saturation_pressure(T: f64) -> f64 {
    P_BOIL * (-(H_VAP / R) * (1.0 / T - 1.0 / T_BOIL)).exp()
}

pub fn saturation_temperature(P: f64) -> f64 {
    1.0 / (1.0 / T_BOIL - (R / H_VAP) * (P / P_BOIL).ln())
}

fn liquid_enthalpy(T: f64) -> f64 {
    CP_LIQUID * (T - T_REF)
}

fn saturated(T: f64, P: f64, q: f64) -> FlashOutput {
    let Dl = D_LIQUID;
    let Dv = P / (R * T);
    let D = 1.0 / (q / Dv + (1.0 - q) / Dl);
    let h = liquid_enthalpy(T) + q * H_VAP;
    FlashOutput {
        T,
        P,
        D,
        Dl,
        Dv,
        x: 1.0,
        y: 1.0,
        q,
        e: h - P / D,
        h,
        s: CP_LIQUID * (T / T_REF).ln() + q * H_VAP / T,
        Cv: None,
        Cp: None,
        w: 0.0,
    }
}

fn single_phase(T: f64, P: f64) -> FlashOutput {
    if P > saturation_pressure(T) {
        let h = liquid_enthalpy(T);
        FlashOutput {
            T,
            P,
            D: D_LIQUID,
            Dl: D_LIQUID,
            Dv: 0.0,
            x: 1.0,
            y: 0.0,
            q: Q_LIQUID,
            e: h - P / D_LIQUID,
            h,
            s: CP_LIQUID * (T / T_REF).ln(),
            Cv: Some(CV_LIQUID),
            Cp: Some(CP_LIQUID),
            w: 1500.0,
        }
    } else {
        let T_sat = saturation_temperature(P);
        let D = P / (R * T);
        let h = liquid_enthalpy(T_sat) + H_VAP + CP_VAPOR * (T - T_sat);
        FlashOutput {
            T,
            P,
            D,
            Dl: 0.0,
            Dv: D,
            x: 0.0,
            y: 1.0,
            q: Q_VAPOR,
            e: h - P / D,
            h,
            s: CP_LIQUID * (T_sat / T_REF).ln() + H_VAP / T_sat + CP_VAPOR * (T / T_sat).ln(),
            Cv: Some(CV_VAPOR),
            Cp: Some(CP_VAPOR),
            w: 470.0,
        }
    }
}

/// A compressed-liquid answer with the two inputs echoed back.
fn echoed(inputs: [(PropertyId, f64); 2]) -> FlashOutput {
    let mut out = single_phase(300.0, P_BOIL);
    for (id, value) in inputs {
        let field = match id {
            PropertyId::T => &mut out.T,
            PropertyId::P => &mut out.P,
            PropertyId::D => &mut out.D,
            PropertyId::H => &mut out.h,
            PropertyId::S => &mut out.s,
            PropertyId::E => &mut out.e,
            PropertyId::Q => &mut out.q,
        };
        *field = value;
    }
    out
}

impl PropertyBackend for ToyWater {
    fn setup(&mut self, request: &SetupRequest) -> BackendResult<()> {
        self.record("SETUP", &[])?;
        self.setups.push(request.clone());
        if self.known_fluids.contains(&request.fluid) {
            Ok(())
        } else {
            Err(BackendError::new(
                101,
                format!(
                    "[SETUP error 101] error in opening file {}",
                    request.fluid_file.display()
                ),
            ))
        }
    }

    fn molar_mass(&mut self, z: f64) -> BackendResult<f64> {
        self.record("WMOL", &[z])?;
        Ok(WATER_MOLAR_MASS * z)
    }

    fn transport(&mut self, t: f64, d: f64, z: f64) -> BackendResult<TransportOutput> {
        self.record("TRNPRP", &[t, d, z])?;
        Ok(if d > 10.0 {
            TransportOutput {
                eta: 281.7,
                tcx: 0.679,
            }
        } else {
            TransportOutput {
                eta: 12.27,
                tcx: 0.0251,
            }
        })
    }

    fn surface_tension(&mut self, t: f64, dl: f64, dv: f64, z: f64) -> BackendResult<f64> {
        self.record("SURTEN", &[t, dl, dv, z])?;
        Ok(SIGMA)
    }

    fn heat_capacities(&mut self, t: f64, d: f64, z: f64) -> BackendResult<HeatCapacities> {
        self.record("CVCP", &[t, d, z])?;
        Ok(if d > 10.0 {
            HeatCapacities {
                cv: CV_LIQUID,
                cp: CP_LIQUID,
            }
        } else {
            HeatCapacities {
                cv: CV_VAPOR,
                cp: CP_VAPOR,
            }
        })
    }

    fn tp_flash(&mut self, t: f64, p: f64, z: f64) -> BackendResult<FlashOutput> {
        self.record("TPFLSH", &[t, p, z])?;
        Ok(single_phase(t, p))
    }

    fn td_flash(&mut self, t: f64, d: f64, z: f64) -> BackendResult<FlashOutput> {
        self.record("TDFLSH", &[t, d, z])?;
        Ok(echoed([(PropertyId::T, t), (PropertyId::D, d)]))
    }

    fn th_flash(&mut self, t: f64, h: f64, z: f64, kr: i32) -> BackendResult<FlashOutput> {
        self.record("THFLSH", &[t, h, z, kr as f64])?;
        Ok(echoed([(PropertyId::T, t), (PropertyId::H, h)]))
    }

    fn ts_flash(&mut self, t: f64, s: f64, z: f64, kr: i32) -> BackendResult<FlashOutput> {
        self.record("TSFLSH", &[t, s, z, kr as f64])?;
        Ok(echoed([(PropertyId::T, t), (PropertyId::S, s)]))
    }

    fn te_flash(&mut self, t: f64, e: f64, z: f64, kr: i32) -> BackendResult<FlashOutput> {
        self.record("TEFLSH", &[t, e, z, kr as f64])?;
        Ok(echoed([(PropertyId::T, t), (PropertyId::E, e)]))
    }

    fn tq_flash(&mut self, t: f64, q: f64, z: f64, kq: i32) -> BackendResult<FlashOutput> {
        self.record("TQFLSH", &[t, q, z, kq as f64])?;
        Ok(saturated(t, saturation_pressure(t), q))
    }

    fn pd_flash(&mut self, p: f64, d: f64, z: f64) -> BackendResult<FlashOutput> {
        self.record("PDFLSH", &[p, d, z])?;
        Ok(echoed([(PropertyId::P, p), (PropertyId::D, d)]))
    }

    fn ph_flash(&mut self, p: f64, h: f64, z: f64) -> BackendResult<FlashOutput> {
        self.record("PHFLSH", &[p, h, z])?;
        Ok(echoed([(PropertyId::P, p), (PropertyId::H, h)]))
    }

    fn ps_flash(&mut self, p: f64, s: f64, z: f64) -> BackendResult<FlashOutput> {
        self.record("PSFLSH", &[p, s, z])?;
        Ok(echoed([(PropertyId::P, p), (PropertyId::S, s)]))
    }

    fn pe_flash(&mut self, p: f64, e: f64, z: f64) -> BackendResult<FlashOutput> {
        self.record("PEFLSH", &[p, e, z])?;
        Ok(echoed([(PropertyId::P, p), (PropertyId::E, e)]))
    }

    fn pq_flash(&mut self, p: f64, q: f64, z: f64, kq: i32) -> BackendResult<FlashOutput> {
        self.record("PQFLSH", &[p, q, z, kq as f64])?;
        Ok(saturated(saturation_temperature(p), p, q))
    }

    fn dh_flash(&mut self, d: f64, h: f64, z: f64) -> BackendResult<FlashOutput> {
        self.record("DHFLSH", &[d, h, z])?;
        Ok(echoed([(PropertyId::D, d), (PropertyId::H, h)]))
    }

    fn ds_flash(&mut self, d: f64, s: f64, z: f64) -> BackendResult<FlashOutput> {
        self.record("DSFLSH", &[d, s, z])?;
        Ok(echoed([(PropertyId::D, d), (PropertyId::S, s)]))
    }

    fn de_flash(&mut self, d: f64, e: f64, z: f64) -> BackendResult<FlashOutput> {
        self.record("DEFLSH", &[d, e, z])?;
        Ok(echoed([(PropertyId::D, d), (PropertyId::E, e)]))
    }

    fn hs_flash(&mut self, h: f64, s: f64, z: f64) -> BackendResult<FlashOutput> {
        self.record("HSFLSH", &[h, s, z])?;
        Ok(echoed([(PropertyId::H, h), (PropertyId::S, s)]))
    }

    fn es_flash(&mut self, e: f64, s: f64, z: f64) -> BackendResult<FlashOutput> {
        self.record("ESFLSH", &[e, s, z])?;
        Ok(echoed([(PropertyId::E, e), (PropertyId::S, s)]))
    }
}
