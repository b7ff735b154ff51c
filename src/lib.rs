//! quatview - quaternion and rotation-matrix readout
//!
//! Library surface for the quatview binary: configuration loading and the
//! readout panel built from `quatview_math`.

pub mod config;
pub mod readout;
