//! Simulated vending machines.
//!
//! A [`Machine`] owns its quantity and republishes derived threshold-crossing
//! events through the dispatcher it was constructed with. Machines are shared
//! across subscribers as [`MachineRef`] handles.

mod machine;

pub use machine::{Machine, MachineRef};
