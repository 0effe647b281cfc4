// mav_core/src/lib.rs

//! Value types for the kinematic state of an aerial vehicle and its motion
//! references, plus the algebra to move them between frames.
//!
//! Everything here is plain data and pure functions: no I/O, no internal
//! locking. Instances can be read from several threads at once; mutation of a
//! shared instance must be serialized by the caller.

pub mod common;
pub mod entities;
pub mod error;
pub mod messages;
pub mod prelude;
pub mod trajectory;
pub mod transform;
pub mod types;
