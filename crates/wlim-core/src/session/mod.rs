//! Interactive hint sessions.
//!
//! A session shows hints on a [`HintSurface`], feeds keys from a
//! [`KeySource`] through the matcher and, on a selection, clicks through an
//! [`Actuator`](crate::actuate::Actuator) once the surface is gone.

pub mod errors;
pub mod handler;
pub mod types;

pub use errors::SessionError;
pub use handler::run_session;
pub use types::{HintSurface, KeySource, LogSurface, ScriptedKeys, SessionSettings};
