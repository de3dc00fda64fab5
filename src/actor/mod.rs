//! Background tasks owned by the writer.
//!
//! The only actor is the periodic flusher: a dedicated thread selecting
//! over a timer tick and a one-shot stop signal. The writer owns exactly
//! one live instance at a time and replaces it atomically when the flush
//! interval changes.

mod flusher;

pub use flusher::FlusherActor;
