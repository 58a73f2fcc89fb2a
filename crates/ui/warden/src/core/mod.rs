//! Core of the Warden application.
//!
//! - `app`     : component wiring, the event/action loop and rendering
//! - `reducer` : the only place where [`crate::state::State`] is mutated
pub mod app;
pub mod reducer;
