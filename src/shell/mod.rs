// Composition root for the users bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers.

pub mod config;
pub mod http;
pub mod state;
