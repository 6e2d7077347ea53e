// Composition root for the registrations page.
//
// Responsibilities
// - Read config from the environment.
// - Wire the in memory page and the submission handler into the HTTP router.

pub mod config;
pub mod http;
pub mod state;
