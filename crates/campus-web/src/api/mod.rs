/// API client for the campus backend
///
/// Only the session endpoints are used by the shell.

pub mod client;

pub use client::ApiClient;
