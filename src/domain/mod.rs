//! Domain layer containing business entities and logic.
//!
//! Defines entities, the link store contract and the background acknowledgement
//! flow independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`response_event`] - "Yes" acknowledgement event model
//! - [`response_worker`] - Asynchronous acknowledgement worker
//!
//! # Acknowledgement Flow
//!
//! 1. The recipient presses "Yes" on the HTML page
//! 2. The celebration page is rendered immediately
//! 3. A [`response_event::ResponseEvent`] is sent to an async channel
//! 4. [`response_worker::run_response_worker`] persists it with retry on transient faults
//!
//! Failures in steps 3-4 are logged and counted, never surfaced to the recipient.

pub mod entities;
pub mod repositories;
pub mod response_event;
pub mod response_worker;
