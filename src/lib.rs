#![cfg_attr(not(any(feature = "threaded", test)), no_std)]

//! # Rust Fixed Events Crate
//!
//! A fixed-capacity, synchronous event emitter for embedded and resource-constrained targets.
//!
//! - **EventEmitter**: Two fixed tables (event identifiers and callback slots), sized once at construction.
//! - **EventHandler**: Trait defining the `on` / `off` / `emit` / `reset` API.
//! - **Listener**: A stored callback handle, compared by identity.
//! - **payload**: Helpers for passing opaque byte payloads and copying them back out with a bounded length.
//!
//! By default the crate is `no_std` + `alloc`. The `threaded` feature adds
//! [`SharedEmitter`], the same tables behind a single lock.
//!
//! # Example
//! ```
//! use rs_fixed_events::{callback, EventEmitter, EventError, EventHandler};
//!
//! let mut emitter = EventEmitter::new(2, 2).unwrap();
//! emitter.on(0x01, callback(|_| 0)).unwrap();
//! emitter.on(0x01, callback(|_| 0)).unwrap();
//! assert_eq!(emitter.on(0x01, callback(|_| 0)), Err(EventError::CallbacksFull));
//! ```

mod config;
mod constants;
mod error;
mod event_handler;
pub mod payload;

mod base {
    pub mod event_emitter;
    pub mod listener;
    pub mod slots;
}

#[cfg(feature = "threaded")]
mod threaded {
    pub mod shared_emitter;
}

pub use base::event_emitter::EventEmitter;
pub use base::listener::Listener;
pub(crate) use base::slots::SlotTable;
pub use config::EmitterConfig;
pub use constants::*;
pub use error::{status_of, EventError, PayloadError};
pub use event_handler::EventHandler;
#[cfg(feature = "threaded")]
pub use threaded::shared_emitter::{EventManager, SharedEmitter};

#[cfg(test)]
mod tests;
