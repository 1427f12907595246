//! Closed-variant transport records with visitor-style dispatch.
//!
//! This crate models "a transport, which is exactly one of bus, car, or
//! bike" and lets callers process whichever variant is present without
//! runtime type inspection. The compiler enforces that every variant is
//! handled, closing the missing-case bug class at compile time.
//!
//! # Overview
//!
//! A [`Transport`] is built through one of three constructors and holds
//! exactly one payload ([`Bus`], [`Car`], or [`Bike`]). Three calling
//! conventions dispatch over it, all layered on one matching primitive so
//! their ordering and failure semantics are identical:
//!
//! - [`Transport::accept`] - three side-effecting handlers, no value.
//! - [`Transport::accept_map`] - three value-producing handlers, generic
//!   over the produced type.
//! - [`Transport::accept_visitor`] - a single [`TransportVisitor`]
//!   implementation, reusable across call sites.
//!
//! [`FnVisitor`] bridges the two styles: it builds a visitor from three
//! loose closures, so one-off call sites avoid declaring a named type.
//!
//! # Quick Start
//!
//! ```
//! use transport_dispatch::{Bus, Car, Transport};
//!
//! let transport = Transport::from_bus(Bus { number: 123, mpg: 50 });
//!
//! let mpg = transport.accept_map(
//!     |bus| Ok(bus.mpg),
//!     |car| Ok(car.mpg),
//!     |_bike| Ok(i64::MAX),
//! )?;
//! assert_eq!(mpg, 50);
//! # Ok::<(), transport_dispatch::DispatchError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`transport`] - Payload types, the [`Transport`] record, constructors,
//!   and the dispatch entry points
//! - [`visitor`] - The [`TransportVisitor`] trait and the [`FnVisitor`]
//!   closure adapter
//! - [`error`] - [`DispatchError`] and the crate [`Result`] alias

pub mod error;
pub mod transport;
pub mod visitor;

// Re-exports for ergonomic access
pub use error::{DispatchError, Result};
pub use transport::{Bike, Bus, Car, Transport, TransportKind};
pub use visitor::{FnVisitor, TransportVisitor};
