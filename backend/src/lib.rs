//! Job board backend library.
//!
//! The crate is laid out hexagonally: `domain` owns entities, ports, and
//! services; `inbound` adapts HTTP onto the driving ports; `outbound`
//! implements the driven ports over PostgreSQL or in-memory stores; `server`
//! wires the two sides together.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
