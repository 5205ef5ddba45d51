//! Flexible-port (fps) configuration reconciliation for NETCONF-managed
//! devices.
//!
//! A flexible port is a virtual port abstraction the device exposes as a
//! list of named entries, each optionally bound to a logical port and a
//! forwarding domain. This library takes a desired set of entries (`want`),
//! the set the device currently reports (`have`), and a reconciliation mode,
//! and produces the edit-config payload that converges the device toward the
//! desired state.
//!
//! # Architecture
//!
//! - [`model`] — the [`model::FlexiblePort`] record, the [`model::State`]
//!   mode enum, want-config loading, and fact-set comparison
//! - [`facts`] — the [`facts::FactsSource`] collaborator plus parsing of
//!   device facts XML into records
//! - [`reconcile`] — the four reconciliation strategies
//!   (merged/replaced/overridden/deleted) emitting edit fragments
//! - [`payload`] — assembly of fragments into one normalized `<fps>` payload
//! - [`device`] — the [`device::ConfigApplier`] collaborator and the
//!   `<config>` envelope for the edit-config RPC
//! - [`execute`] — the fetch → reconcile → apply → re-fetch pipeline with
//!   change detection
//! - [`report`] — terminal rendering of outcomes
//!
//! The library never opens a device connection itself: fact retrieval and
//! payload application are traits, so callers decide whether the other end
//! is a NETCONF session, a saved get-config reply, or a test double.
//!
//! # Built on xml-edit-core
//!
//! Generic XML parsing, writing, and namespace normalization come from
//! `xml-edit-core`. All flexible-port knowledge lives in this crate.

pub mod device;
pub mod execute;
pub mod facts;
pub mod model;
pub mod payload;
pub mod reconcile;
pub mod report;
