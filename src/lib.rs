// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # godaddy-dns - GoDaddy DNS provider
//!
//! Reconciles a declared set of DNS records against a zone hosted at GoDaddy,
//! producing the ordered create/update/delete operations that make GoDaddy
//! match the declaration.
//!
//! ## Modules
//!
//! - [`models`] - Canonical record model shared by every component
//! - [`godaddy`] - The provider: API client, normalization, matching, corrections
//! - [`diff`] - Diff instructions and the default by-record differ
//! - [`txtutil`] - Splitting of over-long TXT values
//! - [`config`] - Credentials and endpoint configuration
//! - [`zonefile`] - YAML desired-state files used by the CLI
//! - [`errors`] - Error types
//!
//! ## Example
//!
//! ```rust
//! use godaddy_dns::godaddy::convert::to_provider_record;
//! use godaddy_dns::models::{Record, RecordTarget, RecordType};
//!
//! let record = Record::new(
//!     "www",
//!     "example.com",
//!     RecordType::A,
//!     300,
//!     RecordTarget::Value { value: "192.0.2.1".to_string() },
//! );
//!
//! // GoDaddy rejects TTLs under 600 seconds, so they are raised on the way out
//! let wire = to_provider_record(&record).unwrap();
//! assert_eq!(wire.ttl, 600);
//! assert_eq!(wire.name, "www");
//! ```
//!
//! ## Supported record types
//!
//! A, AAAA, CNAME, MX, NS, SOA, SRV, TXT. NS records at the zone apex are
//! never modified.

pub mod config;
pub mod constants;
pub mod diff;
pub mod errors;
pub mod godaddy;
pub mod models;
pub mod txtutil;
pub mod zonefile;
