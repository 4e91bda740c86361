//! # arm-id
//!
//! Typed Azure Resource Manager resource IDs with strict parsing and
//! canonical formatting.
//!
//! ## Design Principles
//!
//! - Each resource kind is an immutable [`IdFormat`]: an ordered list of
//!   literal and variable segments
//! - One routine parses every kind and one routine formats every kind
//! - Literal segments match exactly, including case
//! - Parsing never returns a partially populated ID
//! - IDs support roundtrip serialization (parse → format → parse)
//!
//! ## ID Format
//!
//! IDs are slash-delimited paths of alternating literal and variable segments:
//!
//! - `/subscriptions/{subscription_id}/resourceGroups/{resource_group}`
//! - `/subscriptions/{subscription_id}/resourceGroups/{resource_group}/providers/Microsoft.Sql/servers/{server_name}/databases/{name}`
//!
//! Empty leading and trailing segments are ignored when parsing; formatting
//! always produces the canonical `/`-prefixed form.

mod error;
mod format;
mod generic;
mod macros;
mod types;

pub use error::IdError;
pub use format::{Captures, IdFormat, ResourceId, Segment};
pub use generic::GenericResourceId;
pub use types::*;

/// Re-export serde for the `define_resource_id!` macro.
#[doc(hidden)]
pub use serde;
