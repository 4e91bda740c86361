//! # arm-client
//!
//! A thin Azure Resource Manager client: pick a cloud [`Environment`], hand
//! [`ArmClient::new`] a base URI, a subscription and an [`Authorizer`], and
//! read collections page by page through [`ArmListing`].
//!
//! Token acquisition and retry policy are deliberately absent; callers supply
//! an authorizer that already holds a credential.

mod auth;
mod client;
mod config;
mod environment;
mod error;
mod listing;
pub mod policy;

pub use auth::{Authorizer, BearerToken};
pub use client::ArmClient;
pub use config::ClientConfig;
pub use environment::Environment;
pub use error::ClientError;
pub use listing::{ArmListing, ListResponse};
