//! # AtomicAssets Core
//!
//! Transport-independent building blocks for talking to an AtomicAssets
//! indexer.
//!
//! This crate provides:
//! - [`Timestamp`], the millisecond time type that decodes from numbers,
//!   numeric strings and `null`
//! - [`FilterSpec`] and [`QueryParams`] for turning typed filters into query
//!   strings (lists comma-joined, zero values omitted)
//! - [`ApiResponse`], the `{success, query_time, data}` envelope, and the
//!   status and content-type rules applied to every response
//! - Typed payloads and filters for every resource group in [`model`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod encoding;
pub mod envelope;
pub mod model;
pub mod query;
pub mod timestamp;

pub use envelope::{is_content_type, is_error_status, ApiErrorBody, ApiResponse, JSON_CONTENT_TYPE};
pub use query::{EncodeError, FilterSpec, QueryList, QueryParams, QueryValue, SortOrder};
pub use timestamp::Timestamp;
