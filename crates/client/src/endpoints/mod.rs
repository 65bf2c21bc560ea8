//! Per-resource convenience requests
//!
//! One module per API resource, each adding `impl Client` blocks that fix
//! the endpoint path and the decoded item type. Every method funnels
//! through [`Client::execute`](crate::Client::execute) or its asynchronous
//! counterpart; batch-size limits on ID lists are the caller's
//! responsibility.

mod answers;
mod questions;
mod sites;
mod users;

use crate::errors::{Error, Result};

/// Join a required ID list for embedding in an endpoint path.
///
/// An empty list is caller misuse and fails before any request is issued.
pub(crate) fn joined_ids(ids: &[i64]) -> Result<String> {
    if ids.is_empty() {
        return Err(Error::InvalidRequest("at least one id is required".into()));
    }
    Ok(ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(";"))
}
