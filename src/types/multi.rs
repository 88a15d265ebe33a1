//! Multi-request references.

use serde::Serialize;

/// One logical sub-request: the `xmlId`s of the categories it combines.
///
/// The ids are kept as written. Whether each resolves to a declared category
/// is checked by the evaluator, not here.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RequestReference {
    pub reference_ids: Vec<String>,
}
