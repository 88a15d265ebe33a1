use tracing::warn;

use crate::error::RequestError;
use crate::json::{Json, ObjectWalker};
use crate::types::RequestReference;

use super::{expect_array, expect_element_object, mismatch, missing_key, unknown_key};

/// Build the `MultiRequests` section.
///
/// Returns `Ok(None)` when every `ReferenceId` array is empty: such a section
/// carries no sub-requests and is dropped as if absent. A mix of empty and
/// non-empty entries is rejected.
pub(crate) fn build_multi_requests(
    members: &[(String, Json)],
) -> Result<Option<Vec<RequestReference>>, RequestError> {
    let mut entries = None;

    for member in ObjectWalker::new(members) {
        let (key, value) = member?;
        match key {
            "RequestReference" => entries = Some(expect_array(key, value)?),
            _ => return Err(unknown_key(key, "the MultiRequests object")),
        }
    }

    let entries =
        entries.ok_or_else(|| missing_key("RequestReference", "the MultiRequests object"))?;
    if entries.is_empty() {
        return Err(RequestError::Empty("RequestReference".to_string()));
    }

    let mut references = Vec::with_capacity(entries.len());
    for entry in entries {
        references.push(build_reference(expect_element_object(
            "RequestReference",
            entry,
        )?)?);
    }

    if references
        .iter()
        .all(|reference| reference.reference_ids.is_empty())
    {
        warn!(
            event = "MultiRequests",
            phase = "Dropped",
            entries = references.len(),
            "every ReferenceId array is empty; ignoring the MultiRequests section"
        );
        return Ok(None);
    }
    if let Some(position) = references
        .iter()
        .position(|reference| reference.reference_ids.is_empty())
    {
        return Err(RequestError::BadReference(format!(
            "RequestReference entry {position} has an empty ReferenceId array while others do not"
        )));
    }

    Ok(Some(references))
}

fn build_reference(members: &[(String, Json)]) -> Result<RequestReference, RequestError> {
    let mut ids = None;

    for member in ObjectWalker::new(members) {
        let (key, value) = member?;
        match key {
            "ReferenceId" => {
                let items = expect_array(key, value)?;
                let mut collected = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Json::String(id) if !id.is_empty() => collected.push(id.clone()),
                        Json::String(_) => {
                            return Err(RequestError::BadReference(
                                "ReferenceId entries must be non-empty strings".to_string(),
                            ));
                        }
                        other => return Err(mismatch(key, "an array of strings", other)),
                    }
                }
                ids = Some(collected);
            }
            _ => return Err(unknown_key(key, "a RequestReference entry")),
        }
    }

    let reference_ids =
        ids.ok_or_else(|| missing_key("ReferenceId", "a RequestReference entry"))?;
    Ok(RequestReference { reference_ids })
}
