//! Entity endpoints (TREE representation).

use cy_core::{ModelRef, PageRequest};
use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

use crate::{ClientError, Session, http::check_response};

/// Page and transaction size used when deleting every entity of a model.
const DELETE_BATCH_SIZE: u32 = 1000;

/// Transaction timeout for entity creation.
const CREATE_TRANSACTION_TIMEOUT_MILLIS: u64 = 10_000;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteEntry {
    delete_result: DeleteResult,
}

#[derive(Deserialize)]
struct DeleteResult {
    // Spelled this way by the server.
    #[serde(rename = "numberOfEntititesRemoved", default)]
    removed: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateEntry {
    #[serde(default)]
    entity_ids: Vec<Value>,
}

/// Sum the removed-entity counts of a delete-all response.
///
/// # Errors
///
/// Returns [`ClientError::Json`] if the body is not a list of delete results.
pub fn total_entities_removed(body: Value) -> Result<u64, ClientError> {
    let entries: Vec<DeleteEntry> = serde_json::from_value(body)?;
    Ok(entries.iter().map(|e| e.delete_result.removed).sum())
}

/// The first id of a create response.
///
/// # Errors
///
/// Returns [`ClientError::Json`] for a malformed body and
/// [`ClientError::UnexpectedResponse`] if no id was returned.
pub fn first_entity_id(body: Value) -> Result<String, ClientError> {
    let entries: Vec<CreateEntry> = serde_json::from_value(body)?;
    let id = entries
        .into_iter()
        .next()
        .and_then(|entry| entry.entity_ids.into_iter().next())
        .ok_or_else(|| ClientError::UnexpectedResponse("create returned no entity ids".into()))?;
    Ok(match id {
        Value::String(id) => id,
        other => other.to_string(),
    })
}

fn entities_path(model: &ModelRef) -> String {
    format!("/entity/TREE/{}", model.path())
}

impl Session {
    /// Delete every entity stored against the model. Returns how many were
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] on any non-200 answer.
    pub async fn delete_all_entities(&self, model: &ModelRef) -> Result<u64, ClientError> {
        let path = format!(
            "{}?pageSize={DELETE_BATCH_SIZE}&transactionSize={DELETE_BATCH_SIZE}",
            entities_path(model)
        );
        let resp = self.request(Method::DELETE, &path).send().await?;
        let resp = check_response(resp, &format!("Delete entities of {model}")).await?;
        total_entities_removed(resp.json().await?)
    }

    /// Save one entity and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] on any non-200 answer.
    pub async fn create_entity(
        &self,
        model: &ModelRef,
        payload: &Value,
    ) -> Result<String, ClientError> {
        let path = format!(
            "/entity/JSON/TREE/{}?transactionTimeoutMillis={CREATE_TRANSACTION_TIMEOUT_MILLIS}",
            model.path()
        );
        let resp = self.request(Method::POST, &path).json(payload).send().await?;
        let resp = check_response(resp, &format!("Save entity of {model}")).await?;
        let id = first_entity_id(resp.json().await?)?;
        tracing::debug!(%model, entity_id = %id, "entity created");
        Ok(id)
    }

    /// One raw page of entities.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] on any non-200 answer.
    pub async fn get_all_entities(
        &self,
        model: &ModelRef,
        page: PageRequest,
    ) -> Result<Value, ClientError> {
        let path = format!("{}?{}", entities_path(model), page.query());
        let resp = self.request(Method::GET, &path).send().await?;
        let resp = check_response(resp, &format!("Get all entities of {model}")).await?;
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sums_removed_counts() {
        let body = json!([
            {"deleteResult": {"numberOfEntititesRemoved": 10}},
            {"deleteResult": {"numberOfEntititesRemoved": 25}},
            {"deleteResult": {"numberOfEntititesRemoved": 0}},
        ]);
        assert_eq!(total_entities_removed(body).unwrap(), 35);
    }

    #[test]
    fn empty_delete_response_sums_to_zero() {
        assert_eq!(total_entities_removed(json!([])).unwrap(), 0);
    }

    #[test]
    fn malformed_delete_response_is_an_error() {
        assert!(total_entities_removed(json!({"deleted": 3})).is_err());
    }

    #[test]
    fn first_entity_id_takes_first_of_first_entry() {
        let body = json!([
            {"entityIds": ["e-1", "e-2"], "transactionId": "t-1"},
            {"entityIds": ["e-3"]},
        ]);
        assert_eq!(first_entity_id(body).unwrap(), "e-1");
    }

    #[test]
    fn first_entity_id_requires_an_id() {
        let err = first_entity_id(json!([{"entityIds": []}])).unwrap_err();
        assert!(matches!(err, ClientError::UnexpectedResponse(_)));
    }
}
