//! Model endpoints and the composite reset.

use std::path::Path;

use cy_core::{ModelRef, ModelState};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::{ClientError, Session, http::check_response};

/// What [`Session::reset_model`] did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResetOutcome {
    pub model: ModelRef,
    /// Whether a previous definition existed and was removed.
    pub existed: bool,
    /// Entities removed from the previous definition (0 if none existed).
    pub entities_deleted: u64,
    /// Whether the previous definition had to be unlocked before deletion.
    pub unlocked: bool,
    /// Identifier returned by the derive-from-sample-data call.
    pub model_id: String,
}

fn export_path(model: &ModelRef) -> String {
    format!("/treeNode/model/export/SIMPLE_VIEW/{}", model.path())
}

impl Session {
    /// Whether the model exists.
    ///
    /// An existence check: any non-200 answer or transport failure yields
    /// `false`. Never returns an error.
    pub async fn model_exists(&self, model: &ModelRef) -> bool {
        match self.request(Method::GET, &export_path(model)).send().await {
            Ok(resp) => resp.status() == reqwest::StatusCode::OK,
            Err(error) => {
                tracing::warn!(%model, %error, "model existence check failed");
                false
            }
        }
    }

    /// Export the model definition (simple view).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] on any non-200 answer.
    pub async fn get_model(&self, model: &ModelRef) -> Result<Value, ClientError> {
        let resp = self.request(Method::GET, &export_path(model)).send().await?;
        let resp = check_response(resp, &format!("Get model {model}")).await?;
        Ok(resp.json().await?)
    }

    /// The `currentState` of the model.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] on any non-200 answer and
    /// [`ClientError::UnexpectedResponse`] if the export has no `currentState`.
    pub async fn get_model_state(&self, model: &ModelRef) -> Result<ModelState, ClientError> {
        let exported = self.get_model(model).await?;
        exported
            .get("currentState")
            .and_then(Value::as_str)
            .map(ModelState::from)
            .ok_or_else(|| {
                ClientError::UnexpectedResponse(format!(
                    "model export for {model} has no currentState"
                ))
            })
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Api`] on any non-200 answer.
    pub async fn lock_model(&self, model: &ModelRef) -> Result<(), ClientError> {
        let path = format!("/treeNode/model/{}/lock", model.path());
        let resp = self.request(Method::PUT, &path).send().await?;
        check_response(resp, &format!("Lock model {model}")).await?;
        tracing::info!(%model, "model locked");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Api`] on any non-200 answer.
    pub async fn unlock_model(&self, model: &ModelRef) -> Result<(), ClientError> {
        let path = format!("/treeNode/model/{}/unlock", model.path());
        let resp = self.request(Method::PUT, &path).send().await?;
        check_response(resp, &format!("Unlock model {model}")).await?;
        tracing::info!(%model, "model unlocked");
        Ok(())
    }

    /// Delete the model definition. The model must be unlocked.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] on any non-200 answer.
    pub async fn delete_model(&self, model: &ModelRef) -> Result<(), ClientError> {
        let path = format!("/treeNode/model/{}", model.path());
        let resp = self.request(Method::DELETE, &path).send().await?;
        check_response(resp, &format!("Delete model {model}")).await?;
        tracing::info!(%model, "model deleted");
        Ok(())
    }

    /// Derive a model definition from a sample JSON document. Returns the
    /// response text (the new model id).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] on any non-200 answer.
    pub async fn derive_model_from_sample_data(
        &self,
        model: &ModelRef,
        sample: &Value,
    ) -> Result<String, ClientError> {
        let path = format!("/treeNode/model/import/JSON/SAMPLE_DATA/{}", model.path());
        let resp = self.request(Method::POST, &path).json(sample).send().await?;
        let resp = check_response(resp, &format!("Derive model {model} from sample data")).await?;
        Ok(resp.text().await?)
    }

    /// Recreate a model from a sample data file.
    ///
    /// If the model exists: delete all its entities, unlock it if locked, and
    /// delete the definition. Then derive a fresh definition from the sample
    /// file and lock it.
    ///
    /// The sample file is read and parsed before anything is deleted. There is
    /// no rollback if a later remote step fails.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Io`]/[`ClientError::Json`] for an unreadable
    /// sample file, or the first remote error encountered.
    pub async fn reset_model(
        &self,
        model: &ModelRef,
        sample_file: &Path,
    ) -> Result<ResetOutcome, ClientError> {
        tracing::info!(%model, "resetting model");
        let sample = read_json_file(sample_file)?;

        let mut outcome = ResetOutcome {
            model: model.clone(),
            existed: false,
            entities_deleted: 0,
            unlocked: false,
            model_id: String::new(),
        };

        if self.model_exists(model).await {
            outcome.existed = true;
            tracing::info!(%model, "deleting all data for model");
            outcome.entities_deleted = self.delete_all_entities(model).await?;
            tracing::info!(%model, total = outcome.entities_deleted, "entities deleted");

            if self.get_model_state(model).await?.is_locked() {
                self.unlock_model(model).await?;
                outcome.unlocked = true;
            }
            self.delete_model(model).await?;
        } else {
            tracing::info!(%model, "model doesn't exist, nothing to delete");
        }

        outcome.model_id = self.derive_model_from_sample_data(model, &sample).await?;
        tracing::info!(%model, model_id = %outcome.model_id, "model derived from sample data");
        self.lock_model(model).await?;

        Ok(outcome)
    }
}

/// Read and parse a local JSON file.
///
/// # Errors
///
/// Returns [`ClientError::Io`] if the file cannot be read and
/// [`ClientError::Json`] if it is not valid JSON.
pub fn read_json_file(path: &Path) -> Result<Value, ClientError> {
    let content = std::fs::read_to_string(path).map_err(|source| ClientError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_path_uses_simple_view() {
        let model = ModelRef::new("nobel_prize", 1);
        assert_eq!(
            export_path(&model),
            "/treeNode/model/export/SIMPLE_VIEW/nobel_prize/1"
        );
    }

    #[test]
    fn read_json_file_reports_missing_path() {
        let err = read_json_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ClientError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn read_json_file_rejects_invalid_json() {
        let dir = tempfile::TempDir::new().expect("tmp dir");
        let path = dir.path().join("sample.json");
        std::fs::write(&path, "{ not json").expect("write");
        assert!(matches!(read_json_file(&path), Err(ClientError::Json(_))));
    }
}
