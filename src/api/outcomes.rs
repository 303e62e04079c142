//! Applied outcome operations
//!
//! Outcomes live under their parent learning item
//! (/learning/{id}/apply) and are deleted independently of it.

use super::{ApiClient, ApiError};
use crate::models::{AppliedOutcome, OutcomePayload, OutcomeType};

impl ApiClient {
    pub async fn list_outcomes(&self, learning_id: i64) -> Result<Vec<AppliedOutcome>, ApiError> {
        self.get_json(&format!("/learning/{learning_id}/apply")).await
    }

    pub async fn create_outcome(
        &self,
        learning_id: i64,
        description: &str,
        outcome_type: OutcomeType,
    ) -> Result<AppliedOutcome, ApiError> {
        let payload = OutcomePayload { description: description.to_string(), outcome_type };
        self.post_json(&format!("/learning/{learning_id}/apply"), &payload).await
    }

    pub async fn delete_outcome(&self, learning_id: i64, outcome_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/learning/{learning_id}/apply/{outcome_id}")).await
    }
}
