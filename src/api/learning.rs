//! Learning item operations
//!
//! CRUD over /learning. Status is never sent by the client; the server
//! derives it from the item's outcomes.

use super::{ApiClient, ApiError};
use crate::models::{Category, LearningItem, LearningPayload};

impl ApiClient {
    pub async fn list_learning(&self) -> Result<Vec<LearningItem>, ApiError> {
        self.get_json("/learning").await
    }

    pub async fn get_learning(&self, id: i64) -> Result<LearningItem, ApiError> {
        self.get_json(&format!("/learning/{id}")).await
    }

    pub async fn create_learning(
        &self,
        title: &str,
        category: Category,
    ) -> Result<LearningItem, ApiError> {
        let payload = LearningPayload { title: title.to_string(), category };
        self.post_json("/learning", &payload).await
    }

    pub async fn update_learning(
        &self,
        id: i64,
        title: &str,
        category: Category,
    ) -> Result<LearningItem, ApiError> {
        let payload = LearningPayload { title: title.to_string(), category };
        self.put_json(&format!("/learning/{id}"), &payload).await
    }

    pub async fn delete_learning(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/learning/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::tests::test_client;
    use crate::models::{Category, LearningStatus};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn item_json(id: i64, title: &str, status: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "title": title,
            "category": "TECHNICAL",
            "status": status,
            "createdAt": "2026-08-12T09:30:00Z"
        })
    }

    #[tokio::test]
    async fn test_list_learning() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/learning"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                item_json(1, "Ownership in Rust", "PENDING"),
                item_json(2, "Macroeconomics basics", "APPLIED"),
            ])))
            .mount(&server)
            .await;

        let (client, _temp) = test_client(&server.uri(), Some("token"));
        let items = client.list_learning().await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Ownership in Rust");
        assert_eq!(items[1].status, LearningStatus::Applied);
    }

    #[tokio::test]
    async fn test_get_learning_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/learning/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(item_json(42, "Tokio", "PENDING")))
            .mount(&server)
            .await;

        let (client, _temp) = test_client(&server.uri(), Some("token"));
        let item = client.get_learning(42).await.unwrap();
        assert_eq!(item.id, 42);
    }

    #[tokio::test]
    async fn test_create_learning_sends_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/learning"))
            .and(body_json(serde_json::json!({
                "title": "Ownership in Rust",
                "category": "TECHNICAL"
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(item_json(7, "Ownership in Rust", "PENDING")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let (client, _temp) = test_client(&server.uri(), Some("token"));
        let created = client.create_learning("Ownership in Rust", Category::Technical).await.unwrap();
        assert_eq!(created.id, 7);
        assert_eq!(created.status, LearningStatus::Pending);
    }

    #[tokio::test]
    async fn test_update_learning_uses_put() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/learning/7"))
            .and(body_json(serde_json::json!({
                "title": "Ownership & borrowing",
                "category": "TECHNICAL"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(item_json(7, "Ownership & borrowing", "PENDING")),
            )
            .mount(&server)
            .await;

        let (client, _temp) = test_client(&server.uri(), Some("token"));
        let updated = client.update_learning(7, "Ownership & borrowing", Category::Technical).await.unwrap();
        assert_eq!(updated.title, "Ownership & borrowing");
    }

    #[tokio::test]
    async fn test_delete_learning_has_no_payload() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/learning/7"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let (client, _temp) = test_client(&server.uri(), Some("token"));
        client.delete_learning(7).await.unwrap();
    }
}
