use super::*;

impl ApiClient {
    pub async fn list_comments(&self) -> Result<Vec<Comment>, ApiError> {
        let url = format!("{}/comments", self.comment_store_url);
        let request = self.client.get(&url);
        self.send_json(&url, request).await
    }

    /// Posts one comment. The store's echo is returned as-is; nothing is
    /// deduplicated, so identical calls create identical records.
    pub async fn submit_comment(
        &self,
        user_id: UserId,
        text: &str,
    ) -> Result<serde_json::Value, ApiError> {
        let url = format!("{}/comments", self.comment_store_url);
        let request = self
            .client
            .post(&url)
            .json(&serde_json::json!({"userId": user_id, "comment": text}));
        self.send_json(&url, request).await
    }
}
