use super::*;

impl ApiClient {
    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        let url = format!("{}/users", self.directory_url);
        let request = self.client.get(&url);
        self.send_json(&url, request).await
    }
}
