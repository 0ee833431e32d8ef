use async_trait::async_trait;

#[async_trait]
pub trait UserQueries {
    async fn is_registered(&self, username: &str) -> anyhow::Result<bool>;
}
