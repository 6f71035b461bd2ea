use super::ArticleQueryService;
use crate::application::error::ApplicationResult;

impl ArticleQueryService {
    pub async fn list_tags(&self) -> ApplicationResult<Vec<String>> {
        let tags = self.read_repo.list_tags().await?;
        Ok(tags.into_iter().map(String::from).collect())
    }
}
