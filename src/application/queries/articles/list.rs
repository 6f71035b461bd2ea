use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticlePageDto, AuthenticatedUser, PageRequest},
        error::ApplicationResult,
    },
    domain::article::ArticleFilter,
};

/// Filters compose conjunctively; blank values count as absent.
#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub tag: Option<String>,
    pub author: Option<String>,
    pub favorited: Option<String>,
    pub page: PageRequest,
}

impl ListArticlesQuery {
    fn filter(self) -> ArticleFilter {
        fn present(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        ArticleFilter {
            tag: present(self.tag),
            author: present(self.author),
            favorited_by: present(self.favorited),
        }
    }
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        viewer: Option<&AuthenticatedUser>,
        query: ListArticlesQuery,
    ) -> ApplicationResult<ArticlePageDto> {
        let window = query.page.window();
        let filter = query.filter();

        let slice = self.read_repo.list(&filter, window).await?;
        self.page(viewer, slice).await
    }
}
