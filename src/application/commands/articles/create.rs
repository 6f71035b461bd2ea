// src/application/commands/articles/create.rs
use super::{ArticleCommandService, MAX_INSERT_ATTEMPTS};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationResult, ValidationErrors},
    },
    domain::article::{ArticleBody, ArticleDescription, ArticleTitle, NewArticle, TagList},
};

#[derive(Debug, Default)]
pub struct CreateArticleCommand {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut errors = ValidationErrors::default();
        let title = errors.capture(ArticleTitle::new(command.title));
        let description = errors.capture(ArticleDescription::new(command.description));
        let body = errors.capture(ArticleBody::new(command.body));
        let (Some(title), Some(description), Some(body)) = (title, description, body) else {
            return Err(errors.into());
        };
        let tag_list = TagList::from_raw(command.tag_list);
        let now = self.clock.now();

        let mut attempt = 1;
        let created = loop {
            let slug = self.slug_service.generate_unique_slug(&title, None).await?;
            let new_article = NewArticle {
                slug,
                title: title.clone(),
                description: description.clone(),
                body: body.clone(),
                tag_list: tag_list.clone(),
                author_id: actor.id,
                created_at: now,
            };

            match self.write_repo.insert(new_article).await {
                Ok(article) => break article,
                Err(err) if err.is_conflict_on("slug") && attempt < MAX_INSERT_ATTEMPTS => {
                    tracing::warn!(attempt, title = %title, "slug claimed concurrently, probing again");
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        };

        tracing::info!(slug = %created.slug, author_id = %actor.id, "article created");
        self.assembler
            .article_with_favorited(Some(actor.id), created, false)
            .await
    }
}
