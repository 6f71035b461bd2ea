// src/application/commands/articles/update.rs
use super::{ArticleCommandService, MAX_INSERT_ATTEMPTS, service::ensure_author};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationResult, ValidationErrors},
    },
    domain::article::{
        ArticleBody, ArticleDescription, ArticleTitle, ArticleUpdate, TagList,
    },
};

#[derive(Debug, Default)]
pub struct UpdateArticleCommand {
    pub slug: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
    pub tag_list: Option<Vec<String>>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let UpdateArticleCommand {
            slug,
            title,
            description,
            body,
            tag_list,
        } = command;

        let article = self.load_by_slug(slug).await?;
        ensure_author(actor, &article)?;

        let mut errors = ValidationErrors::default();
        let title = title.map(|raw| errors.capture(ArticleTitle::new(raw)));
        let description = description.map(|raw| errors.capture(ArticleDescription::new(raw)));
        let body = body.map(|raw| errors.capture(ArticleBody::new(raw)));
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let mut update = ArticleUpdate::new(article.id, self.clock.now());
        let mut reslug = None;

        if let Some(title) = title.flatten() {
            if title != article.title {
                reslug = Some(title.clone());
            }
            update = update.with_title(title);
        }
        if let Some(description) = description.flatten() {
            update = update.with_description(description);
        }
        if let Some(body) = body.flatten() {
            update = update.with_body(body);
        }
        if let Some(tags) = tag_list {
            update = update.with_tag_list(TagList::from_raw(tags));
        }

        if update.is_empty() {
            return self.assembler.article(Some(actor.id), article).await;
        }

        let updated = match reslug {
            None => self.write_repo.update(update).await?,
            Some(title) => {
                let mut attempt = 1;
                loop {
                    let slug = self
                        .slug_service
                        .generate_unique_slug(&title, Some(article.id))
                        .await?;
                    match self.write_repo.update(update.clone().with_slug(slug)).await {
                        Ok(updated) => break updated,
                        Err(err) if err.is_conflict_on("slug") && attempt < MAX_INSERT_ATTEMPTS => {
                            tracing::warn!(attempt, title = %title, "slug claimed concurrently, probing again");
                            attempt += 1;
                        }
                        Err(err) => return Err(err.into()),
                    }
                }
            }
        };
        tracing::info!(slug = %updated.slug, "article updated");
        self.assembler.article(Some(actor.id), updated).await
    }
}
