// src/domain/article/services/mod.rs
use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::errors::DomainResult;

const FALLBACK_BASE: &str = "article";
pub const MAX_SLUG_PROBES: u32 = 50;

/// Domain service responsible for producing unique slugs for articles.
///
/// Probing is advisory: two writers can still pick the same candidate, so
/// callers must be ready for the store to report a slug conflict on insert.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// Tries `base`, `base-1`, `base-2`, ... up to `MAX_SLUG_PROBES`
    /// candidates, then falls back to a random suffix. A slug held by
    /// `ignore_id` counts as free so an article can keep its own slug.
    pub async fn generate_unique_slug(
        &self,
        title: &ArticleTitle,
        ignore_id: Option<ArticleId>,
    ) -> DomainResult<ArticleSlug> {
        let base = self.generator.slugify(title.as_str());
        let base_slug = if base.is_empty() {
            FALLBACK_BASE.to_string()
        } else {
            base
        };

        let mut candidate = base_slug.clone();
        for counter in 1..=MAX_SLUG_PROBES {
            let slug = ArticleSlug::new(candidate)?;
            match self.read_repo.find_by_slug(&slug).await? {
                Some(existing) if Some(existing.id) == ignore_id => return Ok(slug),
                Some(_) => candidate = format!("{base_slug}-{counter}"),
                None => return Ok(slug),
            }
        }

        let suffix = Uuid::new_v4().simple().to_string();
        tracing::warn!(base = %base_slug, "slug probes exhausted, using random suffix");
        ArticleSlug::new(format!("{base_slug}-{}", &suffix[..8]))
    }
}
