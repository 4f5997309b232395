//! Local filesystem implementation of the OG-image store.

use std::path::PathBuf;

use async_trait::async_trait;

use bizdir_core::directory::OgImageStore;
use bizdir_core::error::{DomainError, DomainResult};
use bizdir_core::types::DbId;

/// Writes OG images under `<root>/<entity-slug>/<owner-id>.<ext>` and
/// returns the path relative to the root.
pub struct LocalOgImageStore {
    root: PathBuf,
}

impl LocalOgImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl OgImageStore for LocalOgImageStore {
    async fn store(
        &self,
        entity_slug: &str,
        owner_id: DbId,
        extension: &str,
        bytes: &[u8],
        old_path: Option<&str>,
    ) -> DomainResult<String> {
        let dir = self.root.join(entity_slug);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| DomainError::Unexpected(format!("creating {}: {e}", dir.display())))?;

        let relative = format!("{entity_slug}/{owner_id}.{extension}");
        let target = self.root.join(&relative);
        tokio::fs::write(&target, bytes)
            .await
            .map_err(|e| DomainError::Unexpected(format!("writing {}: {e}", target.display())))?;

        // Replacing an image with a different extension leaves the old file
        // behind; removal is best-effort.
        if let Some(old) = old_path {
            if old != relative {
                let _ = tokio::fs::remove_file(self.root.join(old)).await;
            }
        }

        Ok(relative)
    }
}
