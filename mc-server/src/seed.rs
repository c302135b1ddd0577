use anyhow::{Context, Result};
use mc::basic_models::RecipeDraft;

use crate::store::MemStore;

/// Starter recipes bundled into the binary, so a fresh process has
/// something to browse.
pub fn starter_recipes() -> Result<Vec<RecipeDraft>> {
    serde_json::from_str(include_str!("seed/starter.json"))
        .context("Parsing embedded starter recipes")
}

/// Feed the embedded starter set through the normal create path.
pub async fn load_starter_recipes(store: &MemStore) -> Result<usize> {
    let drafts = starter_recipes()?;
    let count = drafts.len();
    for draft in drafts {
        let title = draft.title.clone();
        store
            .create_recipe(draft)
            .await
            .map_err(|e| anyhow::anyhow!("starter recipe {:?} rejected: {}", title, e))?;
    }
    tracing::info!("Seeded {} starter recipes", count);
    Ok(count)
}
