use anyhow::{ensure, Result};
use mc::basic_models::{Recipe, RecipeDraft, RecipeQuery};

/// Typed client for the recipe API.
#[derive(Clone)]
pub struct ApiClient {
    server: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Fetch recipes matching the server-side filters. Unset query
    /// fields are left out of the URL entirely.
    pub async fn list_recipes(&self, query: &RecipeQuery) -> Result<Vec<Recipe>> {
        let resp = self
            .http
            .get(format!("{}/api/recipes", self.server))
            .query(query)
            .send()
            .await?;
        ensure!(
            resp.status().is_success(),
            "Failed to list recipes. Response: {:#?}",
            resp.text().await?,
        );
        Ok(resp.json().await?)
    }

    /// Fetch one recipe. An unknown id is None rather than an error.
    pub async fn get_recipe(&self, id: &str) -> Result<Option<Recipe>> {
        let resp = self
            .http
            .get(format!("{}/api/recipes/{}", self.server, id))
            .send()
            .await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        ensure!(
            resp.status().is_success(),
            "Failed to fetch recipe. Response: {:#?}",
            resp.text().await?,
        );
        Ok(Some(resp.json().await?))
    }

    /// Submit a draft and return the stored recipe with its assigned id.
    pub async fn create_recipe(&self, draft: &RecipeDraft) -> Result<Recipe> {
        let resp = self
            .http
            .post(format!("{}/api/recipes", self.server))
            .json(draft)
            .send()
            .await?;
        ensure!(
            resp.status().is_success(),
            "Failed to create recipe. Response: {:#?}",
            resp.text().await?,
        );
        let recipe: Recipe = resp.json().await?;
        tracing::info!("Created recipe {}", recipe.id);
        Ok(recipe)
    }

    pub async fn delete_recipe(&self, id: &str) -> Result<()> {
        let resp = self
            .http
            .delete(format!("{}/api/recipes/{}", self.server, id))
            .send()
            .await?;
        ensure!(
            resp.status().is_success(),
            "Failed to delete recipe. Response: {:#?}",
            resp.text().await?,
        );
        Ok(())
    }
}
