use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use mc::basic_models::{Recipe, RecipeDraft, RecipeQuery, ValidationError};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{NewUser, StoreError, User};

/// The authoritative in-memory collection of recipes and users.
///
/// Cloning is cheap and clones share the same shelves, so the server
/// constructs one store at boot and hands copies of the handle to the
/// route handlers. Everything vanishes when the process exits.
#[derive(Clone, Default)]
pub struct MemStore {
    shelves: Arc<RwLock<Shelves>>,
}

#[derive(Default)]
struct Shelves {
    recipes: HashMap<String, Recipe>,
    users: HashMap<String, User>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recipes matching every supplied filter, in shelf order.
    pub async fn list_recipes(&self, query: &RecipeQuery) -> Vec<Recipe> {
        let shelves = self.shelves.read().await;
        shelves
            .recipes
            .values()
            .filter(|r| matches(r, query))
            .cloned()
            .collect()
    }

    /// A recipe by id. Unknown and malformed ids are simply absent.
    pub async fn get_recipe(&self, id: &str) -> Option<Recipe> {
        self.shelves.read().await.recipes.get(id).cloned()
    }

    /// Validate a draft, assign a fresh id and timestamps, and shelve it.
    pub async fn create_recipe(&self, draft: RecipeDraft) -> Result<Recipe, ValidationError> {
        draft.validate()?;
        let now = Utc::now();
        let recipe = Recipe {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            description: draft.description,
            cuisine: draft.cuisine,
            diet_type: draft.diet_type,
            prep_time: draft.prep_time,
            cook_time: draft.cook_time,
            servings: draft.servings,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            image_url: draft.image_url,
            // Ratings carry one fractional digit
            rating: (draft.rating * 10.0).round() / 10.0,
            tags: draft.tags,
            mood: draft.mood,
            created_at: now,
            updated_at: now,
        };
        self.shelves
            .write()
            .await
            .recipes
            .insert(recipe.id.clone(), recipe.clone());
        Ok(recipe)
    }

    /// Remove a recipe. Removing an unknown id is a no-op.
    pub async fn delete_recipe(&self, id: &str) {
        self.shelves.write().await.recipes.remove(id);
    }

    pub async fn get_user(&self, id: &str) -> Option<User> {
        self.shelves.read().await.users.get(id).cloned()
    }

    pub async fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.shelves
            .read()
            .await
            .users
            .values()
            .find(|u| u.username == username)
            .cloned()
    }

    /// Register a user. Usernames are unique and the password is hashed
    /// before it is stored.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut shelves = self.shelves.write().await;
        if shelves.users.values().any(|u| u.username == new_user.username) {
            return Err(StoreError::UsernameTaken(new_user.username));
        }
        let user = User::register(new_user)?;
        shelves.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }
}

/// Whether a recipe satisfies every supplied predicate. "All" from the
/// cuisine and diet selectors means no filter, as does an empty value.
fn matches(recipe: &Recipe, query: &RecipeQuery) -> bool {
    if let Some(want) = query.cuisine.as_deref() {
        if !want.is_empty() && want != "All" && recipe.cuisine.to_string() != want {
            return false;
        }
    }
    if let Some(want) = query.diet_type.as_deref() {
        if !want.is_empty() && want != "All" && recipe.diet_type.to_string() != want {
            return false;
        }
    }
    if let Some(max) = query.max_time {
        if recipe.total_time() > max {
            return false;
        }
    }
    if let Some(needle) = query.search.as_deref() {
        let needle = needle.to_lowercase();
        if !needle.is_empty() {
            let in_title = recipe.title.to_lowercase().contains(&needle);
            let in_description = recipe
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle));
            let in_tags = recipe.tags.iter().any(|t| t.to_lowercase().contains(&needle));
            if !in_title && !in_description && !in_tags {
                return false;
            }
        }
    }
    true
}
