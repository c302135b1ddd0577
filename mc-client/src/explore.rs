use mc::basic_models::{Mood, Recipe, RecipeQuery};
use rand::seq::SliceRandom;

/// Everything the filter panel collects. Cuisine, diet, time and search
/// go to the server; the mood facet is applied locally on the results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    pub search: String,
    pub cuisine: String,
    pub diet_type: String,
    pub max_time: Option<u32>,
    pub mood: Option<Mood>,
}

impl FilterSet {
    /// The server-side half of the filter. Empty and "All" selections
    /// impose no constraint and are left out of the query.
    pub fn server_query(&self) -> RecipeQuery {
        RecipeQuery {
            cuisine: server_param(&self.cuisine),
            diet_type: server_param(&self.diet_type),
            max_time: self.max_time,
            search: if self.search.trim().is_empty() {
                None
            } else {
                Some(self.search.clone())
            },
        }
    }

    /// Second pass over server results: keep recipes whose stored mood
    /// matches the selected one. Recipes without a mood never match an
    /// active mood filter.
    pub fn apply_mood(&self, recipes: Vec<Recipe>) -> Vec<Recipe> {
        match self.mood {
            None => recipes,
            Some(want) => recipes
                .into_iter()
                .filter(|r| r.mood == Some(want))
                .collect(),
        }
    }

    /// How many facets are active, for the filter badge.
    pub fn active_count(&self) -> usize {
        usize::from(!self.search.trim().is_empty())
            + usize::from(server_param(&self.cuisine).is_some())
            + usize::from(server_param(&self.diet_type).is_some())
            + usize::from(self.max_time.is_some())
            + usize::from(self.mood.is_some())
    }

    /// Reset every facet, as the Clear Filters button does.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn server_param(selection: &str) -> Option<String> {
    let selection = selection.trim();
    if selection.is_empty() || selection == "All" {
        None
    } else {
        Some(selection.to_string())
    }
}

/// One uniformly-random pick from the filtered set, falling back to the
/// full set when the filter matched nothing.
pub fn surprise_pick<'a>(filtered: &'a [Recipe], all: &'a [Recipe]) -> Option<&'a Recipe> {
    let pool = if filtered.is_empty() { all } else { filtered };
    pool.choose(&mut rand::thread_rng())
}
