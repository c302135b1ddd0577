use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum Cuisine {
    Italian,
    Asian,
    Mexican,
    Indian,
    American,
    Mediterranean,
    Thai,
    French,
    Japanese,
    #[serde(rename = "Middle Eastern")]
    #[strum(serialize = "Middle Eastern")]
    MiddleEastern,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum DietType {
    Vegan,
    Vegetarian,
    #[serde(rename = "Gluten-Free")]
    #[strum(serialize = "Gluten-Free")]
    GlutenFree,
    #[serde(rename = "Dairy-Free")]
    #[strum(serialize = "Dairy-Free")]
    DairyFree,
    Keto,
    Paleo,
    Regular,
}

/// The occasion a recipe suits. Stored on the recipe, but only ever
/// filtered on client-side.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum Mood {
    Cozy,
    Comfort,
    Fresh,
    Energized,
    Adventurous,
    Quick,
}

/// Ingredient amounts arrive as either a number or a string like "1.5",
/// depending on who wrote the recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Count(f64),
    Text(String),
}

impl Amount {
    /// Coerce to a number where possible.
    pub fn as_quantity(&self) -> Option<f64> {
        match self {
            Amount::Count(n) => Some(*n),
            Amount::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Amount::Count(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            Amount::Count(n) => write!(f, "{}", n),
            Amount::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: Amount,
    pub unit: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub cuisine: Cuisine,
    pub diet_type: DietType,
    /// Minutes.
    pub prep_time: u32,
    /// Minutes.
    pub cook_time: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    /// One entry per step, in cooking order.
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    pub fn total_time(&self) -> u32 {
        self.prep_time + self.cook_time
    }
}

/// What a client submits to create a recipe: a [`Recipe`] minus the
/// fields the store assigns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub cuisine: Cuisine,
    pub diet_type: DietType,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
}

impl RecipeDraft {
    /// Check everything the type system can't, collecting every problem
    /// into one aggregated failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut issues = Vec::new();
        if self.title.trim().is_empty() {
            issues.push(FieldIssue::new("title", "must not be empty"));
        }
        if self.servings == 0 {
            issues.push(FieldIssue::new("servings", "must be at least 1"));
        }
        if self.instructions.is_empty() {
            issues.push(FieldIssue::new("instructions", "must have at least one step"));
        } else if self.instructions.iter().any(|s| s.trim().is_empty()) {
            issues.push(FieldIssue::new("instructions", "steps must not be empty"));
        }
        if self.ingredients.iter().any(|i| i.name.trim().is_empty()) {
            issues.push(FieldIssue::new("ingredients", "ingredient names must not be empty"));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            issues.push(FieldIssue::new("rating", "must be between 0 and 5"));
        }
        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues })
        }
    }
}

/// The server-side filter parameters of a recipe query. Unset fields
/// impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize)]
#[error("invalid recipe: {}", join_issues(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            issues: vec![FieldIssue {
                field: field.into(),
                message: message.into(),
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
