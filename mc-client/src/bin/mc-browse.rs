use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use mc::basic_models::{Mood, Recipe};
use mc_client::{
    api::ApiClient,
    cook,
    explore::{surprise_pick, FilterSet},
};

/// Browse the recipe catalog from the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Free-text search over titles, descriptions and tags
    #[arg(short, long, default_value = "")]
    search: String,
    /// Cuisine to filter by, or "All"
    #[arg(short, long, default_value = "All")]
    cuisine: String,
    /// Diet type to filter by, or "All"
    #[arg(short, long, default_value = "All")]
    diet: String,
    /// Only recipes whose total time fits in this many minutes
    #[arg(short, long)]
    max_time: Option<u32>,
    /// Keep only recipes matching this mood (applied locally)
    #[arg(long)]
    mood: Option<Mood>,
    /// Print one random pick instead of the whole list
    #[arg(short, long)]
    random: bool,
    /// Show a single recipe, with ingredients and steps, by id
    #[arg(long)]
    show: Option<String>,
    /// URL of the server to browse
    #[arg(long, default_value = "http://localhost:3000")]
    server: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let client = ApiClient::new(&args.server);

    if let Some(id) = args.show {
        match client.get_recipe(&id).await? {
            Some(recipe) => print_full(&recipe),
            None => println!("No recipe with id {}", id),
        }
        return Ok(());
    }

    let filters = FilterSet {
        search: args.search,
        cuisine: args.cuisine,
        diet_type: args.diet,
        max_time: args.max_time,
        mood: args.mood,
    };
    let fetched = client.list_recipes(&filters.server_query()).await?;
    let shown = filters.apply_mood(fetched.clone());

    if args.random {
        match surprise_pick(&shown, &fetched) {
            Some(recipe) => print_full(recipe),
            None => println!("Nothing to pick from yet"),
        }
        return Ok(());
    }

    for recipe in &shown {
        println!(
            "{}  {} [{} / {}] {} min, rated {:.1}",
            recipe.id,
            recipe.title,
            recipe.cuisine,
            recipe.diet_type,
            recipe.total_time(),
            recipe.rating,
        );
    }
    println!("Showing {} of {} recipes", shown.len(), fetched.len());
    Ok(())
}

fn print_full(recipe: &Recipe) {
    println!("{} [{} / {}]", recipe.title, recipe.cuisine, recipe.diet_type);
    if let Some(description) = &recipe.description {
        println!("{}", description);
    }
    println!(
        "Prep {} min, cook {} min, serves {}",
        recipe.prep_time, recipe.cook_time, recipe.servings
    );
    if let Some(mood) = recipe.mood {
        println!("Mood: {}", mood);
    }
    println!("Ingredients:");
    for ingredient in &recipe.ingredients {
        println!(
            "  - {} {} {}{}",
            ingredient.amount,
            ingredient.unit,
            ingredient.name,
            if ingredient.required { "" } else { " (optional)" },
        );
    }
    println!("Steps:");
    for (index, step) in recipe.instructions.iter().enumerate() {
        println!("  {}. {}", index + 1, step);
    }
    println!(
        "Est. total: {}",
        cook::format_clock(Duration::from_secs(u64::from(recipe.total_time()) * 60)),
    );
}
