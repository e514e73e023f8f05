use clap::Parser;
use nutricheck::config::Command;
use nutricheck::utils::error::ErrorSeverity;
use nutricheck::utils::{logger, validation::Validate};
use nutricheck::{
    Category, Classifier, CliConfig, CsvCatalog, DecisionTree, NutritionEngine, Settings,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting nutricheck CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match Settings::resolve(&config).await {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration loading failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match run(&config, &settings).await {
        Ok(()) => {
            tracing::info!("✅ Done");
        }
        Err(e) => {
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,      // soft failure, message only
                ErrorSeverity::Medium => 2,   // user input error
                ErrorSeverity::High => 1,     // processing error
                ErrorSeverity::Critical => 3, // startup/system error
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn run(config: &CliConfig, settings: &Settings) -> nutricheck::Result<()> {
    let model = DecisionTree::load(&settings.model_path).await?;
    let source = CsvCatalog::new(&settings.catalog_path);
    let engine = NutritionEngine::from_source(&source, model).await?;
    tracing::info!(
        "Loaded {} ingredients from {}",
        engine.catalog().len(),
        settings.catalog_path
    );

    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match &config.command {
        Command::Classify { ingredients } => classify(&engine, ingredients, &mut rng),
        Command::SuggestMeal => suggest_meal(&engine, &mut rng),
        Command::Suggest { category } => suggest(&engine, *category, &mut rng),
        Command::List => {
            list(&engine);
            Ok(())
        }
    }
}

fn classify<C: Classifier, R: Rng>(
    engine: &NutritionEngine<C>,
    names: &[String],
    rng: &mut R,
) -> nutricheck::Result<()> {
    let evaluation = engine.classify(names)?;

    println!("📊 Meal profile:");
    for category in Category::ALL {
        let mark = if evaluation.vector.contains(category) {
            "✔️ YES"
        } else {
            "❌ NO"
        };
        println!("  {:<16} {}", category.label(), mark);
    }

    if evaluation.balanced {
        println!("✅ This meal is BALANCED!");
        return Ok(());
    }

    println!("❌ This meal is UNBALANCED.");
    println!("💡 Here's how you can balance this meal:");
    for category in &evaluation.missing {
        match engine.suggest_additions(*category, rng) {
            Ok(picks) => println!(
                "  Missing {}. Try adding: {}, {}, or {}",
                category, picks[0], picks[1], picks[2]
            ),
            // A thin catalog cannot always produce three ideas; say so and move on.
            Err(e) => {
                tracing::warn!("No suggestions for {}: {}", category, e);
                println!("  Missing {}. ⚠️ {}", category, e.user_friendly_message());
            }
        }
    }

    Ok(())
}

fn suggest_meal<C: Classifier, R: Rng>(
    engine: &NutritionEngine<C>,
    rng: &mut R,
) -> nutricheck::Result<()> {
    let idea = engine.suggest_meal(rng)?;
    println!(
        "🎲 Here's a balanced idea: {} + {} + {}",
        idea.carb.name, idea.protein.name, idea.veg.name
    );
    Ok(())
}

fn suggest<C: Classifier, R: Rng>(
    engine: &NutritionEngine<C>,
    category: Category,
    rng: &mut R,
) -> nutricheck::Result<()> {
    let picks = engine.suggest_additions(category, rng)?;
    println!(
        "💡 {} ideas: {}, {}, or {}",
        category, picks[0], picks[1], picks[2]
    );
    Ok(())
}

fn list<C: Classifier>(engine: &NutritionEngine<C>) {
    println!("🥗 {} ingredients available:", engine.catalog().len());
    for ingredient in engine.catalog().iter() {
        let mut tags = Vec::new();
        for category in Category::ALL {
            if ingredient.has(category) {
                tags.push(category.label());
            }
        }
        println!("  {:<24} [{}]", ingredient.name, tags.join(", "));
    }
}
