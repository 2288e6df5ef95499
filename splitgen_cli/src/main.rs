use clap::{Parser, Subcommand};
use splitgen_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "splitgen")]
#[command(about = "Weekly training split generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use a JSON exercise catalog instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a weekly plan (default)
    Generate {
        /// Training style (hypertrophy, strength, powerbuilding, bodybuilding, calisthenics)
        #[arg(long)]
        style: Option<String>,

        /// Sessions per week
        #[arg(long)]
        days: Option<u32>,

        /// Experience level (beginner, intermediate, advanced)
        #[arg(long)]
        experience: Option<String>,

        /// Seed for a reproducible plan
        #[arg(long)]
        seed: Option<u64>,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// List catalog exercises, optionally filtered
    Catalog {
        /// Muscle group (chest, legs, hamstrings, back, shoulders, biceps, triceps, abdominals)
        #[arg(long)]
        muscle: Option<String>,

        /// Experience level
        #[arg(long)]
        level: Option<String>,

        /// Equipment (barbell, dumbbell, machine, bodyweight, kettlebell, cable)
        #[arg(long)]
        equipment: Option<String>,
    },

    /// Show one exercise by id or name
    Show {
        /// Exercise id or display name
        query: String,
    },

    /// Swap an exercise in a saved JSON plan and print the updated plan
    Substitute {
        /// Plan JSON produced by `generate --json`
        #[arg(long)]
        plan: PathBuf,

        /// Session id (e.g. push_a)
        #[arg(long)]
        session: String,

        /// Id of the exercise to replace
        #[arg(long)]
        exercise: String,

        /// Replacement exercise name or id
        #[arg(long = "with")]
        replacement: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    splitgen_core::logging::init(cli.verbose);

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let catalog_path = cli.catalog.clone().or_else(|| config.catalog.path.clone());
    let custom_catalog;
    let catalog: &Catalog = match catalog_path {
        Some(ref path) => {
            custom_catalog = load_catalog(path)?;
            &custom_catalog
        }
        None => get_default_catalog(),
    };

    match cli.command {
        Some(Commands::Generate {
            style,
            days,
            experience,
            seed,
            json,
        }) => cmd_generate(catalog, &config, style, days, experience, seed, json),
        Some(Commands::Catalog {
            muscle,
            level,
            equipment,
        }) => cmd_catalog(catalog, muscle, level, equipment),
        Some(Commands::Show { query }) => cmd_show(catalog, &query),
        Some(Commands::Substitute {
            plan,
            session,
            exercise,
            replacement,
        }) => cmd_substitute(catalog, &plan, &session, &exercise, &replacement),
        None => {
            // Default to "generate" command
            cmd_generate(catalog, &config, None, None, None, None, false)
        }
    }
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    let catalog = Catalog::load_from(path)?;
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation(format!(
            "Invalid catalog {}",
            path.display()
        )));
    }
    Ok(catalog)
}

fn cmd_generate(
    catalog: &Catalog,
    config: &Config,
    style: Option<String>,
    days: Option<u32>,
    experience: Option<String>,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let mut profile = AthleteProfile::from(&config.profile);
    if let Some(style) = style {
        profile.training_style = TrainingStyle::from(style);
    }
    if let Some(days) = days {
        if days == 0 {
            return Err(Error::Config("--days must be at least 1".into()));
        }
        profile.training_days = days;
    }
    if let Some(experience) = experience {
        profile.experience = experience.parse()?;
    }

    let plan = match seed.or(config.generation.seed) {
        Some(seed) => {
            tracing::debug!("Generating with fixed seed {}", seed);
            generate_weekly_plan_with_seed(&profile, catalog, seed)
        }
        None => generate_weekly_plan(&profile, catalog),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display_plan(&plan);
    }
    Ok(())
}

fn cmd_catalog(
    catalog: &Catalog,
    muscle: Option<String>,
    level: Option<String>,
    equipment: Option<String>,
) -> Result<()> {
    let criteria = ExerciseFilter {
        muscle_group: muscle.map(|m| m.parse()).transpose()?,
        level: level.map(|l| l.parse()).transpose()?,
        equipment: equipment.map(|e| e.parse()).transpose()?,
    };

    let exercises = catalog.filter(&criteria);
    if exercises.is_empty() {
        println!("No exercises match.");
        return Ok(());
    }

    for exercise in &exercises {
        println!(
            "  {:<28} {:<30} {:<11} {:<10} {:<13} {:?}",
            exercise.id,
            exercise.name,
            format!("{:?}", exercise.muscle_group),
            format!("{:?}", exercise.movement_type),
            format!("{:?}", exercise.level),
            exercise.equipment
        );
    }
    println!("\n{} exercises", exercises.len());
    Ok(())
}

fn cmd_show(catalog: &Catalog, query: &str) -> Result<()> {
    let exercise = catalog
        .lookup_by_id(query)
        .or_else(|| catalog.lookup_by_name(query))
        .ok_or_else(|| Error::Other(format!("No exercise matches '{}'", query)))?;

    println!("\n  {} ({})", exercise.name, exercise.id);
    println!("  Muscle group: {:?}", exercise.muscle_group);
    println!("  Movement:     {:?}", exercise.movement_type);
    println!("  Level:        {:?}", exercise.level);
    println!("  Equipment:    {:?}", exercise.equipment);
    println!();
    println!("  {}", exercise.description);
    if let Some(ref url) = exercise.media_url {
        println!();
        println!("  ℹ Reference: {}", url);
    }
    println!();
    Ok(())
}

fn cmd_substitute(
    catalog: &Catalog,
    plan_path: &Path,
    session_id: &str,
    exercise_id: &str,
    replacement: &str,
) -> Result<()> {
    let contents = std::fs::read_to_string(plan_path)?;
    let mut plan: WeeklyPlan = serde_json::from_str(&contents)?;

    let replacement = catalog
        .lookup_by_name(replacement)
        .or_else(|| catalog.lookup_by_id(replacement))
        .ok_or_else(|| {
            Error::Substitution(format!("No catalog exercise matches '{}'", replacement))
        })?
        .clone();

    plan.substitute_exercise(session_id, exercise_id, replacement)?;

    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

fn display_plan(plan: &WeeklyPlan) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  WEEKLY PLAN: {}", plan.training_style.as_str().to_uppercase());
    println!("╰─────────────────────────────────────────╯");

    for session in &plan.sessions {
        println!();
        println!("  {} [{}]", session.name, session.id);
        let groups: Vec<String> = session
            .muscle_groups
            .iter()
            .map(|g| format!("{:?}", g))
            .collect();
        println!("  Targets: {}", groups.join(", "));

        if session.prescriptions.is_empty() {
            println!("  → (no exercises available)");
        }
        for p in &session.prescriptions {
            println!(
                "  → {:<32} {} x {:<6} rest {}s",
                p.exercise.name, p.sets, p.reps, p.rest_seconds
            );
        }
    }

    println!();
}
