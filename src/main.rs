use std::path::Path;

use clap::Parser;
use tracing::{info, warn};

use probiotic_menu_rs::cli::{Cli, Command};
use probiotic_menu_rs::error::{MenuError, Result};
use probiotic_menu_rs::interface::{
    display_goal_selection, display_menu, display_selection, prompt_target_value, prompt_yes_no,
};
use probiotic_menu_rs::menu::{demo, load_menu};
use probiotic_menu_rs::models::Food;
use probiotic_menu_rs::planner::{
    goal_first_select, greedy_select, GoalConstraints, Strategy, GOAL_FIRST_LABEL,
};
use probiotic_menu_rs::results::{append_goal_result, append_greedy_result, now_timestamp};
use probiotic_menu_rs::telemetry::init_tracing;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let strategies = cli.command.strategies();
    let menu_path = cli.menu.as_deref();

    match cli.command {
        Command::Greedy {
            max_calories,
            save,
            log,
            ..
        } => cmd_greedy(menu_path, max_calories, &strategies, save, &log),
        Command::Goal {
            target,
            max_calories,
            max_servings,
            save,
            log,
            ..
        } => cmd_goal(
            menu_path,
            target,
            max_calories,
            max_servings,
            &strategies,
            save,
            &log,
        ),
        Command::Show => cmd_show(menu_path),
    }
}

/// Load the menu file, or fall back to a built-in demo menu.
fn load_or_demo(path: Option<&Path>, demo_menu: fn() -> Result<Vec<Food>>) -> Result<Vec<Food>> {
    let menu = match path {
        Some(path) => load_menu(path)?,
        None => demo_menu()?,
    };
    info!(
        source = %path.map_or("built-in demo".into(), |p| p.display().to_string()),
        foods = menu.len(),
        "menu loaded"
    );
    Ok(menu)
}

/// Run the single-pick allocator once per strategy.
fn cmd_greedy(
    menu_path: Option<&Path>,
    max_calories: f64,
    strategies: &[Strategy],
    save: bool,
    log: &Path,
) -> Result<()> {
    let menu = load_or_demo(menu_path, demo::single_pick_menu)?;

    for (i, &strategy) in strategies.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "Use greedy {} to allocate {} calories",
            strategy.label(),
            max_calories
        );

        let selection = greedy_select(&menu, max_calories, strategy.key());
        display_selection(&selection);

        if save {
            match append_greedy_result(log, &now_timestamp(), strategy.label(), &selection) {
                Ok(()) => println!("Results saved to {}", log.display()),
                Err(e) => report_log_failure(log, &e),
            }
        }
    }

    Ok(())
}

/// Run the goal-first allocator once per strategy.
fn cmd_goal(
    menu_path: Option<&Path>,
    target: Option<f64>,
    max_calories: Option<f64>,
    max_servings: Option<u32>,
    strategies: &[Strategy],
    mut save: bool,
    log: &Path,
) -> Result<()> {
    let menu = load_or_demo(menu_path, demo::goal_menu)?;

    let interactive = target.is_none();
    let target = match target {
        Some(t) => t,
        None => prompt_target_value()?,
    };

    let mut constraints = GoalConstraints::new(target);
    constraints.max_calories = max_calories;
    constraints.max_servings = max_servings;

    // The demo menu comes with its own ceilings unless overridden.
    if menu_path.is_none() && max_calories.is_none() && max_servings.is_none() {
        constraints = constraints
            .with_max_calories(demo::GOAL_MAX_CALORIES)
            .with_max_servings(demo::GOAL_MAX_SERVINGS);
        println!(
            "Demo menu: limiting to {} calories and {} servings",
            demo::GOAL_MAX_CALORIES,
            demo::GOAL_MAX_SERVINGS
        );
    }

    if interactive && !save {
        save = prompt_yes_no(&format!("Append results to {}?", log.display()), false)?;
    }

    println!("Goal-first greedy to reach {} units", target);

    for &strategy in strategies {
        println!();
        println!("Use greedy {}", strategy.label());

        let result = goal_first_select(&menu, &constraints, strategy.key());
        display_goal_selection(&result);

        if save {
            let label = format!("{} ({})", GOAL_FIRST_LABEL, strategy.label());
            match append_goal_result(log, &now_timestamp(), &label, &result) {
                Ok(()) => println!("Results saved to {}", log.display()),
                Err(e) => report_log_failure(log, &e),
            }
        }
    }

    Ok(())
}

fn cmd_show(menu_path: Option<&Path>) -> Result<()> {
    let menu = load_or_demo(menu_path, demo::goal_menu)?;
    display_menu(&menu, "Menu");
    Ok(())
}

/// Log write failures never change the computed result or the exit status.
fn report_log_failure(log: &Path, error: &MenuError) {
    warn!(path = %log.display(), %error, "failed to append results");
    eprintln!("Could not save results to {}: {}", log.display(), error);
}
