use crate::models::{Food, GoalSelection, Selection, Totals};

/// Display a single-pick result.
pub fn display_selection(selection: &Selection<'_>) {
    println!("Selected foods:");
    display_foods(&selection.foods);
    display_totals(&selection.totals);
}

/// Display a goal-first result.
pub fn display_goal_selection(result: &GoalSelection<'_>) {
    println!("Selected foods (goal-first):");
    display_foods(&result.selection.foods);

    println!();
    println!("Target value: {}", result.target_value);
    println!("Reached target? {}", if result.reached { "yes" } else { "no" });
    println!("Total servings: {}", result.servings());
    display_totals(&result.selection.totals);

    let counts: Vec<String> = result
        .counts
        .iter()
        .map(|(name, n)| format!("{} x{}", name, n))
        .collect();
    if counts.is_empty() {
        println!("Counts: (none)");
    } else {
        println!("Counts: {}", counts.join(", "));
    }
}

/// Display a menu, one food per line.
pub fn display_menu(menu: &[Food], title: &str) {
    if menu.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, menu.len());
    println!();

    for food in menu {
        println!("  {}", food.debug_string());
    }

    println!();
}

fn display_foods(foods: &[&Food]) {
    if foods.is_empty() {
        println!("  (none)");
        return;
    }

    let width = foods.iter().map(|f| f.name.len()).max().unwrap_or(10);

    for food in foods {
        println!(
            "  {:<width$}  value={:<6} calories={}",
            food.name,
            food.value,
            food.calories,
            width = width
        );
    }
}

fn display_totals(totals: &Totals) {
    println!("Total calories: {}", totals.calories);
    println!("Total value: {}", totals.value);
    for (nutrient, amount) in &totals.nutrients {
        println!("Total {}: {:.1}", nutrient, amount);
    }
}
