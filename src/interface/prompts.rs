use dialoguer::{Confirm, Input};

use crate::error::{MenuError, Result};

/// Prompt for the goal-first target value.
pub fn prompt_target_value() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("How many probiotic units do you want to reach?")
        .default("40".to_string())
        .interact_text()?;

    let target: f64 = input
        .trim()
        .parse()
        .map_err(|_| MenuError::InvalidInput("Invalid number".to_string()))?;

    if !target.is_finite() {
        return Err(MenuError::InvalidInput(
            "Target value must be a finite number".to_string(),
        ));
    }

    Ok(target)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
