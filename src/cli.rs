use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::planner::constants::{DEFAULT_GOAL_LOG, DEFAULT_GREEDY_LOG, DEFAULT_MAX_CALORIES};
use crate::planner::Strategy;

/// probiotic_menu — greedy menu allocation under a calorie budget or toward a value target.
#[derive(Parser, Debug)]
#[command(name = "probiotic_menu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a menu JSON file (rows or columns). Uses the built-in yogurt menu when omitted.
    #[arg(short, long, global = true)]
    pub menu: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pick each food at most once while staying under a calorie budget.
    Greedy {
        /// Calorie budget.
        #[arg(long, default_value_t = DEFAULT_MAX_CALORIES)]
        max_calories: f64,

        /// Ranking to use. Runs value, cost and density when omitted.
        #[arg(long, value_enum)]
        strategy: Option<Strategy>,

        /// Append each result to the CSV log.
        #[arg(long)]
        save: bool,

        /// CSV log path.
        #[arg(long, default_value = DEFAULT_GREEDY_LOG)]
        log: PathBuf,
    },

    /// Pick foods repeatedly until a target value is reached.
    Goal {
        /// Value to reach. Prompted for when omitted.
        #[arg(long)]
        target: Option<f64>,

        /// Optional calorie ceiling.
        #[arg(long)]
        max_calories: Option<f64>,

        /// Optional ceiling on total servings.
        #[arg(long)]
        max_servings: Option<u32>,

        /// Ranking to use. Runs value, density and cost when omitted.
        #[arg(long, value_enum)]
        strategy: Option<Strategy>,

        /// Append each result to the CSV log.
        #[arg(long)]
        save: bool,

        /// CSV log path.
        #[arg(long, default_value = DEFAULT_GOAL_LOG)]
        log: PathBuf,
    },

    /// Print the menu and exit.
    Show,
}

impl Command {
    /// Strategies to run, in run order.
    pub fn strategies(&self) -> Vec<Strategy> {
        match self {
            Command::Greedy {
                strategy: Some(s), ..
            }
            | Command::Goal {
                strategy: Some(s), ..
            } => vec![*s],
            Command::Greedy { strategy: None, .. } => {
                vec![Strategy::Value, Strategy::Cost, Strategy::Density]
            }
            Command::Goal { strategy: None, .. } => {
                vec![Strategy::Value, Strategy::Density, Strategy::Cost]
            }
            Command::Show => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greedy_defaults() {
        let cli = Cli::try_parse_from(["probiotic_menu", "greedy"]).unwrap();
        assert!(cli.menu.is_none());
        match &cli.command {
            Command::Greedy {
                max_calories,
                save,
                log,
                ..
            } => {
                assert_eq!(*max_calories, DEFAULT_MAX_CALORIES);
                assert!(!save);
                assert_eq!(log, &PathBuf::from(DEFAULT_GREEDY_LOG));
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(
            cli.command.strategies(),
            vec![Strategy::Value, Strategy::Cost, Strategy::Density]
        );
    }

    #[test]
    fn test_goal_flags() {
        let cli = Cli::try_parse_from([
            "probiotic_menu",
            "goal",
            "--target",
            "40",
            "--max-servings",
            "6",
            "--strategy",
            "density",
            "--menu",
            "menu.json",
        ])
        .unwrap();

        assert_eq!(cli.menu, Some(PathBuf::from("menu.json")));
        match &cli.command {
            Command::Goal {
                target,
                max_calories,
                max_servings,
                ..
            } => {
                assert_eq!(*target, Some(40.0));
                assert_eq!(*max_calories, None);
                assert_eq!(*max_servings, Some(6));
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.command.strategies(), vec![Strategy::Density]);
    }

    #[test]
    fn test_goal_default_order() {
        let cli = Cli::try_parse_from(["probiotic_menu", "goal", "--target", "10"]).unwrap();
        assert_eq!(
            cli.command.strategies(),
            vec![Strategy::Value, Strategy::Density, Strategy::Cost]
        );
    }
}
