// Colored terminal output for the `predict` and `status` commands.

use colored::Colorize;

use crate::classifier::label::Label;
use crate::inference::Verdict;

/// Print a single verdict the way the page would show it.
pub fn display_verdict(text: &str, verdict: &Verdict) {
    println!(
        "\n{} {}",
        "Text:".dimmed(),
        super::truncate_chars(text.trim(), 120)
    );

    match verdict {
        Verdict::Empty => println!("{} {}", "Warning:".yellow(), verdict.message()),
        Verdict::Classified { label, score } => {
            println!("{}", colorize_label(*label, &verdict.message()));
            println!("  {} {:.3}", "Score:".dimmed(), score);
        }
        Verdict::Unrecognized { .. } => {
            println!("{} {}", "Error:".red().bold(), verdict.message())
        }
    }
}

/// FAKE renders failure-styled, REAL success-styled.
pub fn colorize_label(label: Label, message: &str) -> String {
    match label {
        Label::Fake => message.red().bold().to_string(),
        Label::Real => message.green().bold().to_string(),
    }
}
