//! Blocking terminal prompts for interactive mode.
//!
//! Every enumerated answer is validated immediately; an invalid
//! numeric choice is fatal with no retry, matching the one-shot
//! operator flow this tool has always had.

use std::io::{self, Write};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Invalid selection '{answer}'; expected {expected}")]
    InvalidChoice { answer: String, expected: String },

    #[error("{0} not supported at this time")]
    Unsupported(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type PromptResult<T> = Result<T, PromptError>;

/// Print a question and read one trimmed line from stdin.
pub fn ask(question: &str) -> PromptResult<String> {
    print!("{question}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Ask a numbered-menu question; the answer must be 1..=len(options).
///
/// Returns the zero-based index of the chosen option.
pub fn ask_menu(header: &str, options: &[&str], question: &str) -> PromptResult<usize> {
    println!();
    println!("{header}");
    for (idx, option) in options.iter().enumerate() {
        println!("     {}  =  {}", idx + 1, option);
    }
    let answer = ask(question)?;

    match answer.parse::<usize>() {
        Ok(n) if (1..=options.len()).contains(&n) => Ok(n - 1),
        _ => Err(PromptError::InvalidChoice {
            answer,
            expected: format!("a number between 1 and {}", options.len()),
        }),
    }
}

/// Ask a yes/no question.
pub fn ask_yes_no(question: &str) -> PromptResult<bool> {
    let answer = ask(question)?;
    match answer.to_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(PromptError::InvalidChoice {
            answer,
            expected: "y or n".to_string(),
        }),
    }
}

/// Section banner between interactive questions.
pub fn section_break(question: usize, total: usize) {
    println!();
    println!(">>>>>>>>>> QUESTION {question} of {total} <<<<<<<<<<");
}
