//! Non-interactive runner - one prompt in, one answer out

use crate::client::AgentClient;
use std::process::ExitCode;

/// Run a single prompt end to end and render the result.
///
/// A final answer goes to stdout with a guaranteed trailing newline; an
/// error result becomes a stderr diagnostic and a non-zero exit. A run
/// that ends with neither gets a warning, not a crash.
pub async fn run_non_interactive(client: &AgentClient, input: &str) -> ExitCode {
    let result = match client.run(input).await {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error during non-interactive run: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(error) = result.error {
        eprintln!("Error during non-interactive run: {}", error);
        return ExitCode::FAILURE;
    }

    match result.final_answer {
        Some(answer) => {
            if answer.ends_with('\n') {
                print!("{}", answer);
            } else {
                println!("{}", answer);
            }
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("Warning: run completed without a final answer.");
            ExitCode::SUCCESS
        }
    }
}
