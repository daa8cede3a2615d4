use colored::Colorize;

pub fn handle_error(err: anyhow::Error) -> ! {
    eprintln!("{} {}", "Error:".red().bold(), err);

    let msg = err.to_string().to_lowercase();

    if msg.contains("session validation failed") {
        eprintln!("\n{}", "Suggestion:".yellow().bold());
        eprintln!("  The platform session could not be validated against this database.");
        eprintln!("  Re-authenticate with the platform and pass the new session:");
        eprintln!("  {} drivedocs --session-id <value> ...", "$".dimmed());
    }

    if msg.contains("license agreement") {
        eprintln!("\n{}", "Suggestion:".yellow().bold());
        eprintln!("  Accept the end-user license agreement first:");
        eprintln!("  {} drivedocs eula accept", "$".dimmed());
    }

    if msg.contains("document not found") {
        eprintln!("\n{}", "Suggestion:".yellow().bold());
        eprintln!("  List the documents visible to this session with:");
        eprintln!("  {} drivedocs files list", "$".dimmed());
    }

    if msg.contains("connection refused") || msg.contains("network") {
        eprintln!("\n{}", "Suggestion:".yellow().bold());
        eprintln!("  Check your internet connection and try again.");
    }

    std::process::exit(1);
}
