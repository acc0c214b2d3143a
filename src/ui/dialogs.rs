use colored::Colorize;

/// Severity of a status line written to stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
}

/// Helper function to print a status message with semantic level
pub fn set_status(text: impl AsRef<str>, level: StatusLevel) {
    let text = text.as_ref();
    match level {
        StatusLevel::Info => eprintln!("{}", text.dimmed()),
        StatusLevel::Success => eprintln!("{}", text.green()),
        StatusLevel::Warning => eprintln!("{} {}", "warning:".yellow().bold(), text),
    }
}

/// Helper function to show an error block on stderr
pub fn show_error(title: impl AsRef<str>, message: impl AsRef<str>, details: impl AsRef<str>) {
    eprintln!("{} {}", "error:".red().bold(), title.as_ref().bold());
    eprintln!("{}", message.as_ref());

    let details = details.as_ref();
    if !details.is_empty() {
        eprintln!();
        for line in details.lines() {
            eprintln!("  {}", line);
        }
    }
}
