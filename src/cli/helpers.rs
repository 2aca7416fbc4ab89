//! Shared helper functions for CLI commands

use chrono::{DateTime, Local, Utc};
use dialoguer::{theme::ColorfulTheme, Confirm};
use miette::{IntoDiagnostic, Result};
use std::io::{self, BufRead, IsTerminal};

/// Prompt shown before any destructive action
pub const CONFIRM_DELETE: &str = "¿Está seguro de eliminar el registro?";

/// Format an amount as Chilean pesos: dot-grouped, no decimals
///
/// CLP has no cents in practice; fractional amounts are rounded.
pub fn format_clp(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.abs().to_string();

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if rounded < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Render a UTC timestamp in the local display format used by the lists
pub fn format_local_date(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%d-%m-%Y %H:%M").to_string()
}

/// Truncate a string to max_len, adding "..." if truncated
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// Ask for delete confirmation
///
/// Interactive terminals get a dialoguer prompt defaulting to "no". Piped
/// stdin reads one line and accepts the usual affirmatives, so scripted
/// runs can answer the prompt.
pub fn confirm_delete() -> Result<bool> {
    if io::stdin().is_terminal() {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(CONFIRM_DELETE)
            .default(false)
            .interact()
            .into_diagnostic()
    } else {
        println!("{} (s/N)", CONFIRM_DELETE);
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).into_diagnostic()?;
        Ok(matches!(
            line.trim().to_lowercase().as_str(),
            "s" | "si" | "sí" | "y" | "yes"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_clp_groups_thousands() {
        assert_eq!(format_clp(0.0), "$0");
        assert_eq!(format_clp(999.0), "$999");
        assert_eq!(format_clp(5000.0), "$5.000");
        assert_eq!(format_clp(1234567.0), "$1.234.567");
        assert_eq!(format_clp(-12000.0), "-$12.000");
    }

    #[test]
    fn test_format_clp_rounds_fractions() {
        assert_eq!(format_clp(1999.6), "$2.000");
    }

    #[test]
    fn test_format_local_date_shape() {
        let date = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let formatted = format_local_date(&date);
        // exact hour depends on the local offset; the shape does not
        assert_eq!(formatted.len(), "01-06-2024 12:00".len());
        assert!(formatted.contains("2024"));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
    }
}
