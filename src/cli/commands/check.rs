//! Local file checking command.

use std::path::Path;

use anyhow::Context;
use console::style;

use crate::matcher;
use crate::models::{MatchResult, UploadedFile};
use crate::parser::{self, FileFormat};

/// Run the matching pipeline on two local files and print the result.
pub async fn cmd_check(user_path: &Path, draw_path: &Path, format: &str) -> anyhow::Result<()> {
    let user_name = display_name(user_path);
    let draw_name = display_name(draw_path);

    // Both extensions are validated before any file is read
    FileFormat::from_filename(&user_name)?;
    FileFormat::from_filename(&draw_name)?;

    let user_file = UploadedFile::new(
        user_name,
        std::fs::read(user_path)
            .with_context(|| format!("Failed to read {}", user_path.display()))?,
    );
    let draw_file = UploadedFile::new(
        draw_name,
        std::fs::read(draw_path)
            .with_context(|| format!("Failed to read {}", draw_path.display()))?,
    );

    let user_tokens = parser::parse_bond_file(&user_file)?;
    let draw_tokens = parser::parse_bond_file(&draw_file)?;
    let result = matcher::compute_matches(&user_tokens, &draw_tokens);

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        _ => print_table(user_path, draw_path, &result),
    }

    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

fn print_table(user_path: &Path, draw_path: &Path, result: &MatchResult) {
    println!("\n{}", style("Prize Bond Check").bold());
    println!("{}", "-".repeat(40));
    println!("{:<16} {}", "User file:", user_path.display());
    println!("{:<16} {}", "Draw file:", draw_path.display());
    println!("{:<16} {}", "Total bonds:", result.total_user_bonds);
    println!("{:<16} {}", "Matched:", result.matches.len());

    if result.matches.is_empty() {
        println!("\n{} No matching bonds found", style("!").yellow());
        return;
    }

    println!();
    for (i, m) in result.matches.iter().enumerate() {
        println!(
            "  {} {:<10} {}",
            style(format!("{:>3}.", i + 1)).dim(),
            m.bond_number,
            style(&m.prize).green()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_uses_file_name() {
        assert_eq!(display_name(Path::new("/tmp/data/bonds.txt")), "bonds.txt");
        assert_eq!(display_name(Path::new("draw.pdf")), "draw.pdf");
    }

    #[tokio::test]
    async fn test_check_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let user = dir.path().join("bonds.csv");
        let draw = dir.path().join("draw.txt");
        std::fs::write(&user, "111111").unwrap();
        std::fs::write(&draw, "111111").unwrap();

        let result = cmd_check(&user, &draw, "table").await;
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Unsupported file type"));
    }

    #[tokio::test]
    async fn test_check_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let user = dir.path().join("bonds.txt");
        let draw = dir.path().join("missing.txt");
        std::fs::write(&user, "111111").unwrap();

        let result = cmd_check(&user, &draw, "table").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_check_matches_text_files() {
        let dir = tempfile::tempdir().unwrap();
        let user = dir.path().join("bonds.txt");
        let draw = dir.path().join("draw.txt");
        std::fs::write(&user, "111111\n222222").unwrap();
        std::fs::write(&draw, "111111 999999").unwrap();

        cmd_check(&user, &draw, "json").await.unwrap();
    }
}
