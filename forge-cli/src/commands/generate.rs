//! Generate subcommand

use anyhow::{bail, Result};
use forge_codegen::CodeStyle;
use std::path::Path;
use tracing::info;

use super::write_output;

pub fn generate_command(
    base_style: CodeStyle,
    prompt: &str,
    naming: Option<&str>,
    indent: Option<&str>,
    braces: Option<&str>,
    no_comments: bool,
    output: Option<&Path>,
) -> Result<()> {
    if prompt.trim().is_empty() {
        bail!("no prompt provided: describe the program to generate");
    }

    let style = resolve_style(base_style, naming, indent, braces, no_comments)?;
    let code = forge_codegen::generate(prompt, &style);

    match output {
        Some(path) => {
            write_output(path, &code)?;
            info!(path = %path.display(), "generated source written");
        }
        None => print!("{code}"),
    }

    Ok(())
}

/// Apply command-line overrides on top of the configured style.
fn resolve_style(
    base: CodeStyle,
    naming: Option<&str>,
    indent: Option<&str>,
    braces: Option<&str>,
    no_comments: bool,
) -> Result<CodeStyle> {
    let mut style = base;

    if let Some(naming) = naming {
        style.naming = naming.parse().map_err(anyhow::Error::msg)?;
    }
    if let Some(indent) = indent {
        style.indentation = indent.parse().map_err(anyhow::Error::msg)?;
    }
    if let Some(braces) = braces {
        style.brace_style = braces.parse().map_err(anyhow::Error::msg)?;
    }
    if no_comments {
        style.include_comments = false;
    }

    Ok(style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_codegen::{BraceStyle, Indentation, NamingConvention};

    #[test]
    fn test_resolve_style_overrides() {
        let style = resolve_style(
            CodeStyle::default(),
            Some("snake_case"),
            Some("tabs"),
            Some("Allman"),
            true,
        )
        .unwrap();

        assert_eq!(style.naming, NamingConvention::SnakeCase);
        assert_eq!(style.indentation, Indentation::Tabs);
        assert_eq!(style.brace_style, BraceStyle::Allman);
        assert!(!style.include_comments);
    }

    #[test]
    fn test_resolve_style_keeps_base_when_unset() {
        let base = CodeStyle {
            naming: NamingConvention::PascalCase,
            ..CodeStyle::default()
        };
        let style = resolve_style(base, None, None, None, false).unwrap();
        assert_eq!(style, base);
    }

    #[test]
    fn test_resolve_style_rejects_unknown_values() {
        assert!(resolve_style(CodeStyle::default(), Some("kebab-case"), None, None, false).is_err());
        assert!(resolve_style(CodeStyle::default(), None, Some("8spaces"), None, false).is_err());
    }

    #[test]
    fn test_blank_prompt_is_rejected() {
        let err = generate_command(CodeStyle::default(), "   ", None, None, None, false, None)
            .unwrap_err();
        assert!(err.to_string().contains("no prompt"));
    }

    #[test]
    fn test_generate_to_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("calc.cpp");

        generate_command(
            CodeStyle::default(),
            "a calculator",
            Some("snake_case"),
            None,
            None,
            false,
            Some(&path),
        )
        .unwrap();

        let code = std::fs::read_to_string(&path).unwrap();
        assert!(code.starts_with("#include <iostream>"));
        assert!(code.contains("perform_operation"));
    }
}
