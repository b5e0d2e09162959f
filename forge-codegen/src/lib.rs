//! Template-based C++ source generation
//!
//! This crate turns a natural-language prompt and a style configuration
//! into a complete C++ program: the prompt selects one of a closed set of
//! template kinds by keyword, the template library produces the bundle of
//! headers, helper fragments and main-body statements for that kind, and
//! the formatter renders the bundle with the requested indentation and
//! brace placement. Pure string work; no I/O.

pub mod format;
pub mod kind;
pub mod style;
pub mod templates;

pub use format::render;
pub use kind::ProgramKind;
pub use style::{BraceStyle, CodeStyle, Indentation, NamingConvention};
pub use templates::TemplateBundle;

use tracing::debug;

/// Generate a C++ program for a prompt. Pure function: kind detection,
/// bundle construction and rendering, in that order.
pub fn generate(prompt: &str, style: &CodeStyle) -> String {
    let kind = ProgramKind::detect(prompt);
    debug!(?kind, naming = %style.naming, "selected template kind");

    let bundle = TemplateBundle::build(kind, style);
    render(&bundle, style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculator_scenario() {
        let style = CodeStyle {
            naming: NamingConvention::SnakeCase,
            indentation: Indentation::FourSpaces,
            brace_style: BraceStyle::KAndR,
            include_comments: true,
        };
        let code = generate("Create a simple calculator that adds two numbers", &style);

        assert!(code.starts_with("#include <iostream>\n#include <iomanip>\n"));
        assert!(code.contains("double perform_operation(double a, double b, char op)"));
        assert!(code.contains("int main() {\n"));
    }

    #[test]
    fn test_unknown_prompt_falls_back_to_basic() {
        let code = generate("say hi", &CodeStyle::default());
        assert!(code.contains("This is a basic C++ program."));
        assert!(code.contains("return 0;"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let style = CodeStyle::default();
        assert_eq!(
            generate("sort an array of numbers", &style),
            generate("sort an array of numbers", &style)
        );
    }

    #[test]
    fn test_two_space_allman_array() {
        let style = CodeStyle {
            indentation: Indentation::TwoSpaces,
            brace_style: BraceStyle::Allman,
            ..CodeStyle::default()
        };
        let code = generate("show me an array demo", &style);

        assert!(code.contains("void displayArray(const std::vector<int>& arr) {\n"));
        assert!(code.contains("  std::cout << \"Array elements: \";\n"));
        assert!(code.contains("int main()\n{\n"));
    }
}
