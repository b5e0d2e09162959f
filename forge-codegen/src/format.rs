//! Source rendering
//!
//! This module turns a template bundle into a single C++ source text,
//! applying the indentation unit and brace placement from the style.
//!
//! Helper fragments are re-indented line-by-line with a running
//! brace-depth counter; the entry-point body is prefixed with exactly one
//! indent unit per line. The asymmetry is kept so output stays
//! byte-identical with earlier releases.

use crate::style::CodeStyle;
use crate::templates::TemplateBundle;

/// Render a bundle into the final source text.
pub fn render(bundle: &TemplateBundle, style: &CodeStyle) -> String {
    let mut code = String::new();

    for include in &bundle.includes {
        code.push_str("#include ");
        code.push_str(include);
        code.push('\n');
    }
    if !bundle.includes.is_empty() {
        code.push('\n');
    }

    code.push_str("using namespace std;\n\n");

    for function in &bundle.functions {
        code.push_str(&reindent_fragment(function, style));
        code.push_str("\n\n");
    }

    code.push_str(&render_main(&bundle.main_body, style));
    code
}

/// Re-indent a helper fragment with a running brace-depth counter.
///
/// A line containing `}` drops a level before it is emitted; a line
/// containing `{` adds a level after. Blank lines pass through
/// unindented.
pub(crate) fn reindent_fragment(fragment: &str, style: &CodeStyle) -> String {
    let indent = style.indentation.indent_unit();
    let mut depth: usize = 0;
    let mut formatted = String::new();

    for line in fragment.lines() {
        let trimmed = line.trim();

        if trimmed.contains('}') {
            depth = depth.saturating_sub(1);
        }

        if trimmed.is_empty() {
            formatted.push('\n');
        } else {
            formatted.push_str(&indent.repeat(depth));
            formatted.push_str(trimmed);
            formatted.push('\n');
        }

        if trimmed.contains('{') {
            depth += 1;
        }
    }

    formatted.trim().to_string()
}

/// Render the entry-point function around the main-body fragment.
fn render_main(main_body: &str, style: &CodeStyle) -> String {
    let indent = style.indentation.indent_unit();
    let open_brace = if style.brace_style.opens_on_new_line() {
        "\n{"
    } else {
        " {"
    };

    let mut formatted = format!("int main(){open_brace}\n");

    for line in main_body.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            formatted.push('\n');
        } else {
            formatted.push_str(indent);
            formatted.push_str(trimmed);
            formatted.push('\n');
        }
    }

    formatted.push_str("}\n");
    formatted
}
