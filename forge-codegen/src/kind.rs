//! Program kind detection from natural-language prompts
//!
//! This module maps a free-text prompt to one template kind via an ordered
//! list of trigger substrings. The first rule whose trigger set matches
//! wins; everything else falls through to `Basic`.

/// Template category selected for a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgramKind {
    Calculator,
    Array,
    Class,
    FileIo,
    Algorithm,
    Basic,
}

/// Ordered detection rules. Order is the priority order: a prompt
/// containing both "calculator" and "sort" selects `Calculator`.
const DETECTION_RULES: &[(&[&str], ProgramKind)] = &[
    (&["calculator"], ProgramKind::Calculator),
    (&["array", "list"], ProgramKind::Array),
    (&["class", "object"], ProgramKind::Class),
    (&["file", "read", "write"], ProgramKind::FileIo),
    (&["sort", "search"], ProgramKind::Algorithm),
];

impl ProgramKind {
    /// Detect the template kind for a prompt. Total: every input maps to
    /// exactly one kind, defaulting to `Basic`.
    pub fn detect(prompt: &str) -> Self {
        let lowered = prompt.to_lowercase();
        for (triggers, kind) in DETECTION_RULES {
            if triggers.iter().any(|trigger| lowered.contains(trigger)) {
                return *kind;
            }
        }
        ProgramKind::Basic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_triggers() {
        assert_eq!(ProgramKind::detect("a calculator app"), ProgramKind::Calculator);
        assert_eq!(ProgramKind::detect("print an array"), ProgramKind::Array);
        assert_eq!(ProgramKind::detect("a list of names"), ProgramKind::Array);
        assert_eq!(ProgramKind::detect("a class for students"), ProgramKind::Class);
        assert_eq!(ProgramKind::detect("an object model"), ProgramKind::Class);
        assert_eq!(ProgramKind::detect("read a file"), ProgramKind::FileIo);
        assert_eq!(ProgramKind::detect("write some data"), ProgramKind::FileIo);
        assert_eq!(ProgramKind::detect("sort numbers"), ProgramKind::Algorithm);
        assert_eq!(ProgramKind::detect("search for a value"), ProgramKind::Algorithm);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(ProgramKind::detect("A CALCULATOR"), ProgramKind::Calculator);
        assert_eq!(ProgramKind::detect("Sort This List"), ProgramKind::Array);
    }

    #[test]
    fn test_priority_order() {
        // Calculator outranks every later rule.
        assert_eq!(
            ProgramKind::detect("a calculator that can sort its history"),
            ProgramKind::Calculator
        );
        // Array outranks class and algorithm.
        assert_eq!(
            ProgramKind::detect("sort an array with a class"),
            ProgramKind::Array
        );
    }

    #[test]
    fn test_fallback() {
        assert_eq!(ProgramKind::detect("hello world"), ProgramKind::Basic);
        assert_eq!(ProgramKind::detect(""), ProgramKind::Basic);
    }
}
