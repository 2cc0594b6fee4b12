use std::fmt;

/// Strategy used to compare an identifier label against field text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    #[default]
    Exact,
    Contains,
    CaseInsensitive,
}

impl MatchMode {
    pub fn matches(&self, label: &str, text: &str) -> bool {
        match self {
            Self::Exact => text == label,
            Self::Contains => text.contains(label),
            Self::CaseInsensitive => text.to_lowercase() == label.to_lowercase(),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Exact => "EXACT",
            Self::Contains => "CONTAINS",
            Self::CaseInsensitive => "CASE_INSENSITIVE",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_requires_equal_text() {
        assert!(MatchMode::Exact.matches("Name:", "Name:"));
        assert!(!MatchMode::Exact.matches("Name:", "name:"));
        assert!(!MatchMode::Exact.matches("Name:", "First Name:"));
    }

    #[test]
    fn contains_matches_substring() {
        assert!(MatchMode::Contains.matches("Name:", "First Name:"));
        assert!(!MatchMode::Contains.matches("Surname:", "First Name:"));
    }

    #[test]
    fn case_insensitive_ignores_case_only() {
        assert!(MatchMode::CaseInsensitive.matches("NAME:", "name:"));
        assert!(!MatchMode::CaseInsensitive.matches("NAME:", "first name:"));
    }

    #[test]
    fn default_is_exact() {
        assert_eq!(MatchMode::default(), MatchMode::Exact);
    }

    #[test]
    fn display_uses_wire_names() {
        assert_eq!(MatchMode::Exact.to_string(), "EXACT");
        assert_eq!(MatchMode::Contains.to_string(), "CONTAINS");
        assert_eq!(MatchMode::CaseInsensitive.to_string(), "CASE_INSENSITIVE");
    }
}
