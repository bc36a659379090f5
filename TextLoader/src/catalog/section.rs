//! Language section headers: `[en]`, `[de, fr]`, `[]`

/// Normalise a language code for comparison: trimmed and lowercased
pub fn normalize_language(code: &str) -> String {
    code.trim().to_lowercase()
}

/// A parsed section header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    /// `[]`: entries apply to every language
    All,
    /// `[a, b, ...]`: entries apply to the listed languages only
    Languages(Vec<String>),
}

impl Section {
    /// Parse the first cell of a row as a section header.
    ///
    /// Returns `None` unless the cell starts with `[` and has a `]` later in
    /// the same cell; such rows are ordinary entries.
    pub fn parse(cell: &str) -> Option<Self> {
        let rest = cell.strip_prefix('[')?;
        let close = rest.find(']')?;
        let inner = normalize_language(&rest[..close]);
        if inner.is_empty() {
            return Some(Self::All);
        }
        let languages = inner
            .split(',')
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();
        Some(Self::Languages(languages))
    }

    /// Whether entries under this header apply to `language`.
    ///
    /// `language` must already be normalised.
    pub fn admits(&self, language: &str) -> bool {
        match self {
            Self::All => true,
            Self::Languages(languages) => languages.iter().any(|l| l == language),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_headers() {
        assert_eq!(Section::parse("[]"), Some(Section::All));
        assert_eq!(Section::parse("[  ]"), Some(Section::All));
        assert_eq!(
            Section::parse("[ DE , fr,,]"),
            Some(Section::Languages(vec!["de".into(), "fr".into()]))
        );
        assert_eq!(
            Section::parse("[en] trailing text"),
            Some(Section::Languages(vec!["en".into()]))
        );
    }

    #[test]
    fn test_not_a_header() {
        assert_eq!(Section::parse("[en"), None);
        assert_eq!(Section::parse("en]"), None);
        assert_eq!(Section::parse("x[en]"), None);
        assert_eq!(Section::parse(""), None);
    }

    #[test]
    fn test_admits() {
        let section = Section::parse("[de,fr]").unwrap();
        assert!(section.admits("fr"));
        assert!(!section.admits("en"));
        assert!(Section::All.admits("anything"));
        // A header listing only separators admits nothing
        assert!(!Section::parse("[ , ]").unwrap().admits("en"));
    }

    #[test]
    fn test_normalize_language() {
        assert_eq!(normalize_language(" DE\t"), "de");
        assert_eq!(normalize_language("pt-BR"), "pt-br");
    }
}
