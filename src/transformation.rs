use std::fmt;

/// A transformation directive passed through to the CDN untouched, e.g. `c_fill,ar_1_1/c_scale,w_200`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transformation {
    raw: String,
}

impl Transformation {
    pub fn raw(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The transformation as it appears in a URL path. Leading and trailing `/` are dropped.
    pub fn generate(&self) -> &str {
        self.raw.trim_matches('/')
    }

    pub fn is_empty(&self) -> bool {
        self.generate().is_empty()
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.generate())
    }
}

impl From<&str> for Transformation {
    fn from(raw: &str) -> Self {
        Self::raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_trims_separators() {
        assert_eq!(Transformation::raw("/c_scale,w_200/").generate(), "c_scale,w_200");
        assert_eq!(
            Transformation::raw("c_fill/c_scale,w_200").to_string(),
            "c_fill/c_scale,w_200"
        );
    }

    #[test]
    fn test_is_empty() {
        assert!(Transformation::default().is_empty());
        assert!(Transformation::raw("/").is_empty());
        assert!(!Transformation::raw("e_sepia").is_empty());
    }
}
