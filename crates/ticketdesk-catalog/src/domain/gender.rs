//! Gender classification used by the per-event gender report.

/// Bucket a guest falls into when counting ticket holders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    /// Counted as male.
    Male,
    /// Counted as female.
    Female,
    /// Missing or unrecognised; counted in neither bucket.
    Unspecified,
}

impl Gender {
    /// Classifies the free-text gender stored on a guest.
    ///
    /// The value is trimmed and compared case-insensitively. Only `male`/`m`
    /// and `female`/`f` are recognised; everything else, including an empty
    /// string, is `Unspecified`.
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        let value = raw.trim();
        if value.eq_ignore_ascii_case("male") || value.eq_ignore_ascii_case("m") {
            Self::Male
        } else if value.eq_ignore_ascii_case("female") || value.eq_ignore_ascii_case("f") {
            Self::Female
        } else {
            Self::Unspecified
        }
    }
}
