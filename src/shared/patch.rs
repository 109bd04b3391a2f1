// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// - Unset: field not provided => keep DB value
// - Null: clear the column (nullable fields only)
// - Value(v): replace with v

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchField<T> {
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }
}

impl PatchField<String> {
    /// A supplied optional text field: blank clears it, anything else sets
    /// the trimmed value.
    pub fn optional_text(raw: Option<String>) -> Self {
        match raw {
            None => PatchField::Unset,
            Some(s) => match s.trim() {
                "" => PatchField::Null,
                trimmed => PatchField::Value(trimmed.to_string()),
            },
        }
    }
}

impl<T> From<Option<T>> for PatchField<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => PatchField::Value(v),
            None => PatchField::Unset,
        }
    }
}
