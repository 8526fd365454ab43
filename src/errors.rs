//! Error types for layout construction and enum lookups.

/// Errors produced when building a [crate::word::Word] or a [crate::layout::Layout],
/// or when updating a field through [crate::layout::Layout::set].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// Word width is 0 or greater than 64 bits.
    #[error("invalid width {0}, expected 1..=64 bits")]
    InvalidWidth(u32),
    /// Field size is 0 or greater than 64 bits.
    #[error("field '{name}' has invalid size {size}")]
    InvalidFieldSize { name: String, size: u32 },
    /// Field name is empty.
    #[error("field name must not be empty")]
    InvalidFieldName,
    /// No field with this name exists in the layout.
    #[error("unknown field '{0}'")]
    UnknownField(String),
    /// Value is neither a known enum name nor a number that fits the field.
    #[error("value '{value}' does not fit field '{name}'")]
    InvalidFieldValue { name: String, value: String },
}

/// Lookup failures reported on the diagnostic stream while rendering.
///
/// These never abort a render: the field falls back to its numeric form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The enum exists but has no entry for the extracted value.
    #[error("Name for value {value} not found in enum '{key}'.")]
    UnknownEnumValue { value: u64, key: String },
}
