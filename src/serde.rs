//! JSON-deserializable layout description.
//!
//! These types describe a register layout the way a layout file spells it
//! and are converted into a checked [Layout] with `TryFrom`.
//!
//! ```json
//! {
//!   "width": 16,
//!   "fields": [
//!     { "name": "T0SZ", "offset": 0, "size": 6 },
//!     { "name": "EPD0", "offset": 7 },
//!     { "name": "TG0", "offset": 14, "size": 2, "enum_key": "granule" }
//!   ],
//!   "enums": { "granule": { "0": "4KB", "1": "64KB", "2": "16KB" } },
//!   "style": "vertical"
//! }
//! ```

use std::collections::{BTreeMap, HashMap};

use ::serde::{Deserialize, Serialize};

use crate::{errors::LayoutError, field::Field, layout::Layout, style::Style};

/// Top-level layout definition.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LayoutDef {
    /// Width of the rendered word in bits.
    pub width: u32,
    /// Fields in rendering order.
    pub fields: Vec<FieldDef>,
    /// Enums referenced by `FieldDef::enum_key`, keyed by name.
    #[serde(default)]
    pub enums: BTreeMap<String, HashMap<u64, String>>,
    /// Style used when the caller does not choose one.
    #[serde(default)]
    pub style: Option<StyleDef>,
}

/// Description of a single field.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FieldDef {
    pub name: String,
    /// Position of the field's least significant bit.
    pub offset: u32,
    /// Number of bits; defaults to a one-bit flag.
    #[serde(default = "default_size")]
    pub size: u32,
    /// Enum used to label the field's values; empty for none.
    #[serde(default)]
    pub enum_key: String,
}

fn default_size() -> u32 {
    1
}

/// Rendering style as spelled in configuration.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum StyleDef {
    #[default]
    Horizontal,
    Vertical,
}

impl From<FieldDef> for Field {
    fn from(value: FieldDef) -> Self {
        Field::new(value.offset, value.name)
            .with_size(value.size)
            .with_enum(value.enum_key)
    }
}

impl From<StyleDef> for Style {
    fn from(value: StyleDef) -> Self {
        match value {
            StyleDef::Horizontal => Style::Horizontal,
            StyleDef::Vertical => Style::Vertical,
        }
    }
}

impl TryFrom<LayoutDef> for Layout {
    type Error = LayoutError;

    fn try_from(value: LayoutDef) -> Result<Self, Self::Error> {
        let mut layout = Layout::new(value.width)?;

        for field in value.fields {
            layout.push(field.into())?;
        }

        for (key, values) in value.enums {
            layout.insert_enum(key, values);
        }

        if let Some(style) = value.style {
            layout.set_style(style.into());
        }

        Ok(layout)
    }
}
