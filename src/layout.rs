//! A register layout: word width, fields and the enums they refer to.

use crate::{
    bits,
    enums::{Enum, EnumTable},
    errors::LayoutError,
    field::Field,
    presenter::Presenter,
    style::Style,
    word::{MAX_WIDTH, Word},
};

/// Everything needed to render values of one register.
///
/// Unlike building a [Presenter] by hand, fields pushed here are checked for
/// a usable size and a non-empty name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    zero: Word,
    fields: Vec<Field>,
    enums: EnumTable,
    style: Style,
}

impl Layout {
    pub fn new(width: u32) -> Result<Self, LayoutError> {
        Ok(Layout {
            zero: Word::new(width, 0)?,
            fields: Vec::new(),
            enums: EnumTable::new(),
            style: Style::default(),
        })
    }

    /// Appends a field. Fields render in the order they are pushed.
    pub fn push(&mut self, field: Field) -> Result<&mut Self, LayoutError> {
        if field.name().is_empty() {
            return Err(LayoutError::InvalidFieldName);
        }

        if field.size() == 0 || field.size() > MAX_WIDTH {
            return Err(LayoutError::InvalidFieldSize {
                name: field.name().to_string(),
                size: field.size(),
            });
        }

        self.fields.push(field);
        Ok(self)
    }

    pub fn insert_enum(&mut self, key: impl Into<String>, values: Enum) -> &mut Self {
        self.enums.insert(key, values);
        self
    }

    /// Sets the style used when the caller does not pick one.
    pub fn set_style(&mut self, style: Style) -> &mut Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn width(&self) -> u32 {
        self.zero.width()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn enums(&self) -> &EnumTable {
        &self.enums
    }

    /// First field named `name`.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Truncates `value` to the layout width.
    pub fn word(&self, value: u64) -> Word {
        self.zero.with_value(value)
    }

    pub fn presenter(&self, value: u64, style: Style) -> Presenter<'_> {
        Presenter::new(self.word(value), &self.fields, &self.enums).with_style(style)
    }

    /// Returns `value` with field `name` set from `text`.
    ///
    /// `text` is either a name from the field's enum or a number accepted by
    /// [parse_number]. Numbers wider than the field are rejected.
    pub fn set(&self, value: u64, name: &str, text: &str) -> Result<u64, LayoutError> {
        let field = self
            .field(name)
            .ok_or_else(|| LayoutError::UnknownField(name.to_string()))?;

        let invalid = || LayoutError::InvalidFieldValue {
            name: name.to_string(),
            value: text.to_string(),
        };

        let field_value = match self.enums.value_of(field.enum_key(), text) {
            Some(v) => v,
            None => parse_number(text).ok_or_else(invalid)?,
        };

        if field_value & !bits::mask(field.size(), 0) != 0 {
            return Err(invalid());
        }

        Ok(field.insert(self.word(value), field_value).value())
    }
}

/// Parses a decimal, `0x` hexadecimal or `0b` binary number. Underscores are ignored.
pub fn parse_number(text: &str) -> Option<u64> {
    let digits: String = text.trim().chars().filter(|&c| c != '_').collect();

    let (radix, digits) = if let Some(rest) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        (16, rest)
    } else if let Some(rest) = digits
        .strip_prefix("0b")
        .or_else(|| digits.strip_prefix("0B"))
    {
        (2, rest)
    } else {
        (10, digits.as_str())
    };

    u64::from_str_radix(digits, radix).ok()
}
