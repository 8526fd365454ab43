//! Named regions of a [crate::word::Word] and how each one renders.

use std::fmt::{self, Write};

use crate::{
    bits,
    enums::{EnumTable, Resolution},
    style::Style,
    word::Word,
};

/// A named bit range inside a word.
///
/// A field of size 1 is a *flag*; anything wider is a *subfield* whose value
/// is shown as a number or, when `enum_key` names an enum, as that enum's label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    offset: u32,
    size: u32,
    name: String,
    enum_key: String,
}

impl Field {
    /// Creates a flag at bit `offset`. Use [Field::with_size] and
    /// [Field::with_enum] to describe subfields.
    ///
    /// A flag with an empty name renders horizontally as `1` when set.
    pub fn new(offset: u32, name: impl Into<String>) -> Self {
        Field {
            offset,
            size: 1,
            name: name.into(),
            enum_key: String::new(),
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_enum(mut self, enum_key: impl Into<String>) -> Self {
        self.enum_key = enum_key.into();
        self
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Key into the [EnumTable]; empty when the field has no enum.
    pub fn enum_key(&self) -> &str {
        &self.enum_key
    }

    pub fn is_flag(&self) -> bool {
        self.size == 1
    }

    /// Whether [Field::render] writes anything for `word` in `style`.
    /// Only clear flags in horizontal style are invisible.
    pub fn is_visible(&self, word: &Word, style: Style) -> bool {
        style == Style::Vertical || !self.is_flag() || word.bit(self.offset)
    }

    /// Reads bits `[offset, offset + size)`. Bit `offset` becomes bit 0 of the result.
    pub fn extract(&self, word: &Word) -> u64 {
        bits::field_value(word.value(), self.size, self.offset)
    }

    /// Returns `word` with this field's bits replaced by the low bits of `value`.
    pub fn insert(&self, word: Word, value: u64) -> Word {
        word.with_value(bits::set_field_value(word.value(), value, self.size, self.offset))
    }

    /// Writes this field to `out` in the given style.
    ///
    /// Unresolved enum lookups are written to `diag`, one line each, and the
    /// field falls back to its numeric form. Returns whether anything was
    /// written to `out`.
    pub fn render<O, D>(
        &self,
        out: &mut O,
        diag: &mut D,
        word: &Word,
        enums: &EnumTable,
        style: Style,
    ) -> Result<bool, fmt::Error>
    where
        O: Write + ?Sized,
        D: Write + ?Sized,
    {
        match style {
            Style::Horizontal => self.render_horizontal(out, diag, word, enums),
            Style::Vertical => self.render_vertical(out, diag, word, enums),
        }
    }

    fn render_horizontal<O, D>(
        &self,
        out: &mut O,
        diag: &mut D,
        word: &Word,
        enums: &EnumTable,
    ) -> Result<bool, fmt::Error>
    where
        O: Write + ?Sized,
        D: Write + ?Sized,
    {
        if !self.is_visible(word, Style::Horizontal) {
            return Ok(false);
        }

        if self.is_flag() {
            // Unnamed flags print the bit itself.
            out.write_str(if self.name.is_empty() { "1" } else { &self.name })?;
            return Ok(true);
        }

        let value = self.extract(word);
        write!(out, "{}:", self.name)?;
        match self.lookup(value, enums, diag)? {
            Some(label) => out.write_str(label)?,
            None => out.write_str(&bits::to_binary(value, self.size))?,
        }

        Ok(true)
    }

    fn render_vertical<O, D>(
        &self,
        out: &mut O,
        diag: &mut D,
        word: &Word,
        enums: &EnumTable,
    ) -> Result<bool, fmt::Error>
    where
        O: Write + ?Sized,
        D: Write + ?Sized,
    {
        write!(out, "{}\t", self.name)?;

        if self.is_flag() {
            out.write_char(if word.bit(self.offset) { '1' } else { '0' })?;
            return Ok(true);
        }

        let value = self.extract(word);
        match self.lookup(value, enums, diag)? {
            Some(label) => out.write_str(label)?,
            None => write!(
                out,
                "0b{}\t{}\t{:#x}",
                bits::to_binary(value, self.size),
                value,
                value
            )?,
        }

        Ok(true)
    }

    fn lookup<'e, D>(
        &self,
        value: u64,
        enums: &'e EnumTable,
        diag: &mut D,
    ) -> Result<Option<&'e str>, fmt::Error>
    where
        D: Write + ?Sized,
    {
        match enums.resolve(&self.enum_key, value) {
            Resolution::Named(label) => Ok(Some(label)),
            Resolution::Unmapped => Ok(None),
            Resolution::Missing(err) => {
                tracing::debug!(field = %self.name, value, key = %self.enum_key, "enum value not found");
                writeln!(diag, "{}", err)?;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::enums::Enum;

    use super::*;

    fn enum_table() -> EnumTable {
        EnumTable::new().with(
            "key",
            Enum::from([
                (0, "Zero".to_string()),
                (1, "One".to_string()),
                (2, "Two".to_string()),
            ]),
        )
    }

    fn format_field(value: u64, enums: &EnumTable, style: Style, size: u32) -> (String, String, bool) {
        let field = Field::new(1, "field").with_size(size).with_enum("key");
        let word = Word::new(16, value).unwrap();
        let mut out = String::new();
        let mut err = String::new();
        let rendered = field.render(&mut out, &mut err, &word, enums, style).unwrap();
        (out, err, rendered)
    }

    #[test]
    fn test_defaults() {
        let field = Field::new(1, "field");
        assert_eq!(field.name(), "field");
        assert_eq!(field.offset(), 1);
        assert_eq!(field.size(), 1);
        assert_eq!(field.enum_key(), "");
        assert!(field.is_flag());
    }

    #[test]
    fn test_all_arguments() {
        let field = Field::new(1, "field").with_size(2).with_enum("key");
        assert_eq!(field.name(), "field");
        assert_eq!(field.offset(), 1);
        assert_eq!(field.size(), 2);
        assert_eq!(field.enum_key(), "key");
        assert!(!field.is_flag());
    }

    #[test]
    fn test_extract() {
        let word = Word::from(0x3183u16);
        assert_eq!(Field::new(0, "T0SZ").with_size(6).extract(&word), 3);
        assert_eq!(Field::new(7, "EPD0").extract(&word), 1);
        assert_eq!(Field::new(8, "IRGN0").with_size(2).extract(&word), 1);
        assert_eq!(Field::new(0, "all").with_size(16).extract(&word), 0x3183);
    }

    #[test]
    fn test_extract_full_width() {
        let word = Word::from(u64::MAX);
        assert_eq!(Field::new(0, "all").with_size(64).extract(&word), u64::MAX);
        assert_eq!(Field::new(63, "top").extract(&word), 1);
    }

    #[test]
    fn test_is_visible() {
        let word = Word::from(0b10u8);
        let clear = Field::new(0, "A");
        let set = Field::new(1, "B");
        let wide = Field::new(0, "C").with_size(4);
        assert!(!clear.is_visible(&word, Style::Horizontal));
        assert!(clear.is_visible(&word, Style::Vertical));
        assert!(set.is_visible(&word, Style::Horizontal));
        assert!(wide.is_visible(&Word::from(0u8), Style::Horizontal));
    }

    #[test]
    fn test_insert() {
        let field = Field::new(14, "TG0").with_size(2);
        let word = field.insert(Word::from(0x3183u16), 0b10);
        assert_eq!(word, Word::from(0xb183u16));
        assert_eq!(field.extract(&word), 0b10);
    }

    #[test]
    fn test_insert_keeps_width() {
        let field = Field::new(6, "top").with_size(4);
        let word = field.insert(Word::new(8, 0).unwrap(), 0b1111);
        assert_eq!(word.value(), 0b1100_0000);
        assert_eq!(word.width(), 8);
    }

    #[test]
    fn test_horizontal_clear_flag() {
        let (out, err, rendered) = format_field(0, &EnumTable::new(), Style::Horizontal, 1);
        assert_eq!(out, "");
        assert_eq!(err, "");
        assert!(!rendered);
    }

    #[test]
    fn test_horizontal_set_flag() {
        let (out, err, rendered) = format_field(0b010, &EnumTable::new(), Style::Horizontal, 1);
        assert_eq!(out, "field");
        assert_eq!(err, "");
        assert!(rendered);
    }

    #[test]
    fn test_horizontal_hit_enum() {
        let (out, err, _) = format_field(0b100, &enum_table(), Style::Horizontal, 2);
        assert_eq!(out, "field:Two");
        assert_eq!(err, "");
    }

    #[test]
    fn test_horizontal_missed_enum() {
        let (out, err, rendered) = format_field(0b110, &enum_table(), Style::Horizontal, 2);
        assert_eq!(out, "field:11");
        assert_eq!(err, "Name for value 3 not found in enum 'key'.\n");
        assert!(rendered);
    }

    #[test]
    fn test_horizontal_unknown_key_is_numeric() {
        let (out, err, _) = format_field(0b100, &EnumTable::new(), Style::Horizontal, 2);
        assert_eq!(out, "field:10");
        assert_eq!(err, "");
    }

    #[test]
    fn test_horizontal_no_enum_key() {
        let field = Field::new(0, "T0SZ").with_size(6);
        let mut out = String::new();
        let mut err = String::new();
        field
            .render(&mut out, &mut err, &Word::from(0x3183u16), &enum_table(), Style::Horizontal)
            .unwrap();
        assert_eq!(out, "T0SZ:000011");
        assert_eq!(err, "");
    }

    #[test]
    fn test_vertical_clear_flag() {
        let (out, err, rendered) = format_field(0, &EnumTable::new(), Style::Vertical, 1);
        assert_eq!(out, "field\t0");
        assert_eq!(err, "");
        assert!(rendered);
    }

    #[test]
    fn test_vertical_set_flag() {
        let (out, err, _) = format_field(0b010, &EnumTable::new(), Style::Vertical, 1);
        assert_eq!(out, "field\t1");
        assert_eq!(err, "");
    }

    #[test]
    fn test_vertical_hit_enum() {
        let (out, err, _) = format_field(0b100, &enum_table(), Style::Vertical, 2);
        assert_eq!(out, "field\tTwo");
        assert_eq!(err, "");
    }

    #[test]
    fn test_vertical_missed_enum() {
        let (out, err, rendered) = format_field(0b110, &enum_table(), Style::Vertical, 2);
        assert_eq!(out, "field\t0b11\t3\t0x3");
        assert_eq!(err, "Name for value 3 not found in enum 'key'.\n");
        assert!(rendered);
    }

    #[test]
    fn test_vertical_hex_is_lowercase() {
        let field = Field::new(0, "all").with_size(16);
        let mut out = String::new();
        let mut err = String::new();
        field
            .render(&mut out, &mut err, &Word::from(0xabcdu16), &EnumTable::new(), Style::Vertical)
            .unwrap();
        assert_eq!(out, "all\t0b1010101111001101\t43981\t0xabcd");
    }

    #[test]
    fn test_horizontal_unnamed_flag() {
        let field = Field::new(1, "");
        let mut out = String::new();
        let mut err = String::new();
        let rendered = field
            .render(&mut out, &mut err, &Word::from(0b10u8), &EnumTable::new(), Style::Horizontal)
            .unwrap();
        assert_eq!(out, "1");
        assert!(rendered);
    }

    fn render_field(field: &Field, word: &Word, enums: &EnumTable, style: Style) -> (String, String, bool) {
        let mut out = String::new();
        let mut err = String::new();
        let rendered = field.render(&mut out, &mut err, word, enums, style).unwrap();
        (out, err, rendered)
    }

    /// A 64-bit word plus an offset and a subfield size (2 or more) that fit inside it.
    fn arb_subfield() -> impl Strategy<Value = (u64, u32, u32)> {
        (any::<u64>(), 0u32..63)
            .prop_flat_map(|(value, offset)| (Just(value), Just(offset), 2u32..=(64 - offset)))
    }

    proptest! {
        #[test]
        fn test_horizontal_flag_matches_bit(value in any::<u64>(), offset in 0u32..64) {
            let word = Word::from(value);
            let field = Field::new(offset, "F");
            let (out, err, rendered) = render_field(&field, &word, &EnumTable::new(), Style::Horizontal);

            let set = (value >> offset) & 1 == 1;
            prop_assert_eq!(out, if set { "F" } else { "" });
            prop_assert_eq!(rendered, set);
            prop_assert!(err.is_empty());
        }

        #[test]
        fn test_vertical_flag_matches_bit(value in any::<u64>(), offset in 0u32..64, keyed in any::<bool>()) {
            let word = Word::from(value);
            let field = if keyed { Field::new(offset, "F").with_enum("key") } else { Field::new(offset, "F") };
            let (out, err, rendered) = render_field(&field, &word, &enum_table(), Style::Vertical);

            prop_assert_eq!(out, format!("F\t{}", (value >> offset) & 1));
            prop_assert!(rendered);
            prop_assert!(err.is_empty());
        }

        #[test]
        fn test_horizontal_binary_has_field_size((value, offset, size) in arb_subfield()) {
            let word = Word::from(value);
            let field = Field::new(offset, "F").with_size(size);
            let (out, err, rendered) = render_field(&field, &word, &enum_table(), Style::Horizontal);

            prop_assert_eq!(out.len(), "F".len() + 1 + size as usize);
            let binary = out.strip_prefix("F:").unwrap();
            prop_assert_eq!(u64::from_str_radix(binary, 2).unwrap(), field.extract(&word));
            prop_assert!(rendered);
            prop_assert!(err.is_empty());
        }

        #[test]
        fn test_vertical_columns_agree((value, offset, size) in arb_subfield()) {
            let word = Word::from(value);
            let field = Field::new(offset, "F").with_size(size);
            let (out, err, _) = render_field(&field, &word, &enum_table(), Style::Vertical);

            let columns: Vec<&str> = out.split('\t').collect();
            prop_assert_eq!(columns.len(), 4);
            prop_assert_eq!(columns[0], "F");

            let binary = columns[1].strip_prefix("0b").unwrap();
            let hex = columns[3].strip_prefix("0x").unwrap();
            let expected = field.extract(&word);
            prop_assert_eq!(binary.len(), size as usize);
            prop_assert_eq!(u64::from_str_radix(binary, 2).unwrap(), expected);
            prop_assert_eq!(columns[2].parse::<u64>().unwrap(), expected);
            prop_assert_eq!(u64::from_str_radix(hex, 16).unwrap(), expected);
            prop_assert_eq!(hex.to_lowercase(), hex);
            prop_assert!(err.is_empty());
        }

        #[test]
        fn test_enum_lookup_or_one_diagnostic(
            (value, offset, size) in arb_subfield(),
            vertical in any::<bool>(),
        ) {
            let word = Word::from(value);
            let style = if vertical { Style::Vertical } else { Style::Horizontal };
            let field = Field::new(offset, "F").with_size(size).with_enum("key");
            let (out, err, _) = render_field(&field, &word, &enum_table(), style);

            let extracted = field.extract(&word);
            match enum_table().get("key").unwrap().get(&extracted) {
                Some(label) => {
                    prop_assert!(out.ends_with(label.as_str()));
                    prop_assert!(err.is_empty());
                }
                None => {
                    prop_assert_eq!(
                        err,
                        format!("Name for value {} not found in enum 'key'.\n", extracted)
                    );
                    let numeric = if vertical {
                        format!("F\t0b{}\t{}\t{:#x}", bits::to_binary(extracted, size), extracted, extracted)
                    } else {
                        format!("F:{}", bits::to_binary(extracted, size))
                    };
                    prop_assert_eq!(out, numeric);
                }
            }
        }
    }
}
