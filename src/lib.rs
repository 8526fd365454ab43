//! # bitview
//!
//! Render fixed-width register values as text using declarative layouts.
//!
//! A layout is an ordered list of [Field]s: single-bit flags and multi-bit
//! subfields, the latter optionally labelled through an [EnumTable]. A
//! [Presenter] renders a [Word] either horizontally (`A|B:10|C:Two`) or
//! vertically (one tab-separated line per field). Values missing from an
//! enum never fail a render; they fall back to numbers and are reported on a
//! separate diagnostic sink.
//!
//! ## Example
//!
//! ```
//! use bitview::{Enum, EnumTable, Field, Presenter, Style, Word};
//!
//! let fields = vec![
//!     Field::new(0, "T0SZ").with_size(6),
//!     Field::new(7, "EPD0"),
//!     Field::new(14, "TG0").with_size(2).with_enum("granule"),
//! ];
//! let enums = EnumTable::new().with(
//!     "granule",
//!     Enum::from([(0, "4KB".to_string()), (1, "64KB".to_string())]),
//! );
//!
//! let rendered = Presenter::new(Word::from(0x3183u16), &fields, &enums).render();
//! assert_eq!(rendered.primary, "T0SZ:000011|EPD0|TG0:4KB");
//! assert!(rendered.diagnostics.is_empty());
//!
//! let rendered = Presenter::new(Word::from(0x3183u16), &fields, &enums)
//!     .with_style(Style::Vertical)
//!     .render();
//! assert_eq!(rendered.primary, "T0SZ\t0b000011\t3\t0x3\nEPD0\t1\nTG0\t4KB\n");
//! ```

pub mod bits;
pub mod enums;
pub mod errors;
pub mod field;
pub mod layout;
pub mod presenter;
#[cfg(feature = "serde")]
pub mod serde;
pub mod style;
pub mod word;

pub use enums::{Enum, EnumTable};
pub use errors::{LayoutError, LookupError};
pub use field::Field;
pub use layout::Layout;
pub use presenter::{Presenter, Rendered};
pub use style::Style;
pub use word::Word;
