//! Presenter: renders a whole word field by field.

use std::fmt::{self, Write};

use crate::{enums::EnumTable, field::Field, style::Style, word::Word};

/// Output of [Presenter::render]: the rendered word and the diagnostics
/// collected along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    /// Rendered fields.
    pub primary: String,
    /// One line per unresolved enum lookup, in field order.
    pub diagnostics: String,
}

/// Renders a [Word] through an ordered list of [Field]s.
///
/// The presenter only borrows its fields and enums, so the same layout can
/// back any number of presenters, including on other threads.
#[derive(Debug, Clone)]
pub struct Presenter<'a> {
    word: Word,
    fields: &'a [Field],
    enums: &'a EnumTable,
    style: Style,
}

impl<'a> Presenter<'a> {
    /// Creates a presenter using [Style::Horizontal].
    pub fn new(word: Word, fields: &'a [Field], enums: &'a EnumTable) -> Self {
        Presenter {
            word,
            fields,
            enums,
            style: Style::default(),
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn word(&self) -> Word {
        self.word
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Writes every field to `out` and every unresolved enum lookup to `diag`.
    ///
    /// A lookup failure never stops the render; only a failing sink does.
    #[tracing::instrument(level = "debug", skip_all, fields(style = %self.style, fields = self.fields.len()))]
    pub fn write_to<O, D>(&self, out: &mut O, diag: &mut D) -> fmt::Result
    where
        O: Write + ?Sized,
        D: Write + ?Sized,
    {
        match self.style {
            Style::Horizontal => self.write_horizontal(out, diag),
            Style::Vertical => self.write_vertical(out, diag),
        }
    }

    /// Renders into freshly allocated strings.
    pub fn render(&self) -> Rendered {
        let mut rendered = Rendered::default();
        self.write_to(&mut rendered.primary, &mut rendered.diagnostics)
            .expect("writing to a String cannot fail");
        rendered
    }

    fn write_horizontal<O, D>(&self, out: &mut O, diag: &mut D) -> fmt::Result
    where
        O: Write + ?Sized,
        D: Write + ?Sized,
    {
        let mut presented = false;

        for field in self.fields {
            if presented && field.is_visible(&self.word, Style::Horizontal) {
                out.write_char('|')?;
            }

            let rendered = field.render(out, diag, &self.word, self.enums, Style::Horizontal)?;
            tracing::trace!(field = field.name(), rendered, "rendered field");
            presented |= rendered;
        }

        Ok(())
    }

    fn write_vertical<O, D>(&self, out: &mut O, diag: &mut D) -> fmt::Result
    where
        O: Write + ?Sized,
        D: Write + ?Sized,
    {
        for field in self.fields {
            let rendered = field.render(out, diag, &self.word, self.enums, Style::Vertical)?;
            tracing::trace!(field = field.name(), rendered, "rendered field");
            if rendered {
                out.write_char('\n')?;
            }
        }

        Ok(())
    }
}

/// Writes the primary output. Diagnostics are emitted as `warn` events instead.
impl fmt::Display for Presenter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut diagnostics = String::new();
        self.write_to(f, &mut diagnostics)?;

        for line in diagnostics.lines() {
            tracing::warn!("{}", line);
        }

        Ok(())
    }
}
