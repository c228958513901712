//! Indentation-aware line buffer.

/// Indentation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(&'static str);

impl Indent {
    pub const SPACES_4: Self = Self("    ");
    pub const SPACES_2: Self = Self("  ");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::SPACES_4
    }
}

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use declinit_builder::render::CodeBuilder;
///
/// let code = CodeBuilder::default()
///     .block_with_close("fn initialize(foo) {", "}", |b| b.line("self.foo = foo;"))
///     .build();
///
/// assert_eq!(code, "fn initialize(foo) {\n    self.foo = foo;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add an indented block between `header` and `close`.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Add one line per item.
    pub fn lines<I, S>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines.into_iter().fold(self, |b, line| b.line(line.as_ref()))
    }

    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_blocks() {
        let code = CodeBuilder::new(Indent::SPACES_2)
            .block_with_close("a {", "}", |b| {
                b.block_with_close("b {", "}", |b| b.line("c;"))
            })
            .build();
        assert_eq!(code, "a {\n  b {\n    c;\n  }\n}\n");
    }

    #[test]
    fn test_when_and_lines() {
        let code = CodeBuilder::default()
            .lines(["x;", "y;"])
            .when(false, |b| b.line("z;"))
            .blank()
            .build();
        assert_eq!(code, "x;\ny;\n\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let code = CodeBuilder::default().dedent().line("x;").build();
        assert_eq!(code, "x;\n");
    }
}
