use declinit_core::AFTER_INITIALIZE;

use super::CodeBuilder;
use crate::Builder;

impl Builder {
    /// Render the readers, constructor and after-initialize hook this
    /// builder would install.
    pub fn render(&self) -> String {
        let readers = self.reader_names();

        CodeBuilder::default()
            .lines(
                readers
                    .iter()
                    .map(|name| format!("pub fn {name}(&self) -> &Value {{ &self.{name} }}")),
            )
            .when(!readers.is_empty(), CodeBuilder::blank)
            .block_with_close(
                &format!("fn initialize({}) {{", self.render_parameters()),
                "}",
                |b| {
                    b.lines(self.statements().map(|s| s.source()))
                        .line(&format!("self.{AFTER_INITIALIZE}();"))
                },
            )
            .blank()
            .block_with_close(
                &format!("fn {AFTER_INITIALIZE}(&mut self) {{"),
                "}",
                |b| b.lines(self.callbacks().map(|c| c.source())),
            )
            .build()
    }

    /// The formal parameter list, followed by the unknown-option catch-all
    /// when the builder tolerates them.
    pub fn render_parameters(&self) -> String {
        let params = self.signature().render_parameter_list();
        match (self.tolerance().catch_all(), params.is_empty()) {
            (None, _) => params,
            (Some(rest), true) => rest.to_string(),
            (Some(rest), false) => format!("{params}, {rest}"),
        }
    }
}
