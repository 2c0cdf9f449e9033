//! Generation driver.
//!
//! A [`Generator`] owns the class/enum registry for exactly one run: items
//! are added in input order, then [`Generator::generate`] consumes the
//! generator and emits the whole header in a fixed section order.

use crate::config::CodegenConfig;
use crate::cpp::runtime::{EPILOGUE, PREAMBLE, header};
use crate::cpp::{ClassGenerator, EnumGenerator};
use crate::error::CodegenError;
use saladgen_schema::{GenerationContext, SchemaItem};
use std::io::Write;

/// Drives classification results into the registry and emits C++ code.
#[derive(Debug)]
pub struct Generator {
    config: CodegenConfig,
    context: GenerationContext,
}

impl Generator {
    /// Creates a generator with an empty registry.
    #[must_use]
    pub fn new(config: CodegenConfig) -> Self {
        tracing::debug!(
            "saladgen: base_uri={:?} package={:?} examples={:?}",
            config.base_uri,
            config.package,
            config.examples
        );
        Self {
            config,
            context: GenerationContext::new(),
        }
    }

    /// Adds every item in order.
    ///
    /// # Errors
    /// Returns the first `CodegenError` raised while adding an item.
    pub fn add_items(&mut self, items: &[SchemaItem]) -> Result<(), CodegenError> {
        for item in items {
            self.add_item(item)?;
        }
        Ok(())
    }

    /// Adds one classified item to the registry.
    ///
    /// Only records and enums produce declarations; other shapes are logged
    /// and skipped.
    ///
    /// # Errors
    /// Returns `CodegenError::Schema` if a record field type cannot be
    /// resolved.
    pub fn add_item(&mut self, item: &SchemaItem) -> Result<(), CodegenError> {
        match item {
            SchemaItem::Documentation => {
                tracing::debug!("skipping documentation item");
            }
            SchemaItem::Record(record) => self.context.add_record(record)?,
            SchemaItem::Enum(def) => {
                self.context.add_enum(def);
            }
            other => {
                tracing::warn!(
                    "top-level {} item produces no declarations; skipping",
                    other.kind()
                );
            }
        }
        Ok(())
    }

    /// Returns the registry built so far.
    #[must_use]
    pub fn context(&self) -> &GenerationContext {
        &self.context
    }

    /// Emits the complete header.
    ///
    /// Sections, in order: banner and runtime preamble, forward
    /// declarations, enums, struct definitions, member implementations and
    /// the generic `toYaml` templates. The specialization and field
    /// deduplication passes run after the forward declarations.
    #[must_use]
    pub fn generate(mut self) -> String {
        let indent = self.config.indent.clone();
        let mut output = header(&self.config);
        output.push_str(PREAMBLE);

        let declarations =
            ClassGenerator::new(&self.context, &indent).generate_forward_declarations();
        output.push_str(&declarations);
        output.push('\n');

        self.context.strip_specialized_bases();
        self.context.dedup_fields();

        output.push_str(&EnumGenerator::new(&self.context, &indent).generate());

        let classes = ClassGenerator::new(&self.context, &indent);
        output.push_str(&classes.generate_definitions());
        output.push_str(&classes.generate_implementations());

        output.push_str(EPILOGUE);
        output
    }

    /// Emits the complete header into `writer`.
    ///
    /// The header is rendered in full before anything is written.
    ///
    /// # Errors
    /// Returns `CodegenError::Io` if writing fails.
    pub fn write_to<W: Write>(self, writer: &mut W) -> Result<(), CodegenError> {
        let output = self.generate();
        writer.write_all(output.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
