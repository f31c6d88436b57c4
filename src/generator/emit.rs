use super::context::GenerationContext;
use super::strategy::GenerationStrategy;
use super::templates::TemplateSet;
use crate::error::{GenError, Result};
use crate::model::ModelDescriptor;
use crate::source::GO_FILE_EXT;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Where generated files go and how they are named
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    dir: PathBuf,
    prefix: String,
}

impl OutputLayout {
    /// Files named `<prefix><index>.go` inside `dir`
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
        }
    }

    /// Path of the file with the given index
    pub fn file_path(&self, index: usize) -> PathBuf {
        self.dir
            .join(format!("{}{}.{}", self.prefix, index, GO_FILE_EXT))
    }
}

/// Buffers rendered models and flushes them into size-bounded files
///
/// Each file starts with one header rendering followed by whole model
/// blocks. The buffer is flushed as soon as it reaches the strategy's
/// `max_file_size`, so every file but the last is at least that large and
/// no model block is ever split.
pub struct Emitter<'a, S: ?Sized> {
    strategy: &'a S,
    templates: TemplateSet<'a>,
    ctx: &'a GenerationContext,
    layout: OutputLayout,
    buffer: Vec<u8>,
    header_written: bool,
    next_index: usize,
    written: Vec<PathBuf>,
}

impl<'a, S: GenerationStrategy + ?Sized> Emitter<'a, S> {
    /// Emitter with an empty buffer; the first file gets index 0
    pub fn new(
        strategy: &'a S,
        templates: TemplateSet<'a>,
        ctx: &'a GenerationContext,
        layout: OutputLayout,
    ) -> Self {
        Self {
            strategy,
            templates,
            ctx,
            layout,
            buffer: Vec::new(),
            header_written: false,
            next_index: 0,
            written: Vec::new(),
        }
    }

    /// Append one model, flushing if the buffer reached the size bound
    ///
    /// # Errors
    ///
    /// Render and write failures abort immediately; the in-progress buffer
    /// is discarded and files flushed earlier stay on disk.
    pub fn push(&mut self, model: &ModelDescriptor) -> Result<()> {
        if !self.header_written {
            self.templates
                .render_header(self.ctx, &mut self.buffer)
                .inspect_err(|_| self.buffer.clear())?;
            self.header_written = true;
        }

        let context = self.strategy.template_context(model);
        self.templates
            .render_content(&model.name, &context, &mut self.buffer)
            .inspect_err(|_| self.buffer.clear())?;

        if self.buffer.len() >= self.strategy.max_file_size() {
            self.flush()?;
        }
        Ok(())
    }

    /// Flush whatever is left and return the written paths in index order
    pub fn finish(mut self) -> Result<Vec<PathBuf>> {
        if !self.buffer.is_empty() {
            self.flush()?;
        }
        Ok(self.written)
    }

    fn flush(&mut self) -> Result<()> {
        let path = self.layout.file_path(self.next_index);
        let write_err = |source| GenError::Write {
            path: path.clone(),
            source,
        };
        let mut file = File::create(&path).map_err(write_err)?;
        file.write_all(&self.buffer).map_err(write_err)?;
        info!(path = %path.display(), bytes = self.buffer.len(), "wrote generated file");

        self.next_index += 1;
        self.buffer.clear();
        self.header_written = false;
        self.written.push(path);
        Ok(())
    }
}
