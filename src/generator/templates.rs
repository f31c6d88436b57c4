use super::context::GenerationContext;
use super::strategy::GenerationStrategy;
use crate::error::{GenError, Result};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde_json::Value;
use std::io::Write;

const HEADER: &str = "header";
const CONTENT: &str = "content";

/// Compiled header and content templates of a strategy
///
/// Rendering is strict: a variable missing from the context is an error,
/// not an empty string. Template text is emitted byte for byte, trailing
/// newline included, with no escaping.
pub struct TemplateSet<'s> {
    env: Environment<'s>,
}

impl<'s> TemplateSet<'s> {
    /// Parse both templates of `strategy`
    ///
    /// # Errors
    ///
    /// Returns [`GenError::TemplateCompile`] naming the template that failed.
    pub fn compile<S: GenerationStrategy + ?Sized>(strategy: &'s S) -> Result<Self> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        env.add_template(HEADER, strategy.header_template())
            .map_err(|source| GenError::TemplateCompile {
                template: HEADER,
                source,
            })?;
        env.add_template(CONTENT, strategy.content_template())
            .map_err(|source| GenError::TemplateCompile {
                template: CONTENT,
                source,
            })?;
        Ok(Self { env })
    }

    /// Render the file header against the generation context
    pub fn render_header<W: Write>(&self, ctx: &GenerationContext, out: W) -> Result<()> {
        self.render(HEADER, ctx.to_map(), out).map_err(|source| GenError::Render {
            template: HEADER,
            target: ctx.value().unwrap_or("<unseeded context>").to_string(),
            source,
        })
    }

    /// Render one model block
    pub fn render_content<W: Write>(&self, model: &str, context: &Value, out: W) -> Result<()> {
        self.render(CONTENT, context, out).map_err(|source| GenError::Render {
            template: CONTENT,
            target: model.to_string(),
            source,
        })
    }

    fn render<C: serde::Serialize, W: Write>(
        &self,
        name: &str,
        ctx: C,
        out: W,
    ) -> std::result::Result<(), minijinja::Error> {
        self.env.get_template(name)?.render_to_write(ctx, out)?;
        Ok(())
    }
}
