// ABOUTME: Main snippet engine implementation using Handlebars
// ABOUTME: Renders missing-operator stub comments from operator descriptions

use handlebars::Handlebars;

use super::context::SnippetContext;
use super::error::Result;
use super::templates;
use crate::parser::OpDescription;

#[derive(Clone)]
pub struct SnippetEngine {
    handlebars: Handlebars<'static>,
}

impl SnippetEngine {
    /// Create a new snippet engine with the stub templates registered
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        handlebars.set_strict_mode(false);
        handlebars.set_dev_mode(false);

        // Disable HTML escaping since we're generating C sources, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        handlebars.register_template_string(templates::OP_MISSING, templates::OP_MISSING_TEMPLATE)?;

        Ok(Self { handlebars })
    }

    /// Render the missing-operator stub comment for a description.
    ///
    /// Rendering is pure: the same description always yields identical bytes.
    pub fn render(&self, description: &OpDescription) -> Result<String> {
        let context = SnippetContext::from_description(description)?;
        self.render_context(&context)
    }

    /// Render from an already-built context
    pub fn render_context(&self, context: &SnippetContext) -> Result<String> {
        let json_context = context.to_json()?;
        Ok(self.handlebars.render(templates::OP_MISSING, &json_context)?)
    }
}

impl Default for SnippetEngine {
    fn default() -> Self {
        Self::new().expect("Failed to create default snippet engine")
    }
}
