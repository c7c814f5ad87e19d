use tera::{Context, Tera};

use crate::error::SynthError;

/// Which template of a seed group to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Url,
    Body,
    Summary,
}

impl TemplateKind {
    fn suffix(&self) -> &'static str {
        match self {
            TemplateKind::Url => "url",
            TemplateKind::Body => "body",
            TemplateKind::Summary => "summary",
        }
    }
}

/// Canonical template name for a group's template, e.g. `nike/product/summary`.
pub fn template_name(domain: &str, label: &str, kind: TemplateKind) -> String {
    format!("{domain}/{label}/{}", kind.suffix())
}

/// Compiled Tera templates for every group of a catalogue.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn new() -> Self {
        let mut tera = Tera::default();
        // Output is JSON text, not HTML.
        tera.autoescape_on(vec![]);
        Self { tera }
    }

    pub fn add(&mut self, name: &str, content: &str) -> Result<(), SynthError> {
        self.tera
            .add_raw_template(name, content)
            .map_err(|e| SynthError::TemplateParse {
                name: name.to_string(),
                message: error_chain(&e),
            })
    }

    pub fn render(&self, name: &str, context: &Context) -> Result<String, SynthError> {
        self.tera
            .render(name, context)
            .map_err(|e| SynthError::TemplateRender {
                name: name.to_string(),
                message: error_chain(&e),
            })
    }
}

impl Default for Templates {
    fn default() -> Self {
        Self::new()
    }
}

/// Tera keeps the useful detail in the error's source chain.
fn error_chain(e: &tera::Error) -> String {
    let mut message = e.to_string();
    let mut source = std::error::Error::source(e);
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}
