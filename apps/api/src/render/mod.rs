//! Page renderer: a pure function of the lookup snapshot.
//!
//! The template is compiled into the binary and rendered with HTML
//! auto-escaping (`.html` template name), so provider text is always escaped.

use minijinja::{context, Environment};
use thiserror::Error;

use crate::lookup::{LookupSnapshot, Phase};

const PAGE_TEMPLATE_NAME: &str = "page.html";
const PAGE_TEMPLATE: &str = include_str!("templates/page.html");

#[derive(Debug, Error)]
#[error("Template error: {0}")]
pub struct RenderError(#[from] minijinja::Error);

pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn render(&self, snapshot: &LookupSnapshot) -> Result<String, RenderError> {
        let (loading, error, profile) = match &snapshot.phase {
            Phase::Idle => (false, None, None),
            Phase::Loading => (true, None, None),
            Phase::Success(view) => (false, None, Some(view)),
            Phase::Failure(message) => (false, Some(message.as_str()), None),
        };

        let template = self.env.get_template(PAGE_TEMPLATE_NAME)?;
        let html = template.render(context! {
            input_url => snapshot.input_url,
            loading => loading,
            error => error,
            profile => profile,
        })?;
        Ok(html)
    }
}
