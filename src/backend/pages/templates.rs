//! Page Templates
//!
//! Tera templates compiled into the binary with `include_str!` and parsed
//! once at startup. Names ending in `.html` are autoescaped, so titles and
//! descriptions entered by users are rendered as text.

use std::sync::Arc;

use axum::response::Html;
use tera::{Context, Tera};

use crate::backend::error::BackendResult;

pub const LOGIN: &str = "login.html";
pub const REGISTER: &str = "register.html";
pub const HOME: &str = "home.html";
pub const ADD_TODO: &str = "add-todo.html";
pub const EDIT_TODO: &str = "edit-todo.html";

/// Parsed page templates, shared across requests
#[derive(Clone)]
pub struct Templates {
    tera: Arc<Tera>,
}

impl Templates {
    /// Parse the embedded templates
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Template` if a template fails to parse or
    /// extends a missing parent.
    pub fn load() -> BackendResult<Self> {
        let mut tera = Tera::default();

        // Added in one batch so `extends` resolves regardless of order.
        tera.add_raw_templates(vec![
            ("layout.html", include_str!("../../../templates/layout.html")),
            (LOGIN, include_str!("../../../templates/login.html")),
            (REGISTER, include_str!("../../../templates/register.html")),
            (HOME, include_str!("../../../templates/home.html")),
            (ADD_TODO, include_str!("../../../templates/add-todo.html")),
            (EDIT_TODO, include_str!("../../../templates/edit-todo.html")),
        ])?;

        tracing::debug!("Loaded {} page templates", tera.get_template_names().count());
        Ok(Self { tera: Arc::new(tera) })
    }

    /// Render a template with the given context
    ///
    /// # Arguments
    ///
    /// * `name` - Template name (e.g. `HOME`)
    /// * `context` - Variables available to the template
    pub fn render(&self, name: &str, context: &Context) -> BackendResult<Html<String>> {
        Ok(Html(self.tera.render(name, context)?))
    }
}

/// Context with a `message` entry, empty when there is nothing to show
pub fn message_context(message: &str) -> Context {
    let mut context = Context::new();
    context.insert("message", message);
    context
}
