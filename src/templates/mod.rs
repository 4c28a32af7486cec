//! Placeholder template rendering
//!
//! Templates are plain HTML with `{{name}}` placeholders. Substitution is
//! literal: no conditionals, no loops, no escaping (callers pre-escape any
//! value destined for an HTML attribute or text node).

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Placeholder values for a single render call
#[derive(Debug, Default)]
pub struct RenderContext {
    vars: HashMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a placeholder value
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.vars.insert(key.into(), value.into());
    }
}

/// Replace every `{{name}}` occurrence with its value
///
/// Single pass, not fixed-point: values are substituted literally and
/// never re-expanded. Placeholders absent from the context stay in the
/// output untouched.
pub fn render(template: &str, context: &RenderContext) -> String {
    let mut result = template.to_string();
    for (key, value) in &context.vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

/// Shared template fragments, read once per build
pub struct TemplateSet {
    base: String,
}

impl TemplateSet {
    /// Load the base/shell template from the templates directory
    pub fn load<P: AsRef<Path>>(templates_dir: P) -> Result<Self> {
        let path = templates_dir.as_ref().join("base.html");
        let base = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read base template {:?}", path))?;
        Ok(Self { base })
    }

    /// The base page template
    pub fn base(&self) -> &str {
        &self.base
    }
}
