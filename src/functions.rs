//! Dialect-specific SQL function rendering.
//!
//! Different backends spell the same abstract function differently
//! (`LEN(x)` vs `LENGTH(x)`, `GETDATE()` vs `NOW()`). The registry is the
//! sole extension point for that translation: a dialect populates it once in
//! its constructor, after which it is read-only and shareable across
//! rendering threads.

use std::collections::HashMap;
use std::fmt;

/// A named translation unit producing backend-specific call syntax from an
/// ordered argument-text list.
pub trait SqlFunction: Send + Sync {
    fn render(&self, args: &[&str]) -> String;
}

impl<F> SqlFunction for F
where
    F: Fn(&[&str]) -> String + Send + Sync,
{
    fn render(&self, args: &[&str]) -> String {
        self(args)
    }
}

/// Case-insensitive mapping from abstract function names to renderers.
///
/// Keys are unique; registering a name twice replaces the earlier renderer.
/// Unregistered names fall back to generic call syntax `name(a, b, ...)`.
#[derive(Default)]
pub struct FunctionRegistry {
    renderers: HashMap<String, Box<dyn SqlFunction>>,
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("FunctionRegistry")
            .field("names", &names)
            .finish()
    }
}

impl FunctionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a renderer under a case-insensitive name. Last wins.
    pub fn register(&mut self, name: impl Into<String>, renderer: impl SqlFunction + 'static) {
        self.renderers
            .insert(name.into().to_lowercase(), Box::new(renderer));
    }

    /// Whether a renderer is registered for this name.
    pub fn contains(&self, name: &str) -> bool {
        self.renderers.contains_key(&name.to_lowercase())
    }

    /// Render a function call, falling back to `name(a, b, ...)` for
    /// unregistered names.
    pub fn render(&self, name: &str, args: &[&str]) -> String {
        match self.renderers.get(&name.to_lowercase()) {
            Some(renderer) => renderer.render(args),
            None => format!("{}({})", name, args.join(", ")),
        }
    }
}
