//! Defines types for configuring JSON-LD processing.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::loader::{ContextLoader, NoLoader};

/// JSON-LD option, as defined by <https://www.w3.org/TR/json-ld11-api/#dom-jsonldoptions-processingmode>.
///
/// NB: only the standard parameters that are relevant for this implementation are present.
#[derive(Clone)]
pub struct JsonLdOptions {
    base: Option<String>,
    expand_context: Option<Value>,
    loader: Arc<dyn ContextLoader>,
}

impl JsonLdOptions {
    /// Build a new JSON-LD options.
    pub fn new() -> Self {
        Self::default()
    }

    /// The [`base`] IRI against which to resolve relative IRIs,
    /// unless the parser is given one explicitly.
    ///
    /// [`base`]: https://www.w3.org/TR/json-ld11-api/#dom-jsonldoptions-base
    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    /// [`expandContext`] is a context that is used to initialize the active context
    /// before processing a document.
    ///
    /// [`expandContext`]: https://www.w3.org/TR/json-ld11-api/#dom-jsonldoptions-expandcontext
    pub fn expand_context(&self) -> Option<&Value> {
        self.expand_context.as_ref()
    }

    /// The [`documentLoader`] used to retrieve remote contexts.
    ///
    /// [`documentLoader`]: https://www.w3.org/TR/json-ld11-api/#dom-jsonldoptions-documentloader
    pub fn loader(&self) -> &dyn ContextLoader {
        self.loader.as_ref()
    }

    /// Change the [`base`](Self::base) IRI.
    pub fn with_base<T: Into<String>>(mut self, base: T) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Change the [`expandContext`](Self::expand_context).
    pub fn with_expand_context(mut self, context: Value) -> Self {
        self.expand_context = Some(context);
        self
    }

    /// Change the [`documentLoader`](Self::loader).
    pub fn with_loader<L: ContextLoader + 'static>(mut self, loader: L) -> Self {
        self.loader = Arc::new(loader);
        self
    }
}

impl Default for JsonLdOptions {
    fn default() -> Self {
        JsonLdOptions {
            base: None,
            expand_context: None,
            loader: Arc::new(NoLoader),
        }
    }
}

impl fmt::Debug for JsonLdOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonLdOptions")
            .field("base", &self.base)
            .field("expand_context", &self.expand_context)
            .finish_non_exhaustive()
    }
}
