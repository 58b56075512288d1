//! Publishing the loaded index to its consumers.
//!
//! A browser page exposes a global `initSearch` hook and a CommonJS
//! host exposes an `exports` object. Here both are injected ports: the
//! embedding application decides up front which ones exist and passes
//! them in, and [`publish`] writes to whichever it was given.

use crate::core::types::SearchIndex;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Host initialization hook (the `window.initSearch` slot)
pub trait InitSearchHook {
    fn init_search(&self, index: &Arc<SearchIndex>);
}

impl<F> InitSearchHook for F
where
    F: Fn(&Arc<SearchIndex>),
{
    fn init_search(&self, index: &Arc<SearchIndex>) {
        self(index)
    }
}

/// Module export slot (the `exports` object)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Exports {
    #[serde(rename = "searchIndex", skip_serializing_if = "Option::is_none")]
    pub search_index: Option<Arc<SearchIndex>>,
}

impl Exports {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The ports available in the hosting environment
#[derive(Default)]
pub struct PublishTargets<'a> {
    pub init_search: Option<&'a dyn InitSearchHook>,
    pub exports: Option<&'a mut Exports>,
}

impl<'a> PublishTargets<'a> {
    /// An environment exposing neither slot
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_init_search(mut self, hook: &'a dyn InitSearchHook) -> Self {
        self.init_search = Some(hook);
        self
    }

    pub fn with_exports(mut self, exports: &'a mut Exports) -> Self {
        self.exports = Some(exports);
        self
    }
}

impl fmt::Debug for PublishTargets<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublishTargets")
            .field("init_search", &self.init_search.is_some())
            .field("exports", &self.exports.is_some())
            .finish()
    }
}

/// What a publish call actually did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PublishReport {
    pub init_search_invoked: bool,
    pub exported: bool,
}

/// Hand the index to every supplied port
///
/// The two ports are independent: either, both or neither may be
/// present. Nothing is reported back as an error.
pub fn publish(index: &Arc<SearchIndex>, targets: PublishTargets<'_>) -> PublishReport {
    let mut report = PublishReport::default();

    if let Some(hook) = targets.init_search {
        hook.init_search(index);
        report.init_search_invoked = true;
        tracing::debug!("Invoked init_search hook with {} crates", index.len());
    }

    if let Some(exports) = targets.exports {
        exports.search_index = Some(Arc::clone(index));
        report.exported = true;
        tracing::debug!("Assigned searchIndex export slot");
    }

    if !report.init_search_invoked && !report.exported {
        tracing::trace!("No publish targets available");
    }

    report
}
