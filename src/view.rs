//! One-shot module view rendering.
//!
//! Ties the fetch, reference table, tokenizer, and linker together with the
//! degradation rules the explorer relies on: no package id means no fetch,
//! and a failed fetch means an unlinked listing, never a render failure.

use crate::highlight::Tokenizer;
use crate::linker::{render_lines, RenderedLine};
use crate::references::ReferenceTable;
use crate::rpc::ModuleFetcher;
use serde::Serialize;
use tracing::debug;

/// Inputs for rendering one module's source listing.
#[derive(Debug, Clone)]
pub struct ModuleView {
    /// On-chain package id the module belongs to. Absent for modules whose
    /// package is unknown (the listing then renders without links).
    pub package_id: Option<String>,
    /// Module name within the package.
    pub module_name: String,
    /// Source (or disassembly) text to render.
    pub source: String,
}

/// The rendered listing: ordered 1-indexed lines of link/plain spans.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedModule {
    pub module: String,
    pub package_id: Option<String>,
    pub lines: Vec<RenderedLine>,
}

impl ModuleView {
    pub fn new(
        package_id: Option<String>,
        module_name: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            package_id,
            module_name: module_name.into(),
            source: source.into(),
        }
    }

    /// Render the listing.
    ///
    /// The metadata fetch runs only when a package id is present, and the
    /// reference table is fully built before any token is classified. A
    /// fetch or parse failure is logged and the listing degrades to plain
    /// text; the worst user-visible outcome of this subsystem is code
    /// without clickable references.
    pub fn render(&self, fetcher: &dyn ModuleFetcher, tokenizer: &dyn Tokenizer) -> RenderedModule {
        let references = self.package_id.as_deref().and_then(|package_id| {
            match fetcher.fetch_normalized_module(package_id, &self.module_name) {
                Ok(module) => Some(ReferenceTable::build(&module)),
                Err(error) => {
                    debug!(
                        "normalized module fetch failed for {}::{}: {:#}",
                        package_id, self.module_name, error
                    );
                    None
                }
            }
        });

        let tokenized = tokenizer.tokenize(&self.source);
        let current_address = self.package_id.as_deref().unwrap_or_default();

        RenderedModule {
            module: self.module_name.clone(),
            package_id: self.package_id.clone(),
            lines: render_lines(&tokenized, references.as_ref(), current_address),
        }
    }
}
