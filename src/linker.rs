//! Token classification into linked and plain render spans.
//!
//! A token becomes a link when the highlighter tagged it as a class name or
//! constant AND its text matches an entry in the reference table. Everything
//! else passes through untouched. Classification is purely presentational
//! and never fails; with no table available every token renders plain.

use crate::address::normalize_address;
use crate::highlight::{Token, TokenCategory};
use crate::normalized::TypeReference;
use crate::references::ReferenceTable;
use serde::Serialize;

/// Per-token render descriptor: either a hyperlink to the referenced
/// on-chain object or a plain span preserving the original styling.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TokenSpan {
    Link {
        text: String,
        categories: Vec<TokenCategory>,
        href: String,
        /// Cross-module links open in a separate browsing context.
        new_tab: bool,
    },
    Text {
        text: String,
        categories: Vec<TokenCategory>,
    },
}

/// One rendered source line; `number` is 1-indexed for display.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedLine {
    pub number: usize,
    pub spans: Vec<TokenSpan>,
}

/// Navigation target for a resolved type reference.
pub fn object_link(reference: &TypeReference) -> String {
    format!("/objects/{}?module={}", reference.address, reference.module)
}

/// Classify a single token against the reference table.
///
/// `current_address` is the address of the module being viewed; a link whose
/// target lives at the same (normalized) address stays in-place, any other
/// target is flagged to open in a new context.
pub fn classify_token(
    token: &Token,
    references: Option<&ReferenceTable>,
    current_address: &str,
) -> TokenSpan {
    let linkable_category = token.has_category(TokenCategory::ClassName)
        || token.has_category(TokenCategory::Constant);

    if linkable_category {
        if let Some(reference) = references.and_then(|table| table.get(&token.content)) {
            let new_tab =
                normalize_address(&reference.address) != normalize_address(current_address);
            return TokenSpan::Link {
                text: token.content.clone(),
                categories: token.categories.clone(),
                href: object_link(reference),
                new_tab,
            };
        }
    }

    TokenSpan::Text {
        text: token.content.clone(),
        categories: token.categories.clone(),
    }
}

/// Map tokenized lines through [`classify_token`], numbering lines from 1.
pub fn render_lines(
    lines: &[Vec<Token>],
    references: Option<&ReferenceTable>,
    current_address: &str,
) -> Vec<RenderedLine> {
    lines
        .iter()
        .enumerate()
        .map(|(index, tokens)| RenderedLine {
            number: index + 1,
            spans: tokens
                .iter()
                .map(|token| classify_token(token, references, current_address))
                .collect(),
        })
        .collect()
}
