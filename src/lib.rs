//! Linked source rendering for Sui Move modules.
//!
//! Given a module's source (or disassembly) text and its on-chain package id,
//! this crate fetches the module's normalized interface, resolves which type
//! names in the text refer to on-chain objects, and renders the listing as
//! line descriptors whose type tokens carry hyperlinks:
//!
//! - **Interface fetch**: `sui_getNormalizedMoveModule` over JSON-RPC ([`rpc`])
//! - **Reference resolution**: unwrap parameter types to their named structs
//!   and index them by simple name ([`references`])
//! - **Tokenization**: pluggable highlighter seam with a built-in Move lexer
//!   ([`highlight`])
//! - **Linking**: classify each token into a link or plain span ([`linker`])
//!
//! [`view::ModuleView`] ties these together for a one-shot render that
//! degrades to an unlinked listing whenever the interface is unavailable.

pub mod address;
pub mod highlight;
pub mod linker;
pub mod normalized;
pub mod references;
pub mod rpc;
pub mod view;

// Re-export the types most callers touch.
pub use highlight::{MoveTokenizer, Token, TokenCategory, Tokenizer};
pub use linker::{RenderedLine, TokenSpan};
pub use normalized::{NormalizedModule, NormalizedType, TypeReference};
pub use references::{unwrap_type_reference, ReferenceTable};
pub use rpc::{JsonRpcClient, ModuleFetcher};
pub use view::{ModuleView, RenderedModule};
