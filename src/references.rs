//! Type-reference resolution for a module's exposed signatures.
//!
//! Parameter types arrive wrapped in arbitrary layers of indirection
//! (`&T`, `&mut T`, `vector<T>`). [`unwrap_type_reference`] strips those
//! layers down to the named struct underneath, and [`ReferenceTable`]
//! accumulates one entry per simple type name across every exposed function,
//! ready for token lookup during rendering.

use crate::normalized::{NormalizedModule, NormalizedType, TypeReference};
use std::collections::BTreeMap;
use tracing::debug;

/// Take a normalized type and return the named type reference contained
/// within it, if any.
///
/// Strips one layer of indirection per call: references, mutable references,
/// and vectors recurse into their inner type until a struct (the base case)
/// or an unsupported variant is reached. Primitives and type parameters have
/// no defining address, so they yield `None`.
pub fn unwrap_type_reference(ty: &NormalizedType) -> Option<&TypeReference> {
    match ty {
        NormalizedType::Struct(reference) => Some(reference),
        NormalizedType::Reference(inner)
        | NormalizedType::MutableReference(inner)
        | NormalizedType::Vector(inner) => unwrap_type_reference(inner),
        _ => None,
    }
}

/// Per-render lookup table mapping a type's simple name to its resolved
/// reference.
///
/// Built once per module view from the exposed-function signatures, then
/// treated as immutable by the linker. Name collisions are resolved
/// last-write-wins: a later parameter or type argument with the same simple
/// name overwrites the earlier entry. No dedup by address+module is
/// attempted.
#[derive(Debug, Default, Clone)]
pub struct ReferenceTable {
    by_name: BTreeMap<String, TypeReference>,
}

impl ReferenceTable {
    /// Build the table from a module's exposed functions.
    ///
    /// For every parameter of every exposed function, the unwrapped type
    /// reference is inserted under its simple name. The reference's own type
    /// arguments are then unwrapped and inserted as well — one level only,
    /// nested type arguments of type arguments are not expanded.
    pub fn build(module: &NormalizedModule) -> Self {
        let mut by_name = BTreeMap::new();

        for function in module.exposed_functions.values() {
            for parameter in &function.parameters {
                let Some(reference) = unwrap_type_reference(parameter) else {
                    continue;
                };
                by_name.insert(reference.name.clone(), reference.clone());

                for type_argument in &reference.type_arguments {
                    if let Some(argument_reference) = unwrap_type_reference(type_argument) {
                        by_name.insert(argument_reference.name.clone(), argument_reference.clone());
                    }
                }
            }
        }

        debug!(
            "built reference table for {}::{}: {} entries",
            module.address,
            module.name,
            by_name.len()
        );
        Self { by_name }
    }

    /// Look up a reference by simple type name (exact match).
    pub fn get(&self, name: &str) -> Option<&TypeReference> {
        self.by_name.get(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Iterate entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeReference)> {
        self.by_name.iter().map(|(name, reference)| (name.as_str(), reference))
    }
}
