//! Serde model of the JSON-RPC normalized module payload.
//!
//! Mirrors the wire shape returned by `sui_getNormalizedMoveModule`: unit type
//! variants serialize as bare strings (`"U64"`), composite variants as single-key
//! objects (`{"Struct": {...}}`). Field aliases accept both the snake_case and
//! camelCase spellings fullnodes have shipped over time.
//!
//! Only `exposed_functions` and the parameter types participate in reference
//! resolution; the remaining fields are carried because the fetch returns them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A fully resolved type descriptor from a module's function signature.
///
/// Recursive: references, mutable references, and vectors wrap a single inner
/// type; structs carry the concrete identity of a named on-chain type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalizedType {
    Bool,
    U8,
    U16,
    U32,
    U64,
    U128,
    U256,
    Address,
    Signer,
    Struct(TypeReference),
    Vector(Box<NormalizedType>),
    TypeParameter(u16),
    Reference(Box<NormalizedType>),
    MutableReference(Box<NormalizedType>),
}

/// The concrete (address, module, name, type arguments) identity of a named
/// on-chain type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeReference {
    pub address: String,
    pub module: String,
    pub name: String,
    #[serde(default, alias = "typeArguments")]
    pub type_arguments: Vec<NormalizedType>,
}

/// Function visibility as reported by the fullnode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Public,
    Friend,
    Private,
}

/// An exposed function's signature. Only `parameters` feeds the reference
/// table; type parameter ability sets are passed through opaquely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedFunction {
    pub visibility: Visibility,
    #[serde(default, alias = "isEntry")]
    pub is_entry: bool,
    #[serde(default, alias = "typeParameters")]
    pub type_parameters: Vec<Value>,
    #[serde(default)]
    pub parameters: Vec<NormalizedType>,
    #[serde(default, rename = "return_", alias = "return")]
    pub return_types: Vec<NormalizedType>,
}

/// A module's normalized interface as returned by the fullnode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedModule {
    #[serde(default, alias = "fileFormatVersion")]
    pub file_format_version: u32,
    pub address: String,
    pub name: String,
    #[serde(default)]
    pub friends: Vec<Value>,
    #[serde(default, alias = "exposedFunctions")]
    pub exposed_functions: BTreeMap<String, NormalizedFunction>,
    #[serde(default)]
    pub structs: BTreeMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_from_bare_string() {
        let ty: NormalizedType = serde_json::from_str("\"U64\"").unwrap();
        assert_eq!(ty, NormalizedType::U64);
    }

    #[test]
    fn test_type_parameter_carries_index() {
        let ty: NormalizedType = serde_json::from_str("{\"TypeParameter\": 1}").unwrap();
        assert_eq!(ty, NormalizedType::TypeParameter(1));
    }

    #[test]
    fn test_struct_wire_shape() {
        let raw = r#"{
            "Struct": {
                "address": "0x2",
                "module": "coin",
                "name": "Coin",
                "type_arguments": [{"Struct": {
                    "address": "0x2", "module": "sui", "name": "SUI", "type_arguments": []
                }}]
            }
        }"#;
        let ty: NormalizedType = serde_json::from_str(raw).unwrap();
        let NormalizedType::Struct(reference) = ty else {
            panic!("expected Struct variant");
        };
        assert_eq!(reference.name, "Coin");
        assert_eq!(reference.type_arguments.len(), 1);
    }

    #[test]
    fn test_camel_case_aliases() {
        let raw = r#"{
            "MutableReference": {"Struct": {
                "address": "0x2", "module": "coin", "name": "Coin", "typeArguments": []
            }}
        }"#;
        let ty: NormalizedType = serde_json::from_str(raw).unwrap();
        assert!(matches!(ty, NormalizedType::MutableReference(_)));
    }

    #[test]
    fn test_module_with_exposed_functions() {
        let raw = r#"{
            "fileFormatVersion": 6,
            "address": "0x2",
            "name": "coin",
            "exposedFunctions": {
                "value": {
                    "visibility": "Public",
                    "isEntry": false,
                    "typeParameters": [{"abilities": []}],
                    "parameters": [{"Reference": {"Struct": {
                        "address": "0x2", "module": "coin", "name": "Coin",
                        "typeArguments": [{"TypeParameter": 0}]
                    }}}],
                    "return": ["U64"]
                }
            }
        }"#;
        let module: NormalizedModule = serde_json::from_str(raw).unwrap();
        assert_eq!(module.file_format_version, 6);
        let function = &module.exposed_functions["value"];
        assert_eq!(function.visibility, Visibility::Public);
        assert_eq!(function.parameters.len(), 1);
        assert_eq!(function.return_types, vec![NormalizedType::U64]);
    }

    #[test]
    fn test_vector_roundtrip() {
        let ty = NormalizedType::Vector(Box::new(NormalizedType::U8));
        let raw = serde_json::to_string(&ty).unwrap();
        assert_eq!(raw, "{\"Vector\":\"U8\"}");
        let back: NormalizedType = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, ty);
    }
}
