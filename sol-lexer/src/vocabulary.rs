//! Fixed Solidity vocabularies used to classify words
//!
//! The sets are built once on first use and never mutated.

use once_cell::sync::Lazy;
use std::collections::HashSet;

pub const KEYWORDS: &[&str] = &[
    "pragma", "solidity", "contract", "library", "interface", "function", "modifier", "event",
    "struct", "enum", "mapping", "returns", "return", "if", "else", "for", "while", "do", "break",
    "continue", "new", "delete", "emit", "import", "is", "using", "assembly", "public", "private",
    "internal", "external", "pure", "view", "payable", "nonpayable", "memory", "storage",
    "calldata", "indexed", "override", "virtual", "abstract", "constructor", "fallback",
    "receive", "try", "catch", "revert", "require", "assert",
];

pub const TYPES: &[&str] = &[
    "uint", "uint8", "uint16", "uint32", "uint64", "uint128", "uint256", "int", "int8", "int16",
    "int32", "int64", "int128", "int256", "bool", "address", "bytes", "bytes1", "bytes2",
    "bytes4", "bytes8", "bytes16", "bytes32", "string", "tuple",
];

pub const BUILTINS: &[&str] = &[
    "msg", "block", "tx", "abi", "this", "super", "selfdestruct", "keccak256", "sha256",
    "ecrecover", "addmod", "mulmod", "gasleft", "blockhash", "transfer", "send", "call",
    "delegatecall", "staticcall", "push", "pop", "length",
];

pub const CONSTANTS: &[&str] = &[
    "true", "false", "wei", "gwei", "ether", "seconds", "minutes", "hours", "days", "weeks",
];

static KEYWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| KEYWORDS.iter().copied().collect());
static TYPE_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| TYPES.iter().copied().collect());
static BUILTIN_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| BUILTINS.iter().copied().collect());
static CONSTANT_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| CONSTANTS.iter().copied().collect());

pub fn is_keyword(word: &str) -> bool {
    KEYWORD_SET.contains(word)
}

/// Listed type names plus any `uintN`, `intN` or `bytesN` with a decimal suffix
pub fn is_type(word: &str) -> bool {
    TYPE_SET.contains(word) || is_sized_type(word)
}

pub fn is_builtin(word: &str) -> bool {
    BUILTIN_SET.contains(word)
}

pub fn is_constant(word: &str) -> bool {
    CONSTANT_SET.contains(word)
}

fn is_sized_type(word: &str) -> bool {
    ["uint", "int", "bytes"].iter().any(|base| {
        word.strip_prefix(base)
            .map(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sized_types() {
        assert!(is_type("uint24"));
        assert!(is_type("int72"));
        assert!(is_type("bytes3"));
        assert!(is_type("uint"));
        assert!(!is_type("uintx"));
        assert!(!is_type("uint8a"));
        assert!(!is_type("bytes_1"));
    }

    #[test]
    fn test_sets_do_not_overlap_in_precedence_order() {
        // "string" is only a type, "this" only a builtin
        assert!(!is_keyword("string"));
        assert!(is_type("string"));
        assert!(is_builtin("this"));
        assert!(!is_constant("this"));
    }
}
