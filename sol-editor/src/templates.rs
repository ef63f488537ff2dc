//! Bundled starter contracts

use serde::Serialize;

/// A named starter contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    pub key: &'static str,
    pub label: &'static str,
    pub source: &'static str,
}

pub const DEFAULT_TEMPLATE: &str = "counter";

pub const TEMPLATES: &[Template] = &[
    Template {
        key: "counter",
        label: "Counter",
        source: include_str!("../templates/counter.sol"),
    },
    Template {
        key: "erc20",
        label: "ERC-20 Token",
        source: include_str!("../templates/erc20.sol"),
    },
    Template {
        key: "nft",
        label: "ERC-721 NFT",
        source: include_str!("../templates/nft.sol"),
    },
    Template {
        key: "voting",
        label: "Voting",
        source: include_str!("../templates/voting.sol"),
    },
    Template {
        key: "blank",
        label: "Blank",
        source: include_str!("../templates/blank.sol"),
    },
];

/// Look up a template by key (case-insensitive)
pub fn find(key: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.key.eq_ignore_ascii_case(key))
}

pub fn default_template() -> &'static Template {
    &TEMPLATES[0]
}
