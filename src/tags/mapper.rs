use crate::subgraph::types::{Pair, Token};
use crate::tags::symbol::clean_symbol;
use serde::Serialize;

pub const PROJECT_NAME: &str = "SushiSwap";
pub const WEBSITE_LINK: &str = "https://www.sushi.com";

/// Maximum length of the combined "SYM0/SYM1" display string; longer values
/// are cut to this length with the final 3 characters replaced by "...".
const MAX_DISPLAY_SYMBOLS_LEN: usize = 45;

/// Standardized labeled-contract record for the downstream registry.
/// Created once per distinct valid pair and never mutated; identity is
/// `contract_address`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub contract_address: String,
    pub display_name: String,
    pub project_name: String,
    pub website_link: String,
    pub note: String,
}

/// Map a validated pair into its tag.
pub fn to_tag(pair: &Pair, chain_id: &str) -> Tag {
    let sym0 = display_symbol(&pair.token0);
    let sym1 = display_symbol(&pair.token1);
    let symbols = truncate_symbols(&format!("{}/{}", sym0, sym1));

    Tag {
        contract_address: format!("eip155:{}:{}", chain_id, pair.id),
        display_name: format!("{} Pair", symbols),
        project_name: PROJECT_NAME.to_string(),
        website_link: WEBSITE_LINK.to_string(),
        note: format!(
            "This is the liquidity pool contract of the {} ({}) / {} ({}) pair on SushiSwap.",
            alias_name(&pair.token0.name),
            sym0,
            alias_name(&pair.token1.name),
            sym1
        ),
    }
}

/// Display symbol policy: the decoder is best-effort cleanup, not a gate.
/// When it rejects, the raw trimmed symbol is used as-is.
fn display_symbol(token: &Token) -> String {
    let cleaned = clean_symbol(&token.symbol);
    if cleaned.is_empty() {
        token.symbol.trim().to_string()
    } else {
        cleaned
    }
}

fn alias_name(name: &str) -> String {
    name.replace("USD//C", "USDC")
}

fn truncate_symbols(combined: &str) -> String {
    if combined.chars().count() <= MAX_DISPLAY_SYMBOLS_LEN {
        return combined.to_string();
    }

    let mut truncated: String = combined
        .chars()
        .take(MAX_DISPLAY_SYMBOLS_LEN - 3)
        .collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(id: &str, name: &str, symbol: &str) -> Token {
        Token {
            id: id.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
        }
    }

    fn pair(symbol0: &str, symbol1: &str) -> Pair {
        Pair {
            id: "0x00000000000000000000000000000000000000aa".to_string(),
            created_at_timestamp: 1_600_000_000,
            token0: token("0x1", "Wrapped Ether", symbol0),
            token1: token("0x2", "USD//C", symbol1),
        }
    }

    #[test]
    fn test_contract_address_is_namespaced() {
        let tag = to_tag(&pair("WETH", "USDC"), "42161");
        assert_eq!(
            tag.contract_address,
            "eip155:42161:0x00000000000000000000000000000000000000aa"
        );
    }

    #[test]
    fn test_display_name_shape() {
        let tag = to_tag(&pair("WETH", "USDC"), "42161");
        assert_eq!(tag.display_name, "WETH/USDC Pair");
    }

    #[test]
    fn test_constants_applied() {
        let tag = to_tag(&pair("WETH", "USDC"), "42161");
        assert_eq!(tag.project_name, PROJECT_NAME);
        assert_eq!(tag.website_link, WEBSITE_LINK);
    }

    #[test]
    fn test_note_aliases_usdc_ticker() {
        let tag = to_tag(&pair("WETH", "USDC"), "42161");
        assert!(tag.note.contains("USDC"));
        assert!(!tag.note.contains("USD//C"));
        assert!(tag.note.contains("Wrapped Ether"));
    }

    #[test]
    fn test_raw_symbol_trimmed_when_decoder_rejects() {
        // Single-char symbol fails the decoder's length rule but is still
        // used in its raw trimmed form for display.
        let tag = to_tag(&pair("  X  ", "USDC"), "42161");
        assert_eq!(tag.display_name, "X/USDC Pair");
    }

    #[test]
    fn test_bytes32_symbol_decoded_for_display() {
        let bytes32 = "4142430000000000000000000000000000000000000000000000000000000000";
        let tag = to_tag(&pair(bytes32, "USDC"), "42161");
        assert_eq!(tag.display_name, "ABC/USDC Pair");
    }

    #[test]
    fn test_long_symbols_truncated_with_ellipsis() {
        let long0 = "A".repeat(30);
        let long1 = "B".repeat(30);
        let tag = to_tag(&pair(&long0, &long1), "42161");

        let symbols = tag
            .display_name
            .strip_suffix(" Pair")
            .expect("display name ends with ' Pair'");
        assert_eq!(symbols.chars().count(), 45);
        assert!(symbols.ends_with("..."));
        assert!(symbols.starts_with(&"A".repeat(30)));
    }

    #[test]
    fn test_exactly_45_chars_not_truncated() {
        let sym0 = "A".repeat(22);
        let sym1 = "B".repeat(22);
        let tag = to_tag(&pair(&sym0, &sym1), "42161");
        assert_eq!(tag.display_name, format!("{}/{} Pair", sym0, sym1));
    }
}
