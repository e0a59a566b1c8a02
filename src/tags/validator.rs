use crate::subgraph::types::{Pair, Token};
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches any HTML/markup-like tag embedded in token metadata.
static MARKUP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

fn is_contaminated(token: &Token) -> bool {
    MARKUP_RE.is_match(&token.name) || MARKUP_RE.is_match(&token.symbol)
}

/// Admission filter for pair records. A pair is rejected when either token
/// carries markup in its name or symbol. Rejection is routine filtering, not
/// an error; each rejected token is reported for audit visibility.
///
/// Contamination is checked on the raw text as received — symbol decoding
/// belongs to tag construction, not admission.
pub fn is_clean_pair(pair: &Pair) -> bool {
    let mut clean = true;
    for token in [&pair.token0, &pair.token1] {
        if is_contaminated(token) {
            warn!(
                "[TAGS] Rejected token with markup in metadata: name={:?} symbol={:?}",
                token.name, token.symbol
            );
            clean = false;
        }
    }
    clean
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(name: &str, symbol: &str) -> Token {
        Token {
            id: "0x0000000000000000000000000000000000000001".to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
        }
    }

    fn pair(token0: Token, token1: Token) -> Pair {
        Pair {
            id: "0x00000000000000000000000000000000000000aa".to_string(),
            created_at_timestamp: 1_600_000_000,
            token0,
            token1,
        }
    }

    #[test]
    fn test_clean_pair_accepted() {
        let p = pair(token("Wrapped Ether", "WETH"), token("USD Coin", "USDC"));
        assert!(is_clean_pair(&p));
    }

    #[test]
    fn test_markup_in_name_rejects_pair() {
        let p = pair(
            token("<script>evil</script>", "EVIL"),
            token("USD Coin", "USDC"),
        );
        assert!(!is_clean_pair(&p));
    }

    #[test]
    fn test_markup_in_symbol_rejects_pair() {
        let p = pair(token("Fine Token", "<b>"), token("USD Coin", "USDC"));
        assert!(!is_clean_pair(&p));
    }

    #[test]
    fn test_markup_in_second_token_rejects_pair() {
        let p = pair(token("USD Coin", "USDC"), token("Bad <img> Token", "BAD"));
        assert!(!is_clean_pair(&p));
    }

    #[test]
    fn test_angle_bracket_without_close_is_allowed() {
        let p = pair(token("1 < 2 Token", "LT"), token("USD Coin", "USDC"));
        assert!(is_clean_pair(&p));
    }
}
