use {
    primitive_types::H160,
    serde::{Deserialize, Serialize},
};

/// Symbols longer than this render as the abbreviated address instead. Some
/// tokens report whole sentences as their symbol.
const MAX_SYMBOL_LENGTH: usize = 7;

/// Erc20 token identity as fetched from chain metadata. Immutable once
/// fetched.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub address: H160,
    pub symbol: Option<String>,
    pub decimals: u8,
}

impl Token {
    pub fn new(address: H160, symbol: Option<String>, decimals: u8) -> Self {
        Self {
            address,
            symbol,
            decimals,
        }
    }

    /// The string the view layer labels this token with: the symbol when it is
    /// present and reasonably short, the abbreviated address otherwise.
    pub fn display(&self) -> String {
        match &self.symbol {
            Some(symbol) if !symbol.is_empty() && symbol.len() <= MAX_SYMBOL_LENGTH => {
                symbol.clone()
            }
            _ => abbreviated_address(&self.address),
        }
    }
}

fn abbreviated_address(address: &H160) -> String {
    let hex = format!("{address:#x}");
    format!("{}...{}", &hex[..6], &hex[hex.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_short_symbol() {
        let token = Token::new(H160::from_low_u64_be(1), Some("GNO".to_string()), 18);
        assert_eq!(token.display(), "GNO");
    }

    #[test]
    fn falls_back_to_abbreviated_address() {
        let address = H160::from_low_u64_be(0xabcd);
        for symbol in [None, Some(String::new()), Some("WAYTOOLONG".to_string())] {
            let token = Token::new(address, symbol, 18);
            assert_eq!(token.display(), "0x0000...abcd");
        }
    }
}
