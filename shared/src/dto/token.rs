//! Token metadata DTO.

/// Static description of a token that can appear in the backdrop.
///
/// The decorative 24h change is not part of the metadata; it is drawn per
/// marker when a layout is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMeta {
    /// Ticker symbol, e.g. `"ETH"`
    pub symbol: String,
    /// Display name shown in the tooltip
    pub name: String,
    /// Brand color as `[r, g, b]`
    pub color: [u8; 3],
}

impl TokenMeta {
    /// Create token metadata from borrowed parts
    pub fn new(symbol: &str, name: &str, color: [u8; 3]) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            color,
        }
    }
}
