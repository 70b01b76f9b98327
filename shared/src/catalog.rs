//! # Token Catalog
//!
//! The fixed set of tokens the backdrop may show. A single layout pass places
//! at most one marker per catalog entry, so the catalog size is also the
//! upper bound on the number of markers on screen.

use crate::dto::TokenMeta;

/// Number of entries in [`default_catalog`]
pub const CATALOG_SIZE: usize = 18;

/// Symbol, display name and brand color for each built-in token
const CATALOG_TABLE: [(&str, &str, [u8; 3]); CATALOG_SIZE] = [
    ("ETH", "Ethereum", [98, 126, 234]),
    ("WBTC", "Wrapped Bitcoin", [247, 147, 26]),
    ("USDC", "USD Coin", [39, 117, 202]),
    ("USDT", "Tether", [38, 161, 123]),
    ("DAI", "Dai", [245, 172, 55]),
    ("UNI", "Uniswap", [255, 0, 122]),
    ("LINK", "Chainlink", [42, 90, 218]),
    ("AAVE", "Aave", [182, 80, 158]),
    ("MATIC", "Polygon", [130, 71, 229]),
    ("ARB", "Arbitrum", [40, 160, 240]),
    ("OP", "Optimism", [255, 4, 32]),
    ("SOL", "Solana", [153, 69, 255]),
    ("MKR", "Maker", [26, 171, 155]),
    ("CRV", "Curve", [64, 100, 150]),
    ("LDO", "Lido DAO", [240, 131, 97]),
    ("SNX", "Synthetix", [0, 209, 255]),
    ("COMP", "Compound", [0, 211, 149]),
    ("SUSHI", "SushiSwap", [250, 82, 160]),
];

/// Build the built-in token catalog.
///
/// # Examples
///
/// ```rust
/// use shared::catalog::default_catalog;
///
/// let catalog = default_catalog();
/// assert_eq!(catalog[0].symbol, "ETH");
/// ```
pub fn default_catalog() -> Vec<TokenMeta> {
    CATALOG_TABLE
        .iter()
        .map(|(symbol, name, color)| TokenMeta::new(symbol, name, *color))
        .collect()
}
