//! Per-chain token and contract configuration
//!
//! Token descriptors and protocol contract addresses are immutable once
//! defined per chain; the user selects among them per session. Chain
//! switching re-resolves the selection with a fixed precedence: a token
//! at the same address wins over one with the same symbol, which wins
//! over the chain's first token.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::ClientError;

// ============================================================================
// Address
// ============================================================================

/// 20-byte chain-unique account identifier
///
/// Rendered as a `0x`-prefixed lowercase hex string; comparison is on
/// the raw bytes, so differently-cased inputs compare equal. The
/// all-zero address stands for the chain's native token.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Address([u8; 20]);

impl Address {
    pub const ZERO: Address = Address([0; 20]);

    pub fn new(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// The zero address denotes the native token
    pub fn is_zero(&self) -> bool {
        self.0 == [0; 20]
    }
}

impl FromStr for Address {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex_part = s
            .strip_prefix("0x")
            .ok_or_else(|| ClientError::InvalidAddress(s.to_string()))?;
        if hex_part.len() != 40 {
            return Err(ClientError::InvalidAddress(s.to_string()));
        }
        let bytes =
            hex::decode(hex_part).map_err(|_| ClientError::InvalidAddress(s.to_string()))?;
        let mut out = [0u8; 20];
        out.copy_from_slice(&bytes);
        Ok(Address(out))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

// ============================================================================
// Tokens and chains
// ============================================================================

/// Token descriptor, immutable once defined per chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub address: Address,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    /// External price service identifier, absent for unpriced tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_feed_id: Option<String>,
    /// Den manager handling this token as collateral, where deployed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub den_manager: Option<Address>,
}

impl Token {
    pub fn is_native(&self) -> bool {
        self.address.is_zero()
    }

    pub fn is_debt_token(&self) -> bool {
        self.symbol == crate::constants::DEBT_TOKEN_SYMBOL
    }
}

/// Deployed protocol contracts on one chain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolContracts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borrower_operations: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquid_stability_pool: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swap_router: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    pub chain_id: u64,
    pub tokens: Vec<Token>,
    pub contracts: ProtocolContracts,
}

impl ChainConfig {
    /// The stablecoin collateral for the stability pool, where listed
    pub fn usdc_equivalent_token(&self) -> Option<&Token> {
        self.tokens
            .iter()
            .find(|t| t.symbol == "USDC" || t.symbol == "USDRIF")
    }
}

/// Pick the selection for a freshly switched chain: same address first,
/// then same symbol, then the chain's first token
pub fn reselect_token(previous: &Token, tokens: &[Token]) -> Option<Token> {
    tokens
        .iter()
        .find(|t| t.address == previous.address)
        .or_else(|| tokens.iter().find(|t| t.symbol == previous.symbol))
        .or_else(|| tokens.first())
        .cloned()
}

// ============================================================================
// Known deployments
// ============================================================================

fn addr(s: &str) -> Address {
    // only called on the literals below
    s.parse().expect("static address literal")
}

fn token(
    address: &str,
    symbol: &str,
    name: &str,
    decimals: u8,
    price_feed_id: Option<&str>,
    den_manager: Option<&str>,
) -> Token {
    Token {
        address: addr(address),
        symbol: symbol.to_string(),
        name: name.to_string(),
        decimals,
        price_feed_id: price_feed_id.map(str::to_string),
        den_manager: den_manager.map(addr),
    }
}

/// Chain configurations for every known deployment
pub fn known_chains() -> Vec<ChainConfig> {
    vec![
        // Zircuit mainnet
        ChainConfig {
            chain_id: 48900,
            tokens: vec![
                token(
                    "0x0000000000000000000000000000000000000000",
                    "ETH",
                    "Ether",
                    18,
                    Some("ethereum"),
                    None,
                ),
                token(
                    "0x4200000000000000000000000000000000000006",
                    "WETH",
                    "Wrapped Ether",
                    18,
                    Some("ethereum"),
                    None,
                ),
                token(
                    "0x19df5689cfce64bc2a55f7220b0cd522659955ef",
                    "WBTC",
                    "Wrapped Bitcoin",
                    8,
                    Some("bitcoin"),
                    None,
                ),
                token(
                    "0x3b952c8c9c44e8fe201e2b26f6b2200203214cff",
                    "USDC",
                    "USD Coin",
                    6,
                    Some("usd-coin"),
                    None,
                ),
            ],
            contracts: ProtocolContracts::default(),
        },
        // Zircuit Garfield testnet
        ChainConfig {
            chain_id: 48898,
            tokens: vec![token(
                "0x4f8bc040b06b9bf3c3e5a1214c0112a9e3cd18dc",
                "WETH",
                "Wrapped Ether",
                18,
                Some("ethereum"),
                Some("0xcf5e2731d33649bacbd8893f84b682e0bcacd950"),
            )],
            contracts: ProtocolContracts {
                borrower_operations: Some(addr("0x59f60dff9523ae063d512d9ca44e0423adaa6bd9")),
                ..Default::default()
            },
        },
        // Hatsin chainlet
        ChainConfig {
            chain_id: 2_763_818_285_453_000,
            tokens: vec![
                token(
                    "0xcc11b4c90b4c7eb104825ae6a8d66b695a3e781a",
                    "WETH",
                    "Wrapped Ether",
                    18,
                    Some("ethereum"),
                    Some("0xed508a3d14e27c60c0d557e4142d12dc297cd2d3"),
                ),
                token(
                    "0x7cf6d00daa95134ff95ce5f47d5eb9069a514ca9",
                    "USDC",
                    "USD Coin",
                    6,
                    Some("usd-coin"),
                    Some("0x08547b0f5cbeb58b1129c23d5deaeff4ee5930cb"),
                ),
                token(
                    "0xc3656c19265827fb71824de03409e4b750fa925d",
                    "WBTC",
                    "Wrapped Bitcoin",
                    18,
                    Some("bitcoin"),
                    Some("0x52d98e0d520f3ae8863fe2bdaeb6f8cd1b5771ee"),
                ),
            ],
            contracts: ProtocolContracts {
                borrower_operations: Some(addr("0x02001d634a21c6898b8f6655bc619431dc0af6de")),
                liquid_stability_pool: Some(addr("0x9841405f2c41bb1d839be9ce67998fa80aa88052")),
                swap_router: Some(addr("0x3203c0ea537ab0ada711202c3c578f1d68d1f141")),
            },
        },
        // Rootstock mainnet
        ChainConfig {
            chain_id: 30,
            tokens: vec![
                token(
                    "0x0000000000000000000000000000000000000000",
                    "RBTC",
                    "Rootstock Bitcoin",
                    18,
                    Some("bitcoin"),
                    None,
                ),
                token(
                    "0x3a15461d8ae0f0fb5fa2629e9da7d66a794a6e37",
                    "USDRIF",
                    "RIF US Dollar",
                    18,
                    Some("rif-us-dollar"),
                    None,
                ),
            ],
            contracts: ProtocolContracts::default(),
        },
        // Rootstock testnet
        ChainConfig {
            chain_id: 31,
            tokens: vec![
                token(
                    "0x0000000000000000000000000000000000000000",
                    "tRBTC",
                    "Test Rootstock Bitcoin",
                    18,
                    Some("bitcoin"),
                    None,
                ),
                token(
                    "0x8dbf326e12a9ff37ed6ddf75ada548c2640a6482",
                    "USDRIF",
                    "RIF US Dollar",
                    18,
                    Some("rif-us-dollar"),
                    None,
                ),
                token(
                    "0x8dbf326e12a9ff37ed6ddf75ada548c2640a6483",
                    "WETH",
                    "Wrapped Ether",
                    18,
                    Some("ethereum"),
                    None,
                ),
                token(
                    "0x8dbf326e12a9ff37ed6ddf75ada548c2640a6484",
                    "USDC",
                    "USD Coin",
                    6,
                    Some("usd-coin"),
                    None,
                ),
            ],
            contracts: ProtocolContracts::default(),
        },
    ]
}

/// Look up one chain's configuration
pub fn chain_config(chain_id: u64) -> Result<ChainConfig, ClientError> {
    known_chains()
        .into_iter()
        .find(|c| c.chain_id == chain_id)
        .ok_or(ClientError::UnknownChain(chain_id))
}
