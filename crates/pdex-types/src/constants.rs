//! Protocol constants for native-token trade requests.

/// Metadata type discriminator for a pDEX trade request.
pub const PDE_TRADE_REQUEST_META: u32 = 91;

/// Transaction type recorded for ordinary (non-token) transactions.
pub const TX_NORMAL_TYPE: &str = "n";

/// Token id of the native token.
pub const NATIVE_TOKEN_ID: &str =
    "0000000000000000000000000000000000000000000000000000000000000004";

/// Burn address used when the node cannot be asked for the current one.
pub const BURNING_ADDRESS: &str = "12RxahVABnAVCGP3LGwCn8jkQxgw7z1x14wztHzn455TTVpi1wBq9YGwkRMQg3J4e657AbAnCvYCJSdA9czBUNuCKwGSRQt55Xwz8WA";

/// Annotation stored on history records produced by the native trade flow.
pub const TRADE_REQUEST_NOTE: &str = "native token trade request";

/// Default fullnode JSON-RPC port.
pub const DEFAULT_RPC_PORT: u16 = 9334;
