//! Shared constants for the Costline core.

/// Currency assumed when the collaborator response does not carry one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Market region assumed when the collaborator response does not carry one.
pub const DEFAULT_MARKET_REGION: &str = "National average";

/// Category assigned to draft line items that arrive without one.
pub const FALLBACK_CATEGORY: &str = "Uncategorized";

/// Material label assigned to draft line items that arrive without one.
pub const FALLBACK_MATERIAL: &str = "Unspecified material";

/// Unit assigned to draft line items that arrive without one.
pub const FALLBACK_UNIT: &str = "unit";

/// Maximum number of price points kept per category trend, oldest first.
pub const PRICE_HISTORY_LIMIT: usize = 6;
