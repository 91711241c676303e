use serde::{Deserialize, Serialize};

/// Stock availability as reported by a vendor listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockState {
    InStock,
    OutOfStock,
    LimitedStock,
    Unknown,
}

impl StockState {
    /// Maps a free-form `stock` string from a catalog or remote record.
    ///
    /// Unrecognized values become [`StockState::Unknown`] rather than an error.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "in-stock" => Self::InStock,
            "out-of-stock" | "sold-out" => Self::OutOfStock,
            "limited-stock" => Self::LimitedStock,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::OutOfStock => "Out of Stock",
            Self::LimitedStock => "Limited Stock",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for StockState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single vendor listing for a part.
///
/// `price` is either a finite positive number or `None`; construct entries
/// through [`PartRecord::into_entry`] or apply [`sanitize_price`] so that
/// holds. `None` means the renderer shows "See site".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartEntry {
    pub name: String,
    pub vendor: String,
    pub price: Option<f64>,
    pub original_price: Option<f64>,
    pub discount_percent: f64,
    pub stock_state: StockState,
    /// Primary link: a product page, or a vendor search page when
    /// `is_search_link` is set.
    pub url: String,
    pub product_url: Option<String>,
    pub search_url: Option<String>,
    /// Synthetic entry pointing at a vendor search page. Never "verified".
    pub is_search_link: bool,
    pub image_url: String,
}

impl PartEntry {
    /// Display string for the price column: `$12.50` or `See site`.
    #[must_use]
    pub fn price_label(&self) -> String {
        match self.price {
            Some(price) => format!("${price:.2}"),
            None => "See site".to_string(),
        }
    }

    /// Discount badge text, only when both a usable price and a pre-sale
    /// price are present.
    #[must_use]
    pub fn discount_label(&self) -> Option<String> {
        match (self.price, self.original_price) {
            (Some(_), Some(original)) => Some(format!(
                "{}% OFF (was ${original:.2})",
                self.discount_percent.round()
            )),
            _ => None,
        }
    }
}

/// Normalizes a raw price: non-finite, zero, and negative values become `None`.
#[must_use]
pub fn sanitize_price(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}

/// A price as it appears on the wire: JSON/YAML number or numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Number(f64),
    Text(String),
}

impl RawPrice {
    /// Coerces to a sanitized price. Strings must be plain numbers; anything
    /// else, currency-prefixed text included, yields `None`.
    #[must_use]
    pub fn resolve(&self) -> Option<f64> {
        match self {
            Self::Number(n) => sanitize_price(*n),
            Self::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(sanitize_price),
        }
    }
}

/// Permissive shape shared by the curated catalog file and the remote
/// search API.
///
/// Two record generations exist: older records carry a `stock` string
/// (`"in-stock"`, `"Sold-out"`, ...), newer ones an `inStock` boolean.
/// [`PartRecord::into_entry`] folds both into [`StockState`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub price: Option<RawPrice>,
    #[serde(default)]
    pub original_price: Option<RawPrice>,
    #[serde(default, alias = "discountPercent")]
    pub discount: Option<f64>,
    #[serde(default)]
    pub stock: Option<String>,
    #[serde(default)]
    pub in_stock: Option<bool>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub product_url: Option<String>,
    #[serde(default)]
    pub search_url: Option<String>,
    #[serde(default)]
    pub is_search_link: bool,
    #[serde(default, alias = "imageUrl")]
    pub image: Option<String>,
}

impl PartRecord {
    /// Migrates a record into the canonical [`PartEntry`] shape.
    ///
    /// `inStock` wins over `stock` when both are present. A record with
    /// neither, or with a blank `stock`, is treated as in stock.
    #[must_use]
    pub fn into_entry(self) -> PartEntry {
        let stock_label = self.stock.as_deref().filter(|s| !s.trim().is_empty());
        let stock_state = match (self.in_stock, stock_label) {
            (Some(true), _) => StockState::InStock,
            (Some(false), _) => StockState::OutOfStock,
            (None, Some(label)) => StockState::from_label(label),
            (None, None) => StockState::InStock,
        };

        let discount_percent = self
            .discount
            .filter(|d| d.is_finite() && *d > 0.0)
            .unwrap_or(0.0);

        PartEntry {
            name: self.name,
            vendor: self.vendor,
            price: self.price.as_ref().and_then(RawPrice::resolve),
            original_price: self.original_price.as_ref().and_then(RawPrice::resolve),
            discount_percent,
            stock_state,
            url: self.url.unwrap_or_default(),
            product_url: self.product_url.filter(|s| !s.is_empty()),
            search_url: self.search_url.filter(|s| !s.is_empty()),
            is_search_link: self.is_search_link,
            image_url: self.image.unwrap_or_default(),
        }
    }
}

/// Provenance of a result set. Display only; never used for ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceTag {
    Database,
    EnhancedSearch,
    ShopifyVendors,
    WooCommerceVendors,
    RealVendors,
    FallbackSearchLinks,
    Unknown,
}

impl SourceTag {
    /// Maps the `source` string reported by the remote search API.
    #[must_use]
    pub fn from_remote(source: &str) -> Self {
        match source {
            "database" => Self::Database,
            "enhanced_search" => Self::EnhancedSearch,
            "shopify" => Self::ShopifyVendors,
            "woocommerce" => Self::WooCommerceVendors,
            "real_vendors" | "real_vendor" => Self::RealVendors,
            "fallback" => Self::FallbackSearchLinks,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Database => "FRC Parts Database",
            Self::EnhancedSearch => "Enhanced Search",
            Self::ShopifyVendors => "Shopify Vendors",
            Self::WooCommerceVendors => "WooCommerce Vendors",
            Self::RealVendors => "Real FRC Vendors",
            Self::FallbackSearchLinks => "Vendor Search Links",
            Self::Unknown => "Unknown Source",
        }
    }

    #[must_use]
    pub fn badge(self) -> &'static str {
        match self {
            Self::Database => "Verified",
            Self::EnhancedSearch
            | Self::ShopifyVendors
            | Self::WooCommerceVendors
            | Self::RealVendors => "Live Data",
            Self::FallbackSearchLinks => "Manual",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for SourceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
#[path = "parts_test.rs"]
mod tests;
