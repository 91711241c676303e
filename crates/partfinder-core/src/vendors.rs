//! Static vendor table used to synthesize search-link entries.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::parts::{sanitize_price, PartEntry, StockState};

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const PLACEHOLDER_IMAGE_BASE: &str = "https://via.placeholder.com/400x300/2563eb/ffffff?text=";

/// Placeholder listing shown for a vendor when no catalog entry matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackListing {
    /// Raw placeholder price; sanitized when the entry is built, so `0.0`
    /// renders as "See site".
    pub price: f64,
    pub stock_state: StockState,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vendor {
    pub key: &'static str,
    pub display_name: &'static str,
    /// Search page URL; the encoded query is appended verbatim.
    pub search_url_template: &'static str,
    pub domain: &'static str,
    pub fallback: FallbackListing,
}

impl Vendor {
    /// Builds the vendor's search URL for `query`.
    #[must_use]
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}{}",
            self.search_url_template,
            utf8_percent_encode(query, URI_COMPONENT)
        )
    }

    /// Synthesizes a search-link entry for `query`. The entry name is the
    /// query exactly as the user typed it.
    #[must_use]
    pub fn search_link_entry(&self, query: &str) -> PartEntry {
        let url = self.search_url(query);
        PartEntry {
            name: query.to_string(),
            vendor: self.display_name.to_string(),
            price: sanitize_price(self.fallback.price),
            original_price: None,
            discount_percent: 0.0,
            stock_state: self.fallback.stock_state,
            search_url: Some(url.clone()),
            url,
            product_url: None,
            is_search_link: true,
            image_url: format!(
                "{PLACEHOLDER_IMAGE_BASE}{}",
                self.fallback.label.split_whitespace().collect::<Vec<_>>().join("+")
            ),
        }
    }
}

/// Vendors in the order their search links are presented.
pub const VENDORS: &[Vendor] = &[
    Vendor {
        key: "revrobotics",
        display_name: "REV Robotics",
        search_url_template: "https://www.revrobotics.com/search/?q=",
        domain: "revrobotics.com",
        fallback: FallbackListing {
            price: 45.99,
            stock_state: StockState::InStock,
            label: "Search on REV",
        },
    },
    Vendor {
        key: "andymark",
        display_name: "AndyMark",
        search_url_template: "https://www.andymark.com/search?q=",
        domain: "andymark.com",
        fallback: FallbackListing {
            price: 52.99,
            stock_state: StockState::LimitedStock,
            label: "Search on AndyMark",
        },
    },
    Vendor {
        key: "wcproducts",
        display_name: "WCP (West Coast Products)",
        search_url_template: "https://www.wcproducts.com/search?q=",
        domain: "wcproducts.com",
        fallback: FallbackListing {
            price: 54.50,
            stock_state: StockState::InStock,
            label: "Search on WCP",
        },
    },
    Vendor {
        key: "ctre",
        display_name: "CTRE",
        search_url_template: "https://store.ctr-electronics.com/search?q=",
        domain: "ctr-electronics.com",
        fallback: FallbackListing {
            price: 58.99,
            stock_state: StockState::InStock,
            label: "Search on CTRE",
        },
    },
    Vendor {
        key: "dekup",
        display_name: "Deküp Robotics",
        search_url_template: "https://www.dekuprobotics.com/search?q=",
        domain: "dekuprobotics.com",
        fallback: FallbackListing {
            price: 0.0,
            stock_state: StockState::InStock,
            label: "Search on Deküp",
        },
    },
];
