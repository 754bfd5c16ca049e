//! The read-only product catalog and its file format.

use std::collections::HashSet;
use std::path::Path;

use crate::catalog::{Product, ProductVariant};
use crate::error::CommerceError;
use crate::ids::{ProductId, VariantId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// An ordered, read-only list of products priced in one currency.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct Catalog {
    currency: Currency,
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products, validating ids and prices.
    pub fn new(currency: Currency, products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(&product.id) {
                return Err(CommerceError::InvalidCatalog(format!(
                    "duplicate product id '{}'",
                    product.id
                )));
            }

            let mut variant_ids = HashSet::new();
            for variant in &product.variants {
                if !variant_ids.insert(&variant.id) {
                    return Err(CommerceError::InvalidCatalog(format!(
                        "duplicate variant id '{}' on product '{}'",
                        variant.id, product.id
                    )));
                }
                if variant.price.is_negative() {
                    return Err(CommerceError::InvalidCatalog(format!(
                        "negative price for {}/{}",
                        product.id, variant.id
                    )));
                }
            }
        }

        Ok(Self { currency, products })
    }

    /// Load a catalog file. `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let catalog = if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        tracing::debug!(
            path = %path.display(),
            products = catalog.len(),
            currency = %catalog.currency,
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Parse a catalog from TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        let file: CatalogFile = toml::from_str(content)?;
        file.into_catalog()
    }

    /// Parse a catalog from JSON.
    pub fn from_json_str(content: &str) -> Result<Self, CommerceError> {
        let file: CatalogFile = serde_json::from_str(content)?;
        file.into_catalog()
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by ID.
    pub fn product(&self, product_id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == product_id)
    }

    /// Look up a variant by its full key.
    pub fn variant(
        &self,
        product_id: &ProductId,
        variant_id: &VariantId,
    ) -> Result<(&Product, &ProductVariant), CommerceError> {
        let product = self
            .product(product_id)
            .ok_or_else(|| CommerceError::ProductNotFound(product_id.to_string()))?;
        let variant = product
            .variant(variant_id)
            .ok_or_else(|| CommerceError::VariantNotFound {
                product_id: product_id.to_string(),
                variant_id: variant_id.to_string(),
            })?;
        Ok((product, variant))
    }
}

/// On-disk catalog layout. Prices are decimal amounts in the file's currency.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    currency: Currency,
    #[serde(default)]
    products: Vec<ProductRecord>,
}

#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: ProductId,
    name: String,
    #[serde(default)]
    image: String,
    description: Option<String>,
    #[serde(default)]
    variants: Vec<VariantRecord>,
}

#[derive(Debug, Deserialize)]
struct VariantRecord {
    id: VariantId,
    name: String,
    price: f64,
    stock: u32,
}

impl CatalogFile {
    fn into_catalog(self) -> Result<Catalog, CommerceError> {
        let currency = self.currency;
        let products = self
            .products
            .into_iter()
            .map(|record| -> Result<Product, CommerceError> {
                let variants = record
                    .variants
                    .into_iter()
                    .map(|v| -> Result<ProductVariant, CommerceError> {
                        let price = decimal_price(v.price, currency).ok_or_else(|| {
                            CommerceError::InvalidCatalog(format!(
                                "invalid price {} for {}/{}",
                                v.price, record.id, v.id
                            ))
                        })?;
                        Ok(ProductVariant {
                            id: v.id,
                            name: v.name,
                            price,
                            stock: v.stock,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Product {
                    id: record.id,
                    name: record.name,
                    image: record.image,
                    description: record.description,
                    variants,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Catalog::new(currency, products)
    }
}

/// Convert a file price to minor units. `None` when it is not a finite,
/// non-negative amount that fits in `i64` minor units.
fn decimal_price(amount: f64, currency: Currency) -> Option<Money> {
    let minor = (amount * currency.minor_per_major() as f64).round();
    // i64::MAX as f64 rounds up to 2^63, so the bound is exclusive.
    if !minor.is_finite() || minor < 0.0 || minor >= i64::MAX as f64 {
        return None;
    }
    Some(Money::from_decimal(amount, currency))
}
