//! Product catalog module.
//!
//! The catalog feeds the cart. Listings arrive with string prices; they are
//! parsed once here and every later computation works on [`Money`].
//! A listing that fails to parse does not abort the load: it is reported in
//! [`CatalogLoad::rejected`] so the product list can show it as unavailable.
//!
//! [`Money`]: crate::money::Money

mod category;
mod product;

pub use category::Category;
pub use product::{Product, ProductListing};

use crate::error::CartError;
use crate::ids::CategoryName;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// On-disk catalog format.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogFile {
    /// Categories in display order.
    #[serde(default)]
    pub categories: Vec<CategoryListing>,
}

/// A category as it appears in a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryListing {
    /// Category name.
    pub name: String,
    /// Listings under this category.
    #[serde(default)]
    pub plants: Vec<ProductListing>,
}

/// A listing that could not be turned into a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedListing {
    /// Listing name as written in the file.
    pub name: String,
    /// Category the listing was found under.
    pub category: CategoryName,
    /// Why it was rejected.
    pub error: CartError,
}

/// Result of ingesting a catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogLoad {
    /// Products that parsed cleanly.
    pub catalog: Catalog,
    /// Listings that were dropped.
    pub rejected: Vec<RejectedListing>,
}

/// The product list, grouped by category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Ingest a decoded catalog file.
    ///
    /// Groups that repeat a category name are merged into the first one.
    pub fn from_file(file: CatalogFile) -> CatalogLoad {
        let mut seen: HashSet<String> = HashSet::new();
        let mut categories: Vec<Category> = Vec::with_capacity(file.categories.len());
        let mut rejected = Vec::new();

        for group in file.categories {
            let category_name = CategoryName::new(group.name);
            let index = match categories.iter().position(|c| c.name == category_name) {
                Some(index) => index,
                None => {
                    categories.push(Category::new(category_name.clone()));
                    categories.len() - 1
                }
            };
            let category = &mut categories[index];

            for listing in group.plants {
                let name = listing.name.clone();
                let outcome = if seen.contains(&name) {
                    Err(CartError::DuplicateProduct(name.clone()))
                } else {
                    Product::from_listing(listing, category_name.clone())
                };

                match outcome {
                    Ok(product) => {
                        seen.insert(name);
                        category.products.push(product);
                    }
                    Err(error) => {
                        tracing::debug!(
                            product = %name,
                            category = %category_name,
                            error = %error,
                            "Rejected catalog listing"
                        );
                        rejected.push(RejectedListing {
                            name,
                            category: category_name.clone(),
                            error,
                        });
                    }
                }
            }
        }

        let catalog = Catalog { categories };
        tracing::debug!(
            products = catalog.len(),
            rejected = rejected.len(),
            "Catalog loaded"
        );
        CatalogLoad { catalog, rejected }
    }

    /// Ingest a JSON catalog.
    pub fn from_json_str(content: &str) -> Result<CatalogLoad, CartError> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Ok(Self::from_file(file))
    }

    /// Ingest a TOML catalog.
    pub fn from_toml_str(content: &str) -> Result<CatalogLoad, CartError> {
        let file: CatalogFile = toml::from_str(content)?;
        Ok(Self::from_file(file))
    }

    /// The catalog bundled with the crate.
    pub fn builtin() -> Result<CatalogLoad, CartError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    /// Categories in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Find a category by name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// All products, in display order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.categories.iter().flat_map(|c| c.products.iter())
    }

    /// Find a product by name.
    pub fn find(&self, name: &str) -> Option<&Product> {
        self.products().find(|p| p.name == name)
    }

    /// Total number of products.
    pub fn len(&self) -> usize {
        self.categories.iter().map(Category::len).sum()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
