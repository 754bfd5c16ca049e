//! CLI command implementations.

pub mod cart;
pub mod catalog;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;
use shopfront_commerce::ids::{ProductId, VariantId};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Catalog file (overrides the config's `catalog`).
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Catalog file (overrides the config's `catalog`).
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Actions to apply in order: `add:<product>/<variant>`,
    /// `remove:<product>/<variant>` or `clear`.
    #[arg(value_name = "ACTION")]
    pub actions: Vec<CartAction>,
}

/// One user action in a cart session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    Add(ProductId, VariantId),
    Remove(ProductId, VariantId),
    Clear,
}

impl FromStr for CartAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "clear" {
            return Ok(CartAction::Clear);
        }

        let (verb, key) = s.split_once(':').ok_or_else(|| {
            format!(
                "expected add:<product>/<variant>, remove:<product>/<variant> or clear, got '{}'",
                s
            )
        })?;
        let (product, variant) = key
            .split_once('/')
            .ok_or_else(|| format!("expected <product>/<variant>, got '{}'", key))?;
        let (product, variant) = (ProductId::new(product), VariantId::new(variant));

        match verb {
            "add" => Ok(CartAction::Add(product, variant)),
            "remove" => Ok(CartAction::Remove(product, variant)),
            other => Err(format!("unknown cart action '{}'", other)),
        }
    }
}

impl fmt::Display for CartAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartAction::Add(p, v) => write!(f, "add:{}/{}", p, v),
            CartAction::Remove(p, v) => write!(f, "remove:{}/{}", p, v),
            CartAction::Clear => f.write_str("clear"),
        }
    }
}
