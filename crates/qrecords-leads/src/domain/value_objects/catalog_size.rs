//! Catalog size bucket
//!
//! The four inventory ranges a store can pick on the demo request form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inventory size of a store, in records
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum CatalogSize {
    #[serde(rename = "under_1000")]
    Under1000,
    #[serde(rename = "1000_5000")]
    From1000To5000,
    #[serde(rename = "5000_20000")]
    From5000To20000,
    #[serde(rename = "over_20000")]
    Over20000,
}

impl CatalogSize {
    /// All buckets in display order.
    pub const ALL: [CatalogSize; 4] = [
        Self::Under1000,
        Self::From1000To5000,
        Self::From5000To20000,
        Self::Over20000,
    ];

    /// Wire token submitted by the form.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Under1000 => "under_1000",
            Self::From1000To5000 => "1000_5000",
            Self::From5000To20000 => "5000_20000",
            Self::Over20000 => "over_20000",
        }
    }

    /// Label shown to visitors and stored in the CRM.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Under1000 => "Unter 1.000 Artikel",
            Self::From1000To5000 => "1.000 - 5.000 Artikel",
            Self::From5000To20000 => "5.000 - 20.000 Artikel",
            Self::Over20000 => "Über 20.000 Artikel",
        }
    }
}

impl FromStr for CatalogSize {
    type Err = CatalogSizeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.token() == token)
            .ok_or(CatalogSizeError::UnknownBucket)
    }
}

impl fmt::Display for CatalogSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CatalogSizeError {
    #[error("Bitte wählen Sie eine Kataloggröße")]
    UnknownBucket,
}
