use core::str::FromStr;

use serde::{Deserialize, Serialize};

use ecosprout_core::{DomainError, Entity, ProductId, ValueObject};

use crate::price::Price;

/// Product category (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Boxes,
    Bags,
    Wrapping,
    Containers,
}

impl Category {
    /// Categories in the order the catalog filter lists them.
    pub const ALL: [Category; 4] = [
        Category::Boxes,
        Category::Bags,
        Category::Containers,
        Category::Wrapping,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Boxes => "boxes",
            Category::Bags => "bags",
            Category::Wrapping => "wrapping",
            Category::Containers => "containers",
        }
    }

    /// Human-readable label used in filter menus and result summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Boxes => "Boxes",
            Category::Bags => "Bags",
            Category::Wrapping => "Wrapping",
            Category::Containers => "Containers",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "boxes" => Ok(Category::Boxes),
            "bags" => Ok(Category::Bags),
            "wrapping" => Ok(Category::Wrapping),
            "containers" => Ok(Category::Containers),
            other => Err(DomainError::validation(format!(
                "category must be one of: boxes, bags, wrapping, containers (got '{other}')"
            ))),
        }
    }
}

/// Environmental properties of a product.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sustainability {
    pub biodegradable: bool,
    pub recyclable: bool,
    pub compostable: bool,
    #[serde(default)]
    pub certifications: Vec<String>,
}

impl ValueObject for Sustainability {}

/// Badge shown on the product details view for each sustainability flag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SustainabilityBadge {
    Biodegradable,
    Recyclable,
    Compostable,
}

impl SustainabilityBadge {
    pub fn label(&self) -> &'static str {
        match self {
            SustainabilityBadge::Biodegradable => "Biodegradable",
            SustainabilityBadge::Recyclable => "Recyclable",
            SustainabilityBadge::Compostable => "Compostable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionUnit {
    Cm,
    Inch,
}

/// Outer dimensions of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub unit: DimensionUnit,
}

impl ValueObject for Dimensions {}

impl core::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let unit = match self.unit {
            DimensionUnit::Cm => "cm",
            DimensionUnit::Inch => "in",
        };
        write!(f, "{} × {} × {} {unit}", self.length, self.width, self.height)
    }
}

/// Catalog product record.
///
/// Immutable once loaded. `images` and `features` are kept in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub short_description: String,
    pub price: Price,
    #[serde(default)]
    pub images: Vec<String>,
    pub category: Category,
    #[serde(default)]
    pub features: Vec<String>,
    pub sustainability: Sustainability,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    pub in_stock: bool,
    pub featured: bool,
}

impl Product {
    /// Badges for the flags that are set, in Biodegradable, Recyclable,
    /// Compostable order.
    pub fn sustainability_badges(&self) -> Vec<SustainabilityBadge> {
        let s = &self.sustainability;
        [
            (s.biodegradable, SustainabilityBadge::Biodegradable),
            (s.recyclable, SustainabilityBadge::Recyclable),
            (s.compostable, SustainabilityBadge::Compostable),
        ]
        .into_iter()
        .filter_map(|(set, badge)| set.then_some(badge))
        .collect()
    }

    /// Primary image, if any.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &ProductId {
        &self.id
    }
}
