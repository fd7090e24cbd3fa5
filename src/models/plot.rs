/**
 * Plot Model
 *
 * This module defines the plot document stored in the `plots` collection.
 * Plots are independent of users and projects; the map browser queries them
 * with a flat scan (no geospatial index).
 */

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Zoning classification for a plot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zoning {
    Residential,
    Commercial,
    #[serde(rename = "Mixed-Use")]
    MixedUse,
    Industrial,
}

impl Zoning {
    /// Wire/bson representation of the zoning value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
            Self::MixedUse => "Mixed-Use",
            Self::Industrial => "Industrial",
        }
    }
}

impl std::str::FromStr for Zoning {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Residential" => Ok(Self::Residential),
            "Commercial" => Ok(Self::Commercial),
            "Mixed-Use" => Ok(Self::MixedUse),
            "Industrial" => Ok(Self::Industrial),
            other => Err(format!("unknown zoning: {other}")),
        }
    }
}

/// Utility hookups available on a plot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Utility {
    Water,
    Electricity,
    Sewer,
    Gas,
}

/// Plot document in the `plots` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plot {
    /// Unique plot ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Street address
    pub address: String,
    /// Asking price
    pub price: f64,
    /// Plot size
    pub size: f64,
    /// Latitude for map display
    pub latitude: f64,
    /// Longitude for map display
    pub longitude: f64,
    /// Listing description
    pub description: String,
    /// Zoning classification
    pub zoning: Zoning,
    /// Available utility hookups
    pub utilities: Vec<Utility>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Plot representation returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotResponse {
    /// Plot's unique ID (hex string)
    pub id: String,
    /// Street address
    pub address: String,
    /// Asking price
    pub price: f64,
    /// Plot size
    pub size: f64,
    /// Latitude for map display
    pub latitude: f64,
    /// Longitude for map display
    pub longitude: f64,
    /// Listing description
    pub description: String,
    /// Zoning classification
    pub zoning: Zoning,
    /// Available utility hookups
    pub utilities: Vec<Utility>,
}

impl From<Plot> for PlotResponse {
    fn from(plot: Plot) -> Self {
        Self {
            id: plot.id.map(|id| id.to_hex()).unwrap_or_default(),
            address: plot.address,
            price: plot.price,
            size: plot.size,
            latitude: plot.latitude,
            longitude: plot.longitude,
            description: plot.description,
            zoning: plot.zoning,
            utilities: plot.utilities,
        }
    }
}
