//! Database operations for plots
//!
//! Plot queries are flat finds over the `plots` collection. The bounding
//! box is expressed with plain `$gte`/`$lte` comparisons on the latitude
//! and longitude fields; there is no geospatial index.

use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Collection, Database};

use crate::models::{Plot, Zoning};

const COLLECTION: &str = "plots";

fn plots(db: &Database) -> Collection<Plot> {
    db.collection::<Plot>(COLLECTION)
}

/// Optional filters applied to a plot listing
#[derive(Debug, Default, Clone)]
pub struct PlotFilter {
    pub zoning: Option<Zoning>,
    pub min_lat: Option<f64>,
    pub max_lat: Option<f64>,
    pub min_lng: Option<f64>,
    pub max_lng: Option<f64>,
}

impl PlotFilter {
    fn to_document(&self) -> Document {
        let mut filter = Document::new();
        if let Some(zoning) = self.zoning {
            filter.insert("zoning", zoning.as_str());
        }
        let mut latitude = Document::new();
        if let Some(min) = self.min_lat {
            latitude.insert("$gte", min);
        }
        if let Some(max) = self.max_lat {
            latitude.insert("$lte", max);
        }
        if !latitude.is_empty() {
            filter.insert("latitude", latitude);
        }
        let mut longitude = Document::new();
        if let Some(min) = self.min_lng {
            longitude.insert("$gte", min);
        }
        if let Some(max) = self.max_lng {
            longitude.insert("$lte", max);
        }
        if !longitude.is_empty() {
            filter.insert("longitude", longitude);
        }
        filter
    }
}

/// List plots matching the given filter
pub async fn list_plots(
    db: &Database,
    filter: &PlotFilter,
) -> Result<Vec<Plot>, mongodb::error::Error> {
    let cursor = plots(db).find(filter.to_document(), None).await?;
    cursor.try_collect().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = PlotFilter::default();
        assert!(filter.to_document().is_empty());
    }

    #[test]
    fn test_zoning_filter() {
        let filter = PlotFilter {
            zoning: Some(Zoning::Residential),
            ..Default::default()
        };
        assert_eq!(filter.to_document(), doc! { "zoning": "Residential" });
    }

    #[test]
    fn test_bounding_box_filter() {
        let filter = PlotFilter {
            min_lat: Some(40.0),
            max_lat: Some(41.0),
            min_lng: Some(-74.5),
            max_lng: Some(-73.5),
            ..Default::default()
        };
        assert_eq!(
            filter.to_document(),
            doc! {
                "latitude": { "$gte": 40.0, "$lte": 41.0 },
                "longitude": { "$gte": -74.5, "$lte": -73.5 },
            }
        );
    }

    #[test]
    fn test_half_open_box() {
        let filter = PlotFilter {
            min_lat: Some(40.0),
            ..Default::default()
        };
        assert_eq!(
            filter.to_document(),
            doc! { "latitude": { "$gte": 40.0 } }
        );
    }
}
