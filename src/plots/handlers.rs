/**
 * Plot Handlers
 *
 * This module implements GET /api/plots for the map browser. Filters
 * arrive as query parameters: a zoning classification and an optional
 * latitude/longitude bounding box.
 */

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use mongodb::Database;
use serde::Deserialize;

use crate::error::ApiError;
use crate::plots::db::{list_plots, PlotFilter};
use crate::models::PlotResponse;

/// Query parameters accepted by the plot listing
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotQuery {
    /// Zoning classification, e.g. `Residential` or `Mixed-Use`
    pub zoning: Option<String>,
    pub min_lat: Option<f64>,
    pub max_lat: Option<f64>,
    pub min_lng: Option<f64>,
    pub max_lng: Option<f64>,
}

impl PlotQuery {
    fn into_filter(self) -> Result<PlotFilter, ApiError> {
        let zoning = match self.zoning {
            Some(raw) => Some(raw.parse().map_err(|_| {
                ApiError::handler(StatusCode::BAD_REQUEST, "Invalid zoning value")
            })?),
            None => None,
        };
        Ok(PlotFilter {
            zoning,
            min_lat: self.min_lat,
            max_lat: self.max_lat,
            min_lng: self.min_lng,
            max_lng: self.max_lng,
        })
    }
}

/// List plots matching the query (GET /api/plots)
///
/// # Errors
/// * `400 Bad Request` - Unrecognized zoning value
pub async fn get_plots(
    State(db): State<Option<Database>>,
    Query(query): Query<PlotQuery>,
) -> Result<Json<Vec<PlotResponse>>, ApiError> {
    let db = db.ok_or_else(ApiError::database_not_configured)?;

    let filter = query.into_filter()?;
    let plots = list_plots(&db, &filter).await?;
    Ok(Json(plots.into_iter().map(PlotResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Zoning;

    #[test]
    fn test_query_parses_zoning() {
        let query = PlotQuery {
            zoning: Some("Mixed-Use".to_string()),
            ..Default::default()
        };
        let filter = query.into_filter().unwrap();
        assert_eq!(filter.zoning, Some(Zoning::MixedUse));
    }

    #[test]
    fn test_query_rejects_unknown_zoning() {
        let query = PlotQuery {
            zoning: Some("Agricultural".to_string()),
            ..Default::default()
        };
        let err = query.into_filter().unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_query_passes_bounding_box_through() {
        let query = PlotQuery {
            min_lat: Some(40.0),
            max_lat: Some(41.0),
            ..Default::default()
        };
        let filter = query.into_filter().unwrap();
        assert_eq!(filter.min_lat, Some(40.0));
        assert_eq!(filter.max_lat, Some(41.0));
        assert!(filter.min_lng.is_none());
    }
}
