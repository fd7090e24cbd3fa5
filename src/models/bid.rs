/**
 * Bid Model
 *
 * This module defines the bid document stored in the `bids` collection.
 * A bid always references an existing project and the contractor who
 * placed it.
 */

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Bid review status (defaults to Pending)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BidStatus {
    Pending,
    Accepted,
    Rejected,
}

impl Default for BidStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Bid document in the `bids` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    /// Unique bid ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Project the bid targets
    pub project_id: ObjectId,
    /// Contractor who placed the bid
    pub contractor_id: ObjectId,
    /// Offered amount
    pub amount: f64,
    /// Optional free-text pitch
    pub description: Option<String>,
    /// Review status
    pub status: BidStatus,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Bid representation returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidResponse {
    /// Bid's unique ID (hex string)
    pub id: String,
    /// Target project ID (hex string)
    pub project_id: String,
    /// Bidding contractor ID (hex string)
    pub contractor_id: String,
    /// Offered amount
    pub amount: f64,
    /// Free-text pitch
    pub description: Option<String>,
    /// Review status
    pub status: BidStatus,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Bid> for BidResponse {
    fn from(bid: Bid) -> Self {
        Self {
            id: bid.id.map(|id| id.to_hex()).unwrap_or_default(),
            project_id: bid.project_id.to_hex(),
            contractor_id: bid.contractor_id.to_hex(),
            amount: bid.amount,
            description: bid.description,
            status: bid.status,
            created_at: bid.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&BidStatus::Pending).unwrap(),
            "\"Pending\""
        );
        let status: BidStatus = serde_json::from_str("\"Accepted\"").unwrap();
        assert_eq!(status, BidStatus::Accepted);
    }

    #[test]
    fn test_bid_bson_field_names() {
        let bid = Bid {
            id: None,
            project_id: ObjectId::new(),
            contractor_id: ObjectId::new(),
            amount: 2500.0,
            description: Some("Full rewire".to_string()),
            status: BidStatus::default(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let doc = mongodb::bson::to_document(&bid).unwrap();
        assert!(doc.contains_key("projectId"));
        assert!(doc.contains_key("contractorId"));
        assert!(!doc.contains_key("_id"));
    }
}
