//! Database operations for bids
//!
//! An owner's bid listing is derived in two steps: first the owned project
//! ids are collected (see [`crate::projects::db::owned_project_ids`]), then
//! bids are matched with an `$in` filter. This substitutes for a relational
//! join the document store does not provide.

use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use crate::models::{Bid, BidStatus};

const COLLECTION: &str = "bids";

fn bids(db: &Database) -> Collection<Bid> {
    db.collection::<Bid>(COLLECTION)
}

/// Insert a new bid placed by `contractor` on `project`
pub async fn create_bid(
    db: &Database,
    project: ObjectId,
    contractor: ObjectId,
    amount: f64,
    description: Option<String>,
) -> Result<Bid, mongodb::error::Error> {
    let now = Utc::now();
    let mut bid = Bid {
        id: None,
        project_id: project,
        contractor_id: contractor,
        amount,
        description,
        status: BidStatus::default(),
        created_at: now,
        updated_at: now,
    };

    let result = bids(db).insert_one(&bid, None).await?;
    bid.id = result.inserted_id.as_object_id();
    Ok(bid)
}

/// List the bids placed by a contractor
pub async fn bids_for_contractor(
    db: &Database,
    contractor: ObjectId,
) -> Result<Vec<Bid>, mongodb::error::Error> {
    let cursor = bids(db)
        .find(doc! { "contractorId": contractor }, None)
        .await?;
    cursor.try_collect().await
}

/// List the bids placed against any of the given projects
pub async fn bids_for_projects(
    db: &Database,
    project_ids: &[ObjectId],
) -> Result<Vec<Bid>, mongodb::error::Error> {
    let cursor = bids(db)
        .find(doc! { "projectId": { "$in": project_ids } }, None)
        .await?;
    cursor.try_collect().await
}
