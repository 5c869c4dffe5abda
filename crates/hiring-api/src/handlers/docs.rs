//! Machine-readable schema document.

use std::collections::BTreeMap;

use axum::Json;
use schemars::schema::RootSchema;
use schemars::schema_for;
use serde::Serialize;

use hiring_models::{Department, Position, PositionPayload, Recruiter};

#[derive(Serialize)]
pub struct ApiDocs {
    pub title: &'static str,
    pub version: &'static str,
    pub schemas: BTreeMap<&'static str, RootSchema>,
}

/// JSON schemas for every body the API reads or writes.
pub fn api_docs() -> ApiDocs {
    let mut schemas = BTreeMap::new();
    schemas.insert("Position", schema_for!(Position));
    schemas.insert("PositionPayload", schema_for!(PositionPayload));
    schemas.insert("Department", schema_for!(Department));
    schemas.insert("Recruiter", schema_for!(Recruiter));

    ApiDocs {
        title: "Position Manager API",
        version: env!("CARGO_PKG_VERSION"),
        schemas,
    }
}

pub async fn get_api_docs() -> Json<ApiDocs> {
    Json(api_docs())
}
