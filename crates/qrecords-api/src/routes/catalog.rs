//! Form metadata endpoints

use axum::Json;
use qrecords_leads::{CatalogSize, FormStep};

use crate::models::{CatalogSizeOption, FormStepInfo};

/// Catalog size choices
#[utoipa::path(
    get,
    path = "/api/catalog-sizes",
    responses(
        (status = 200, description = "Catalog size buckets in display order", body = Vec<CatalogSizeOption>)
    ),
    tag = "forms"
)]
pub async fn list_catalog_sizes() -> Json<Vec<CatalogSizeOption>> {
    Json(CatalogSize::ALL.into_iter().map(CatalogSizeOption::from).collect())
}

/// Steps of the demo request form
#[utoipa::path(
    get,
    path = "/api/form-steps",
    responses(
        (status = 200, description = "Form steps in order", body = Vec<FormStepInfo>)
    ),
    tag = "forms"
)]
pub async fn list_form_steps() -> Json<Vec<FormStepInfo>> {
    Json(FormStep::ALL.into_iter().map(FormStepInfo::from).collect())
}
