use axum::{
    extract::{Path, Query},
    Json,
};
use ecotrack_core::dataset::{legend, CityView, DatasetSummary, EmissionsDataset, LegendEntry};

use crate::dto::SummaryQuery;
use crate::error::ApiError;

pub async fn list_cities() -> Json<Vec<CityView<'static>>> {
    Json(EmissionsDataset::india().views())
}

pub async fn city_summary(Query(query): Query<SummaryQuery>) -> Json<DatasetSummary<'static>> {
    let dataset = EmissionsDataset::india();
    let mut summary = dataset.summary();
    summary.top = dataset.top_emitters(query.top);
    Json(summary)
}

pub async fn city_legend() -> Json<Vec<LegendEntry>> {
    Json(legend())
}

pub async fn get_city(Path(name): Path<String>) -> Result<Json<CityView<'static>>, ApiError> {
    EmissionsDataset::india()
        .find(&name)
        .map(|city| Json(CityView::new(city)))
        .ok_or_else(|| ApiError::not_found(format!("City '{}' not found", name)))
}
