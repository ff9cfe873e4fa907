use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use pawcare_core::models::species::Species;
use pawcare_pain::scoring::Category;
use pawcare_pain::{all_scales, get_scale_or_err};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct ScaleSummary {
    id: String,
    name: String,
    species: Species,
    max_total: u16,
}

#[derive(Serialize)]
pub struct ScaleDetail {
    id: String,
    name: String,
    species: Species,
    max_total: u16,
    categories: Vec<Category>,
}

pub async fn list_scales() -> Json<Vec<ScaleSummary>> {
    let scales: Vec<ScaleSummary> = all_scales()
        .iter()
        .map(|s| ScaleSummary {
            id: s.id().to_string(),
            name: s.name().to_string(),
            species: s.species(),
            max_total: s.max_total(),
        })
        .collect();
    Json(scales)
}

pub async fn get_scale_detail(Path(id): Path<String>) -> Result<Json<ScaleDetail>, ApiError> {
    let scale = get_scale_or_err(&id)?;

    Ok(Json(ScaleDetail {
        id: scale.id().to_string(),
        name: scale.name().to_string(),
        species: scale.species(),
        max_total: scale.max_total(),
        categories: scale.categories().to_vec(),
    }))
}
