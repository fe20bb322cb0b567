use utoipa::OpenApi;
use crate::controllers::recommendation_controller;
use crate::models::recommendation;

#[derive(OpenApi)]
#[openapi(
    paths(
        recommendation_controller::get_data,
        recommendation_controller::health
    ),
    components(
        schemas(
            recommendation::ApiResponse,
            recommendation::SolarData,
            recommendation::FluidLabel
        )
    ),
    tags(
        (name = "orc-fluid-advisor", description = "Solar ORC working fluid recommendation API")
    )
)]
pub struct ApiDoc;
