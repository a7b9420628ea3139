use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sentiment Gateway API",
        version = "1.0.0",
        description = "Classifies free text through an external sentiment predictor and manages stored predictions.\n\nWhen the predictor cannot be reached, create requests still succeed with the label `Undefined` and probability `0.0`.",
        license(name = "MIT")
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "sentiment", description = "Sentiment predictions")
    ),
    paths(
        crate::routes::health::health,
        crate::routes::sentiment::create_prediction::create_prediction,
        crate::routes::sentiment::get_prediction::get_prediction,
        crate::routes::sentiment::update_prediction::update_prediction,
        crate::routes::sentiment::delete_prediction::delete_prediction,
    ),
    components(schemas(
        crate::prediction::Prediction,
        crate::prediction::PredictionResponse,
        crate::prediction::TextRequest,
        crate::routes::health::HealthResponse,
        crate::routes::sentiment::ErrorResponse,
        crate::routes::sentiment::MessageResponse,
    ))
)]
pub struct ApiDoc;
