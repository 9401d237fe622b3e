use utoipa::OpenApi;

pub const RECIPE_TAG: &str = "Recipes";
pub const COMMENT_TAG: &str = "Comments";
pub const LIKE_TAG: &str = "Likes";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipe",
        description = "A recipe sharing api server",
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
        )
    ),
    tags(
        (name = RECIPE_TAG, description = "Recipe management endpoints"),
        (name = COMMENT_TAG, description = "Recipe comment endpoints"),
        (name = LIKE_TAG, description = "User like endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
