//! OpenAPI document for the gateway routes. Served by Swagger UI at `/docs`.

use crate::api::handlers::{auth, health};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(health::health, auth::session::session, auth::logout::logout),
    components(schemas(auth::session::SessionResponse)),
    tags(
        (name = "auth", description = "Session resolution and logout"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/health"));
        assert!(doc.paths.paths.contains_key("/auth/session"));
        assert!(doc.paths.paths.contains_key("/auth/logout"));
    }
}
