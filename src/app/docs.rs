use axum::{Json, response::Html};
use utoipa::OpenApi;

use crate::app::openapi::ApiDoc;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
const SWAGGER_UI_DIST: &str = "https://unpkg.com/swagger-ui-dist@5";

pub async fn swagger_ui() -> Html<String> {
    let title = ApiDoc::openapi().info.title;
    Html(format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>{title}</title>
  <link rel="stylesheet" href="{SWAGGER_UI_DIST}/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="{SWAGGER_UI_DIST}/swagger-ui-bundle.js"></script>
  <script>
    SwaggerUIBundle({{ url: '{OPENAPI_JSON_PATH}', dom_id: '#swagger-ui', docExpansion: 'list' }});
  </script>
</body>
</html>
"#
    ))
}

pub async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
