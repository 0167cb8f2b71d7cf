use axum::{
    extract::Request,
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type, \
     x-supabase-client-platform, x-supabase-client-platform-version, \
     x-supabase-client-runtime, x-supabase-client-runtime-version";

pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";

/// Adds permissive cross-origin headers to every response, including errors
/// produced further down the stack. `OPTIONS` is answered here with an empty
/// body and never reaches a handler.
pub async fn cors_middleware(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };

    apply_cors_headers(&mut response);
    response
}

fn apply_cors_headers(response: &mut Response) {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
}
