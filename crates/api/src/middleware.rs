use alchemist_config::ApiConfig;
use axum::{
    extract::Request,
    http::{HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::{debug, error, info, warn};

/// 记录每个请求的耗时，客户端错误和服务端错误分别用 warn 和 error 级别
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = std::time::Instant::now();

    debug!("收到请求: {method} {path}");

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis();

    if status.is_server_error() {
        error!("请求失败: {method} {path} - {status} - {elapsed_ms}ms");
    } else if status.is_client_error() {
        warn!("请求被拒绝: {method} {path} - {status} - {elapsed_ms}ms");
    } else {
        info!("请求完成: {method} {path} - {status} - {elapsed_ms}ms");
    }

    response
}

/// 按配置构建CORS：`*` 表示允许任意来源
pub fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let origin = if config.cors_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("忽略无效的CORS来源: {}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

pub fn trace_layer(
) -> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
}

pub fn body_limit_layer(config: &ApiConfig) -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(config.max_request_size_bytes())
}
