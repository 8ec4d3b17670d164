//! Spin HTTP component.

use std::rc::Rc;

use anyhow::{anyhow, Result};
use futures::SinkExt;
use spin_sdk::http::{Fields, IncomingRequest, Method, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use storefront_sdk::storefront_cache::RouteCachePolicy;
use storefront_sdk::storefront_core::RequestId;
use storefront_sdk::storefront_data::SpinTransport;
use storefront_sdk::storefront_observability::{init_tracing, LogLevel, StructuredLogger};
use storefront_sdk::storefront_streaming::StreamingSink;

use crate::{html_headers, render_error_page, stream_home, HomeApp, RouteError};

/// Home page handler.
#[http_component]
async fn handle_home(req: IncomingRequest, response_out: ResponseOutparam) {
    init_tracing(LogLevel::Info);

    let app = match HomeApp::embedded() {
        Ok(app) => app,
        Err(e) => {
            let request_id = RequestId::generate();
            let logger = StructuredLogger::new(request_id.clone());
            logger
                .error_builder("Invalid storefront config")
                .field("error", e.to_string())
                .emit();
            let headers = html_headers(&RouteCachePolicy::none(), &request_id);
            send(response_out, 500, &headers, render_error_page(), &logger).await;
            return;
        }
    };

    let path = req.path_with_query().unwrap_or_else(|| "/".to_string());
    let method = request_method(&req.method());

    let routed = method
        .ok_or(RouteError::MethodNotAllowed)
        .and_then(|m| app.route(&m, &path));
    let ctx = match routed {
        Ok(ctx) => ctx,
        Err(e) => {
            let request_id = RequestId::generate();
            let logger = app.logger(&request_id, &path);
            logger
                .info_builder("Request rejected")
                .field("reason", e.to_string())
                .emit();
            let headers = html_headers(&RouteCachePolicy::none(), &request_id);
            send(response_out, e.status().as_u16(), &headers, String::new(), &logger).await;
            return;
        }
    };

    let logger = app.logger(&ctx.request_id, &ctx.path);
    logger
        .info_builder("Home request started")
        .field("method", ctx.method.as_str())
        .field("locale", ctx.locale.to_string())
        .emit();

    if ctx.method == http::Method::HEAD {
        let (status, headers) = match app.head(&ctx) {
            Ok(headers) => (200, headers),
            Err(e) => (
                e.status().as_u16(),
                html_headers(&RouteCachePolicy::none(), &ctx.request_id),
            ),
        };
        send(response_out, status, &headers, String::new(), &logger).await;
        return;
    }

    let transport = Rc::new(SpinTransport::new(
        app.config().api.graphql_endpoint(),
        app.config().api.public_access_token.clone(),
    ));
    let origin = request_origin(&req);
    let loader = app.loader(&ctx, transport, &origin);

    let envelope = match loader.load(&ctx).await {
        Ok(envelope) => envelope,
        Err(e) => {
            let status = e.status().as_u16();
            let body = if status >= 500 {
                logger
                    .error_builder("Home loader failed")
                    .field("error", e.to_string())
                    .emit();
                render_error_page()
            } else {
                logger
                    .info_builder("Locale rejected")
                    .field("locale", ctx.param(crate::LOCALE_PARAM).unwrap_or_default())
                    .emit();
                String::new()
            };
            let headers = html_headers(&RouteCachePolicy::none(), &ctx.request_id);
            send(response_out, status, &headers, body, &logger).await;
            return;
        }
    };

    let response = match build_response(200, &envelope.response_headers(&ctx.request_id)) {
        Ok(response) => response,
        Err(e) => {
            logger
                .error_builder("Failed to build response")
                .field("error", e.to_string())
                .emit();
            return;
        }
    };
    let body = response.take_body();
    response_out.set(response);

    let mut sink = StreamingSink::new(body, ctx.timing.clone());
    if let Err(e) = stream_home(envelope, &mut sink, &logger).await {
        logger
            .error_builder("Streaming failed")
            .field("error", e.to_string())
            .emit();
    }
}

fn build_response(status: u16, headers: &[(String, String)]) -> Result<OutgoingResponse> {
    let header_list: Vec<(String, Vec<u8>)> = headers
        .iter()
        .map(|(name, value)| (name.clone(), value.clone().into_bytes()))
        .collect();
    let response = OutgoingResponse::new(Fields::from_list(&header_list)?);
    response
        .set_status_code(status)
        .map_err(|_| anyhow!("invalid status code {}", status))?;
    Ok(response)
}

/// Send a complete, non-streamed response, logging any failure.
async fn send(
    response_out: ResponseOutparam,
    status: u16,
    headers: &[(String, String)],
    body: String,
    logger: &StructuredLogger,
) {
    if let Err(e) = respond(response_out, status, headers, body).await {
        logger
            .error_builder("Failed to send response")
            .field("error", e.to_string())
            .emit();
    }
}

async fn respond(
    response_out: ResponseOutparam,
    status: u16,
    headers: &[(String, String)],
    body: String,
) -> Result<()> {
    let response = build_response(status, headers)?;
    let mut out = response.take_body();
    response_out.set(response);
    if !body.is_empty() {
        out.send(body.into_bytes())
            .await
            .map_err(|e| anyhow!("failed to write body: {}", e))?;
    }
    out.close()
        .await
        .map_err(|e| anyhow!("failed to close body: {}", e))?;
    Ok(())
}

fn request_method(method: &Method) -> Option<http::Method> {
    Some(match method {
        Method::Get => http::Method::GET,
        Method::Head => http::Method::HEAD,
        Method::Post => http::Method::POST,
        Method::Put => http::Method::PUT,
        Method::Delete => http::Method::DELETE,
        Method::Connect => http::Method::CONNECT,
        Method::Options => http::Method::OPTIONS,
        Method::Trace => http::Method::TRACE,
        Method::Patch => http::Method::PATCH,
        Method::Other(other) => return http::Method::from_bytes(other.as_bytes()).ok(),
    })
}

fn request_origin(req: &IncomingRequest) -> String {
    req.headers()
        .get(&"host".to_string())
        .into_iter()
        .next()
        .map(|host| format!("https://{}", String::from_utf8_lossy(&host)))
        .unwrap_or_default()
}
