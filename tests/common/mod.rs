//! Shared builders for integration tests.

use std::sync::Once;

use request_view::{Environment, ParamMap, RequestView, StaticRequest};

static INIT: Once = Once::new();

/// Install the test tracing subscriber once per test binary.
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "request_view=debug".into()),
            )
            .with_test_writer()
            .init();
    });
}

/// Environment for a plain GET against a proxied deployment.
pub fn proxied_get_env() -> Environment {
    Environment::from_iter([
        ("REQUEST_METHOD", "GET"),
        ("REMOTE_ADDR", "9.9.9.9"),
        ("HTTP_X_FORWARDED_FOR", "10.0.0.1, 5.6.7.8"),
        ("HTTP_HOST", "www.example.org"),
        ("SERVER_PORT", "80"),
        ("REQUEST_URI", "/books/list?page=2"),
        ("QUERY_STRING", "page=2"),
    ])
}

/// Environment for a formatted POST carrying an XML body.
pub fn xml_post_env() -> Environment {
    Environment::from_iter([
        ("REQUEST_METHOD", "POST"),
        ("CONTENT_TYPE", "application/xml"),
        ("RAW_POST_DATA", "<book><title>t</title></book>"),
        ("REMOTE_ADDR", "4.4.4.4"),
    ])
}

/// A view over the given environment with a routed parameter set.
pub fn routed_view(env: Environment, path_params: ParamMap) -> RequestView<StaticRequest> {
    let mut view = RequestView::new(StaticRequest::new(env).with_host("www.example.org"));
    view.set_path_parameters(path_params);
    view
}
