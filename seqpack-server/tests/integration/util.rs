use seqpack_server::config::Settings;
use seqpack_server::context::ServerContext;
use serde_json::Value;
use warp::http::Response;
use warp::hyper::body::Bytes;

/// Context built from the embedded defaults.
pub fn context() -> ServerContext {
    ServerContext::new(Settings::new_from_default_config().expect("default settings must load"))
}

/// Parses a JSON response body.
pub fn json_body(res: &Response<Bytes>) -> Value {
    serde_json::from_slice(res.body()).expect("response body must be JSON")
}
