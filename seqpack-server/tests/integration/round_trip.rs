use rand::rngs::StdRng;
use rand::SeedableRng;
use seqpack::ids::{self, GeneratorConfig};
use seqpack::selector::CodecSelector;
use seqpack::session::{Action, Session};
use seqpack_server::api::service;
use serde_json::json;
use url::Url;
use warp::test::request;

use crate::util::{context, json_body};

/// Generate, write to the URL, reload from the URL alone, then echo.
#[tokio::test]
async fn reloaded_identifiers_are_echoed() {
    let selector = CodecSelector::default();
    let generated_ids = ids::generate(
        &mut StdRng::seed_from_u64(11),
        GeneratorConfig { count: 3000, max: 999 },
    );

    let start = Session::new(Url::parse("http://localhost:5173/").unwrap());
    let generated = start
        .apply(&selector, Action::Generate(generated_ids.clone()))
        .unwrap();

    let reloaded_url = Url::parse(generated.url().as_str()).unwrap();
    let reloaded = Session::load(reloaded_url).unwrap();
    assert_eq!(reloaded.ids(), generated_ids.as_slice());

    let res = request()
        .method("POST")
        .path("/test")
        .json(&json!({ "companySeqs": reloaded.delimited() }))
        .reply(&service(context()))
        .await;

    let body = json_body(&res);
    let expected_preview: Vec<String> = generated_ids[..10].iter().map(u64::to_string).collect();
    assert_eq!(body["count"], 3000);
    assert_eq!(body["companySeqs"], json!(expected_preview));
}
