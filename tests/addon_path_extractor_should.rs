use api::server::error::Error;
use api::server::extractors::{AddonResource, ProxyCredentials, parse_addon_path};

fn credentials(proxy_url: &str, password: &str) -> ProxyCredentials {
    ProxyCredentials {
        proxy_url: proxy_url.to_string(),
        password: password.to_string(),
    }
}

#[test]
fn decode_an_encoded_proxy_url() {
    let (creds, resource) =
        parse_addon_path("/mfp/https%3A%2F%2Fproxy.example.com%2F/PSW/secret/manifest.json")
            .unwrap();

    assert_eq!(creds, credentials("https://proxy.example.com/", "secret"));
    assert_eq!(resource, AddonResource::Manifest);
}

#[test]
fn accept_a_raw_proxy_url_with_slashes() {
    let (creds, resource) =
        parse_addon_path("/mfp/https://proxy.example.com/sub/PSW/secret/stream/tv/tv%3A42.json")
            .unwrap();

    assert_eq!(creds, credentials("https://proxy.example.com/sub", "secret"));
    assert_eq!(
        resource,
        AddonResource::Stream {
            channel_id: "tv:42".to_string()
        }
    );
}

#[test]
fn decode_the_password() {
    let (creds, _) = parse_addon_path("/mfp/http%3A%2F%2Fp/PSW/p%40ss%2Fword/meta/tv/tv:1.json")
        .unwrap();
    assert_eq!(creds.password, "p@ss/word");
}

#[test]
fn parse_catalog_routes() {
    let (_, plain) =
        parse_addon_path("/mfp/http%3A%2F%2Fp/PSW/pw/catalog/tv/italian_channels.json").unwrap();
    assert_eq!(
        plain,
        AddonResource::Catalog {
            catalog_id: "italian_channels".to_string(),
            search: None,
            genre: None,
        }
    );

    let (_, search) = parse_addon_path(
        "/mfp/http%3A%2F%2Fp/PSW/pw/catalog/tv/italian_channels/search=rai%201.json",
    )
    .unwrap();
    assert_eq!(
        search,
        AddonResource::Catalog {
            catalog_id: "italian_channels".to_string(),
            search: Some("rai 1".to_string()),
            genre: None,
        }
    );

    let (_, both) = parse_addon_path(
        "/mfp/http%3A%2F%2Fp/PSW/pw/catalog/tv/italian_channels/genre=SPORT&search=rai&skip=0.json",
    )
    .unwrap();
    assert_eq!(
        both,
        AddonResource::Catalog {
            catalog_id: "italian_channels".to_string(),
            search: Some("rai".to_string()),
            genre: Some("SPORT".to_string()),
        }
    );
}

#[test]
fn reject_unknown_paths() {
    for path in [
        "/mfp/http%3A%2F%2Fp/manifest.json",
        "/mfp/http%3A%2F%2Fp/PSW/pw/unknown.json",
        "/mfp/http%3A%2F%2Fp/PSW/pw/stream/movie/tv:1.json",
        "/mfp/http%3A%2F%2Fp/PSW/pw",
        "/mfp//PSW/pw/manifest.json",
        "/other/PSW/pw/manifest.json",
    ] {
        assert!(
            matches!(parse_addon_path(path), Err(Error::NotFound(_))),
            "expected not found for {}",
            path
        );
    }
}
