use api::server::utils::stream_url_utils::StreamUrlBuilder;

const EXPECTED: &str = "http://p/proxy/hls/manifest.m3u8?api_password=pw\
&d=https%3A%2F%2Fvavoo.to%2Fplay%2F42%2Findex.m3u8\
&h_user-agent=Mozilla%2F5.0%20%28Windows%20NT%2010.0%3B%20Win64%3B%20x64%29%20AppleWebKit%2F537.36%20%28KHTML%2C%20like%20Gecko%29%20Chrome%2F133.0.0.0%20Safari%2F537.36\
&h_referer=https%3A%2F%2Fnewembedplay.xyz%2F\
&h_origin=https%3A%2F%2Fnewembedplay.xyz";

#[test]
fn build_the_proxy_url() {
    let builder = StreamUrlBuilder::new("https://vavoo.to");
    assert_eq!(builder.build("42", "http://p", "pw"), EXPECTED);
}

#[test]
fn be_deterministic() {
    let builder = StreamUrlBuilder::new("https://vavoo.to");
    let first = builder.build("1234.abcd", "https://proxy.example.com", "secret");
    let second = builder.build("1234.abcd", "https://proxy.example.com", "secret");

    assert_eq!(first, second);
}

#[test]
fn ignore_trailing_slash_on_proxy() {
    let builder = StreamUrlBuilder::new("https://vavoo.to");
    assert_eq!(
        builder.build("42", "http://p/", "pw"),
        builder.build("42", "http://p", "pw")
    );
}

#[test]
fn ignore_trailing_slash_on_upstream() {
    let builder = StreamUrlBuilder::new("https://vavoo.to/");
    assert_eq!(
        builder.playback_url("42"),
        "https://vavoo.to/play/42/index.m3u8"
    );
}

#[test]
fn encode_password_as_a_query_value() {
    let builder = StreamUrlBuilder::new("https://vavoo.to");
    let url = builder.build("42", "http://p", "a&b=c");

    assert!(url.contains("api_password=a%26b%3Dc&d="));
}
