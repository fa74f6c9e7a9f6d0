//! Parameter records and the views layered on top of them.

use proptest::prelude::*;
use scanwire::views::{
    AuthenticationView, FormBasedAuthentication, HttpAuthentication, JsonBasedAuthentication,
    ScriptBasedAuthentication, UsernamePasswordCredentials,
};
use scanwire::{
    decode_str, encode_string, AuthenticationCredentials, AuthenticationMethod, ParameterView,
    SessionManagementMethod, WireCodec, WireError,
};
use serde_json::json;

// ---------------------------------------------------------------------------
// Record codec
// ---------------------------------------------------------------------------

#[test]
fn method_round_trip_keeps_key_order() {
    let text = concat!(
        r#"{"methodName":"formBasedAuthentication","loginUrl":"http://x/login","#,
        r#""loginRequestData":"user=a&pass=b","loginPageUrl":"http://x/"}"#
    );
    let method: AuthenticationMethod = decode_str(text).unwrap();
    assert_eq!(encode_string(&method), text);
}

#[test]
fn discriminator_moves_to_front_on_encode() {
    let method = AuthenticationMethod::from_json(&json!({
        "loginUrl": "u", "methodName": "formBasedAuthentication"
    }))
    .unwrap();
    assert_eq!(
        encode_string(&method),
        r#"{"methodName":"formBasedAuthentication","loginUrl":"u"}"#
    );
}

#[test]
fn non_string_parameters_come_back_as_strings() {
    let method = AuthenticationMethod::from_wire(&json!({
        "methodName": "httpAuthentication", "hostname": "h", "port": 443
    }))
    .unwrap();
    assert_eq!(
        method.to_wire(),
        json!({"methodName": "httpAuthentication", "hostname": "h", "port": "443"})
    );
}

#[test]
fn session_management_record_uses_method_name() {
    let text = r#"{"methodName":"cookieBasedSessionManagement"}"#;
    let method: SessionManagementMethod = decode_str(text).unwrap();
    assert_eq!(method.discriminator(), "cookieBasedSessionManagement");
    assert!(method.parameters().is_empty());
    assert_eq!(encode_string(&method), text);
}

#[test]
fn credentials_record_requires_type() {
    assert!(matches!(
        decode_str::<AuthenticationCredentials>(r#"{"methodName":"x"}"#),
        Err(WireError::Malformed(_))
    ));
}

// ---------------------------------------------------------------------------
// Form-based view
// ---------------------------------------------------------------------------

#[test]
fn form_view_over_http_record_fails() {
    let mut method = AuthenticationMethod::new("httpAuthentication");
    match FormBasedAuthentication::new(&mut method) {
        Err(WireError::UnsupportedDiscriminator { found, .. }) => {
            assert_eq!(found, "httpAuthentication");
        }
        other => panic!("expected UnsupportedDiscriminator, got {other:?}"),
    }
}

#[test]
fn login_payload_decomposes_into_fields() {
    let mut method = FormBasedAuthentication::create("http://x/login", "").unwrap();
    let mut view = FormBasedAuthentication::new(&mut method).unwrap();
    view.set_login_request_data("user=a&pass=b").unwrap();

    let fields = view.login_fields().unwrap();
    assert_eq!(
        fields.iter().collect::<Vec<_>>(),
        vec![("user", "a"), ("pass", "b")]
    );
    assert_eq!(view.field("user").unwrap(), Some("a".to_string()));
    assert_eq!(view.field("nope").unwrap(), None);
    assert!(view.has_field("pass").unwrap());
}

#[test]
fn login_field_edits_reserialize_payload() {
    let mut method = FormBasedAuthentication::create("http://x/login", "a=1&b=2&c=3").unwrap();
    {
        let mut view = FormBasedAuthentication::new(&mut method).unwrap();
        view.set_field("b", "20").unwrap();
        view.set_field("d", "4").unwrap();
        assert_eq!(view.remove_field("a").unwrap(), "1");
        assert!(matches!(
            view.remove_field("zzz"),
            Err(WireError::MissingParameter(name)) if name == "zzz"
        ));
    }
    assert_eq!(method.parameter("loginRequestData"), Some("b=20&c=3&d=4"));
}

#[test]
fn invalid_login_payload_is_never_stored() {
    let mut method = FormBasedAuthentication::create("http://x/login", "a=1").unwrap();
    let mut view = FormBasedAuthentication::new(&mut method).unwrap();
    assert!(matches!(
        view.set_login_request_data("a=1&&b"),
        Err(WireError::InvalidPayload(_))
    ));
    assert!(matches!(
        view.set_field("x", "has&amp"),
        Err(WireError::InvalidPayload(_))
    ));
    assert_eq!(view.login_request_data().unwrap(), "a=1");
    assert!(FormBasedAuthentication::create("u", "broken").is_err());
}

#[test]
fn missing_login_url_is_reported() {
    let mut method = AuthenticationMethod::new("formBasedAuthentication");
    let view = FormBasedAuthentication::new(&mut method).unwrap();
    assert!(matches!(view.login_url(), Err(WireError::MissingParameter(p)) if p == "loginUrl"));
    assert_eq!(view.login_page_url(), None);
    assert!(view.login_fields().unwrap().is_empty());
}

#[test]
fn views_leave_unknown_parameters_alone() {
    let text = r#"{"methodName":"formBasedAuthentication","loginUrl":"u","loginRequestData":"a=1","futureOption":"on"}"#;
    let mut method: AuthenticationMethod = decode_str(text).unwrap();
    {
        let mut view = FormBasedAuthentication::new(&mut method).unwrap();
        view.set_field("b", "2").unwrap();
        assert_eq!(view.parameter("futureOption"), Some("on"));
    }
    assert_eq!(
        encode_string(&method),
        r#"{"methodName":"formBasedAuthentication","loginUrl":"u","loginRequestData":"a=1&b=2","futureOption":"on"}"#
    );
}

#[test]
fn successive_views_share_one_record() {
    let mut method = FormBasedAuthentication::create("http://x/login", "u=a").unwrap();
    FormBasedAuthentication::new(&mut method)
        .unwrap()
        .set_login_url("http://y/login")
        .unwrap();
    match AuthenticationView::new(&mut method).unwrap() {
        AuthenticationView::FormBased(view) => {
            assert_eq!(view.login_url().unwrap(), "http://y/login");
            assert_eq!(view.field("u").unwrap().as_deref(), Some("a"));
        }
        other => panic!("wrong view {}", other.name()),
    }
}

// ---------------------------------------------------------------------------
// Other views
// ---------------------------------------------------------------------------

#[test]
fn json_view_validates_payload() {
    let mut method = JsonBasedAuthentication::create("http://x/api/login", r#"{"u":"a"}"#).unwrap();
    let mut view = JsonBasedAuthentication::new(&mut method).unwrap();
    assert!(matches!(
        view.set_login_request_data("{not json"),
        Err(WireError::InvalidJsonPayload(_))
    ));
    assert_eq!(view.login_request_data().unwrap(), r#"{"u":"a"}"#);
}

#[test]
fn generic_setter_validates_form_payload() {
    let mut method = FormBasedAuthentication::create("http://x/login", "a=1").unwrap();
    let mut view = FormBasedAuthentication::new(&mut method).unwrap();
    assert!(matches!(
        view.set_parameter("loginRequestData", "a=1&&b"),
        Err(WireError::InvalidPayload(_))
    ));
    assert_eq!(view.login_request_data().unwrap(), "a=1");
    view.set_parameter("loginRequestData", "a=2&b=3").unwrap();
    assert_eq!(view.field("b").unwrap().as_deref(), Some("3"));
    view.set_parameter("extra", "a=1&&b").unwrap();
}

#[test]
fn generic_setter_validates_json_payload() {
    let mut method = JsonBasedAuthentication::create("http://x/api/login", "{}").unwrap();
    let mut view = JsonBasedAuthentication::new(&mut method).unwrap();
    assert!(matches!(
        view.set_parameter("loginRequestData", "{not json"),
        Err(WireError::InvalidJsonPayload(_))
    ));
    assert_eq!(view.login_request_data().unwrap(), "{}");
}

#[test]
fn generic_setter_validates_port() {
    let mut method = HttpAuthentication::create("example.com", 443, None).unwrap();
    let mut view = HttpAuthentication::new(&mut method).unwrap();
    assert!(matches!(
        view.set_parameter("port", "70000"),
        Err(WireError::InvalidParameterValue { .. })
    ));
    assert_eq!(view.port().unwrap(), 443);
}

#[test]
fn dispatched_views_validate_too() {
    let mut method = FormBasedAuthentication::create("http://x/login", "u=a").unwrap();
    match AuthenticationView::new(&mut method).unwrap() {
        AuthenticationView::FormBased(mut view) => {
            assert!(view.set_parameter("loginRequestData", "=x").is_err());
        }
        other => panic!("wrong view {}", other.name()),
    }
    assert_eq!(method.parameter("loginRequestData"), Some("u=a"));
}

#[test]
fn http_view_round_trips_port() {
    let mut method = HttpAuthentication::create("example.com", 8443, Some("corp")).unwrap();
    assert_eq!(
        method.to_wire(),
        json!({
            "methodName": "httpAuthentication", "hostname": "example.com", "port": "8443",
            "realm": "corp"
        })
    );
    let mut view = HttpAuthentication::new(&mut method).unwrap();
    assert_eq!(view.port().unwrap(), 8443);
    assert_eq!(view.realm(), Some("corp"));
    view.set_port(80).unwrap();
    assert_eq!(view.port().unwrap(), 80);
}

#[test]
fn script_view_exposes_script_parameters() {
    let mut method = ScriptBasedAuthentication::create("auth.js").unwrap();
    let mut view = ScriptBasedAuthentication::new(&mut method).unwrap();
    view.set_script_parameter("endpoint", "/login").unwrap();
    assert_eq!(view.script_name().unwrap(), "auth.js");
    assert_eq!(view.script_parameter("endpoint"), Some("/login"));
    assert_eq!(
        view.script_parameters().collect::<Vec<_>>(),
        vec![("endpoint", "/login")]
    );
    assert_eq!(ScriptBasedAuthentication::NAME, "scriptBasedAuthentication");
}

#[test]
fn credentials_view_from_wire() {
    let mut creds: AuthenticationCredentials = decode_str(
        r#"{"type":"UsernamePasswordAuthenticationCredentials","username":"alice","password":"pw"}"#,
    )
    .unwrap();
    let view = UsernamePasswordCredentials::new(&mut creds).unwrap();
    assert_eq!(view.username().unwrap(), "alice");
    assert_eq!(view.password().unwrap(), "pw");
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn param_name() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9]{0,8}".prop_filter("reserved", |s| s != "methodName")
}

proptest! {
    #[test]
    fn programmatic_records_survive_encode_decode(
        name in "[a-zA-Z]{1,12}",
        params in proptest::collection::vec((param_name(), ".{0,12}"), 0..6),
    ) {
        let mut method = AuthenticationMethod::new(name);
        for (k, v) in &params {
            method.set_parameter(k, v).unwrap();
        }
        let decoded: AuthenticationMethod = decode_str(&encode_string(&method)).unwrap();
        prop_assert_eq!(&decoded, &method);
        prop_assert_eq!(
            decoded.parameters().keys().collect::<Vec<_>>(),
            method.parameters().keys().collect::<Vec<_>>()
        );
    }
}
