//! Tagged-pair container codec and the spider scope split.

use scanwire::{
    decode_str, decode_tagged_pair, encode_string, encode_tagged_pair, ScopeSplit, UrlRecord,
    WireCodec, WireError,
};
use serde_json::json;

fn url(u: &str) -> UrlRecord {
    UrlRecord {
        url: u.into(),
        method: "GET".into(),
        message_id: Some(1),
        status_code: Some(200),
        status_reason: Some("OK".into()),
        processed: Some(true),
        reason_not_processed: Some(String::new()),
    }
}

#[test]
fn scope_split_decodes_both_sections() {
    let wire = json!([
        {"urlsInScope": [{
            "processed": "true", "statusReason": "OK", "method": "GET",
            "reasonNotProcessed": "", "messageId": "1", "url": "http://a/", "statusCode": "200"
        }]},
        {"urlsOutOfScope": ["http://b/", "http://c/"]}
    ]);
    let split = ScopeSplit::from_wire(&wire).unwrap();
    assert_eq!(split.in_scope, vec![url("http://a/")]);
    assert_eq!(split.out_of_scope, vec!["http://b/".to_string(), "http://c/".to_string()]);
}

#[test]
fn sections_are_matched_by_name() {
    let wire = json!([{"urlsOutOfScope": ["http://b/"]}, {"urlsInScope": []}]);
    let split = ScopeSplit::from_wire(&wire).unwrap();
    assert!(split.in_scope.is_empty());
    assert_eq!(split.out_of_scope, vec!["http://b/".to_string()]);
    // Re-encoding restores the canonical section order.
    assert_eq!(
        encode_string(&split),
        r#"[{"urlsInScope":[]},{"urlsOutOfScope":["http://b/"]}]"#
    );
}

#[test]
fn empty_in_scope_populated_out_of_scope() {
    let text = r#"[{"urlsInScope":[]},{"urlsOutOfScope":["http://x/"]}]"#;
    let split: ScopeSplit = decode_str(text).unwrap();
    assert!(split.in_scope.is_empty());
    assert_eq!(split.out_of_scope.len(), 1);
    assert_eq!(encode_string(&split), text);
}

#[test]
fn built_in_code_survives() {
    let split = ScopeSplit {
        in_scope: vec![url("http://a/"), url("http://a/b")],
        out_of_scope: vec!["http://elsewhere/".into()],
    };
    let decoded: ScopeSplit = decode_str(&encode_string(&split)).unwrap();
    assert_eq!(decoded, split);
}

#[test]
fn item_type_errors_propagate() {
    let wire = json!([{"urlsInScope": []}, {"urlsOutOfScope": [42]}]);
    assert!(matches!(
        ScopeSplit::from_wire(&wire),
        Err(WireError::Malformed(_))
    ));
}

#[test]
fn generic_pair_with_other_names() {
    let value = encode_tagged_pair("left", &["a".to_string()], "right", &Vec::<String>::new());
    assert_eq!(value, json!([{"left": ["a"]}, {"right": []}]));
    let (left, right): (Vec<String>, Vec<String>) =
        decode_tagged_pair(&value, "left", "right").unwrap();
    assert_eq!(left, vec!["a".to_string()]);
    assert!(right.is_empty());
    assert!(decode_tagged_pair::<String, String>(&value, "left", "middle").is_err());
}
