//! Codec Tests
//!
//! Tests for record decoding, JSON encoding and the error status mapping.

use axum::http::StatusCode;
use recordcat::protocol::{
    decode_record, encode_json, message_for, status_for, ErrorBody, MAX_PAYLOAD_SIZE,
};
use recordcat::{CatalogError, Record};

// =============================================================================
// Decoding Tests
// =============================================================================

#[test]
fn test_decode_missing_id_is_empty() {
    let record = decode_record(br#"{"title":"No ID Song","artist":"Unknown","price":0.99}"#).unwrap();

    assert_eq!(record.id, "");
    assert_eq!(record.title, "No ID Song");
}

#[test]
fn test_decode_empty_object() {
    let record = decode_record(b"{}").unwrap();

    assert_eq!(record, Record::default());
}

#[test]
fn test_decode_ignores_unknown_fields() {
    let record = decode_record(br#"{"id":"9","genre":"pop"}"#).unwrap();

    assert_eq!(record.id, "9");
}

#[test]
fn test_decode_rejects_non_objects() {
    let bodies: [&[u8]; 8] = [
        b"",
        b"\"1\"",
        b"42",
        b"true",
        b"[]",
        b"[\"9\",\"t\",\"a\",1.0]",
        b"{\"id\":",
        b"not json",
    ];
    for body in bodies {
        assert!(
            matches!(decode_record(body), Err(CatalogError::MalformedPayload(_))),
            "expected rejection for {:?}",
            String::from_utf8_lossy(body)
        );
    }
}

#[test]
fn test_decode_null_is_empty_record() {
    let record = decode_record(b"null").unwrap();

    assert_eq!(record, Record::default());
}

#[test]
fn test_decode_keys_ignore_case() {
    let record =
        decode_record(br#"{"ID":"7","Title":"Loud","ARTIST":"Someone","Price":2.0}"#).unwrap();

    assert_eq!(record, Record::new("7", "Loud", "Someone", 2.0));
}

#[test]
fn test_decode_exact_key_wins_over_folded() {
    let record = decode_record(br#"{"Id":"folded","id":"exact"}"#).unwrap();

    assert_eq!(record.id, "exact");
}

#[test]
fn test_decode_rejects_wrong_field_types() {
    assert!(decode_record(br#"{"id":1}"#).is_err());
    assert!(decode_record(br#"{"id":"1","price":"cheap"}"#).is_err());
}

#[test]
fn test_decode_rejects_oversized_payload() {
    let body = vec![b' '; MAX_PAYLOAD_SIZE + 1];

    assert!(matches!(decode_record(&body), Err(CatalogError::MalformedPayload(_))));
}

// =============================================================================
// Encoding Tests
// =============================================================================

#[test]
fn test_encode_record_fields() {
    let encoded = encode_json(&Record::new("1", "Shape of You", "Ed Sheeran", 1.29)).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&encoded).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "id": "1",
            "title": "Shape of You",
            "artist": "Ed Sheeran",
            "price": 1.29
        })
    );
}

#[test]
fn test_encode_error_body() {
    let encoded = encode_json(&ErrorBody::new("song not found")).unwrap();
    let decoded: ErrorBody = serde_json::from_slice(&encoded).unwrap();

    assert_eq!(decoded.message, "song not found");
}

// =============================================================================
// Status Mapping Tests
// =============================================================================

#[test]
fn test_status_and_message_mapping() {
    let cases = [
        (CatalogError::EmptyId, StatusCode::BAD_REQUEST, "id is required"),
        (
            CatalogError::MalformedPayload("eof".into()),
            StatusCode::BAD_REQUEST,
            "invalid request body",
        ),
        (CatalogError::NotFound("9".into()), StatusCode::NOT_FOUND, "song not found"),
        (
            CatalogError::AlreadyExists("1".into()),
            StatusCode::CONFLICT,
            "song with this id already exists",
        ),
        (
            CatalogError::Serialization("nan".into()),
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal server error",
        ),
    ];

    for (err, status, message) in cases {
        assert_eq!(status_for(&err), status, "status for {:?}", err);
        assert_eq!(message_for(&err), message, "message for {:?}", err);
    }
}
