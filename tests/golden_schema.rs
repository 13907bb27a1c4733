//! Golden snapshot of the embedded output schema.
//!
//! The schema is shared with the workshop's test suites, so the serialized
//! form must stay byte-identical across releases.

use inventory_response_schema::{output_schema, OUTPUT_SCHEMA_JSON};
use sha2::{Digest, Sha256};

const EXPECTED_COMPACT: &str = concat!(
    r#"{"$schema":"http://json-schema.org/draft-07/schema","type":"object","#,
    r#""title":"Sample Output schema","#,
    r#""description":"The root schema comprises the entire JSON document of the Return Schema.","#,
    r#""examples":[{"statusCode":200,"body":"OK","unicorn_list":[]}],"#,
    r#""required":["statusCode","body"],"#,
    r#""properties":{"statusCode":{"type":"integer","title":"HTTP Status Code","examples":[200,401,500]},"#,
    r#""body":{"type":"string","title":"The return message","examples":["OK","Error"]}}}"#,
);

fn sha256_hex(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

#[test]
fn compact_serialization_is_stable() {
    let compact = serde_json::to_string(output_schema()).unwrap();
    assert_eq!(compact, EXPECTED_COMPACT, "output schema snapshot mismatch");
}

#[test]
fn serialization_digest_is_stable_across_reparse() {
    let first = serde_json::to_string(output_schema()).unwrap();
    let reparsed: serde_json::Value = serde_json::from_str(OUTPUT_SCHEMA_JSON).unwrap();
    let second = serde_json::to_string(&reparsed).unwrap();

    assert_eq!(sha256_hex(first.as_bytes()), sha256_hex(second.as_bytes()));
    assert_eq!(sha256_hex(first.as_bytes()), sha256_hex(EXPECTED_COMPACT.as_bytes()));
}
