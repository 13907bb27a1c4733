use std::fmt;

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Function response (the instance the output schema describes)
// ---------------------------------------------------------------------------

/// HTTP-style response returned by the GetInventory function.
///
/// Fields not named here (e.g. `unicorn_list`) are ignored when deserializing.
/// `statusCode` accepts any JSON number the schema's `integer` type accepts
/// (`200`, `200.0`) as long as it fits in an `i64`; larger values are a
/// deserialization error even though the schema admits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    #[serde(rename = "statusCode", deserialize_with = "deserialize_status_code")]
    pub status_code: i64,
    pub body: String,
}

impl Response {
    pub fn new(status_code: i64, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }

    /// `200 OK`.
    pub fn ok() -> Self {
        Self::new(200, "OK")
    }

    /// A failed call with the canonical `"Error"` body.
    pub fn error(status_code: i64) -> Self {
        Self::new(status_code, "Error")
    }

    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("Response must serialize to JSON Value")
    }
}

fn deserialize_status_code<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    struct StatusCodeVisitor;

    impl<'de> Visitor<'de> for StatusCodeVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an integral status code within i64 range")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            // 2^63 itself is out of range, hence the strict upper bound.
            if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
                Ok(v as i64)
            } else {
                Err(E::invalid_value(Unexpected::Float(v), &self))
            }
        }
    }

    deserializer.deserialize_any(StatusCodeVisitor)
}

// ---------------------------------------------------------------------------
// Validation outcome
// ---------------------------------------------------------------------------

/// Outcome of checking a single instance against a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl Verdict {
    pub fn pass() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    pub fn fail(errors: Vec<String>) -> Self {
        Self {
            valid: false,
            errors,
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::fail(vec![reason.into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_uses_camel_case_status_code() {
        let json = serde_json::to_string(&Response::ok()).unwrap();
        assert_eq!(json, r#"{"statusCode":200,"body":"OK"}"#);
    }

    #[test]
    fn response_ignores_extra_fields() {
        let resp: Response =
            serde_json::from_str(r#"{"statusCode":500,"body":"Error","unicorn_list":[]}"#).unwrap();
        assert_eq!(resp, Response::error(500));
    }

    #[test]
    fn integral_float_status_code_reads_as_integer() {
        let resp: Response = serde_json::from_str(r#"{"statusCode":200.0,"body":"OK"}"#).unwrap();
        assert_eq!(resp, Response::ok());
        assert_eq!(
            serde_json::to_string(&resp).unwrap(),
            r#"{"statusCode":200,"body":"OK"}"#
        );
    }

    #[test]
    fn fractional_or_out_of_range_status_code_is_rejected() {
        for json in [
            r#"{"statusCode":200.5,"body":"OK"}"#,
            r#"{"statusCode":18446744073709551615,"body":"OK"}"#,
            r#"{"statusCode":1e300,"body":"OK"}"#,
            r#"{"statusCode":"200","body":"OK"}"#,
        ] {
            assert!(serde_json::from_str::<Response>(json).is_err(), "{json}");
        }
    }

    #[test]
    fn passing_verdict_omits_errors() {
        assert_eq!(serde_json::to_string(&Verdict::pass()).unwrap(), r#"{"valid":true}"#);
    }
}
