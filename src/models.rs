use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::SUCCESS_CODE;
use crate::error::ForecastError;

// ============================================================================
// KMA Village Forecast API Models
// ============================================================================

/// `response.header` of every KMA reply
#[derive(Debug, Deserialize)]
pub struct KmaHeader {
    #[serde(rename = "resultCode")]
    pub result_code: Option<String>,
    #[serde(rename = "resultMsg")]
    pub result_msg: Option<String>,
}

/// One record of `response.body.items.item`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ForecastItem {
    #[serde(rename = "fcstDate")]
    pub fcst_date: String,
    #[serde(rename = "fcstTime")]
    pub fcst_time: String,
    pub category: String,
    #[serde(rename = "fcstValue")]
    pub fcst_value: String,
}

/// Extracts the forecast records from a raw API reply.
///
/// A missing `body`, `items` or `item` is an empty record list: the API
/// leaves the body out when it has nothing for the requested grid point.
pub fn parse_forecast_items(mut value: Value) -> Result<Vec<ForecastItem>, ForecastError> {
    let response = value
        .get_mut("response")
        .filter(|r| r.is_object())
        .ok_or_else(|| ForecastError::MalformedResponse("missing `response`".to_string()))?;

    let header = response
        .get_mut("header")
        .map(Value::take)
        .ok_or_else(|| ForecastError::MalformedResponse("missing `response.header`".to_string()))?;
    let header: KmaHeader = serde_json::from_value(header)?;

    let code = header.result_code.ok_or_else(|| {
        ForecastError::MalformedResponse("missing `response.header.resultCode`".to_string())
    })?;
    if code != SUCCESS_CODE {
        return Err(ForecastError::Upstream {
            code,
            message: header
                .result_msg
                .unwrap_or_else(|| "unknown error".to_string()),
        });
    }

    match response.pointer_mut("/body/items/item").map(Value::take) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(items) => Ok(serde_json::from_value(items)?),
    }
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GridRequest {
    /// KMA grid X coordinate (e.g. 60 for Jung-gu, Seoul)
    pub nx: i32,
    /// KMA grid Y coordinate (e.g. 127 for Jung-gu, Seoul)
    pub ny: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(date: &str, time: &str, category: &str, value: &str) -> Value {
        json!({
            "baseDate": "20240510",
            "baseTime": "0500",
            "category": category,
            "fcstDate": date,
            "fcstTime": time,
            "fcstValue": value,
            "nx": 60,
            "ny": 127
        })
    }

    #[test]
    fn test_parses_successful_reply() {
        let reply = json!({
            "response": {
                "header": { "resultCode": "00", "resultMsg": "NORMAL_SERVICE" },
                "body": {
                    "dataType": "JSON",
                    "items": { "item": [
                        item("20240510", "0600", "TMP", "14"),
                        item("20240510", "0600", "SKY", "1"),
                    ]},
                    "pageNo": 1,
                    "numOfRows": 1000,
                    "totalCount": 2
                }
            }
        });

        let items = parse_forecast_items(reply).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0],
            ForecastItem {
                fcst_date: "20240510".to_string(),
                fcst_time: "0600".to_string(),
                category: "TMP".to_string(),
                fcst_value: "14".to_string(),
            }
        );
        assert_eq!(items[1].category, "SKY");
    }

    #[test]
    fn test_non_success_code_is_upstream_error() {
        let reply = json!({
            "response": { "header": { "resultCode": "03", "resultMsg": "NO_DATA" } }
        });

        match parse_forecast_items(reply) {
            Err(ForecastError::Upstream { code, message }) => {
                assert_eq!(code, "03");
                assert_eq!(message, "NO_DATA");
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[test]
    fn test_upstream_error_without_message() {
        let reply = json!({ "response": { "header": { "resultCode": "99" } } });
        let err = parse_forecast_items(reply).unwrap_err();
        assert_eq!(err.to_string(), "API error: unknown error (code: 99)");
    }

    #[test]
    fn test_missing_levels_are_malformed() {
        for reply in [
            json!({}),
            json!([]),
            json!({ "response": "oops" }),
            json!({ "response": {} }),
            json!({ "response": { "header": {} } }),
            json!({ "response": { "header": { "resultCode": 0 } } }),
        ] {
            let result = parse_forecast_items(reply.clone());
            assert!(
                matches!(result, Err(ForecastError::MalformedResponse(_))),
                "{} should be malformed, got {:?}",
                reply,
                result
            );
        }
    }

    #[test]
    fn test_missing_body_is_empty() {
        for reply in [
            json!({ "response": { "header": { "resultCode": "00" } } }),
            json!({ "response": { "header": { "resultCode": "00" }, "body": {} } }),
            json!({ "response": { "header": { "resultCode": "00" }, "body": { "items": {} } } }),
            json!({
                "response": {
                    "header": { "resultCode": "00" },
                    "body": { "items": { "item": null } }
                }
            }),
        ] {
            assert!(parse_forecast_items(reply).unwrap().is_empty());
        }
    }

    #[test]
    fn test_record_of_wrong_shape_is_malformed() {
        let reply = json!({
            "response": {
                "header": { "resultCode": "00" },
                "body": { "items": { "item": [{ "fcstDate": "20240510", "category": "TMP" }] } }
            }
        });
        assert!(matches!(
            parse_forecast_items(reply),
            Err(ForecastError::MalformedResponse(_))
        ));
    }
}
