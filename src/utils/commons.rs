use chrono::{Local, NaiveDate};
use diesel::PgConnection;
use serde::de::{self, Deserializer};
use serde::Deserialize;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub type DbConn<'db> = &'db mut PgConnection;

/// Current calendar date in the server's local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|e| anyhow::anyhow!("invalid date '{}', expected YYYY-MM-DD: {}", value, e))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

impl NumberOrString {
    fn into_amount<E: de::Error>(self) -> Result<f64, E> {
        match self {
            NumberOrString::Number(n) => Ok(n),
            NumberOrString::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("invalid amount '{}'", s))),
        }
    }
}

/// Accepts `12.5` as well as `"12.5"`.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrString::deserialize(deserializer)?.into_amount()
}

/// Same as [`deserialize_amount`] but `null` means zero. Pair with
/// `#[serde(default)]` so a missing field is zero too.
pub fn deserialize_amount_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(value) => value.into_amount(),
        None => Ok(0.0),
    }
}

/// `null` and `""` both mean no date.
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid date '{}', expected YYYY-MM-DD", raw))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Debug)]
    struct Payload {
        #[serde(deserialize_with = "deserialize_amount")]
        amount: f64,
        #[serde(default, deserialize_with = "deserialize_amount_or_zero")]
        fee: f64,
        #[serde(default, deserialize_with = "deserialize_optional_date")]
        due: Option<NaiveDate>,
    }

    #[test]
    fn test_amount_accepts_numbers_and_numeric_strings() {
        let p: Payload = serde_json::from_str(r#"{"amount": 150}"#).unwrap();
        assert_eq!(p.amount, 150.0);

        let p: Payload = serde_json::from_str(r#"{"amount": " 12.5 "}"#).unwrap();
        assert_eq!(p.amount, 12.5);
    }

    #[test]
    fn test_amount_rejects_non_numeric() {
        assert!(serde_json::from_str::<Payload>(r#"{"amount": "abc"}"#).is_err());
        assert!(serde_json::from_str::<Payload>(r#"{"amount": true}"#).is_err());
        assert!(serde_json::from_str::<Payload>(r#"{}"#).is_err());
    }

    #[test]
    fn test_amount_or_zero_defaults() {
        let p: Payload = serde_json::from_str(r#"{"amount": 1}"#).unwrap();
        assert_eq!(p.fee, 0.0);

        let p: Payload = serde_json::from_str(r#"{"amount": 1, "fee": null}"#).unwrap();
        assert_eq!(p.fee, 0.0);

        let p: Payload = serde_json::from_str(r#"{"amount": 1, "fee": "80"}"#).unwrap();
        assert_eq!(p.fee, 80.0);
    }

    #[test]
    fn test_optional_date() {
        let p: Payload = serde_json::from_str(r#"{"amount": 1}"#).unwrap();
        assert_eq!(p.due, None);

        let p: Payload = serde_json::from_str(r#"{"amount": 1, "due": ""}"#).unwrap();
        assert_eq!(p.due, None);

        let p: Payload = serde_json::from_str(r#"{"amount": 1, "due": null}"#).unwrap();
        assert_eq!(p.due, None);

        let p: Payload = serde_json::from_str(r#"{"amount": 1, "due": "2025-02-01"}"#).unwrap();
        assert_eq!(p.due, NaiveDate::from_ymd_opt(2025, 2, 1));

        assert!(serde_json::from_str::<Payload>(r#"{"amount": 1, "due": "01/02/2025"}"#).is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-10").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
        );
        assert!(parse_date("2024-13-01").is_err());
    }
}
