use serde::Deserialize;
use serde_json::Value;

use std::fmt;

/// A decoded forecast document: beaches in source key order.
///
/// The raw document is an object keyed by beach name, with per-day objects
/// keyed by hour label plus a reserved `tides` key. Key order carries meaning
/// (it is the display order), so everything decodes into explicit sequences
/// instead of maps.
#[derive(Debug)]
pub struct ForecastDocument {
    pub beaches: Vec<Beach>,
}

#[derive(Debug)]
pub struct Beach {
    pub name: String,
    pub days: Vec<Day>,
}

#[derive(Debug)]
pub struct Day {
    pub label: String,
    pub hours: Vec<HourReading>,
    pub tides: Vec<TideEvent>,
}

#[derive(Debug)]
pub struct HourReading {
    pub label: String,
    pub readings: Vec<Reading>,
}

/// A single named forecast parameter within an hour.
#[derive(Debug)]
pub struct Reading {
    pub name: String,
    pub value: ReadingValue,
}

#[derive(Debug)]
pub enum ReadingValue {
    Number(f64),
    Text(String),
}

/// A single high/low tide occurrence.
#[derive(Debug, Deserialize)]
pub struct TideEvent {
    pub time: String,
    #[serde(rename = "type")]
    pub kind: TideKind,
    pub height: f64,
}

/// Anything other than `"high"` counts as a low tide.
#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TideKind {
    High,
    #[serde(other)]
    Low,
}

impl ForecastDocument {
    /// Decode a raw JSON value into the ordered forecast structure.
    ///
    /// Only the first top-level key is consulted; keys after it are skipped
    /// without looking at their values, so a malformed trailing beach cannot
    /// fail the document.
    pub fn decode(value: Value) -> Result<ForecastDocument, DecodeError> {
        let root = into_object(value, "document root")?;

        let mut entries = root.into_iter();
        let Some((name, days_value)) = entries.next() else {
            return Err(DecodeError::EmptyDocument);
        };
        let skipped = entries.count();
        if skipped > 0 {
            warn!("Ignoring {skipped} additional beach(es) after {name}");
        }

        let days = decode_days(&name, days_value)?;
        Ok(ForecastDocument {
            beaches: vec![Beach { name, days }],
        })
    }
}

fn decode_days(beach: &str, value: Value) -> Result<Vec<Day>, DecodeError> {
    let map = into_object(value, beach)?;

    let mut days = Vec::with_capacity(map.len());
    for (label, day_value) in map {
        days.push(decode_day(label, day_value)?);
    }
    Ok(days)
}

fn decode_day(label: String, value: Value) -> Result<Day, DecodeError> {
    let map = into_object(value, &label)?;

    let mut hours = Vec::new();
    let mut tides = Vec::new();
    for (key, entry) in map {
        if key == "tides" {
            tides = decode_tides(&label, entry)?;
        } else {
            hours.push(decode_hour(key, entry)?);
        }
    }
    Ok(Day {
        label,
        hours,
        tides,
    })
}

/// A `tides` value that is not an array coerces to an empty list. A malformed
/// event inside a well-formed array is a document-level failure.
fn decode_tides(day: &str, value: Value) -> Result<Vec<TideEvent>, DecodeError> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(DecodeError::from))
            .collect(),
        other => {
            warn!(
                "Ignoring tide list for day {day}: expected an array, found {}",
                json_type(&other)
            );
            Ok(Vec::new())
        }
    }
}

fn decode_hour(label: String, value: Value) -> Result<HourReading, DecodeError> {
    let map = into_object(value, &label)?;

    let readings = map
        .into_iter()
        .map(|(name, raw)| Reading {
            name,
            value: ReadingValue::from(raw),
        })
        .collect();
    Ok(HourReading { label, readings })
}

impl From<Value> for ReadingValue {
    fn from(value: Value) -> ReadingValue {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(f) => ReadingValue::Number(f),
                None => ReadingValue::Text(n.to_string()),
            },
            Value::String(s) => ReadingValue::Text(s),
            Value::Bool(b) => ReadingValue::Text(b.to_string()),
            Value::Null => ReadingValue::Text("null".to_string()),
            other => ReadingValue::Text(other.to_string()),
        }
    }
}

fn into_object(value: Value, path: &str) -> Result<serde_json::Map<String, Value>, DecodeError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(DecodeError::UnexpectedShape {
            path: path.to_string(),
            found: json_type(&other),
        }),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[derive(Debug)]
pub enum DecodeError {
    EmptyDocument,
    UnexpectedShape { path: String, found: &'static str },
    BadTideEvent { err: serde_json::Error },
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::BadTideEvent { err }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::EmptyDocument => write!(f, "document contains no beaches"),
            DecodeError::UnexpectedShape { path, found } => {
                write!(f, "expected an object at {path}, found {found}")
            }
            DecodeError::BadTideEvent { err } => write!(f, "malformed tide event: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn decode(value: Value) -> ForecastDocument {
        ForecastDocument::decode(value).expect("document should decode")
    }

    #[test]
    fn decodes_days_hours_and_parameters_in_source_order() {
        let doc = decode(json!({
            "Copacabana": {
                "2024-01-02": {
                    "06:00": {"waveHeight": 1.2, "windSpeed": 4.0},
                    "12:00": {"waveHeight": 0.8}
                },
                "2024-01-01": {
                    "18:00": {"waveHeight": 1.5}
                }
            }
        }));

        assert_eq!(doc.beaches.len(), 1);
        let beach = &doc.beaches[0];
        assert_eq!(beach.name, "Copacabana");
        let day_labels: Vec<&str> = beach.days.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(day_labels, vec!["2024-01-02", "2024-01-01"]);
        let hour_labels: Vec<&str> = beach.days[0]
            .hours
            .iter()
            .map(|h| h.label.as_str())
            .collect();
        assert_eq!(hour_labels, vec!["06:00", "12:00"]);
        let param_names: Vec<&str> = beach.days[0].hours[0]
            .readings
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(param_names, vec!["waveHeight", "windSpeed"]);
    }

    #[test]
    fn decodes_only_the_first_beach() {
        let doc = decode(json!({
            "Ipanema": {},
            "Leblon": {},
        }));

        let names: Vec<&str> = doc.beaches.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Ipanema"]);
    }

    #[test]
    fn malformed_trailing_beach_is_ignored() {
        let doc = decode(json!({
            "Copacabana": {"2024-01-01": {"06:00": {"temp": 23.0}}},
            "Leblon": 42
        }));

        assert_eq!(doc.beaches[0].name, "Copacabana");
        assert_eq!(doc.beaches[0].days.len(), 1);
    }

    #[test]
    fn decodes_tide_events() {
        let doc = decode(json!({
            "Copacabana": {
                "2024-01-01": {
                    "tides": [
                        {"time": "05:00", "type": "high", "height": 1.234},
                        {"time": "11:00", "type": "low", "height": 0.5}
                    ]
                }
            }
        }));

        let tides = &doc.beaches[0].days[0].tides;
        assert_eq!(tides.len(), 2);
        assert_eq!(tides[0].time, "05:00");
        assert_eq!(tides[0].kind, TideKind::High);
        assert_eq!(tides[1].kind, TideKind::Low);
    }

    #[test]
    fn unknown_tide_type_counts_as_low() {
        let doc = decode(json!({
            "Copacabana": {
                "2024-01-01": {
                    "tides": [{"time": "05:00", "type": "slack", "height": 0.1}]
                }
            }
        }));

        assert_eq!(doc.beaches[0].days[0].tides[0].kind, TideKind::Low);
    }

    #[test]
    fn non_array_tides_coerce_to_empty() {
        let doc = decode(json!({
            "Copacabana": {
                "2024-01-01": {
                    "06:00": {"temp": 23.0},
                    "tides": {"time": "05:00"}
                }
            }
        }));

        let day = &doc.beaches[0].days[0];
        assert!(day.tides.is_empty());
        assert_eq!(day.hours.len(), 1);
    }

    #[test]
    fn missing_tides_key_means_no_tides() {
        let doc = decode(json!({
            "Copacabana": {"2024-01-01": {"06:00": {"temp": 23.0}}}
        }));

        assert!(doc.beaches[0].days[0].tides.is_empty());
    }

    #[test]
    fn malformed_tide_event_fails_the_document() {
        let result = ForecastDocument::decode(json!({
            "Copacabana": {
                "2024-01-01": {
                    "tides": [{"time": "05:00", "type": "high"}]
                }
            }
        }));

        assert!(matches!(result, Err(DecodeError::BadTideEvent { .. })));
    }

    #[test]
    fn reading_values_keep_numbers_and_coerce_the_rest_to_text() {
        let doc = decode(json!({
            "Copacabana": {
                "2024-01-01": {
                    "06:00": {
                        "temp": 23.456,
                        "condition": "sunny",
                        "offshore": true,
                        "swell": null
                    }
                }
            }
        }));

        let readings = &doc.beaches[0].days[0].hours[0].readings;
        let rendered: Vec<String> = readings
            .iter()
            .map(|r| match &r.value {
                ReadingValue::Number(n) => format!("{}={n}", r.name),
                ReadingValue::Text(s) => format!("{}={s}", r.name),
            })
            .collect();
        assert_eq!(
            rendered,
            vec![
                "temp=23.456",
                "condition=sunny",
                "offshore=true",
                "swell=null"
            ]
        );
    }

    #[test]
    fn empty_document_is_an_error() {
        let result = ForecastDocument::decode(json!({}));
        assert!(matches!(result, Err(DecodeError::EmptyDocument)));
    }

    #[test]
    fn non_object_root_is_an_error() {
        let result = ForecastDocument::decode(json!([1, 2, 3]));
        assert!(matches!(
            result,
            Err(DecodeError::UnexpectedShape { found: "an array", .. })
        ));
    }

    #[test]
    fn non_object_day_is_an_error() {
        let result = ForecastDocument::decode(json!({"Copacabana": {"2024-01-01": 42}}));
        assert!(matches!(
            result,
            Err(DecodeError::UnexpectedShape { found: "a number", .. })
        ));
    }
}
