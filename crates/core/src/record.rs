//! Request and record types for the extraction flow

use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};

/// Payload accepted by the extraction flow.
///
/// The field is named `pdf_text` on the wire; callers send text they have
/// already pulled out of a PDF. An empty string is valid input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionRequest {
    pub pdf_text: String,
}

/// A patient-record guess produced by the model.
///
/// All three keys are always present in serialized form; each one is null
/// when the field was not confidently identified. `dob` is MM/DD/YYYY
/// when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dob: Option<String>,
}

impl PatientRecord {
    /// The record with every field absent. Substituted when the model
    /// produced no usable structured output.
    pub fn empty() -> Self {
        Self {
            first_name: None,
            last_name: None,
            dob: None,
        }
    }

    /// True when no field was identified.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.dob.is_none()
    }

    /// Structured-output schema declared to the hosted model.
    pub fn response_schema() -> JsonValue {
        json!({
            "type": "object",
            "properties": {
                "firstName": {"type": "string", "nullable": true},
                "lastName": {"type": "string", "nullable": true},
                "dob": {"type": "string", "nullable": true},
            },
            "required": ["firstName", "lastName", "dob"],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_external_key_names() {
        let record = PatientRecord {
            first_name: Some("Jane".to_string()),
            last_name: Some("Doe".to_string()),
            dob: Some("04/12/1990".to_string()),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({"firstName": "Jane", "lastName": "Doe", "dob": "04/12/1990"})
        );
    }

    #[test]
    fn empty_record_serializes_all_fields_as_null() {
        let value = serde_json::to_value(PatientRecord::empty()).unwrap();
        assert_eq!(
            value,
            json!({"firstName": null, "lastName": null, "dob": null})
        );
    }

    #[test]
    fn record_tolerates_missing_keys_on_input() {
        // A model may omit keys instead of sending explicit nulls.
        let record: PatientRecord = serde_json::from_value(json!({"firstName": "Jane"})).unwrap();
        assert_eq!(record.first_name.as_deref(), Some("Jane"));
        assert_eq!(record.last_name, None);
        assert_eq!(record.dob, None);
    }

    #[test]
    fn is_empty_reflects_any_identified_field() {
        assert!(PatientRecord::empty().is_empty());

        let record = PatientRecord {
            first_name: None,
            last_name: None,
            dob: Some("04/12/1990".to_string()),
        };
        assert!(!record.is_empty());
    }

    #[test]
    fn request_requires_pdf_text() {
        assert!(serde_json::from_value::<ExtractionRequest>(json!({})).is_err());
        assert!(serde_json::from_value::<ExtractionRequest>(json!({"pdf_text": 42})).is_err());
        assert!(serde_json::from_value::<ExtractionRequest>(json!({"pdf_text": null})).is_err());
    }

    #[test]
    fn request_accepts_empty_text_and_ignores_unknown_keys() {
        let request: ExtractionRequest =
            serde_json::from_value(json!({"pdf_text": "", "extra": true})).unwrap();
        assert_eq!(request.pdf_text, "");
    }

    #[test]
    fn response_schema_declares_all_three_fields() {
        let schema = PatientRecord::response_schema();

        let properties = schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("firstName"));
        assert!(properties.contains_key("lastName"));
        assert!(properties.contains_key("dob"));

        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 3);
    }
}
