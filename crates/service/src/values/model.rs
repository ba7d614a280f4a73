use serde::{Deserialize, Serialize};

/// One reference value entry.
///
/// `id` is supplied by the caller and never checked for format or
/// uniqueness. Missing fields decode to their zero value.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReferenceValue {
    pub id: String,
    pub name: String,
    pub reference: f64,
    pub description: String,
    pub image_url: String,
}

/// The mutable part of a record, as accepted by an update. An `id` in the
/// payload is ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReferenceValueFields {
    pub name: String,
    pub reference: f64,
    pub description: String,
    pub image_url: String,
}

impl ReferenceValue {
    /// Overwrite every field except `id`.
    pub fn apply(&mut self, fields: ReferenceValueFields) {
        self.name = fields.name;
        self.reference = fields.reference;
        self.description = fields.description;
        self.image_url = fields.image_url;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_snake_case_keys() {
        let v: ReferenceValue = serde_json::from_str(
            r#"{"id":"x1","name":"Gold","reference":1900.5,"description":"d","image_url":"u"}"#,
        )
        .unwrap();
        assert_eq!(v.id, "x1");
        assert_eq!(v.reference, 1900.5);
        assert_eq!(v.image_url, "u");
    }

    #[test]
    fn missing_fields_default_and_unknown_fields_are_ignored() {
        let v: ReferenceValue = serde_json::from_str(r#"{"name":"Silver","extra":true}"#).unwrap();
        assert_eq!(v.id, "");
        assert_eq!(v.name, "Silver");
        assert_eq!(v.reference, 0.0);
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(serde_json::from_str::<ReferenceValue>(r#"{"reference":"abc"}"#).is_err());
        assert!(serde_json::from_str::<ReferenceValueFields>(r#"[1,2]"#).is_err());
    }

    #[test]
    fn apply_keeps_id() {
        let mut v = ReferenceValue { id: "x1".into(), name: "Gold".into(), ..Default::default() };
        let fields: ReferenceValueFields = serde_json::from_str(
            r#"{"id":"other","name":"Gold2","reference":1950.0,"description":"d2","image_url":"u2"}"#,
        )
        .unwrap();
        v.apply(fields);
        assert_eq!(v.id, "x1");
        assert_eq!(v.name, "Gold2");
        assert_eq!(v.reference, 1950.0);
        assert_eq!(v.description, "d2");
        assert_eq!(v.image_url, "u2");
    }
}
