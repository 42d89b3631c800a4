use crate::models::CollectionSchema;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

static NON_COMMON: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("valid regex"));

/// Lowercase form with everything but letters and digits removed.
pub fn to_common(value: &str) -> String {
    NON_COMMON.replace_all(&value.to_lowercase(), "").into_owned()
}

/// A note under construction, bound to the schema of the collection it will
/// be added to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftNote {
    #[serde(skip)]
    schema: CollectionSchema,
    pub title: Option<String>,
    pub body: Option<String>,
    pub date: Option<String>,
    pub fields: BTreeMap<String, String>,
}

impl DraftNote {
    pub fn new(schema: CollectionSchema) -> Self {
        Self {
            schema,
            title: None,
            body: None,
            date: None,
            fields: BTreeMap::new(),
        }
    }

    pub fn schema(&self) -> &CollectionSchema {
        &self.schema
    }

    pub fn set_title(&mut self, value: &str) {
        self.title = Some(value.to_string());
    }

    pub fn set_body(&mut self, value: &str) {
        self.body = Some(value.to_string());
    }

    pub fn set_date(&mut self, value: &str) {
        self.date = Some(value.to_string());
    }

    /// Stores the value under the schema's own spelling of the label.
    /// Returns false when the collection declares no such field.
    pub fn set_field(&mut self, label: &str, value: &str) -> bool {
        let wanted = to_common(label);
        if wanted.is_empty() {
            return false;
        }
        let Some(declared) = self
            .schema
            .field_labels
            .iter()
            .find(|candidate| to_common(candidate) == wanted)
        else {
            return false;
        };
        self.fields.insert(declared.clone(), value.to_string());
        true
    }
}
