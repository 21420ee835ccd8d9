//! Page-level settings for blur validation
//!
//! The field names and marker class come from the page template, so they
//! can be overridden. The patterns themselves are fixed per field kind.

use serde::{Deserialize, Serialize};

use crate::field::FieldKind;
use crate::marker::DEFAULT_MARKER_CLASS;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("marker class must not be empty")]
    EmptyMarkerClass,

    #[error("marker class '{0}' must be a single token without whitespace")]
    MarkerClassWhitespace(String),

    #[error("field name for {0} must not be empty")]
    EmptyFieldName(FieldKind),

    #[error("field name '{name}' for {kind} contains a quote, backslash or control character")]
    UnquotableFieldName { kind: FieldKind, name: String },
}

/// Settings supplied by the page (camelCase keys from JavaScript)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidatorConfig {
    pub marker_class: String,
    pub index_number_field: String,
    pub phone_field: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            marker_class: DEFAULT_MARKER_CLASS.to_string(),
            index_number_field: FieldKind::IndexNumber.name().to_string(),
            phone_field: FieldKind::Phone.name().to_string(),
        }
    }
}

impl ValidatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.check() {
            Ok(()) => {
                tracing::debug!(
                    marker_class = %self.marker_class,
                    index_number_field = %self.index_number_field,
                    phone_field = %self.phone_field,
                    "validator config accepted"
                );
                Ok(())
            }
            Err(err) => {
                tracing::debug!(error = %err, "validator config rejected");
                Err(err)
            }
        }
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.marker_class.is_empty() {
            return Err(ConfigError::EmptyMarkerClass);
        }
        if self.marker_class.chars().any(char::is_whitespace) {
            return Err(ConfigError::MarkerClassWhitespace(self.marker_class.clone()));
        }

        for kind in FieldKind::ALL {
            let name = self.field_name(kind);
            if name.is_empty() {
                return Err(ConfigError::EmptyFieldName(kind));
            }
            if name.contains(|c: char| c == '"' || c == '\\' || c.is_control()) {
                return Err(ConfigError::UnquotableFieldName {
                    kind,
                    name: name.to_string(),
                });
            }
        }

        Ok(())
    }

    /// `name` attribute the page uses for `kind`.
    pub fn field_name(&self, kind: FieldKind) -> &str {
        match kind {
            FieldKind::IndexNumber => &self.index_number_field,
            FieldKind::Phone => &self.phone_field,
        }
    }

    /// CSS selector matching every input of `kind`.
    pub fn selector(&self, kind: FieldKind) -> String {
        format!("input[name=\"{}\"]", self.field_name(kind))
    }

    /// One `(kind, selector)` pair per binding pass, in binding order.
    pub fn bindings(&self) -> impl Iterator<Item = (FieldKind, String)> + '_ {
        FieldKind::ALL
            .into_iter()
            .map(move |kind| {
                let selector = self.selector(kind);
                tracing::debug!(%kind, %selector, "binding pass");
                (kind, selector)
            })
    }
}
