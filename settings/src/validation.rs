//! Per-field rules for the node configuration form.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

/// Optional scheme, dotted host, then optional path, fragment and query.
/// Unanchored: any input containing a dotted host passes.
static URL_OR_HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(https?://)?[\w~-]+(\.[\w~-]+)+(/[\w~-]*)*(#[\w-]*)?(\?.*)?")
        .expect("url pattern is valid")
});

/// Editable fields of the node configuration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    NodeUrl,
    IndexingUrl,
    ChainId,
    NetworkFee,
    GasLimit,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::NodeUrl,
        FormField::IndexingUrl,
        FormField::ChainId,
        FormField::NetworkFee,
        FormField::GasLimit,
    ];

    /// Wire/JSON name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::NodeUrl => "nodeUrl",
            FormField::IndexingUrl => "indexingUrl",
            FormField::ChainId => "chainId",
            FormField::NetworkFee => "networkFee",
            FormField::GasLimit => "gasLimit",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::NodeUrl => "Node URL",
            FormField::IndexingUrl => "Chain Indexing URL",
            FormField::ChainId => "Chain ID",
            FormField::NetworkFee => "Network Fee",
            FormField::GasLimit => "Gas Limit",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = String;

    /// Accepts the camelCase name or its kebab-case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nodeUrl" | "node-url" => Ok(FormField::NodeUrl),
            "indexingUrl" | "indexing-url" => Ok(FormField::IndexingUrl),
            "chainId" | "chain-id" => Ok(FormField::ChainId),
            "networkFee" | "network-fee" => Ok(FormField::NetworkFee),
            "gasLimit" | "gas-limit" => Ok(FormField::GasLimit),
            other => Err(format!("unknown field: {other}")),
        }
    }
}

/// Inline error for a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: FormField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    fn required(field: FormField) -> Self {
        Self::new(field, format!("{} is required", field.label()))
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All field errors found in one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Error recorded for `field`, if any.
    pub fn get(&self, field: FormField) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Check a node or indexing URL.
pub fn validate_url(field: FormField, value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::required(field));
    }
    if !URL_OR_HOST.is_match(value) {
        let what = match field {
            FormField::IndexingUrl => "indexing url",
            _ => "node url",
        };
        return Err(FieldError::new(field, format!("Please enter a valid {what}")));
    }
    Ok(())
}

pub fn validate_chain_id(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::required(FormField::ChainId));
    }
    Ok(())
}

/// Parse raw text for a fee field: an integer of at least 1.
pub fn parse_positive_integer(field: FormField, raw: &str) -> Result<u64, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldError::required(field));
    }
    let value: i128 = raw
        .parse()
        .map_err(|_| FieldError::new(field, format!("{} must be a whole number", field.label())))?;
    if value < 1 {
        return Err(FieldError::new(
            field,
            format!("{} must be at least 1", field.label()),
        ));
    }
    u64::try_from(value).map_err(|_| FieldError::new(field, format!("{} is too large", field.label())))
}

/// Check an already-parsed fee field.
pub fn validate_positive_integer(field: FormField, value: Option<u64>) -> Result<(), FieldError> {
    match value {
        None => Err(FieldError::required(field)),
        Some(0) => Err(FieldError::new(
            field,
            format!("{} must be at least 1", field.label()),
        )),
        Some(_) => Ok(()),
    }
}
