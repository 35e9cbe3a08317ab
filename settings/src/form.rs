//! Node configuration form state.
//!
//! [`ConfigForm::initialize`] is called once when the owning view is created;
//! afterwards only user edits and [`ConfigForm::restore_defaults`] change it.

use std::collections::BTreeMap;

use crate::types::{SettingsUpdateRequest, WalletConfig};
use crate::validation::{
    parse_positive_integer, validate_chain_id, validate_positive_integer, validate_url,
    FieldError, FormField, ValidationErrors,
};

/// User-edited values of the node configuration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFormValues {
    pub node_url: String,
    pub indexing_url: String,
    pub chain_id: String,
    /// `None` when the field is empty or its last input was rejected.
    pub network_fee: Option<u64>,
    pub gas_limit: Option<u64>,
}

impl ConfigFormValues {
    /// Form values as loaded from `config`, with fee defaults applied.
    pub fn from_config(config: &WalletConfig) -> Self {
        Self {
            node_url: config.node_url.clone(),
            indexing_url: config.indexing_url.clone(),
            chain_id: config.network.chain_id.clone(),
            network_fee: Some(config.network_fee()),
            gas_limit: Some(config.gas_limit()),
        }
    }

    /// Run every field rule.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let errors: Vec<FieldError> = [
            validate_url(FormField::NodeUrl, &self.node_url),
            validate_url(FormField::IndexingUrl, &self.indexing_url),
            validate_chain_id(&self.chain_id),
            validate_positive_integer(FormField::NetworkFee, self.network_fee),
            validate_positive_integer(FormField::GasLimit, self.gas_limit),
        ]
        .into_iter()
        .filter_map(|r| r.err())
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }

    /// True when all five logical fields equal the loaded configuration.
    pub fn matches(&self, config: &WalletConfig) -> bool {
        self.node_url == config.node_url
            && self.indexing_url == config.indexing_url
            && self.chain_id == config.network.chain_id
            && self.gas_limit == Some(config.gas_limit())
            && self.network_fee == Some(config.network_fee())
    }

    /// Build the update request for `wallet_id`.
    ///
    /// Call only after [`validate`](Self::validate) succeeded; missing fee
    /// values serialize as empty strings, which the service rejects.
    pub fn to_update_request(&self, wallet_id: &str) -> SettingsUpdateRequest {
        SettingsUpdateRequest {
            wallet_id: wallet_id.to_string(),
            chain_id: self.chain_id.clone(),
            node_url: self.node_url.clone(),
            indexing_url: self.indexing_url.clone(),
            network_fee: self.network_fee.map(|v| v.to_string()).unwrap_or_default(),
            gas_limit: self.gas_limit.map(|v| v.to_string()).unwrap_or_default(),
        }
    }
}

/// Form values plus the inline error currently shown for each field.
#[derive(Debug, Clone)]
pub struct ConfigForm {
    values: ConfigFormValues,
    errors: BTreeMap<FormField, FieldError>,
}

impl ConfigForm {
    pub fn initialize(config: &WalletConfig) -> Self {
        Self {
            values: ConfigFormValues::from_config(config),
            errors: BTreeMap::new(),
        }
    }

    pub fn values(&self) -> &ConfigFormValues {
        &self.values
    }

    /// Inline errors, ordered by field.
    pub fn errors(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.values()
    }

    pub fn error(&self, field: FormField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Apply raw user input to one field and re-check that field.
    ///
    /// Returns the inline error, if the input was rejected.
    pub fn set(&mut self, field: FormField, raw: &str) -> Option<&FieldError> {
        let result = match field {
            FormField::NodeUrl | FormField::IndexingUrl => {
                let value = raw.trim().to_string();
                let checked = validate_url(field, &value);
                if field == FormField::NodeUrl {
                    self.values.node_url = value;
                } else {
                    self.values.indexing_url = value;
                }
                checked
            }
            FormField::ChainId => {
                self.values.chain_id = raw.trim().to_string();
                validate_chain_id(&self.values.chain_id)
            }
            FormField::NetworkFee | FormField::GasLimit => {
                let parsed = parse_positive_integer(field, raw);
                let slot = if field == FormField::NetworkFee {
                    &mut self.values.network_fee
                } else {
                    &mut self.values.gas_limit
                };
                *slot = parsed.as_ref().ok().copied();
                parsed.map(|_| ())
            }
        };

        match result {
            Ok(()) => {
                self.errors.remove(&field);
                None
            }
            Err(e) => {
                self.errors.insert(field, e);
                self.errors.get(&field)
            }
        }
    }

    /// Submission is reachable only when every field is valid.
    pub fn can_submit(&self) -> bool {
        self.errors.is_empty() && self.values.validate().is_ok()
    }

    /// Reset the node URL, indexing URL and chain ID to the loaded values.
    ///
    /// Fee fields keep whatever the user entered.
    pub fn restore_defaults(&mut self, config: &WalletConfig) {
        self.values.node_url = config.node_url.clone();
        self.values.indexing_url = config.indexing_url.clone();
        self.values.chain_id = config.network.chain_id.clone();
        for field in [FormField::NodeUrl, FormField::IndexingUrl, FormField::ChainId] {
            self.errors.remove(&field);
        }
    }
}
