pub mod config;
pub mod error;
pub mod flow;
pub mod form;
pub mod service;
pub mod session;
pub mod storage;
pub mod types;
pub mod validation;

// ---- Top-level re-exports for ergonomic usage ----

// Configuration + errors
pub use config::SettingsConfig;
pub use error::{ApplyStage, Result, SettingsError};

// Data model
pub use types::{FeeConfig, NetworkConfig, Session, SettingsUpdateRequest, WalletConfig, WalletRecord};

// Form state + validation
pub use form::{ConfigForm, ConfigFormValues};
pub use validation::{FieldError, FormField, ValidationErrors};

// Workflows
pub use flow::{AppReloader, ClearStorageFlow, ClearStorageState, ConfigUpdateFlow, UpdateOutcome};

// Collaborators
pub use service::{LocalWalletService, RemoteWalletService, WalletService};
pub use session::SessionStore;
pub use storage::{LocalStorage, WalletDatabase};
