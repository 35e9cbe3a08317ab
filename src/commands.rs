//! Subcommand handlers.

use std::io;

use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use wallet_settings::config::CLEAR_CONFIRMATION_TOKEN;
use wallet_settings::{
    ClearStorageFlow, ConfigForm, ConfigUpdateFlow, FormField, LocalStorage, Session, SessionStore,
    SettingsConfig, SettingsError, UpdateOutcome, ValidationErrors, WalletService,
};

use crate::app::{self, Backend, Restart};
use crate::cli::{CreateArgs, SetArgs, ShowArgs};
use crate::error::CliError;
use crate::output;
use crate::prompt::{is_yes, parse_edit_command, EditCommand, LineReader, EDIT_HELP};

pub fn show(sessions: &SessionStore, args: &ShowArgs) -> Result<(), CliError> {
    let session = sessions.require()?;
    output::write_config(&session, args.json, &mut io::stdout().lock())
}

pub async fn set(flow: &ConfigUpdateFlow<Backend>, args: SetArgs) -> Result<(), CliError> {
    let session = flow.sessions().require()?;
    let current = &session.wallet.config;
    let mut form = ConfigForm::initialize(current);

    let edits = [
        (FormField::NodeUrl, args.node_url),
        (FormField::IndexingUrl, args.indexing_url),
        (FormField::ChainId, args.chain_id),
        (FormField::NetworkFee, args.network_fee),
        (FormField::GasLimit, args.gas_limit),
    ];
    for (field, value) in edits {
        if let Some(value) = value {
            form.set(field, &value);
        }
    }

    if !form.can_submit() {
        output::write_form(&form, &mut io::stderr().lock())?;
        let errors = ValidationErrors(form.errors().cloned().collect());
        return Err(SettingsError::Validation(errors).into());
    }

    report(flow.submit(current, form.values(), &session.wallet.identifier).await?);
    Ok(())
}

pub async fn edit(
    flow: &ConfigUpdateFlow<Backend>,
    cancel: CancellationToken,
) -> Result<(), CliError> {
    let session = flow.sessions().require()?;
    let wallet_id = session.wallet.identifier.clone();
    let mut current = session.wallet.config.clone();
    let mut form = ConfigForm::initialize(&current);
    let mut reader = LineReader::stdin(cancel);

    output::write_form(&form, &mut io::stdout().lock())?;
    println!("{EDIT_HELP}");

    while let Some(line) = reader.prompt("settings> ").await? {
        let command = match parse_edit_command(&line) {
            Ok(c) => c,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        match command {
            EditCommand::Set(field, value) => {
                if let Some(err) = form.set(field, &value) {
                    println!("! {}", err.message);
                }
            }
            EditCommand::Restore => {
                form.restore_defaults(&current);
                output::write_form(&form, &mut io::stdout().lock())?;
            }
            EditCommand::Show => output::write_form(&form, &mut io::stdout().lock())?,
            EditCommand::Save => {
                if !form.can_submit() {
                    output::write_form(&form, &mut io::stdout().lock())?;
                    continue;
                }
                match flow.submit(&current, form.values(), &wallet_id).await {
                    Ok(outcome) => {
                        if let UpdateOutcome::Applied(session) = &outcome {
                            current = session.wallet.config.clone();
                        }
                        report(outcome);
                    }
                    Err(e) => {
                        error!(error = %e, "saving node config failed");
                        println!("! {e}");
                    }
                }
            }
            EditCommand::Quit => break,
            EditCommand::Help => println!("{EDIT_HELP}"),
            EditCommand::Empty => {}
        }
    }
    Ok(())
}

fn report(outcome: UpdateOutcome) {
    match outcome {
        UpdateOutcome::Unchanged => println!("no changes"),
        UpdateOutcome::Applied(session) => println!("saved (session {})", session.id),
    }
}

const ACKNOWLEDGE_PROMPT: &str = "I understand that the only way to regain access is by \
    restoring the wallet mnemonic phrase [y/N] ";

/// Wipe the local database under the data dir without reading it. A remote
/// service keeps its own data.
pub async fn clear_storage(
    config: &SettingsConfig,
    cancel: CancellationToken,
) -> Result<(), CliError> {
    let storage = app::local_storage(config);
    run_clear_storage(&storage, SessionStore::new(), cancel).await
}

async fn run_clear_storage<L: LocalStorage>(
    storage: &L,
    sessions: SessionStore,
    cancel: CancellationToken,
) -> Result<(), CliError> {
    let reloader = Restart { sessions };
    let mut reader = LineReader::stdin(cancel);
    let mut flow = ClearStorageFlow::new();
    flow.open()?;

    println!("Confirm Clear Storage");
    println!(
        "Once you clear the storage, you will lose access to all your wallets. The only way \
         to regain wallet access is by restoring the wallet mnemonic phrase."
    );
    println!(
        "If you have not backed up your wallet mnemonic phrase, you will lose your funds forever."
    );

    let answer = reader.prompt(ACKNOWLEDGE_PROMPT).await?;
    flow.set_acknowledged(answer.as_deref().is_some_and(is_yes))?;
    if !flow.can_confirm_warning() {
        flow.cancel();
        println!("cancelled");
        return Ok(());
    }
    flow.confirm_warning()?;

    loop {
        let prompt = format!("Please enter {CLEAR_CONFIRMATION_TOKEN}: ");
        let Some(typed) = reader.prompt(&prompt).await? else {
            flow.cancel();
            println!("cancelled");
            return Ok(());
        };
        flow.set_typed(&typed)?;
        match flow.execute(storage, &reloader).await {
            Ok(()) => break,
            Err(e @ SettingsError::ConfirmationMismatch { .. }) => println!("! {e}"),
            Err(e) => return Err(e.into()),
        }
    }

    println!("storage cleared");
    Ok(())
}

pub async fn create(
    backend: &Backend,
    sessions: &SessionStore,
    args: CreateArgs,
) -> Result<(), CliError> {
    let Backend::Local(local) = backend else {
        return Err(CliError::Unsupported(
            "wallets can only be created in the local database",
        ));
    };
    let wallet = local.create_wallet(&args.name, &args.address).await?;

    let session = Session::new(wallet);
    backend.set_current_session(&session).await?;
    let session = sessions.set(session);
    info!(wallet = %session.wallet.identifier, "wallet is now active");
    output::write_config(&session, false, &mut io::stdout().lock())
}
