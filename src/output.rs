use std::io::Write;

use serde::Serialize;
use wallet_settings::{ConfigForm, FormField, Session};

use crate::error::CliError;

/// Flat view of the active wallet's node configuration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfigView<'a> {
    wallet_id: &'a str,
    name: &'a str,
    node_url: &'a str,
    indexing_url: &'a str,
    chain_id: &'a str,
    network_fee: u64,
    gas_limit: u64,
}

/// Write the session's node configuration as TSV (`field \t value` lines)
/// or as a single JSON object.
pub fn write_config<W: Write>(
    session: &Session,
    json_mode: bool,
    writer: &mut W,
) -> Result<(), CliError> {
    let wallet = &session.wallet;
    let config = &wallet.config;
    let view = ConfigView {
        wallet_id: &wallet.identifier,
        name: &wallet.name,
        node_url: &config.node_url,
        indexing_url: &config.indexing_url,
        chain_id: &config.network.chain_id,
        network_fee: config.network_fee(),
        gas_limit: config.gas_limit(),
    };

    if json_mode {
        serde_json::to_writer(&mut *writer, &view)?;
        writer.write_all(b"\n")?;
    } else {
        writeln!(writer, "walletId\t{}", view.wallet_id)?;
        writeln!(writer, "name\t{}", view.name)?;
        writeln!(writer, "nodeUrl\t{}", view.node_url)?;
        writeln!(writer, "indexingUrl\t{}", view.indexing_url)?;
        writeln!(writer, "chainId\t{}", view.chain_id)?;
        writeln!(writer, "networkFee\t{}", view.network_fee)?;
        writeln!(writer, "gasLimit\t{}", view.gas_limit)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the form's current values, each followed by its inline error.
pub fn write_form<W: Write>(form: &ConfigForm, writer: &mut W) -> Result<(), CliError> {
    let v = form.values();
    for field in FormField::ALL {
        let value = match field {
            FormField::NodeUrl => v.node_url.clone(),
            FormField::IndexingUrl => v.indexing_url.clone(),
            FormField::ChainId => v.chain_id.clone(),
            FormField::NetworkFee => v.network_fee.map(|n| n.to_string()).unwrap_or_default(),
            FormField::GasLimit => v.gas_limit.map(|n| n.to_string()).unwrap_or_default(),
        };
        writeln!(writer, "{:<20}{}", field.label(), value)?;
        if let Some(err) = form.error(field) {
            writeln!(writer, "{:<20}! {}", "", err.message)?;
        }
    }
    writer.flush()?;
    Ok(())
}
