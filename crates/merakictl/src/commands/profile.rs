//! Profile management command implementations

use merakictl_core::config::CredentialStore;
use merakictl_core::{Config, Profile};
use serde_json::{Value, json};
use tracing::{debug, info, trace, warn};

use crate::cli::{OutputFormat, ProfileCommands};
use crate::connection::ConnectionManager;
use crate::error::{MerakiCtlError, Result as CliResult};
use crate::output;

/// Handle profile management commands
pub fn handle_profile_command(
    profile_cmd: &ProfileCommands,
    conn_mgr: &mut ConnectionManager,
    output_format: OutputFormat,
    query: Option<&str>,
) -> CliResult<()> {
    use ProfileCommands::*;

    match profile_cmd {
        List => handle_list(conn_mgr, output_format, query),
        Path => handle_path(conn_mgr, output_format),
        Show { name } => handle_show(conn_mgr, name, output_format, query),
        Set {
            name,
            api_key,
            base_url,
            caller,
            organization_id,
            #[cfg(feature = "secure-storage")]
            use_keyring,
            default,
        } => {
            let mut profile = Profile::new(api_key.clone());
            if let Some(url) = base_url {
                profile.base_url = url.trim_end_matches('/').to_string();
            }
            profile.caller = caller.clone();
            profile.organization_id = organization_id.clone();

            #[cfg(feature = "secure-storage")]
            let profile = if *use_keyring {
                Profile {
                    api_key: CredentialStore::keyring().store_credential(name, api_key)?,
                    ..profile
                }
            } else {
                profile
            };

            handle_set(conn_mgr, name, profile, *default)
        }
        Remove { name } => handle_remove(conn_mgr, name),
        Default { name } => handle_default(conn_mgr, name),
    }
}

fn handle_list(
    conn_mgr: &ConnectionManager,
    output_format: OutputFormat,
    query: Option<&str>,
) -> CliResult<()> {
    debug!("Listing all configured profiles");
    let profiles = conn_mgr.config.list_profiles();
    trace!("Found {} profiles", profiles.len());

    if profiles.is_empty() && output_format == OutputFormat::Auto {
        println!("No profiles configured.");
        println!("Use 'merakictl profile set <name> --api-key <key>' to create one.");
        return Ok(());
    }

    let rows: Vec<Value> = profiles
        .iter()
        .map(|(name, profile)| {
            json!({
                "name": name,
                "default": conn_mgr.config.default_profile.as_deref() == Some(name.as_str()),
                "base_url": profile.base_url,
                "organization_id": profile.organization_id,
                "credential": credential_source(&profile.api_key),
            })
        })
        .collect();

    output::print_output(rows, output_format.resolve(output::OutputFormat::Table), query)?;
    Ok(())
}

fn handle_path(conn_mgr: &ConnectionManager, output_format: OutputFormat) -> CliResult<()> {
    let path = match &conn_mgr.config_path {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };

    match output_format {
        OutputFormat::Json | OutputFormat::Yaml => output::print_output(
            json!({"path": path.display().to_string()}),
            output_format.resolve(output::OutputFormat::Json),
            None,
        )?,
        _ => println!("{}", path.display()),
    }
    Ok(())
}

fn handle_show(
    conn_mgr: &ConnectionManager,
    name: &str,
    output_format: OutputFormat,
    query: Option<&str>,
) -> CliResult<()> {
    debug!("Showing profile '{}'", name);
    let profile = conn_mgr.config.profile(name)?;
    let resilience = profile.resilience();

    let value = json!({
        "name": name,
        "default": conn_mgr.config.default_profile.as_deref() == Some(name),
        "api_key": mask_api_key(&profile.api_key),
        "base_url": profile.base_url,
        "caller": profile.caller,
        "organization_id": profile.organization_id,
        "timeout_secs": resilience.timeout_secs,
        "maximum_retries": resilience.retry.maximum_retries,
        "wait_on_rate_limit": resilience.retry.wait_on_rate_limit,
    });

    output::print_output(value, output_format.resolve(output::OutputFormat::Table), query)?;
    Ok(())
}

fn handle_set(
    conn_mgr: &mut ConnectionManager,
    name: &str,
    profile: Profile,
    make_default: bool,
) -> CliResult<()> {
    if name.trim().is_empty() {
        return Err(MerakiCtlError::InvalidInput {
            message: "profile name must not be empty".to_string(),
        });
    }

    let replaced = conn_mgr.config.profiles.contains_key(name);
    conn_mgr.config.set_profile(name.to_string(), profile);

    // The first profile becomes the default
    if make_default || conn_mgr.config.default_profile.is_none() {
        conn_mgr.config.default_profile = Some(name.to_string());
    }

    conn_mgr.save_config()?;
    info!("Saved profile '{}'", name);

    if replaced {
        println!("Profile '{}' updated", name);
    } else {
        println!("Profile '{}' created", name);
    }
    Ok(())
}

fn handle_remove(conn_mgr: &mut ConnectionManager, name: &str) -> CliResult<()> {
    let profile = conn_mgr
        .config
        .remove_profile(name)
        .ok_or_else(|| MerakiCtlError::ProfileNotFound {
            name: name.to_string(),
        })?;

    if let Err(e) = CredentialStore::default().delete_credential(&profile.api_key) {
        warn!("Could not remove keyring entry for '{}': {}", name, e);
    }

    conn_mgr.save_config()?;
    println!("Profile '{}' removed", name);
    Ok(())
}

fn handle_default(conn_mgr: &mut ConnectionManager, name: &str) -> CliResult<()> {
    conn_mgr.config.profile(name)?;
    conn_mgr.config.default_profile = Some(name.to_string());
    conn_mgr.save_config()?;
    println!("Default profile set to '{}'", name);
    Ok(())
}

fn credential_source(api_key: &str) -> &'static str {
    if CredentialStore::is_keyring_reference(api_key) {
        "keyring"
    } else if api_key.contains("${") {
        "environment"
    } else {
        "plaintext"
    }
}

/// Keyring references and `${VAR}` references are shown as written; literal
/// keys keep only their last four characters.
fn mask_api_key(api_key: &str) -> String {
    if credential_source(api_key) != "plaintext" {
        return api_key.to_string();
    }
    let chars: Vec<char> = api_key.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}
