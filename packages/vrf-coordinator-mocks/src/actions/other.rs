use cosmwasm_std::{ensure, ensure_eq, DepsMut, Env, Event, Response};
use cw2::{get_contract_version, set_contract_version};
use semver::Version;

use raffle_base::{
    error::ContractError,
    vrf_coordinator::{msg::MigrateMsg, state::CONTRACT_NAME},
};

use crate::actions::instantiate::CONTRACT_VERSION;

/// Accepts code of the same coordinator only. `msg.version` must name the
/// version being deployed, re-deploying the stored version is allowed
pub fn migrate_contract(
    deps: DepsMut,
    _env: Env,
    msg: MigrateMsg,
) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;

    ensure_eq!(
        stored.contract,
        CONTRACT_NAME,
        ContractError::ForeignContract {
            contract: stored.contract,
        }
    );

    ensure_eq!(
        msg.version,
        CONTRACT_VERSION,
        ContractError::MigrationVersionMismatch {
            expected: CONTRACT_VERSION.to_string(),
            got: msg.version,
        }
    );

    let stored_version = parse_version(&stored.version)?;
    let new_version = parse_version(CONTRACT_VERSION)?;

    ensure!(
        new_version >= stored_version,
        ContractError::Downgrade {
            stored: stored_version.to_string(),
            new: new_version.to_string(),
        }
    );

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new().add_event(
        Event::new("coordinator_migrated")
            .add_attribute("from", stored_version.to_string())
            .add_attribute("to", new_version.to_string()),
    ))
}

fn parse_version(version: &str) -> Result<Version, ContractError> {
    version.parse().map_err(|_| ContractError::InvalidVersion {
        version: version.to_string(),
    })
}
