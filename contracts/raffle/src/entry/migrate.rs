use cosmwasm_std::{ensure, ensure_eq, DepsMut, Env, Response};
use cw2::{get_contract_version, set_contract_version};
use semver::Version;

use crate::{
    error::ContractError,
    state::{CONTRACT_NAME, CONTRACT_VERSION},
};
use raffle_base::raffle::msg::MigrateMsg;

pub fn migrate_contract(
    deps: DepsMut,
    _env: Env,
    _msg: MigrateMsg,
) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    let version: Version = CONTRACT_VERSION.parse()?;
    let storage_version: Version = stored.version.parse()?;

    ensure_eq!(
        stored.contract,
        CONTRACT_NAME,
        ContractError::ContractNameErr(stored.contract)
    );

    ensure!(
        version > storage_version,
        ContractError::VersionErr(storage_version.to_string())
    );

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new().add_attribute("new_contract_version", CONTRACT_VERSION))
}
