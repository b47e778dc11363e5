use crate::utils::{constants::*, SaleSystem};
use release_schedule::ScheduleKind;
use soroban_sdk::{testutils::Address as _, token, Address};

#[test]
fn test_tokens_sent_to_the_ledger_are_reclaimed() {
    let sys = SaleSystem::deploy();
    let owner_before = sys.token.balance(&sys.owner);

    sys.token
        .transfer(&sys.team, &sys.token.address, &(3 * UNIT));
    assert_eq!(sys.token.reclaim_token(&sys.owner, &sys.token.address), 3 * UNIT);
    assert_eq!(sys.token.balance(&sys.owner), owner_before + 3 * UNIT);
    assert_eq!(sys.token.balance(&sys.token.address), 0);
}

#[test]
fn test_foreign_assets_are_reclaimed() {
    let sys = SaleSystem::deploy();
    let issuer = Address::generate(&sys.env);
    let stray = sys.env.register_stellar_asset_contract_v2(issuer).address();
    token::StellarAssetClient::new(&sys.env, &stray).mint(&sys.token.address, &42);

    assert_eq!(sys.token.reclaim_token(&sys.owner, &stray), 42);
    assert_eq!(token::Client::new(&sys.env, &stray).balance(&sys.owner), 42);

    sys.payment_admin.mint(&sys.token.address, &UNIT);
    assert_eq!(sys.token.reclaim_ether(&sys.owner, &sys.payment.address), UNIT);
    assert_eq!(sys.payment.balance(&sys.owner), UNIT);
}

#[test]
fn test_contract_handed_to_the_ledger_is_reclaimed() {
    let sys = SaleSystem::deploy();
    let (vesting, _schedule, _beneficiary) =
        sys.vesting(ScheduleKind::Hold, SALE_START, 1_000);

    vesting.transfer_ownership(&sys.owner, &sys.token.address);
    assert_eq!(vesting.owner(), sys.token.address);

    sys.token.reclaim_contract(&sys.owner, &vesting.address);
    assert_eq!(vesting.owner(), sys.owner);
    assert_eq!(vesting.kill(&sys.owner), 1_000);
}
