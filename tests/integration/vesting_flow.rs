use crate::utils::{constants::*, SaleSystem};
use release_schedule::ScheduleKind;
use token_vesting::{Error, VestingStatus};

#[test]
fn test_fifty_percent_vesting_with_reschedule() {
    let sys = SaleSystem::deploy();
    let (vesting, schedule, beneficiary) =
        sys.vesting(ScheduleKind::FiftyPercent, SALE_START, 1_000_000);

    assert_eq!(vesting.try_release(), Err(Ok(Error::NothingToRelease)));

    sys.at(SALE_START);
    assert_eq!(vesting.release(), 500_000);
    assert_eq!(vesting.try_release(), Err(Ok(Error::NothingToRelease)));

    sys.at(NOV_1);
    assert_eq!(vesting.releasable_amount(), 100_000);

    // pushing the date back hides the unlocked tranche until it is restored
    schedule.set_token_release_date(&sys.owner, &MAR_1);
    assert_eq!(vesting.releasable_amount(), 0);
    schedule.set_token_release_date(&sys.owner, &SALE_START);

    assert_eq!(vesting.release(), 100_000);
    assert_eq!(sys.token.balance(&beneficiary), 600_000);
    assert_eq!(vesting.released(), 600_000);
}

#[test]
fn test_revoke_then_kill() {
    let sys = SaleSystem::deploy();
    let (vesting, _schedule, beneficiary) =
        sys.vesting(ScheduleKind::Standard, SALE_START, 1_000_000);
    let owner_before = sys.token.balance(&sys.owner);

    sys.at(NOV_1 + DAY);
    assert_eq!(vesting.revoke(&sys.owner), 700_000);
    assert_eq!(sys.token.balance(&sys.owner), owner_before + 700_000);
    assert_eq!(vesting.releasable_amount(), 300_000);
    assert_eq!(vesting.try_revoke(&sys.owner), Err(Ok(Error::AlreadyRevoked)));

    assert_eq!(vesting.release(), 100_000 * 3);
    assert_eq!(sys.token.balance(&beneficiary), 300_000);

    assert_eq!(vesting.kill(&sys.owner), 0);
    assert_eq!(vesting.status(), VestingStatus::Killed);
}

#[test]
fn test_vesting_needs_a_trade_exception_while_locked() {
    let sys = SaleSystem::deploy();
    let (vesting, _schedule, beneficiary) =
        sys.vesting(ScheduleKind::Hold, SALE_START, 1_000_000);
    sys.token
        .set_trade_exception(&sys.owner, &vesting.address, &false);

    sys.at(SALE_START);
    assert_eq!(vesting.try_release(), Err(Ok(Error::TokenLocked)));

    sys.token.unlock(&sys.owner);
    assert_eq!(vesting.release(), 1_000_000);
    assert_eq!(sys.token.balance(&beneficiary), 1_000_000);
}
