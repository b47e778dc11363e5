use crate::utils::{constants::*, SaleSystem};
use crowdsale::{Error, SaleState};

#[test]
fn test_full_sale_lifecycle() {
    let sys = SaleSystem::deploy();
    let early = sys.buyer(10, 10 * UNIT);
    let late = sys.buyer(0, 10 * UNIT);

    assert_eq!(sys.sale.try_buy_tokens(&early, &UNIT), Err(Ok(Error::SaleNotActive)));

    sys.at(SALE_START);
    sys.sale.start(&sys.owner);

    assert_eq!(sys.sale.buy_tokens(&early, &UNIT), 77_000 * UNIT);
    assert_eq!(sys.token.balance(&early), 77_000 * UNIT);

    sys.sale.set_exchange_rate(&sys.owner, &60_000);
    assert_eq!(sys.sale.buy_tokens(&late, &(2 * UNIT)), 120_000 * UNIT);
    assert_eq!(sys.sale.total_raised(), 3 * UNIT);

    // buyers cannot move tokens while the ledger is locked
    assert!(sys.token.try_transfer(&early, &late, &UNIT).is_err());

    sys.at(SALE_START + 30 * DAY);
    sys.sale.end(&sys.owner);
    assert_eq!(sys.sale.state(), SaleState::Ended);

    let sold = 70_000 * UNIT + 120_000 * UNIT;
    let bonus = 7_000 * UNIT;
    assert_eq!(sys.token.balance(&sys.sale.address), 0);
    assert_eq!(
        sys.token.balance(&sys.community),
        COMMUNITY_POOL - bonus + SALE_RESERVE - sold
    );
    assert_eq!(sys.payment.balance(&sys.owner), 3 * UNIT);
    assert_eq!(sys.token.total_supply(), TOTAL_SUPPLY);

    // after the sale, withdrawing finds nothing left
    assert_eq!(sys.sale.withdraw_tokens(&sys.owner), 0);
    assert_eq!(sys.sale.withdraw_eth(&sys.owner), 0);

    sys.token.unlock(&sys.owner);
    sys.token.transfer(&early, &late, &UNIT);
    assert_eq!(sys.token.balance(&late), 120_001 * UNIT);
}

#[test]
fn test_whitelist_changes_during_sale() {
    let sys = SaleSystem::deploy();
    let buyer = sys.buyer(5, 3 * UNIT);
    sys.at(SALE_START);
    sys.sale.start(&sys.owner);

    sys.sale.buy_tokens(&buyer, &UNIT);
    sys.whitelist.revoke_participant(&sys.owner, &buyer);
    assert_eq!(sys.sale.try_buy_tokens(&buyer, &UNIT), Err(Ok(Error::NotWhitelisted)));

    // re-admitted with a fresh cap and a higher tier
    sys.whitelist
        .add_participant(&sys.owner, &buyer, &20, &UNIT);
    assert_eq!(sys.sale.buy_tokens(&buyer, &UNIT), 84_000 * UNIT);
    assert!(!sys.sale.valid_purchase(&buyer, &(UNIT / 10)));
    assert_eq!(sys.token.balance(&buyer), 73_500 * UNIT + 84_000 * UNIT);
}

#[test]
fn test_post_sale_withdraw_sends_late_deposits_to_the_pool() {
    let sys = SaleSystem::deploy();
    sys.at(SALE_START);
    sys.sale.start(&sys.owner);
    sys.sale.end(&sys.owner);
    let pool_after_end = sys.token.balance(&sys.community);

    sys.token
        .transfer(&sys.team, &sys.sale.address, &(5 * UNIT));
    assert_eq!(sys.sale.withdraw_tokens(&sys.owner), 5 * UNIT);
    assert_eq!(sys.token.balance(&sys.community), pool_after_end + 5 * UNIT);
}
