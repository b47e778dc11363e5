//! Deployment helpers shared by the scenario tests.

use crowdsale::{Crowdsale, CrowdsaleClient};
use participant_whitelist::{ParticipantWhitelist, ParticipantWhitelistClient};
use release_schedule::{ReleaseSchedule, ReleaseScheduleClient, ScheduleKind};
use sale_token::{SaleToken, SaleTokenClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, vec, Address, Env,
};
use token_vesting::{TokenVesting, TokenVestingClient};

pub mod constants {
    pub const UNIT: i128 = 1_000_000_000_000_000_000;
    pub const TOTAL_SUPPLY: i128 = 100_000_000_000 * UNIT;
    pub const SALE_RESERVE: i128 = 40_000_000_000 * UNIT;
    pub const COMMUNITY_POOL: i128 = 45_000_000_000 * UNIT;
    pub const TEAM_RESERVE: i128 = 15_000_000_000 * UNIT;
    pub const RATE: i128 = 70_000;

    /// 2018-10-01T00:00:00Z
    pub const SALE_START: u64 = 1_538_352_000;
    pub const NOV_1: u64 = 1_541_030_400;
    pub const MAR_1: u64 = 1_551_398_400;
    pub const DAY: u64 = 86_400;
}

use constants::*;

/// Every contract of the sale, wired together and funded.
pub struct SaleSystem<'a> {
    pub env: Env,
    pub owner: Address,
    pub community: Address,
    pub team: Address,
    pub token: SaleTokenClient<'a>,
    pub whitelist: ParticipantWhitelistClient<'a>,
    pub sale: CrowdsaleClient<'a>,
    pub payment: token::Client<'a>,
    pub payment_admin: token::StellarAssetClient<'a>,
}

impl<'a> SaleSystem<'a> {
    /// Ledger locked, sale pending, bonus allowance in place.
    pub fn deploy() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        set_time(&env, SALE_START - DAY);

        let owner = Address::generate(&env);
        let community = Address::generate(&env);
        let team = Address::generate(&env);

        let sale_id = env.register_contract(None, Crowdsale);
        let token = SaleTokenClient::new(&env, &env.register_contract(None, SaleToken));
        token.initialize(
            &owner,
            &vec![&env, sale_id.clone(), community.clone(), team.clone()],
            &vec![&env, SALE_RESERVE, COMMUNITY_POOL, TEAM_RESERVE],
        );
        for exempt in [&sale_id, &community, &team] {
            token.set_trade_exception(&owner, exempt, &true);
        }
        token.approve(&community, &sale_id, &COMMUNITY_POOL);

        let issuer = Address::generate(&env);
        let payment_id = env.register_stellar_asset_contract_v2(issuer).address();

        let whitelist = ParticipantWhitelistClient::new(
            &env,
            &env.register_contract(None, ParticipantWhitelist),
        );
        whitelist.initialize(&owner);
        whitelist.set_crowdsale(&owner, &sale_id);

        let sale = CrowdsaleClient::new(&env, &sale_id);
        sale.initialize(&owner, &token.address, &payment_id, &SALE_START, &RATE, &(UNIT / 10));
        sale.set_whitelist(&owner, &whitelist.address);
        sale.set_bonus_pool(&owner, &community);

        Self {
            payment: token::Client::new(&env, &payment_id),
            payment_admin: token::StellarAssetClient::new(&env, &payment_id),
            env,
            owner,
            community,
            team,
            token,
            whitelist,
            sale,
        }
    }

    /// A funded buyer on the whitelist.
    pub fn buyer(&self, bonus_percent: u32, cap: i128) -> Address {
        let buyer = Address::generate(&self.env);
        self.whitelist
            .add_participant(&self.owner, &buyer, &bonus_percent, &cap);
        self.payment_admin.mint(&buyer, &cap);
        buyer
    }

    /// A vesting account holding `allocation` from the team reserve.
    pub fn vesting(
        &self,
        kind: ScheduleKind,
        release_date: u64,
        allocation: i128,
    ) -> (TokenVestingClient<'a>, ReleaseScheduleClient<'a>, Address) {
        let schedule = ReleaseScheduleClient::new(
            &self.env,
            &self.env.register_contract(None, ReleaseSchedule),
        );
        schedule.initialize(&self.owner, &kind, &release_date);

        let beneficiary = Address::generate(&self.env);
        let vesting_id = self.env.register_contract(None, TokenVesting);
        let vesting = TokenVestingClient::new(&self.env, &vesting_id);
        vesting.initialize(&self.owner, &self.token.address, &beneficiary, &schedule.address);

        self.token.transfer(&self.team, &vesting_id, &allocation);
        self.token
            .set_trade_exception(&self.owner, &vesting_id, &true);
        (vesting, schedule, beneficiary)
    }

    pub fn at(&self, timestamp: u64) {
        set_time(&self.env, timestamp);
    }
}

pub fn set_time(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|l| l.timestamp = timestamp);
}
