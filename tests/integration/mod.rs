mod crowdsale_flow;
mod reclamation;
mod vesting_flow;
