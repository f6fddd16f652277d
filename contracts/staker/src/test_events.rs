extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, IntoVal, TryIntoVal,
};
use target_contract::{Role, TargetContract};

use crate::events::{Executed, Staked, Withdrawn};
use crate::{Staker, StakerClient};

const THRESHOLD: i128 = 10_000_000;
const START: u64 = 1_700_000_000;
const DEADLINE: u64 = START + 90;

fn setup() -> (Env, StakerClient<'static>, token::StellarAssetClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START);

    let admin = Address::generate(&env);
    let token_id = env.register_stellar_asset_contract_v2(admin.clone()).address();
    let target_id = env.register(TargetContract, (admin.clone(),));
    let staker_id = env.register(Staker, (target_id.clone(), token_id.clone(), THRESHOLD, DEADLINE));

    target_contract::TargetContractClient::new(&env, &target_id).grant_role(
        &admin,
        &staker_id,
        &Role::Staking,
    );

    let client = StakerClient::new(&env, &staker_id);
    let sac = token::StellarAssetClient::new(&env, &token_id);
    (env, client, sac)
}

#[test]
fn test_staked_event() {
    let (env, client, sac) = setup();
    let staker = Address::generate(&env);
    sac.mint(&staker, &50_000);

    client.stake(&staker, &20_000);
    client.stake(&staker, &10_000);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    assert_eq!(last_event.1, vec![&env, symbol_short!("staked").into_val(&env)]);

    let event_data: Staked = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        Staked {
            staker: staker.clone(),
            amount: 10_000,
            balance: 30_000,
        }
    );
}

#[test]
fn test_executed_event_when_forwarded() {
    let (env, client, sac) = setup();
    let staker = Address::generate(&env);
    let caller = Address::generate(&env);
    sac.mint(&staker, &THRESHOLD);
    client.stake(&staker, &THRESHOLD);

    env.ledger().set_timestamp(DEADLINE);
    client.execute(&caller);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    assert_eq!(last_event.1, vec![&env, symbol_short!("executed").into_val(&env)]);

    let event_data: Executed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        Executed {
            caller: caller.clone(),
            total: THRESHOLD,
            forwarded: true,
        }
    );
}

#[test]
fn test_executed_and_withdrawn_events_when_refunding() {
    let (env, client, sac) = setup();
    let staker = Address::generate(&env);
    sac.mint(&staker, &10_000);
    client.stake(&staker, &10_000);

    env.ledger().set_timestamp(DEADLINE + 1);
    client.execute(&staker);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");
    let event_data: Executed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        Executed {
            caller: staker.clone(),
            total: 10_000,
            forwarded: false,
        }
    );

    client.withdraw(&staker);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");
    assert_eq!(last_event.0, client.address);
    assert_eq!(last_event.1, vec![&env, symbol_short!("withdrawn").into_val(&env)]);

    let event_data: Withdrawn = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        Withdrawn {
            staker: staker.clone(),
            amount: 10_000,
        }
    );
}
