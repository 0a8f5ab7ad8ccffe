extern crate std;

use soroban_sdk::{
    testutils::{storage::Persistent as _, Address as _, Ledger as _},
    Address, Env, String,
};

use crate::storage::{
    DataKey, DAY_IN_LEDGERS, PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD,
};
use crate::{Error, RfpPublication, RfpPublicationClient};

fn setup() -> (Env, RfpPublicationClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(RfpPublication, ());
    let client = RfpPublicationClient::new(&env, &contract_id);
    (env, client)
}

fn setup_with_init() -> (Env, RfpPublicationClient<'static>, Address) {
    let (env, client) = setup();
    let owner = Address::generate(&env);
    client.init(&owner);
    (env, client, owner)
}

fn role(env: &Env, label: &str) -> String {
    String::from_str(env, label)
}

fn entity_ttl(env: &Env, client: &RfpPublicationClient, entity: &Address) -> u32 {
    env.as_contract(&client.address, || {
        env.storage()
            .persistent()
            .get_ttl(&DataKey::Entity(entity.clone()))
    })
}

#[test]
fn test_init_sets_owner() {
    let (_env, client, owner) = setup_with_init();
    assert_eq!(client.get_owner(), Some(owner));
}

#[test]
fn test_init_twice_fails() {
    let (env, client, owner) = setup_with_init();
    let intruder = Address::generate(&env);

    assert_eq!(client.try_init(&intruder), Err(Ok(Error::AlreadyInitialized)));
    assert_eq!(client.get_owner(), Some(owner));
}

#[test]
#[should_panic]
fn test_init_requires_owner_signature() {
    let env = Env::default();
    let contract_id = env.register(RfpPublication, ());
    let client = RfpPublicationClient::new(&env, &contract_id);
    client.init(&Address::generate(&env));
}

#[test]
fn test_unknown_address_is_not_authorized() {
    let (env, client, owner) = setup_with_init();
    let stranger = Address::generate(&env);

    assert!(!client.is_authorized(&stranger));
    assert_eq!(client.get_entity_role(&stranger), None);
    // The owner administers the registry but is not itself a publisher.
    assert!(!client.is_authorized(&owner));
}

#[test]
fn test_owner_adds_authorized_entity() {
    let (env, client, owner) = setup_with_init();
    let government = Address::generate(&env);

    client.add_authorized_entity(&owner, &government, &role(&env, "GOVERNMENT"));

    assert!(client.is_authorized(&government));
    assert_eq!(
        client.get_entity_role(&government),
        Some(role(&env, "GOVERNMENT"))
    );
}

#[test]
fn test_non_owner_cannot_add_entity() {
    let (env, client, owner) = setup_with_init();
    let government = Address::generate(&env);
    let bidder = Address::generate(&env);

    client.add_authorized_entity(&owner, &government, &role(&env, "GOVERNMENT"));

    // Authorized entities cannot grant access to others either.
    for caller in [&bidder, &government] {
        let result =
            client.try_add_authorized_entity(caller, &bidder, &role(&env, "GOVERNMENT"));
        assert_eq!(result, Err(Ok(Error::Forbidden)));
    }
    assert!(!client.is_authorized(&bidder));
}

#[test]
fn test_add_entity_before_init_fails() {
    let (env, client) = setup();
    let caller = Address::generate(&env);
    let government = Address::generate(&env);

    let result =
        client.try_add_authorized_entity(&caller, &government, &role(&env, "GOVERNMENT"));
    assert_eq!(result, Err(Ok(Error::Forbidden)));
    assert!(!client.is_authorized(&government));
}

#[test]
fn test_re_adding_entity_replaces_role() {
    let (env, client, owner) = setup_with_init();
    let entity = Address::generate(&env);

    client.add_authorized_entity(&owner, &entity, &role(&env, "GOVERNMENT"));
    client.add_authorized_entity(&owner, &entity, &role(&env, "MUNICIPALITY"));

    assert!(client.is_authorized(&entity));
    assert_eq!(
        client.get_entity_role(&entity),
        Some(role(&env, "MUNICIPALITY"))
    );
}

#[test]
fn test_any_role_label_grants_publishing() {
    let (env, client, owner) = setup_with_init();
    let entity = Address::generate(&env);

    client.add_authorized_entity(&owner, &entity, &role(&env, "anything-goes"));

    let id = client.publish_rfp(
        &entity,
        &role(&env, "Title"),
        &role(&env, "Description"),
        &role(&env, "Department"),
        &0u128,
        &0u32,
    );
    assert_eq!(id, 1);
}

#[test]
fn test_owner_must_register_itself_to_publish() {
    let (env, client, owner) = setup_with_init();
    let publish = || {
        client.try_publish_rfp(
            &owner,
            &role(&env, "Title"),
            &role(&env, "Description"),
            &role(&env, "Department"),
            &10u128,
            &10u32,
        )
    };

    assert_eq!(publish(), Err(Ok(Error::Forbidden)));

    client.add_authorized_entity(&owner, &owner, &role(&env, "GOVERNMENT"));
    assert_eq!(publish(), Ok(Ok(1)));
}

#[test]
fn test_publishing_keeps_entity_entry_alive() {
    let (env, client, owner) = setup_with_init();
    let entity = Address::generate(&env);

    client.add_authorized_entity(&owner, &entity, &role(&env, "GOVERNMENT"));
    assert_eq!(entity_ttl(&env, &client, &entity), PERSISTENT_BUMP_AMOUNT);

    // Step in 6-day increments so the contract instance itself stays live.
    // After 24 days the entry is below the 7-day threshold and the publish
    // authorization check must extend it again.
    for _ in 0..4 {
        env.ledger()
            .with_mut(|li| li.sequence_number += 6 * DAY_IN_LEDGERS);
        client.publish_rfp(
            &entity,
            &role(&env, "Title"),
            &role(&env, "Description"),
            &role(&env, "Department"),
            &1u128,
            &1u32,
        );
    }

    let ttl = entity_ttl(&env, &client, &entity);
    assert!(ttl > PERSISTENT_LIFETIME_THRESHOLD);
    assert_eq!(ttl, PERSISTENT_BUMP_AMOUNT);
    assert!(client.is_authorized(&entity));
}
