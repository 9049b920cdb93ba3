//! Properties that keep the networks from accepting each other's data.

use std::collections::HashSet;

use ts_01_chain_params::{ChainParams, Checkpoint, Network};

fn all() -> Vec<ChainParams> {
    Network::ALL
        .iter()
        .map(|network| ChainParams::for_network(*network).unwrap())
        .collect()
}

#[test]
fn test_message_starts_are_distinct() {
    let sets = all();
    let magics: HashSet<_> = sets.iter().map(|p| p.identity().message_start).collect();
    assert_eq!(magics.len(), sets.len());
}

#[test]
fn test_pubkey_prefixes_are_distinct() {
    let sets = all();
    let prefixes: HashSet<_> = sets
        .iter()
        .map(|p| p.identity().base58_prefixes.pubkey_address)
        .collect();
    assert_eq!(prefixes.len(), sets.len());
}

#[test]
fn test_bech32_prefixes_are_distinct() {
    let sets = all();
    let hrps: HashSet<_> = sets.iter().map(|p| p.identity().bech32_hrp.clone()).collect();
    assert_eq!(hrps.len(), sets.len());
}

#[test]
fn test_regtest_checkpoints_are_genesis_only() {
    let params = ChainParams::for_network(Network::Regtest).unwrap();
    let entries: Vec<&Checkpoint> = params.checkpoints().iter().collect();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].height, 0);
    assert_eq!(entries[0].hash, params.genesis_hash());
}

#[test]
fn test_only_regtest_is_permissive() {
    for params in all() {
        let permissive = params.network() == Network::Regtest;
        let rules = params.consensus();

        assert_eq!(rules.pow_allow_min_difficulty_blocks, permissive);
        assert_eq!(rules.pow_no_retargeting, permissive);
        assert_eq!(params.identity().dns_seeds.is_empty(), permissive);
        assert_eq!(params.identity().fixed_seeds.is_empty(), permissive);
    }
}

#[test]
fn test_seeds_use_network_port() {
    for params in all() {
        for seed in &params.identity().fixed_seeds {
            assert_eq!(seed.port, params.default_port());
        }
    }
}

#[test]
fn test_mutated_copy_leaves_original_untouched() {
    let params = ChainParams::for_network(Network::Main).unwrap();
    let copy = params.clone();

    let mut rules = copy.consensus_snapshot();
    rules.stake_target_spacing = 1;
    rules.pow_no_retargeting = true;

    assert_eq!(params.consensus().stake_target_spacing, 120);
    assert!(!params.consensus().pow_no_retargeting);
    assert_eq!(copy.consensus(), params.consensus());
}

#[test]
fn test_stake_stop_only_on_main() {
    for params in all() {
        let stop = params.consensus().stake_stop_height;
        assert_eq!(stop.is_some(), params.network() == Network::Main);
    }
}
