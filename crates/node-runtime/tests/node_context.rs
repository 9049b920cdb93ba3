//! Node startup against the process-wide parameter slot.

use node_runtime::{NodeConfig, NodeContext, NodeError};
use ts_01_chain_params::{params, ChainParamsError, Network};

#[test]
fn test_context_selects_once() {
    let err = NodeContext::new(NodeConfig::new("bogus")).unwrap_err();
    assert!(matches!(
        err,
        NodeError::ChainParams(ChainParamsError::UnknownNetwork(_))
    ));
    assert!(!err.is_fatal());

    let ctx = NodeContext::new(NodeConfig::new("regtest")).unwrap();
    assert_eq!(ctx.network(), Network::Regtest);
    assert_eq!(ctx.p2p_port(), 8233);
    assert!(std::ptr::eq(ctx.params(), params()));

    // Same network, different port: still the same parameters
    let again = NodeContext::new(NodeConfig::new("regtest").with_p2p_port(9000)).unwrap();
    assert!(std::ptr::eq(again.params(), ctx.params()));
    assert_eq!(again.p2p_port(), 9000);

    let err = NodeContext::new(NodeConfig::new("test")).unwrap_err();
    assert!(matches!(
        err,
        NodeError::ChainParams(ChainParamsError::AlreadySelected { .. })
    ));
}

#[test]
fn test_invalid_config_never_selects() {
    let err = NodeContext::new(NodeConfig::new("main").with_p2p_port(0)).unwrap_err();
    assert!(matches!(err, NodeError::Config(_)));
}
