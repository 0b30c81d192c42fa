//! Subscriber installation; kept in its own test binary because the
//! global subscriber can only be set once per process

use roomnet_core::logging::init_tracing;
use roomnet_core::Network;

#[test]
fn test_init_tracing_installs_once() {
    init_tracing(true, None, true).unwrap();

    // instrumented queries and debug events run under the subscriber
    let mut network = Network::new();
    network.add_vertex("hall");
    network.add_vertex("yard");
    network.add_edge(&"hall", &"yard", 2.0).unwrap();
    assert_eq!(network.shortest_path_weight(&"hall", &"yard"), 2.0);
    assert_eq!(network.remove_vertex(&"yard").unwrap(), "yard");

    assert!(init_tracing(false, Some("trace"), false).is_err());
}
