//! # Local Network Scenarios
//!
//! Nodes started from one sealed genesis. Only one node per network may
//! serve RPC; asking for a second one is a distinct failure that leaves the
//! other nodes running.

#[cfg(test)]
mod tests {
    use super::super::{sealed, seeded_keys};
    use gn_05_testnet::{
        start_network, LocalNodeStarter, NodeConfig, NodeStarter, StarterError,
    };
    use std::sync::Arc;
    use tempfile::TempDir;

    const CHAIN_ID: &str = "net-chain";

    struct Fixture {
        genesis: Arc<[u8]>,
        validators: Vec<shared_crypto::Ed25519PublicKey>,
        dirs: Vec<TempDir>,
    }

    impl Fixture {
        fn new(n: usize) -> Self {
            let keys = seeded_keys(n);
            Self {
                genesis: sealed(CHAIN_ID, &keys).into_bytes().into(),
                validators: keys.iter().map(|k| k.consensus.public_key()).collect(),
                dirs: (0..n).map(|_| tempfile::tempdir().unwrap()).collect(),
            }
        }

        fn starter(&self, index: usize, rpc: bool) -> Box<dyn NodeStarter> {
            let starter = LocalNodeStarter::new(
                NodeConfig::new(CHAIN_ID, self.dirs[index].path()),
                self.validators[index],
                Arc::clone(&self.genesis),
            );
            if rpc {
                Box::new(starter.rpc_listen())
            } else {
                Box::new(starter)
            }
        }
    }

    #[tokio::test]
    async fn test_nodes_share_genesis_app_hash() {
        let fixture = Fixture::new(3);
        let network = start_network(3, |i| fixture.starter(i, i == 0))
            .await
            .unwrap();

        let hashes = network.app_hashes();
        assert_eq!(hashes.len(), 3);
        assert!(hashes.iter().all(|h| *h == hashes[0]));

        for dir in &fixture.dirs {
            let written = std::fs::read(dir.path().join("config/genesis.json")).unwrap();
            assert_eq!(&written[..], &fixture.genesis[..]);
        }

        network.stop();
        network.wait().await;
    }

    #[tokio::test]
    async fn test_two_rpc_requests_conflict() {
        let fixture = Fixture::new(3);
        // Nodes 0 and 2 ask for RPC; node 1 does not.
        let err = start_network(3, |i| fixture.starter(i, i != 1))
            .await
            .unwrap_err();

        assert!(err.rpc_in_use());
        assert_eq!(err.failures.len(), 1);
        assert!(matches!(
            err.failures[0],
            StarterError::RpcInUse { node: 2, holder: 0 }
        ));

        let network = err.network;
        assert_eq!(network.len(), 2);
        assert_eq!(network.rpc_node().unwrap().index(), 0);
        let p2p = network.node(1).unwrap().p2p_addr();
        assert!(tokio::net::TcpStream::connect(p2p).await.is_ok());

        network.stop();
        network.wait().await;
    }

    #[tokio::test]
    async fn test_wrong_chain_id_is_startup_error() {
        let fixture = Fixture::new(1);
        let err = start_network(1, |_| -> Box<dyn NodeStarter> {
            Box::new(LocalNodeStarter::new(
                NodeConfig::new("other-chain", fixture.dirs[0].path()),
                fixture.validators[0],
                Arc::clone(&fixture.genesis),
            ))
        })
        .await
        .unwrap_err();

        assert!(!err.rpc_in_use());
        assert!(err.network.is_empty());
        assert!(matches!(err.failures[0], StarterError::Startup { node: 0, .. }));
    }
}
