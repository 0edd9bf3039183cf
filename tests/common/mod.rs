//! Shared utilities for integration tests.

use std::net::SocketAddr;
use tokio::net::TcpListener;

use car_catalog::{Catalog, CatalogConfig, HttpServer, Shutdown, Vehicle};

/// A catalog server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

#[allow(dead_code)]
impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a server with `config` serving `catalog`.
pub async fn start_server(mut config: CatalogConfig, catalog: Catalog) -> TestServer {
    config.listener.bind_address = "127.0.0.1:0".into();
    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config, catalog);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestServer { addr, shutdown }
}

/// The two-vehicle catalog used by the reference scenarios.
#[allow(dead_code)]
pub fn honda_tesla() -> Catalog {
    Catalog::new(vec![
        Vehicle::new("Honda", "Civic", 20_000.0)
            .with_fuel_type("Petrol")
            .with_seating_capacity(5)
            .with_features(["sunroof"]),
        Vehicle::new("Tesla", "Model 3", 45_000.0)
            .with_fuel_type("Electric")
            .with_seating_capacity(5)
            .with_features(["autopilot"]),
    ])
}
