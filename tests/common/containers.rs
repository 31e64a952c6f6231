use testcontainers_modules::postgres;
use testcontainers_modules::testcontainers::runners::AsyncRunner;
use testcontainers_modules::testcontainers::ContainerAsync;

/// Start all containers needed for integration tests:
/// 1. postgres
///
/// Returns:
/// - data to help configure components in tests
/// - all containers so they don't get dropped until the docker runtime get dropped
pub async fn start_containers() -> (u16, ContainerAsync<postgres::Postgres>) {
    let container = postgres::Postgres::default().start().await.unwrap();
    let db_port = container.get_host_port_ipv4(5432).await.unwrap();
    println!("Postgres container started on {}", db_port);

    (db_port, container)
}
