use std::net::IpAddr;
use std::net::SocketAddr;
use std::str::FromStr;
use storefront::backend::Backend;
use storefront::configuration::get_configuration;
use storefront::create_app;
use storefront::errors::Error;
use tracing_subscriber::EnvFilter;

fn bind_address(host: &str, port: u16) -> Result<SocketAddr, Error> {
    let host = IpAddr::from_str(host)?;
    Ok(SocketAddr::from((host, port)))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("storefront=info,tower_http=info")),
        )
        .init();
    let configuration = get_configuration().expect("Failed to read configuration");
    let backend =
        Backend::try_from(&configuration.backend).expect("Failed to initialise the backend");
    let addr = bind_address(
        &configuration.application.host,
        configuration.application.port,
    )
    .expect("Failed to create socket address");
    let (app, _) = create_app(backend).expect("Failed to create an app");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");
    axum::serve(listener, app).await.unwrap();
}
