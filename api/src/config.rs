use clap::Parser;
use std::net::SocketAddr;

#[derive(Clone, Debug, Parser)]
pub struct RosterApiConfig {
    #[clap(
        short,
        long,
        env = "ROSTER_API_BIND_ADDR",
        default_value = "0.0.0.0:4000"
    )]
    pub bind_addr: SocketAddr,

    /// Origin the API is reachable at from the outside. Used for the CORS
    /// allow-origin and for absolute hypermedia links.
    #[clap(
        long,
        env = "ROSTER_API_PUBLIC_URL",
        default_value = "http://localhost:4000"
    )]
    pub public_url: String,

    /// Print the OpenAPI document as JSON and exit instead of serving.
    #[clap(long, default_value_t = false)]
    pub dump_openapi: bool,
}

impl RosterApiConfig {
    /// Absolute URI of the user collection endpoint.
    pub fn users_url(&self) -> String {
        format!("{}/users", self.public_url.trim_end_matches('/'))
    }
}
