// Shared wiremock fixtures. Included as a module by each test file.
#![allow(dead_code)]

use cy_client::Session;
use wiremock::MockServer;

pub const TOKEN: &str = "test-access-token";

pub fn session(server: &MockServer) -> Session {
    let mut session = Session::with_client(reqwest::Client::new(), &format!("{}/api", server.uri()));
    session.set_access_token(TOKEN);
    session
}

pub fn bearer() -> String {
    format!("Bearer {TOKEN}")
}
