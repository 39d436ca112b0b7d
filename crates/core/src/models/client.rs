use serde::{Deserialize, Serialize};

/// A client who books fitness classes. The email address is the natural
/// key: at most one client record exists per email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Client as exposed by the listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientResponse {
    pub name: String,
    pub email: String,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            name: client.name,
            email: client.email,
        }
    }
}
