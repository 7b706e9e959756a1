use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AuthorInfo {
    pub name: String,
    pub link: String,
    pub mail: String,
    pub tel: String,
}

/// Body of GET /about. Field names are part of the public contract.
#[derive(Debug, Clone, Serialize)]
pub struct AboutResponse {
    #[serde(rename = "Data")]
    pub data: String,
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Relase")]
    pub release: String,
    #[serde(rename = "Database")]
    pub database: String,
    #[serde(rename = "Author")]
    pub author: AuthorInfo,
}
