use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Claims carried by tokens from the external identity provider.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct Claims {
    pub sub: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub exp: usize,
}
