use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// JSON body of `POST /matchinfo`
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct MatchInfoRequest {
    #[validate(length(min = 1, message = "Match ID is required"))]
    pub matchid: String,

    #[validate(length(min = 1, message = "Username is required"))]
    pub snsusername: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub snspassword: String,
}

/// Form body of `POST /registration`
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct RegistrationForm {
    #[validate(length(min = 1, message = "Match ID is required"))]
    pub matchid: String,

    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub response: String,
}
