use entities::sea_orm_active_enums::Role;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct UserCreateRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct UserUpdateRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}
