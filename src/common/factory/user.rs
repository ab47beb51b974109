use chrono::Utc;
use entities::{sea_orm_active_enums::Role, user};
use sea_orm::Set;

pub fn user() -> user::ActiveModel {
    let now = Utc::now();
    user::ActiveModel {
        id: Set(uuid::Uuid::now_v7()),
        name: Set("Lynx Levin".to_string()),
        email: Set(format!("{}@test.com", uuid::Uuid::now_v7().to_string())),
        password: Set("password".to_string()),
        role: Set(Role::User),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

pub trait UserFactory {
    fn role(self, role: Role) -> user::ActiveModel;
    fn email(self, email: &str) -> user::ActiveModel;
    fn password(self, hashed_password: &str) -> user::ActiveModel;
}

impl UserFactory for user::ActiveModel {
    fn role(mut self, role: Role) -> user::ActiveModel {
        self.role = Set(role);
        self
    }

    fn email(mut self, email: &str) -> user::ActiveModel {
        self.email = Set(email.to_string());
        self
    }

    fn password(mut self, hashed_password: &str) -> user::ActiveModel {
        self.password = Set(hashed_password.to_string());
        self
    }
}
