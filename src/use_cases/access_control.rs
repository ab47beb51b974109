//! Role and ownership rules shared by every resource.

use std::fmt;

use db_adapters::OwnerScope;
use entities::{restaurant, review, sea_orm_active_enums::Role, url, user};
use uuid::Uuid;

use crate::UseCaseError;

/// The authenticated caller of a request. Resolved fresh for every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub id: Uuid,
    pub role: Role,
}

impl From<&user::Model> for Principal {
    fn from(user: &user::Model) -> Self {
        Self {
            id: user.id,
            role: user.role,
        }
    }
}

/// Immutable set of roles allowed to invoke an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleSet(&'static [Role]);

impl RoleSet {
    pub const ANY: RoleSet = RoleSet(&[Role::User, Role::Publisher, Role::Admin]);
    pub const NONE: RoleSet = RoleSet(&[]);

    pub const fn of(roles: &'static [Role]) -> Self {
        Self(roles)
    }

    pub fn allows(&self, role: Role) -> bool {
        self.0.contains(&role)
    }
}

impl fmt::Display for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let roles = self.0.iter().map(Role::as_str).collect::<Vec<_>>();
        write!(f, "[{}]", roles.join(", "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessRules {
    pub create: RoleSet,
    pub read: RoleSet,
    pub update: RoleSet,
    pub delete: RoleSet,
}

const PUBLISHERS: RoleSet = RoleSet::of(&[Role::Publisher, Role::Admin]);
const REVIEWERS: RoleSet = RoleSet::of(&[Role::User, Role::Admin]);
const ADMINS: RoleSet = RoleSet::of(&[Role::Admin]);

pub const RESTAURANT_ACCESS: AccessRules = AccessRules {
    create: PUBLISHERS,
    read: RoleSet::ANY,
    update: PUBLISHERS,
    delete: PUBLISHERS,
};

pub const REVIEW_ACCESS: AccessRules = AccessRules {
    create: REVIEWERS,
    read: RoleSet::ANY,
    update: REVIEWERS,
    delete: REVIEWERS,
};

pub const URL_ACCESS: AccessRules = AccessRules {
    create: RoleSet::ANY,
    read: RoleSet::ANY,
    update: RoleSet::ANY,
    delete: RoleSet::ANY,
};

pub const USER_ACCESS: AccessRules = AccessRules {
    create: ADMINS,
    read: ADMINS,
    update: ADMINS,
    delete: ADMINS,
};

pub fn authorize_role(principal: &Principal, allowed: RoleSet) -> Result<(), UseCaseError> {
    match allowed.allows(principal.role) {
        true => Ok(()),
        false => Err(UseCaseError::Forbidden(format!(
            "User role {} is not authorized to access this route",
            principal.role
        ))),
    }
}

/// A resource with a creator.
pub trait Owned {
    const KIND: &'static str;

    fn resource_id(&self) -> Uuid;
    /// `None` for resources created anonymously.
    fn owner_id(&self) -> Option<Uuid>;
}

impl Owned for restaurant::Model {
    const KIND: &'static str = "restaurant";

    fn resource_id(&self) -> Uuid {
        self.id
    }

    fn owner_id(&self) -> Option<Uuid> {
        Some(self.user_id)
    }
}

impl Owned for review::Model {
    const KIND: &'static str = "review";

    fn resource_id(&self) -> Uuid {
        self.id
    }

    fn owner_id(&self) -> Option<Uuid> {
        Some(self.user_id)
    }
}

impl Owned for url::Model {
    const KIND: &'static str = "url";

    fn resource_id(&self) -> Uuid {
        self.id
    }

    fn owner_id(&self) -> Option<Uuid> {
        self.user_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

pub fn authorize_mutation<R: Owned>(principal: &Principal, resource: &R) -> Decision {
    if principal.role.is_elevated() || resource.owner_id() == Some(principal.id) {
        Decision::Allow
    } else {
        Decision::Deny
    }
}

/// The predicate a conditional write must carry for `principal`.
pub fn owner_scope(principal: &Principal) -> OwnerScope {
    match principal.role.is_elevated() {
        true => OwnerScope::Any,
        false => OwnerScope::Owner(principal.id),
    }
}

/// Maps a denial to the 401 naming the resource.
pub fn ensure_can_mutate<R: Owned>(principal: &Principal, resource: &R) -> Result<(), UseCaseError> {
    match authorize_mutation(principal, resource) {
        Decision::Allow => Ok(()),
        Decision::Deny => Err(UseCaseError::Unauthorized(format!(
            "User {} is not authorized to modify {} {}",
            principal.id,
            R::KIND,
            resource.resource_id()
        ))),
    }
}
