//! Account entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub profile_picture: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub is_active: bool,
    pub date_joined: DateTimeWithTimeZone,
    pub last_login: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Posts,
    #[sea_orm(has_many = "super::story::Entity")]
    Stories,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Posts.def()
    }
}

impl Related<super::story::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for pixgram_core::domain::Account {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            password_hash: model.password_hash,
            profile_picture: model.profile_picture,
            description: model.description,
            is_active: model.is_active,
            date_joined: model.date_joined.into(),
            last_login: model.last_login.map(Into::into),
        }
    }
}

impl From<pixgram_core::domain::Account> for ActiveModel {
    fn from(account: pixgram_core::domain::Account) -> Self {
        Self {
            id: Set(account.id),
            username: Set(account.username),
            email: Set(account.email),
            first_name: Set(account.first_name),
            last_name: Set(account.last_name),
            password_hash: Set(account.password_hash),
            profile_picture: Set(account.profile_picture),
            description: Set(account.description),
            is_active: Set(account.is_active),
            date_joined: Set(account.date_joined.into()),
            last_login: Set(account.last_login.map(Into::into)),
        }
    }
}
