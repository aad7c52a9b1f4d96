use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};
use uuid::Uuid;

pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub address: String,
    pub city: String,
    pub state: String,
}

#[derive(Default)]
pub struct UpdateUserParams {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

pub struct UserRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user account. Unique-constraint violations on email or
    /// phone surface as `DbErr` and are mapped to `DuplicateAccount` by the
    /// caller.
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            password_hash: ActiveValue::Set(params.password_hash),
            address: ActiveValue::Set(params.address),
            city: ActiveValue::Set(params.city),
            state: ActiveValue::Set(params.state),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Applies the provided fields to an existing user.
    ///
    /// # Returns
    /// - `Ok(Some(model))` - Updated user
    /// - `Ok(None)` - No user with that id
    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateUserParams,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = user.into();

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(phone) = params.phone {
            active.phone = ActiveValue::Set(phone);
        }
        if let Some(address) = params.address {
            active.address = ActiveValue::Set(address);
        }
        if let Some(city) = params.city {
            active.city = ActiveValue::Set(city);
        }
        if let Some(state) = params.state {
            active.state = ActiveValue::Set(state);
        }

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a user account.
    ///
    /// # Returns
    /// - `Ok(true)` - Account removed
    /// - `Ok(false)` - No user with that id
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let res = entity::prelude::User::delete_by_id(id).exec(self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
