use crate::application::ports::user_repository::{UserRepository, UserRow};

pub struct GetMe<'a, U: UserRepository + ?Sized> {
    pub users: &'a U,
}

impl<'a, U: UserRepository + ?Sized> GetMe<'a, U> {
    pub async fn execute(&self, id: i64) -> anyhow::Result<Option<UserRow>> {
        self.users.find_by_id(id).await
    }
}
