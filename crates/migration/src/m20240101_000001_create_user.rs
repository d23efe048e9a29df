//! Create `users` table.
//!
//! `username` is the natural key; `token` is filled on login and cleared on logout.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(string_len(Users::Username, 100).primary_key())
                    .col(string_len(Users::Password, 255).not_null())
                    .col(string_len(Users::Name, 100).not_null())
                    .col(string_len_null(Users::Token, 100))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Users::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Users { Table, Username, Password, Name, Token }
