//! Create `contacts` table with FK to `users`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contacts::Table)
                    .if_not_exists()
                    .col(pk_auto(Contacts::Id))
                    .col(string_len(Contacts::Username, 100).not_null())
                    .col(string_len(Contacts::FirstName, 100).not_null())
                    .col(string_len_null(Contacts::LastName, 100))
                    .col(string_len_null(Contacts::Email, 100))
                    .col(string_len_null(Contacts::Phone, 20))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contacts_users")
                            .from(Contacts::Table, Contacts::Username)
                            .to(Users::Table, Users::Username)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Contacts::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Contacts { Table, Id, Username, FirstName, LastName, Email, Phone }

#[derive(DeriveIden)]
enum Users { Table, Username }
