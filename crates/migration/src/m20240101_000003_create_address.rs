//! Create `addresses` table with FK to `contacts`.
//! `country` and `postal_code` are the only mandatory columns.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Addresses::Table)
                    .if_not_exists()
                    .col(pk_auto(Addresses::Id))
                    .col(integer(Addresses::ContactId).not_null())
                    .col(string_len_null(Addresses::Street, 255))
                    .col(string_len_null(Addresses::City, 100))
                    .col(string_len_null(Addresses::Province, 100))
                    .col(string_len(Addresses::Country, 100).not_null())
                    .col(string_len(Addresses::PostalCode, 10).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_addresses_contacts")
                            .from(Addresses::Table, Addresses::ContactId)
                            .to(Contacts::Table, Contacts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Addresses::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Addresses { Table, Id, ContactId, Street, City, Province, Country, PostalCode }

#[derive(DeriveIden)]
enum Contacts { Table, Id }
