use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Contacts are always read per owner
        manager
            .create_index(
                Index::create()
                    .name("idx_contacts_username")
                    .table(Contacts::Table)
                    .col(Contacts::Username)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_addresses_contact")
                    .table(Addresses::Table)
                    .col(Addresses::ContactId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_contacts_username").table(Contacts::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_addresses_contact").table(Addresses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Contacts { Table, Username }

#[derive(DeriveIden)]
enum Addresses { Table, ContactId }
