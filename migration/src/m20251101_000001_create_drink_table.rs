use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Drink::Table)
                    .if_not_exists()
                    .col(pk_auto(Drink::Id))
                    .col(string_uniq(Drink::Title))
                    // Serialized JSON array of ingredients
                    .col(text(Drink::Recipe))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Drink::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Drink {
    Table,
    Id,
    Title,
    Recipe,
}
