use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blocos::Table)
                    .if_not_exists()
                    .col(pk_auto(Blocos::BlocoId))
                    .col(string_len(Blocos::Nome, 50))
                    .col(string_len_null(Blocos::Descricao, 100))
                    .col(string_len_null(Blocos::Andar, 15))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Blocos::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Blocos {
    Table,
    BlocoId,
    Nome,
    Descricao,
    Andar,
}
