use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Equipamentos::Table)
                    .if_not_exists()
                    .col(pk_auto(Equipamentos::EquipamentoId))
                    .col(string_len_null(Equipamentos::Nome, 50))
                    .col(string_len_null(Equipamentos::Descricao, 100))
                    .col(integer(Equipamentos::Quantidade).default(0))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Equipamentos::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Equipamentos {
    Table,
    EquipamentoId,
    Nome,
    Descricao,
    Quantidade,
}
