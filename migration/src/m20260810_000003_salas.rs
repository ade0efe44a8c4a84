use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260810_000001_blocos::Blocos;

static IDX_SALAS_BLOCO_ID: &str = "idx-salas-bloco_id";
static FK_SALAS_BLOCO_ID: &str = "fk-salas-bloco_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Salas::Table)
                    .if_not_exists()
                    .col(pk_auto(Salas::SalaId))
                    .col(string_len(Salas::Nome, 50))
                    .col(string_len_null(Salas::Descricao, 100))
                    .col(integer_null(Salas::Capacidade).default(0))
                    .col(integer_null(Salas::BlocoId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SALAS_BLOCO_ID)
                    .table(Salas::Table)
                    .col(Salas::BlocoId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SALAS_BLOCO_ID)
                    .from_tbl(Salas::Table)
                    .from_col(Salas::BlocoId)
                    .to_tbl(Blocos::Table)
                    .to_col(Blocos::BlocoId)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SALAS_BLOCO_ID)
                    .table(Salas::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SALAS_BLOCO_ID)
                    .table(Salas::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Salas::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Salas {
    Table,
    SalaId,
    Nome,
    Descricao,
    Capacidade,
    BlocoId,
}
