use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260810_000002_equipamentos::Equipamentos, m20260810_000003_salas::Salas};

static IDX_SALA_EQUIPAMENTO_SALA_ID: &str = "idx-sala_equipamento-sala_id";
static IDX_SALA_EQUIPAMENTO_EQUIPAMENTO_ID: &str = "idx-sala_equipamento-equipamento_id";
static FK_SALA_EQUIPAMENTO_SALA_ID: &str = "fk-sala_equipamento-sala_id";
static FK_SALA_EQUIPAMENTO_EQUIPAMENTO_ID: &str = "fk-sala_equipamento-equipamento_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SalaEquipamento::Table)
                    .if_not_exists()
                    .col(integer(SalaEquipamento::SalaId))
                    .col(integer(SalaEquipamento::EquipamentoId))
                    .primary_key(
                        Index::create()
                            .col(SalaEquipamento::SalaId)
                            .col(SalaEquipamento::EquipamentoId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SALA_EQUIPAMENTO_SALA_ID)
                    .table(SalaEquipamento::Table)
                    .col(SalaEquipamento::SalaId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SALA_EQUIPAMENTO_EQUIPAMENTO_ID)
                    .table(SalaEquipamento::Table)
                    .col(SalaEquipamento::EquipamentoId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SALA_EQUIPAMENTO_SALA_ID)
                    .from_tbl(SalaEquipamento::Table)
                    .from_col(SalaEquipamento::SalaId)
                    .to_tbl(Salas::Table)
                    .to_col(Salas::SalaId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SALA_EQUIPAMENTO_EQUIPAMENTO_ID)
                    .from_tbl(SalaEquipamento::Table)
                    .from_col(SalaEquipamento::EquipamentoId)
                    .to_tbl(Equipamentos::Table)
                    .to_col(Equipamentos::EquipamentoId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SALA_EQUIPAMENTO_EQUIPAMENTO_ID)
                    .table(SalaEquipamento::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SALA_EQUIPAMENTO_SALA_ID)
                    .table(SalaEquipamento::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SALA_EQUIPAMENTO_EQUIPAMENTO_ID)
                    .table(SalaEquipamento::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SALA_EQUIPAMENTO_SALA_ID)
                    .table(SalaEquipamento::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SalaEquipamento::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SalaEquipamento {
    Table,
    SalaId,
    EquipamentoId,
}
