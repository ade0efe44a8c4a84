use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260810_000003_salas::Salas, m20260810_000005_usuarios::Usuarios};

static IDX_RESERVAS_USUARIO_ID: &str = "idx-reservas-usuario_id";
static IDX_RESERVAS_SALA_ID: &str = "idx-reservas-sala_id";
static FK_RESERVAS_USUARIO_ID: &str = "fk-reservas-usuario_id";
static FK_RESERVAS_SALA_ID: &str = "fk-reservas-sala_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservas::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservas::ReservaId))
                    .col(string_len(Reservas::Status, 25))
                    .col(date(Reservas::DataReserva))
                    .col(timestamp_with_time_zone(Reservas::HoraInicio))
                    .col(timestamp_with_time_zone_null(Reservas::HoraFim))
                    .col(integer_null(Reservas::UsuarioId))
                    .col(integer_null(Reservas::SalaId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RESERVAS_USUARIO_ID)
                    .table(Reservas::Table)
                    .col(Reservas::UsuarioId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RESERVAS_SALA_ID)
                    .table(Reservas::Table)
                    .col(Reservas::SalaId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RESERVAS_USUARIO_ID)
                    .from_tbl(Reservas::Table)
                    .from_col(Reservas::UsuarioId)
                    .to_tbl(Usuarios::Table)
                    .to_col(Usuarios::UsuarioId)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RESERVAS_SALA_ID)
                    .from_tbl(Reservas::Table)
                    .from_col(Reservas::SalaId)
                    .to_tbl(Salas::Table)
                    .to_col(Salas::SalaId)
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
                    .name(FK_RESERVAS_SALA_ID)
                    .table(Reservas::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_RESERVAS_USUARIO_ID)
                    .table(Reservas::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RESERVAS_SALA_ID)
                    .table(Reservas::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RESERVAS_USUARIO_ID)
                    .table(Reservas::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Reservas::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Reservas {
    Table,
    ReservaId,
    Status,
    DataReserva,
    HoraInicio,
    HoraFim,
    UsuarioId,
    SalaId,
}
