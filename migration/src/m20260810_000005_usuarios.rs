use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Usuarios::Table)
                    .if_not_exists()
                    .col(pk_auto(Usuarios::UsuarioId))
                    .col(string_len(Usuarios::Nome, 50))
                    .col(string_len_uniq(Usuarios::Email, 75))
                    .col(string_len(Usuarios::Senha, 100))
                    .col(
                        timestamp_with_time_zone(Usuarios::DataCriacao)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Usuarios::DataAtualizacao)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Usuarios::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Usuarios {
    Table,
    UsuarioId,
    Nome,
    Email,
    Senha,
    DataCriacao,
    DataAtualizacao,
}
