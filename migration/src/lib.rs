pub use sea_orm_migration::prelude::*;

mod m20260810_000001_blocos;
mod m20260810_000002_equipamentos;
mod m20260810_000003_salas;
mod m20260810_000004_sala_equipamento;
mod m20260810_000005_usuarios;
mod m20260810_000006_reservas;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_blocos::Migration),
            Box::new(m20260810_000002_equipamentos::Migration),
            Box::new(m20260810_000003_salas::Migration),
            Box::new(m20260810_000004_sala_equipamento::Migration),
            Box::new(m20260810_000005_usuarios::Migration),
            Box::new(m20260810_000006_reservas::Migration),
        ]
    }
}
