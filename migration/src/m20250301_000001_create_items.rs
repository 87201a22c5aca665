use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Items::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Items::Name).string().not_null())
                    .col(ColumnDef::new(Items::Rack).string().not_null())
                    .col(ColumnDef::new(Items::Bin).string().not_null())
                    .col(ColumnDef::new(Items::Quantity).big_integer().not_null())
                    .col(ColumnDef::new(Items::Updated).string().not_null())
                    .to_owned(),
            )
            .await?;

        // name is the lookup key for search/update/delete
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_items_name")
                    .table(Items::Table)
                    .col(Items::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Items {
    Table,
    Id,
    Name,
    Rack,
    Bin,
    Quantity,
    Updated,
}
