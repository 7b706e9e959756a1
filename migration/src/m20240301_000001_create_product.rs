use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Rows are written by the external ingestion job; no primary key on purpose
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Product::Date).date().not_null())
                    .col(ColumnDef::new(Product::ProductName).text().not_null())
                    .col(ColumnDef::new(Product::PricePerPack).decimal().null())
                    .col(ColumnDef::new(Product::PricePerUnit).decimal().null())
                    .col(ColumnDef::new(Product::UnitOfMeasure).text().null())
                    .col(ColumnDef::new(Product::DiscountVerbose).text().null())
                    .col(ColumnDef::new(Product::DiscountPercentage).decimal().null())
                    .col(ColumnDef::new(Product::OldPrice).decimal().null())
                    .col(ColumnDef::new(Product::DepartmentL1).text().null())
                    .col(ColumnDef::new(Product::DepartmentL2).text().null())
                    .col(ColumnDef::new(Product::DepartmentL3).text().null())
                    .col(ColumnDef::new(Product::Plu).text().null())
                    .col(ColumnDef::new(Product::Category).text().null())
                    .col(ColumnDef::new(Product::Ean).text().not_null())
                    .to_owned(),
            )
            .await?;

        // Used by the get-item-by-ean* routes
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_product_date_ean")
                    .table(Product::Table)
                    .col(Product::Date)
                    .col(Product::Ean)
                    .to_owned(),
            )
            .await?;

        // Used by the get-item-by-name* and get-all-items routes
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_product_date_name")
                    .table(Product::Table)
                    .col(Product::Date)
                    .col(Product::ProductName)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_product_date_name")
                    .table(Product::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_product_date_ean")
                    .table(Product::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Product {
    Table,
    Date,
    ProductName,
    PricePerPack,
    PricePerUnit,
    UnitOfMeasure,
    DiscountVerbose,
    DiscountPercentage,
    OldPrice,
    #[sea_orm(iden = "department_l1")]
    DepartmentL1,
    #[sea_orm(iden = "department_l2")]
    DepartmentL2,
    #[sea_orm(iden = "department_l3")]
    DepartmentL3,
    Plu,
    Category,
    Ean,
}
