//! Database migrations for catalog service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251019_000001_create_partners::Migration),
            Box::new(m20251019_000002_create_shop_products::Migration),
        ]
    }
}

mod m20251019_000001_create_partners {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20251019_000001_create_partners"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Partners::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Partners::Id).uuid().not_null().primary_key())
                        .col(ColumnDef::new(Partners::Name).string().not_null())
                        .col(ColumnDef::new(Partners::LogoSrc).text().not_null())
                        .col(ColumnDef::new(Partners::WebsiteUrl).text().not_null())
                        .col(ColumnDef::new(Partners::AltText).text().not_null())
                        .col(
                            ColumnDef::new(Partners::OrderIndex)
                                .big_integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Partners::Position)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Partners::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Partners::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_partners_order_index")
                        .table(Partners::Table)
                        .col(Partners::OrderIndex)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_partners_name")
                        .table(Partners::Table)
                        .col(Partners::Name)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Partners::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Partners {
        Table,
        Id,
        Name,
        LogoSrc,
        WebsiteUrl,
        AltText,
        OrderIndex,
        Position,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20251019_000002_create_shop_products {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20251019_000002_create_shop_products"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(ShopProducts::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ShopProducts::Id)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(ShopProducts::Title).string().not_null())
                        .col(ColumnDef::new(ShopProducts::Description).text().not_null())
                        .col(ColumnDef::new(ShopProducts::LogoSrc).text().not_null())
                        .col(ColumnDef::new(ShopProducts::LogoAlt).text().not_null())
                        .col(
                            ColumnDef::new(ShopProducts::OrderIndex)
                                .big_integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(ShopProducts::Position)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(ShopProducts::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(ShopProducts::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_shop_products_order_index")
                        .table(ShopProducts::Table)
                        .col(ShopProducts::OrderIndex)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_shop_products_title")
                        .table(ShopProducts::Table)
                        .col(ShopProducts::Title)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ShopProducts::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum ShopProducts {
        Table,
        Id,
        Title,
        Description,
        LogoSrc,
        LogoAlt,
        OrderIndex,
        Position,
        CreatedAt,
        UpdatedAt,
    }
}
