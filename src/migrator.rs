use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_catalog_tables::Migration),
            Box::new(m20240301_000002_create_collections_table::Migration),
            Box::new(m20240301_000003_create_ratings_tables::Migration),
            Box::new(m20240301_000004_create_reviews_table::Migration),
        ]
    }
}

// Migration implementations

mod m20240301_000001_create_catalog_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000001_create_catalog_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Categories::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Categories::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Categories::Name).string_len(150).not_null())
                        .col(ColumnDef::new(Categories::Description).text().not_null())
                        .col(
                            ColumnDef::new(Categories::Url)
                                .string_len(150)
                                .not_null()
                                .unique_key(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Authors::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Authors::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Authors::Name).string_len(100).not_null())
                        .col(ColumnDef::new(Authors::Age).integer().not_null().default(0))
                        .col(ColumnDef::new(Authors::Description).text().not_null())
                        .col(ColumnDef::new(Authors::Image).string_len(255).not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_authors_name")
                        .table(Authors::Table)
                        .col(Authors::Name)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Genres::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Genres::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Genres::Name).string_len(100).not_null())
                        .col(ColumnDef::new(Genres::Description).text().not_null())
                        .col(ColumnDef::new(Genres::Url).string_len(150).null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Products::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Products::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Products::Title).string_len(100).not_null())
                        .col(ColumnDef::new(Products::Description).text().null())
                        .col(ColumnDef::new(Products::Image).string_len(255).not_null())
                        .col(
                            ColumnDef::new(Products::Year)
                                .integer()
                                .not_null()
                                .default(2020),
                        )
                        .col(ColumnDef::new(Products::Country).string_len(30).null())
                        .col(ColumnDef::new(Products::DateAdded).date().not_null())
                        .col(ColumnDef::new(Products::CategoryId).integer().null())
                        .col(
                            ColumnDef::new(Products::Url)
                                .string_len(150)
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(Products::Draft)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_products_category_id")
                                .from(Products::Table, Products::CategoryId)
                                .to(Categories::Table, Categories::Id)
                                .on_delete(ForeignKeyAction::SetNull)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_products_draft")
                        .table(Products::Table)
                        .col(Products::Draft)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(ProductAuthors::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(ProductAuthors::ProductId).integer().not_null())
                        .col(ColumnDef::new(ProductAuthors::AuthorId).integer().not_null())
                        .primary_key(
                            Index::create()
                                .col(ProductAuthors::ProductId)
                                .col(ProductAuthors::AuthorId),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_product_authors_product_id")
                                .from(ProductAuthors::Table, ProductAuthors::ProductId)
                                .to(Products::Table, Products::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_product_authors_author_id")
                                .from(ProductAuthors::Table, ProductAuthors::AuthorId)
                                .to(Authors::Table, Authors::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(ProductGenres::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(ProductGenres::ProductId).integer().not_null())
                        .col(ColumnDef::new(ProductGenres::GenreId).integer().not_null())
                        .primary_key(
                            Index::create()
                                .col(ProductGenres::ProductId)
                                .col(ProductGenres::GenreId),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_product_genres_product_id")
                                .from(ProductGenres::Table, ProductGenres::ProductId)
                                .to(Products::Table, Products::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_product_genres_genre_id")
                                .from(ProductGenres::Table, ProductGenres::GenreId)
                                .to(Genres::Table, Genres::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ProductGenres::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(ProductAuthors::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Products::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Genres::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Authors::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Categories::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Categories {
        Table,
        Id,
        Name,
        Description,
        Url,
    }

    #[derive(DeriveIden)]
    enum Authors {
        Table,
        Id,
        Name,
        Age,
        Description,
        Image,
    }

    #[derive(DeriveIden)]
    enum Genres {
        Table,
        Id,
        Name,
        Description,
        Url,
    }

    #[derive(DeriveIden)]
    enum Products {
        Table,
        Id,
        Title,
        Description,
        Image,
        Year,
        Country,
        DateAdded,
        CategoryId,
        Url,
        Draft,
    }

    #[derive(DeriveIden)]
    enum ProductAuthors {
        Table,
        ProductId,
        AuthorId,
    }

    #[derive(DeriveIden)]
    enum ProductGenres {
        Table,
        ProductId,
        GenreId,
    }
}

mod m20240301_000002_create_collections_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000002_create_collections_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Collections::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Collections::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Collections::Title).string_len(100).not_null())
                        .col(ColumnDef::new(Collections::Description).text().not_null())
                        .col(ColumnDef::new(Collections::Image).string_len(255).not_null())
                        .col(ColumnDef::new(Collections::ProductId).integer().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_collections_product_id")
                                .from(Collections::Table, Collections::ProductId)
                                .to(Products::Table, Products::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_collections_product_id")
                        .table(Collections::Table)
                        .col(Collections::ProductId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Collections::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Collections {
        Table,
        Id,
        Title,
        Description,
        Image,
        ProductId,
    }

    #[derive(DeriveIden)]
    enum Products {
        Table,
        Id,
    }
}

mod m20240301_000003_create_ratings_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000003_create_ratings_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(OverallRatings::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(OverallRatings::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(OverallRatings::Value)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Ratings::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Ratings::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Ratings::Ip).string_len(15).not_null())
                        .col(ColumnDef::new(Ratings::StarId).integer().not_null())
                        .col(ColumnDef::new(Ratings::ProductId).integer().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_ratings_star_id")
                                .from(Ratings::Table, Ratings::StarId)
                                .to(OverallRatings::Table, OverallRatings::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_ratings_product_id")
                                .from(Ratings::Table, Ratings::ProductId)
                                .to(Products::Table, Products::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_ratings_product_id")
                        .table(Ratings::Table)
                        .col(Ratings::ProductId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Ratings::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(OverallRatings::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum OverallRatings {
        Table,
        Id,
        Value,
    }

    #[derive(DeriveIden)]
    enum Ratings {
        Table,
        Id,
        Ip,
        StarId,
        ProductId,
    }

    #[derive(DeriveIden)]
    enum Products {
        Table,
        Id,
    }
}

mod m20240301_000004_create_reviews_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000004_create_reviews_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Reviews::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Reviews::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Reviews::Email).string_len(254).not_null())
                        .col(ColumnDef::new(Reviews::Name).string_len(100).not_null())
                        .col(ColumnDef::new(Reviews::Text).text().not_null())
                        .col(ColumnDef::new(Reviews::ParentId).integer().null())
                        .col(ColumnDef::new(Reviews::ProductId).integer().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_reviews_parent_id")
                                .from(Reviews::Table, Reviews::ParentId)
                                .to(Reviews::Table, Reviews::Id)
                                .on_delete(ForeignKeyAction::SetNull),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_reviews_product_id")
                                .from(Reviews::Table, Reviews::ProductId)
                                .to(Products::Table, Products::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_reviews_product_parent")
                        .table(Reviews::Table)
                        .col(Reviews::ProductId)
                        .col(Reviews::ParentId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Reviews::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Reviews {
        Table,
        Id,
        Email,
        Name,
        Text,
        ParentId,
        ProductId,
    }

    #[derive(DeriveIden)]
    enum Products {
        Table,
        Id,
    }
}
