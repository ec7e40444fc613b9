use sea_orm_migration::prelude::*;

use crate::datatype::ColumnDefExt;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Organisation::Table)
                    .col(
                        ColumnDef::new(Organisation::Id)
                            .char_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Organisation::Name).string().not_null())
                    .col(
                        ColumnDef::new(Organisation::CreatedDate)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Organisation::LastModified)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("index-Organisation-Name-Unique")
                    .table(Organisation::Table)
                    .col(Organisation::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OrganisationMember::Table)
                    .col(
                        ColumnDef::new(OrganisationMember::Id)
                            .char_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OrganisationMember::OrganisationId)
                            .char_len(36)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OrganisationMember::UserId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OrganisationMember::Role).string().not_null())
                    .col(
                        ColumnDef::new(OrganisationMember::CreatedDate)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-OrganisationMember-OrganisationId")
                            .from_tbl(OrganisationMember::Table)
                            .from_col(OrganisationMember::OrganisationId)
                            .to_tbl(Organisation::Table)
                            .to_col(Organisation::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("index-OrganisationMember-OrganisationId-UserId-Unique")
                    .table(OrganisationMember::Table)
                    .col(OrganisationMember::OrganisationId)
                    .col(OrganisationMember::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CertificateTemplate::Table)
                    .col(
                        ColumnDef::new(CertificateTemplate::Id)
                            .char_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CertificateTemplate::OrganisationId)
                            .char_len(36)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CertificateTemplate::Name)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CertificateTemplate::Description).string())
                    .col(
                        ColumnDef::new(CertificateTemplate::CreatedDate)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CertificateTemplate::LastModified)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CertificateTemplate::DeletedAt)
                            .datetime_millisecond_precision(manager),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-CertificateTemplate-OrganisationId")
                            .from_tbl(CertificateTemplate::Table)
                            .from_col(CertificateTemplate::OrganisationId)
                            .to_tbl(Organisation::Table)
                            .to_col(Organisation::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // deleted rows keep their timestamp, freeing the name for reuse
        manager
            .create_index(
                Index::create()
                    .name("index-CertificateTemplate-Name-OrganisationId-DeletedAt-Unique")
                    .table(CertificateTemplate::Table)
                    .col(CertificateTemplate::Name)
                    .col(CertificateTemplate::OrganisationId)
                    .col(CertificateTemplate::DeletedAt)
                    .unique()
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Organisation {
    Table,
    Id,
    Name,
    CreatedDate,
    LastModified,
}

#[derive(DeriveIden)]
enum OrganisationMember {
    Table,
    Id,
    OrganisationId,
    UserId,
    Role,
    CreatedDate,
}

#[derive(DeriveIden)]
enum CertificateTemplate {
    Table,
    Id,
    OrganisationId,
    Name,
    Description,
    CreatedDate,
    LastModified,
    DeletedAt,
}
