//! Ledger schema: contribution drives and transactions.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContributionDrives::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContributionDrives::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ContributionDrives::Title).string_len(200).not_null())
                    .col(ColumnDef::new(ContributionDrives::TitleHi).string_len(200).not_null())
                    .col(ColumnDef::new(ContributionDrives::Description).text().not_null())
                    .col(ColumnDef::new(ContributionDrives::DescriptionHi).text().not_null())
                    .col(
                        ColumnDef::new(ContributionDrives::AmountPerMember)
                            .decimal_len(16, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ContributionDrives::StartDate).date().not_null())
                    .col(ColumnDef::new(ContributionDrives::EndDate).date().null())
                    .col(
                        ColumnDef::new(ContributionDrives::TotalMembers)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ContributionDrives::CreatedBy).big_integer().not_null())
                    .col(
                        ColumnDef::new(ContributionDrives::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Transactions::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Transactions::Kind).string_len(16).not_null())
                    .col(ColumnDef::new(Transactions::Amount).decimal_len(16, 2).not_null())
                    .col(ColumnDef::new(Transactions::Description).text().not_null())
                    .col(ColumnDef::new(Transactions::DescriptionHi).text().not_null())
                    .col(ColumnDef::new(Transactions::PaymentMethod).string_len(32).not_null())
                    .col(ColumnDef::new(Transactions::PaymentDate).date().not_null())
                    .col(ColumnDef::new(Transactions::Status).string_len(16).not_null())
                    .col(ColumnDef::new(Transactions::MemberId).big_integer().null())
                    .col(ColumnDef::new(Transactions::DriveId).big_integer().null())
                    .col(
                        ColumnDef::new(Transactions::IsOpeningBalance)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Transactions::OpeningBalanceMethod)
                            .string_len(32)
                            .null(),
                    )
                    .col(ColumnDef::new(Transactions::CreatedBy).big_integer().not_null())
                    .col(
                        ColumnDef::new(Transactions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Transactions::DecidedBy).big_integer().null())
                    .col(ColumnDef::new(Transactions::DecidedRole).string_len(16).null())
                    .col(
                        ColumnDef::new(Transactions::DecidedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transactions_drive")
                            .from(Transactions::Table, Transactions::DriveId)
                            .to(ContributionDrives::Table, ContributionDrives::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one opening balance per payment method. NULLs never collide.
        manager
            .create_index(
                Index::create()
                    .name("uq_transactions_opening_balance_method")
                    .table(Transactions::Table)
                    .col(Transactions::OpeningBalanceMethod)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_transactions_status_created")
                    .table(Transactions::Table)
                    .col(Transactions::Status)
                    .col(Transactions::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_transactions_drive")
                    .table(Transactions::Table)
                    .col(Transactions::DriveId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ContributionDrives::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ContributionDrives {
    Table,
    Id,
    Title,
    TitleHi,
    Description,
    DescriptionHi,
    AmountPerMember,
    StartDate,
    EndDate,
    TotalMembers,
    CreatedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Transactions {
    Table,
    Id,
    Kind,
    Amount,
    Description,
    DescriptionHi,
    PaymentMethod,
    PaymentDate,
    Status,
    MemberId,
    DriveId,
    IsOpeningBalance,
    OpeningBalanceMethod,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
    DecidedBy,
    DecidedRole,
    DecidedAt,
}
