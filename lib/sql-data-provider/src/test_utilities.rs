use cert_core::model::membership::MemberRole;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use shared_types::{MembershipId, OrganisationId, TemplateId, UserId};
use time::OffsetDateTime;
use time::macros::datetime;
use uuid::Uuid;

use crate::entity::{certificate_template, organisation, organisation_member};
use crate::{DbConn, db_conn};

pub fn get_dummy_date() -> OffsetDateTime {
    datetime!(2005-04-02 21:37 +1)
}

pub async fn setup_test_database() -> DbConn {
    db_conn("sqlite::memory:").await
}

pub async fn insert_organisation_to_database(
    database: &DatabaseConnection,
    id: Option<OrganisationId>,
    name: Option<&str>,
) -> Result<OrganisationId, DbErr> {
    let id = id.unwrap_or_else(|| Uuid::new_v4().into());

    let organisation = organisation::ActiveModel {
        id: Set(id),
        name: Set(name.map(str::to_owned).unwrap_or_else(|| id.to_string())),
        created_date: Set(get_dummy_date()),
        last_modified: Set(get_dummy_date()),
    }
    .insert(database)
    .await?;

    Ok(organisation.id)
}

pub async fn insert_organisation_member_to_database(
    database: &DatabaseConnection,
    organisation_id: OrganisationId,
    user_id: UserId,
    role: MemberRole,
) -> Result<MembershipId, DbErr> {
    let member = organisation_member::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        organisation_id: Set(organisation_id),
        user_id: Set(user_id),
        role: Set(role.into()),
        created_date: Set(get_dummy_date()),
    }
    .insert(database)
    .await?;

    Ok(member.id)
}

pub async fn insert_certificate_template_to_database(
    database: &DatabaseConnection,
    organisation_id: OrganisationId,
    name: &str,
    deleted_at: Option<OffsetDateTime>,
) -> Result<TemplateId, DbErr> {
    let template = certificate_template::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        organisation_id: Set(organisation_id),
        name: Set(name.to_owned()),
        description: Set(None),
        created_date: Set(get_dummy_date()),
        last_modified: Set(get_dummy_date()),
        deleted_at: Set(deleted_at),
    }
    .insert(database)
    .await?;

    Ok(template.id)
}
