use cert_core::model::organisation::Organisation;
use one_dto_mapper::Into;
use sea_orm::entity::prelude::*;
use shared_types::OrganisationId;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Into)]
#[into(Organisation)]
#[sea_orm(table_name = "organisation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: OrganisationId,
    pub name: String,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::certificate_template::Entity")]
    CertificateTemplate,
    #[sea_orm(has_many = "super::organisation_member::Entity")]
    OrganisationMember,
}

impl Related<super::certificate_template::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CertificateTemplate.def()
    }
}

impl Related<super::organisation_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrganisationMember.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
