use autometrics::autometrics;
use cert_core::model::certificate_template::CertificateTemplate;
use cert_core::repository::certificate_template_repository::CertificateTemplateRepository;
use cert_core::repository::error::DataLayerError;
use one_dto_mapper::convert_inner;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use shared_types::{OrganisationId, TemplateId};
use time::OffsetDateTime;

use super::CertificateTemplateProvider;
use crate::entity::certificate_template;
use crate::mapper::to_data_layer_error;

#[autometrics]
#[async_trait::async_trait]
impl CertificateTemplateRepository for CertificateTemplateProvider {
    async fn create_certificate_template(
        &self,
        template: CertificateTemplate,
    ) -> Result<TemplateId, DataLayerError> {
        let template = certificate_template::Entity::insert(
            certificate_template::ActiveModel::from(template),
        )
        .exec(&self.db)
        .await
        .map_err(to_data_layer_error)?;

        Ok(template.last_insert_id)
    }

    async fn get_certificate_template(
        &self,
        id: &TemplateId,
    ) -> Result<Option<CertificateTemplate>, DataLayerError> {
        let template = certificate_template::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(template))
    }

    async fn get_certificate_template_list(
        &self,
        organisation_id: &OrganisationId,
    ) -> Result<Vec<CertificateTemplate>, DataLayerError> {
        let templates: Vec<certificate_template::Model> = certificate_template::Entity::find()
            .filter(certificate_template::Column::OrganisationId.eq(organisation_id))
            .filter(certificate_template::Column::DeletedAt.is_null())
            .order_by_asc(certificate_template::Column::CreatedDate)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(templates))
    }

    async fn delete_certificate_template(&self, id: &TemplateId) -> Result<(), DataLayerError> {
        let now = OffsetDateTime::now_utc();

        let result = certificate_template::Entity::update_many()
            .col_expr(certificate_template::Column::DeletedAt, Expr::value(now))
            .filter(certificate_template::Column::Id.eq(id))
            .filter(certificate_template::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotUpdated);
        }

        Ok(())
    }
}
