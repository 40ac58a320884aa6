use super::SeaOrmStorage;
use crate::entity::certificates::{self, ActiveModel, Column, Entity as Certificates};
use crate::entity::enrollments::{self, Entity as Enrollments};
use crate::entity::{courses::Entity as Courses, users::Entity as Users};
use crate::errors::{AcademyError, Result};
use crate::models::{
    PaginationInfo,
    certificates::{
        entities::{Certificate, CertificateStatus},
        requests::CertificateListQuery,
        responses::{CertificateListResponse, CertificateVerifyResponse},
    },
};
use crate::utils::generate_certificate_serial;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set,
};

impl SeaOrmStorage {
    /// 签发证书，序列号唯一键冲突时重新生成一次
    pub async fn create_certificate_impl(&self, enrollment_id: i64) -> Result<Certificate> {
        let now = chrono::Utc::now().timestamp();

        for attempt in 0..2 {
            let model = ActiveModel {
                enrollment_id: Set(enrollment_id),
                serial: Set(generate_certificate_serial()),
                status: Set(CertificateStatus::Issued.to_string()),
                issued_at: Set(now),
                ..Default::default()
            };

            match model.insert(&self.db).await {
                Ok(result) => return Ok(result.into_certificate()),
                Err(e) => {
                    let msg = e.to_string();
                    if attempt == 0 && msg.contains("UNIQUE constraint failed") {
                        continue;
                    }
                    return Err(AcademyError::database_operation(format!(
                        "签发证书失败: {msg}"
                    )));
                }
            }
        }

        unreachable!("certificate serial retry loop always returns")
    }

    pub async fn get_certificate_by_id_impl(&self, id: i64) -> Result<Option<Certificate>> {
        let result = Certificates::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询证书失败: {e}")))?;

        Ok(result.map(|m| m.into_certificate()))
    }

    pub async fn get_certificate_by_enrollment_impl(
        &self,
        enrollment_id: i64,
    ) -> Result<Option<Certificate>> {
        let result = Certificates::find()
            .filter(Column::EnrollmentId.eq(enrollment_id))
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询证书失败: {e}")))?;

        Ok(result.map(|m| m.into_certificate()))
    }

    /// 公开校验：按序列号取证书并补全课程名与持有人
    pub async fn get_certificate_verification_impl(
        &self,
        serial: &str,
    ) -> Result<Option<CertificateVerifyResponse>> {
        let certificate = Certificates::find()
            .filter(Column::Serial.eq(serial))
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询证书失败: {e}")))?;

        let Some(certificate) = certificate else {
            return Ok(None);
        };

        let enrollment = Enrollments::find_by_id(certificate.enrollment_id)
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询选课记录失败: {e}")))?
            .ok_or_else(|| {
                AcademyError::database_operation("证书关联的选课记录不存在".to_string())
            })?;

        let course = Courses::find_by_id(enrollment.course_id)
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询课程失败: {e}")))?;

        let holder = Users::find_by_id(enrollment.user_id)
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询用户失败: {e}")))?;

        let holder_name = holder
            .map(|u| u.display_name.unwrap_or(u.username))
            .unwrap_or_default();

        let cert = certificate.into_certificate();

        Ok(Some(CertificateVerifyResponse {
            serial: cert.serial,
            status: cert.status,
            course_title: course.map(|c| c.title).unwrap_or_default(),
            holder_name,
            issued_at: cert.issued_at,
        }))
    }

    /// 分页列出证书（course/user 过滤经由选课记录联表）
    pub async fn list_certificates_with_pagination_impl(
        &self,
        query: CertificateListQuery,
    ) -> Result<CertificateListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Certificates::find();

        if query.course_id.is_some() || query.user_id.is_some() {
            select = select.join(
                JoinType::InnerJoin,
                certificates::Relation::Enrollment.def(),
            );

            if let Some(course_id) = query.course_id {
                select = select.filter(enrollments::Column::CourseId.eq(course_id));
            }

            if let Some(user_id) = query.user_id {
                select = select.filter(enrollments::Column::UserId.eq(user_id));
            }
        }

        select = select.order_by_desc(Column::IssuedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询证书总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询证书页数失败: {e}")))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询证书列表失败: {e}")))?;

        Ok(CertificateListResponse {
            items: items.into_iter().map(|m| m.into_certificate()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 吊销证书（状态翻转，记录保留）
    pub async fn revoke_certificate_impl(&self, id: i64) -> Result<bool> {
        let result = Certificates::update_many()
            .col_expr(
                Column::Status,
                sea_orm::sea_query::Expr::value(CertificateStatus::Revoked.to_string()),
            )
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("吊销证书失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
