use super::SeaOrmStorage;
use crate::entity::course_modules::{
    ActiveModel as ModuleActiveModel, Column as ModuleColumn, Entity as CourseModules,
};
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::errors::{AcademyError, Result};
use crate::models::{
    PaginationInfo,
    courses::{
        entities::{Course, CourseModule, CourseStatus},
        requests::{
            CourseListQuery, CreateCourseRequest, CreateModuleRequest, UpdateCourseRequest,
            UpdateModuleRequest,
        },
        responses::CourseListResponse,
    },
};
use crate::utils::{escape_like_pattern, slug::slug_with_suffix, slugify};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 为课程标题生成唯一 slug
    async fn unique_course_slug(&self, title: &str) -> Result<String> {
        let base = slugify(title);
        let taken = Courses::find()
            .filter(Column::Slug.eq(&base))
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询课程 slug 失败: {e}")))?;

        Ok(if taken.is_some() {
            slug_with_suffix(&base)
        } else {
            base
        })
    }

    /// 创建课程（初始为草稿状态）
    pub async fn create_course_impl(
        &self,
        instructor_id: i64,
        req: CreateCourseRequest,
    ) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();
        let slug = self.unique_course_slug(&req.title).await?;

        let model = ActiveModel {
            instructor_id: Set(instructor_id),
            category_id: Set(req.category_id),
            title: Set(req.title),
            slug: Set(slug),
            description: Set(req.description),
            price_cents: Set(req.price_cents),
            status: Set(CourseStatus::Draft.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 分页列出课程
    pub async fn list_courses_with_pagination_impl(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Courses::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Title.contains(&escaped))
                    .add(Column::Slug.contains(&escaped)),
            );
        }

        if let Some(category_id) = query.category_id {
            select = select.filter(Column::CategoryId.eq(category_id));
        }

        if let Some(instructor_id) = query.instructor_id {
            select = select.filter(Column::InstructorId.eq(instructor_id));
        }

        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询课程总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询课程页数失败: {e}")))?;
        let courses = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(CourseListResponse {
            items: courses.into_iter().map(|m| m.into_course()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新课程（改标题时重新生成 slug）
    pub async fn update_course_impl(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let existing = self.get_course_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            let slug = self.unique_course_slug(&title).await?;
            model.title = Set(title);
            model.slug = Set(slug);
        }

        if let Some(category_id) = update.category_id {
            model.category_id = Set(Some(category_id));
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(price_cents) = update.price_cents {
            model.price_cents = Set(price_cents);
        }

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("更新课程失败: {e}")))?;

        self.get_course_by_id_impl(id).await
    }

    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 创建课程章节；position 缺省时追加到末尾
    pub async fn create_course_module_impl(
        &self,
        course_id: i64,
        req: CreateModuleRequest,
    ) -> Result<CourseModule> {
        let now = chrono::Utc::now().timestamp();

        let position = match req.position {
            Some(p) => p.max(1),
            None => {
                let last: Option<i32> = CourseModules::find()
                    .filter(ModuleColumn::CourseId.eq(course_id))
                    .select_only()
                    .column_as(ModuleColumn::Position.max(), "max_position")
                    .into_tuple()
                    .one(&self.db)
                    .await
                    .map_err(|e| {
                        AcademyError::database_operation(format!("查询章节序号失败: {e}"))
                    })?
                    .flatten();
                last.unwrap_or(0) + 1
            }
        };

        let model = ModuleActiveModel {
            course_id: Set(course_id),
            title: Set(req.title),
            content: Set(req.content),
            position: Set(position),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("创建章节失败: {e}")))?;

        Ok(result.into_module())
    }

    pub async fn get_course_module_by_id_impl(&self, id: i64) -> Result<Option<CourseModule>> {
        let result = CourseModules::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询章节失败: {e}")))?;

        Ok(result.map(|m| m.into_module()))
    }

    /// 按 position 升序列出课程章节
    pub async fn list_course_modules_impl(&self, course_id: i64) -> Result<Vec<CourseModule>> {
        let modules = CourseModules::find()
            .filter(ModuleColumn::CourseId.eq(course_id))
            .order_by_asc(ModuleColumn::Position)
            .all(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询章节列表失败: {e}")))?;

        Ok(modules.into_iter().map(|m| m.into_module()).collect())
    }

    pub async fn update_course_module_impl(
        &self,
        id: i64,
        update: UpdateModuleRequest,
    ) -> Result<Option<CourseModule>> {
        let existing = self.get_course_module_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ModuleActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(content) = update.content {
            model.content = Set(Some(content));
        }

        if let Some(position) = update.position {
            model.position = Set(position.max(1));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("更新章节失败: {e}")))?;

        self.get_course_module_by_id_impl(id).await
    }

    pub async fn delete_course_module_impl(&self, id: i64) -> Result<bool> {
        let result = CourseModules::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("删除章节失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
