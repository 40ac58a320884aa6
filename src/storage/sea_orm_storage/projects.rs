use super::SeaOrmStorage;
use crate::entity::projects::{ActiveModel, Column, Entity as Projects};
use crate::entity::tasks::{ActiveModel as TaskActiveModel, Column as TaskColumn, Entity as Tasks};
use crate::errors::{AcademyError, Result};
use crate::models::{
    PaginationInfo,
    projects::{
        entities::{Project, ProjectStatus, Task, TaskStatus},
        requests::{
            CreateProjectRequest, CreateTaskRequest, ProjectListQuery, TaskListQuery,
            UpdateProjectRequest, UpdateTaskRequest,
        },
        responses::{ProjectListResponse, TaskListResponse},
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建项目
    pub async fn create_project_impl(
        &self,
        owner_id: i64,
        req: CreateProjectRequest,
    ) -> Result<Project> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            owner_id: Set(owner_id),
            title: Set(req.title),
            description: Set(req.description),
            status: Set(ProjectStatus::Active.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("创建项目失败: {e}")))?;

        Ok(result.into_project())
    }

    pub async fn get_project_by_id_impl(&self, id: i64) -> Result<Option<Project>> {
        let result = Projects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询项目失败: {e}")))?;

        Ok(result.map(|m| m.into_project()))
    }

    pub async fn list_projects_with_pagination_impl(
        &self,
        query: ProjectListQuery,
    ) -> Result<ProjectListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Projects::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Title.contains(&escaped));
        }

        if let Some(owner_id) = query.owner_id {
            select = select.filter(Column::OwnerId.eq(owner_id));
        }

        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询项目总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询项目页数失败: {e}")))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询项目列表失败: {e}")))?;

        Ok(ProjectListResponse {
            items: items.into_iter().map(|m| m.into_project()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn update_project_impl(
        &self,
        id: i64,
        update: UpdateProjectRequest,
    ) -> Result<Option<Project>> {
        let existing = self.get_project_by_id_impl(id).await?;
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
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("更新项目失败: {e}")))?;

        self.get_project_by_id_impl(id).await
    }

    pub async fn delete_project_impl(&self, id: i64) -> Result<bool> {
        let result = Projects::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("删除项目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 创建任务（初始为 todo）
    pub async fn create_task_impl(&self, project_id: i64, req: CreateTaskRequest) -> Result<Task> {
        let now = chrono::Utc::now().timestamp();

        let model = TaskActiveModel {
            project_id: Set(project_id),
            assignee_id: Set(req.assignee_id),
            title: Set(req.title),
            description: Set(req.description),
            status: Set(TaskStatus::Todo.to_string()),
            due_date: Set(req.due_date.map(|d| d.timestamp())),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("创建任务失败: {e}")))?;

        Ok(result.into_task())
    }

    pub async fn get_task_by_id_impl(&self, id: i64) -> Result<Option<Task>> {
        let result = Tasks::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询任务失败: {e}")))?;

        Ok(result.map(|m| m.into_task()))
    }

    pub async fn list_tasks_with_pagination_impl(
        &self,
        query: TaskListQuery,
    ) -> Result<TaskListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Tasks::find();

        if let Some(project_id) = query.project_id {
            select = select.filter(TaskColumn::ProjectId.eq(project_id));
        }

        if let Some(ref status) = query.status {
            select = select.filter(TaskColumn::Status.eq(status.to_string()));
        }

        if let Some(assignee_id) = query.assignee_id {
            select = select.filter(TaskColumn::AssigneeId.eq(assignee_id));
        }

        select = select.order_by_desc(TaskColumn::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询任务总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询任务页数失败: {e}")))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询任务列表失败: {e}")))?;

        Ok(TaskListResponse {
            items: items.into_iter().map(|m| m.into_task()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn update_task_impl(
        &self,
        id: i64,
        update: UpdateTaskRequest,
    ) -> Result<Option<Task>> {
        let existing = self.get_task_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = TaskActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(assignee_id) = update.assignee_id {
            model.assignee_id = Set(Some(assignee_id));
        }

        if let Some(due_date) = update.due_date {
            model.due_date = Set(Some(due_date.timestamp()));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("更新任务失败: {e}")))?;

        self.get_task_by_id_impl(id).await
    }

    /// 任务状态单字段写入
    pub async fn update_task_status_impl(
        &self,
        id: i64,
        status: TaskStatus,
    ) -> Result<Option<Task>> {
        let existing = self.get_task_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = TaskActiveModel {
            id: Set(id),
            status: Set(status.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("更新任务状态失败: {e}")))?;

        self.get_task_by_id_impl(id).await
    }

    pub async fn delete_task_impl(&self, id: i64) -> Result<bool> {
        let result = Tasks::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("删除任务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
