//! `PostgreSQL` integration tests for project persistence.

use super::helpers::{BoxError, TestSchema, test_schema};
use rstest::rstest;
use taskboard::board::{
    domain::ProjectId,
    ports::{BoardStoreError, ProjectRepository},
    services::{CreateProjectRequest, ProjectServiceError, UpdateProjectRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn postgres_create_find_and_list_projects(
    #[future] test_schema: Result<TestSchema, BoxError>,
) -> Result<(), BoxError> {
    let schema = test_schema.await?;
    let created = schema
        .service
        .create_project(CreateProjectRequest::new("Persisted").with_description("In Postgres"))
        .await?;

    let found = schema.service.find_project(created.id()).await?;
    let listed = schema.service.list_projects().await?;

    assert_eq!(found, Some(created.clone()));
    assert_eq!(listed, vec![created]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn postgres_store_reports_duplicate_project(
    #[future] test_schema: Result<TestSchema, BoxError>,
) -> Result<(), BoxError> {
    let schema = test_schema.await?;
    let created = schema
        .service
        .create_project(CreateProjectRequest::new("Once"))
        .await?;

    let result = schema.store.store(&created).await;

    assert!(matches!(
        result,
        Err(BoardStoreError::DuplicateProject(id)) if id == created.id()
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn postgres_update_persists_changes(
    #[future] test_schema: Result<TestSchema, BoxError>,
) -> Result<(), BoxError> {
    let schema = test_schema.await?;
    let created = schema
        .service
        .create_project(CreateProjectRequest::new("Draft"))
        .await?;

    let updated = schema
        .service
        .update_project(
            UpdateProjectRequest::new(created.id())
                .with_name("Final")
                .with_description("Reviewed"),
        )
        .await?;

    let found = schema.service.find_project(created.id()).await?;
    assert_eq!(found, Some(updated));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn postgres_update_of_missing_project_is_not_found(
    #[future] test_schema: Result<TestSchema, BoxError>,
) -> Result<(), BoxError> {
    let schema = test_schema.await?;
    let missing = ProjectId::new();

    let result = schema
        .service
        .update_project(UpdateProjectRequest::new(missing).with_name("Ghost"))
        .await;

    assert!(matches!(
        result,
        Err(ProjectServiceError::Store(BoardStoreError::NotFound(id))) if id == missing
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn postgres_delete_cascades_to_tasks(
    #[future] test_schema: Result<TestSchema, BoxError>,
) -> Result<(), BoxError> {
    let schema = test_schema.await?;
    let created = schema
        .service
        .create_project(CreateProjectRequest::new("Doomed"))
        .await?;
    let todo = schema.insert_status("Todo").await?;
    schema.insert_task(created.id(), todo.id(), "gone").await?;

    schema.service.delete_project(created.id()).await?;
    schema.service.delete_project(created.id()).await?;

    assert!(schema.service.find_project(created.id()).await?.is_none());
    let board = schema.service.get_project_aggregate(created.id()).await?;
    assert!(board.columns.is_empty());
    Ok(())
}
