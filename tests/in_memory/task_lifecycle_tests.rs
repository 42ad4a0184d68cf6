//! End-to-end task flows: sign-up, task CRUD, and change notifications.

use super::helpers::{App, app, sign_up_request};
use rstest::rstest;
use tessera::account::domain::{AccountId, EmailAddress};
use tessera::account::ports::AccountRepository;
use tessera::api::ResponseEnvelope;
use tessera::task::services::{CreateTaskRequest, TaskLifecycleError, UpdateTaskRequest};

async fn signed_up_owner(app: &App, email: &str) -> AccountId {
    app.auth
        .sign_up(sign_up_request(email))
        .await
        .expect("sign-up should succeed");
    let address = EmailAddress::new(email).expect("valid email");
    app.accounts
        .find_by_email_any(&address)
        .await
        .expect("lookup should succeed")
        .map(|account| account.id())
        .expect("account should exist")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn signed_up_account_can_run_the_full_task_lifecycle(app: App) {
    let owner = signed_up_owner(&app, "ada@example.com").await;
    let mut receiver = app.broadcaster.subscribe();

    let created = app
        .tasks
        .create_task(CreateTaskRequest::new(owner, "write the report", "for Q3"))
        .await
        .expect("creation should succeed");
    assert_eq!(created.owner.email, "ada@example.com");

    let updated = app
        .tasks
        .update_task(UpdateTaskRequest::new(created.id, "write the report", "done", true))
        .await
        .expect("update should succeed");
    assert!(updated.completed);

    app.tasks
        .delete_task(created.id)
        .await
        .expect("deletion should succeed");
    assert!(
        app.tasks
            .fetch_task(created.id)
            .await
            .expect("lookup should succeed")
            .is_none()
    );

    assert_eq!(
        receiver.recv().await.expect("creation notification"),
        "task created: write the report"
    );
    assert_eq!(
        receiver.recv().await.expect("update notification"),
        "task updated: write the report"
    );
    assert_eq!(
        receiver.recv().await.expect("deletion notification"),
        format!("task deleted: {}", created.id)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_account_cannot_receive_new_tasks(app: App) {
    let owner = signed_up_owner(&app, "ada@example.com").await;
    app.auth
        .delete_account(owner)
        .await
        .expect("deletion should succeed");

    let result = app
        .tasks
        .create_task(CreateTaskRequest::new(owner, "for a ghost", ""))
        .await;
    assert!(matches!(result, Err(TaskLifecycleError::OwnerNotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn existing_tasks_survive_their_owner_deletion(app: App) {
    let owner = signed_up_owner(&app, "ada@example.com").await;
    let created = app
        .tasks
        .create_task(CreateTaskRequest::new(owner, "outlives the owner", ""))
        .await
        .expect("creation should succeed");

    app.auth
        .delete_account(owner)
        .await
        .expect("deletion should succeed");

    let fetched = app
        .tasks
        .fetch_task(created.id)
        .await
        .expect("lookup should succeed")
        .expect("task should still be live");
    assert_eq!(fetched.owner.email, "ada@example.com");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_projections_wrap_into_success_envelopes(app: App) {
    let owner = signed_up_owner(&app, "ada@example.com").await;
    let created = app
        .tasks
        .create_task(CreateTaskRequest::new(owner, "write the report", "for Q3"))
        .await
        .expect("creation should succeed");

    let payload = serde_json::to_value(&created).expect("projection serializes");
    let envelope = ResponseEnvelope::success("task created", payload);
    let value = serde_json::to_value(&envelope).expect("envelope serializes");

    assert_eq!(value["code"], 200);
    assert_eq!(value["result"]["title"], "write the report");
    assert_eq!(value["result"]["owner"]["email"], "ada@example.com");
}
