//! Service orchestration tests for task lifecycle and change notifications.

use std::sync::Arc;

use crate::account::{
    adapters::memory::InMemoryAccountRepository,
    domain::{Account, AccountId, AccountProfile, EmailAddress},
    ports::AccountRepository,
};
use crate::broadcast::EventBroadcaster;
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskDomainError, TaskId},
    services::{CreateTaskRequest, TaskLifecycleError, TaskLifecycleService, UpdateTaskRequest},
};
use mockable::DefaultClock;
use rstest::rstest;

type TestService =
    TaskLifecycleService<InMemoryTaskRepository, InMemoryAccountRepository, DefaultClock>;

struct Harness {
    service: TestService,
    accounts: Arc<InMemoryAccountRepository>,
    broadcaster: EventBroadcaster,
}

fn harness() -> Harness {
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let broadcaster = EventBroadcaster::default();
    let service = TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::clone(&accounts),
        broadcaster.clone(),
        Arc::new(DefaultClock),
    );
    Harness {
        service,
        accounts,
        broadcaster,
    }
}

async fn stored_owner(accounts: &InMemoryAccountRepository, email: &str) -> AccountId {
    let address = EmailAddress::new(email).expect("valid email");
    let account = Account::new(
        address,
        AccountProfile::new("Ada", "Lovelace", "+44 20 7946 0000", "GB"),
        &DefaultClock,
    );
    accounts.insert(&account).await.expect("insert should succeed");
    account.id()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_persists_and_projects() {
    let harness = harness();
    let owner = stored_owner(&harness.accounts, "ada@example.com").await;

    let projection = harness
        .service
        .create_task(CreateTaskRequest::new(owner, "write the report", "for Q3"))
        .await
        .expect("creation should succeed");

    assert_eq!(projection.title, "write the report");
    assert!(!projection.completed);
    assert_eq!(projection.owner.email, "ada@example.com");

    let fetched = harness
        .service
        .fetch_task(projection.id)
        .await
        .expect("lookup should succeed")
        .expect("task should be live");
    assert_eq!(fetched, projection);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_against_unknown_owner_persists_nothing() {
    let harness = harness();

    let result = harness
        .service
        .create_task(CreateTaskRequest::new(AccountId::new(), "orphaned", ""))
        .await;
    assert!(matches!(result, Err(TaskLifecycleError::OwnerNotFound(_))));

    let tasks = harness
        .service
        .fetch_all_tasks()
        .await
        .expect("listing should succeed");
    assert!(tasks.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_against_tombstoned_owner_is_rejected() {
    let harness = harness();
    let owner = stored_owner(&harness.accounts, "ada@example.com").await;
    let mut account = harness
        .accounts
        .find_by_id(owner)
        .await
        .expect("lookup should succeed")
        .expect("account should exist");
    account.tombstone(&DefaultClock);
    harness
        .accounts
        .update(&account)
        .await
        .expect("update should succeed");

    let result = harness
        .service
        .create_task(CreateTaskRequest::new(owner, "for a ghost", ""))
        .await;
    assert!(matches!(result, Err(TaskLifecycleError::OwnerNotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_with_blank_title_is_a_domain_error() {
    let harness = harness();
    let owner = stored_owner(&harness.accounts, "ada@example.com").await;

    let result = harness
        .service
        .create_task(CreateTaskRequest::new(owner, "   ", "no title"))
        .await;
    assert!(matches!(
        result,
        Err(TaskLifecycleError::Domain(TaskDomainError::EmptyTitle))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_task_overwrites_every_mutable_field() {
    let harness = harness();
    let owner = stored_owner(&harness.accounts, "ada@example.com").await;
    let created = harness
        .service
        .create_task(CreateTaskRequest::new(owner, "draft", "first pass"))
        .await
        .expect("creation should succeed");

    let updated = harness
        .service
        .update_task(UpdateTaskRequest::new(created.id, "final", "shipped", true))
        .await
        .expect("update should succeed");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "final");
    assert_eq!(updated.description, "shipped");
    assert!(updated.completed);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_unknown_task_is_not_found() {
    let harness = harness();

    let result = harness
        .service
        .update_task(UpdateTaskRequest::new(TaskId::new(), "title", "", false))
        .await;
    assert!(matches!(result, Err(TaskLifecycleError::TaskNotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_tasks_vanish_from_reads_and_updates() {
    let harness = harness();
    let owner = stored_owner(&harness.accounts, "ada@example.com").await;
    let created = harness
        .service
        .create_task(CreateTaskRequest::new(owner, "draft", ""))
        .await
        .expect("creation should succeed");

    harness
        .service
        .delete_task(created.id)
        .await
        .expect("deletion should succeed");

    assert!(
        harness
            .service
            .fetch_task(created.id)
            .await
            .expect("lookup should succeed")
            .is_none()
    );
    assert!(
        harness
            .service
            .fetch_all_tasks()
            .await
            .expect("listing should succeed")
            .is_empty()
    );
    let result = harness
        .service
        .update_task(UpdateTaskRequest::new(created.id, "revived", "", false))
        .await;
    assert!(matches!(result, Err(TaskLifecycleError::TaskNotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_is_idempotent_and_ignores_unknown_identifiers() {
    let harness = harness();
    let owner = stored_owner(&harness.accounts, "ada@example.com").await;
    let created = harness
        .service
        .create_task(CreateTaskRequest::new(owner, "draft", ""))
        .await
        .expect("creation should succeed");

    harness
        .service
        .delete_task(created.id)
        .await
        .expect("deletion should succeed");
    harness
        .service
        .delete_task(created.id)
        .await
        .expect("repeat deletion should succeed");
    harness
        .service
        .delete_task(TaskId::new())
        .await
        .expect("unknown identifier should be a no-op");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn each_mutation_publishes_exactly_one_notification() {
    let harness = harness();
    let owner = stored_owner(&harness.accounts, "ada@example.com").await;
    let mut receiver = harness.broadcaster.subscribe();

    let created = harness
        .service
        .create_task(CreateTaskRequest::new(owner, "draft", ""))
        .await
        .expect("creation should succeed");
    harness
        .service
        .update_task(UpdateTaskRequest::new(created.id, "final", "", true))
        .await
        .expect("update should succeed");
    harness
        .service
        .delete_task(created.id)
        .await
        .expect("deletion should succeed");

    assert_eq!(
        receiver.recv().await.expect("creation notification"),
        "task created: draft"
    );
    assert_eq!(
        receiver.recv().await.expect("update notification"),
        "task updated: final"
    );
    assert_eq!(
        receiver.recv().await.expect("deletion notification"),
        format!("task deleted: {}", created.id)
    );
    assert!(receiver.try_recv().is_err());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_mutations_publish_nothing() {
    let harness = harness();
    let mut receiver = harness.broadcaster.subscribe();

    let result = harness
        .service
        .create_task(CreateTaskRequest::new(AccountId::new(), "orphaned", ""))
        .await;
    assert!(matches!(result, Err(TaskLifecycleError::OwnerNotFound(_))));
    harness
        .service
        .delete_task(TaskId::new())
        .await
        .expect("unknown identifier should be a no-op");

    assert!(receiver.try_recv().is_err());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_still_project_after_their_owner_is_tombstoned() {
    let harness = harness();
    let owner = stored_owner(&harness.accounts, "ada@example.com").await;
    let created = harness
        .service
        .create_task(CreateTaskRequest::new(owner, "outlives the owner", ""))
        .await
        .expect("creation should succeed");

    let mut account = harness
        .accounts
        .find_by_id(owner)
        .await
        .expect("lookup should succeed")
        .expect("account should exist");
    account.tombstone(&DefaultClock);
    harness
        .accounts
        .update(&account)
        .await
        .expect("update should succeed");

    let fetched = harness
        .service
        .fetch_task(created.id)
        .await
        .expect("lookup should succeed")
        .expect("task should still be live");
    assert_eq!(fetched.owner.email, "ada@example.com");
}
