use tasktrack_core::{MemoryStorage, StoreError, TaskPatch, TaskService, TaskValidationError};
use uuid::Uuid;

fn service() -> TaskService<MemoryStorage> {
    TaskService::with_storage(MemoryStorage::default())
}

#[test]
fn add_and_list_tasks() {
    let service = service();

    let added = service
        .add_task("water plants", Some("balcony only".to_string()))
        .unwrap();
    assert!(!added.completed);

    let listed = service.list_tasks().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], added);
}

#[test]
fn add_task_rejects_blank_title() {
    let service = service();

    let err = service.add_task("  ", None).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(TaskValidationError::EmptyTitle)
    ));
}

#[test]
fn edit_toggle_and_remove_delegate_to_store_semantics() {
    let service = service();
    let added = service.add_task("full cycle", None).unwrap();

    let edited = service
        .edit_task(
            added.id,
            TaskPatch {
                description: Some("with detail".to_string()),
                ..TaskPatch::default()
            },
        )
        .unwrap()
        .expect("task should exist");
    assert_eq!(edited.description.as_deref(), Some("with detail"));

    let toggled = service
        .toggle_task(added.id)
        .unwrap()
        .expect("task should exist");
    assert!(toggled.completed);

    assert!(service.remove_task(added.id).unwrap());
    assert!(service.list_tasks().unwrap().is_empty());
}

#[test]
fn unknown_ids_surface_as_sentinels() {
    let service = service();
    let unknown = Uuid::new_v4();

    assert!(service
        .edit_task(unknown, TaskPatch::default())
        .unwrap()
        .is_none());
    assert!(service.toggle_task(unknown).unwrap().is_none());
    assert!(!service.remove_task(unknown).unwrap());
}
