mod common;

use std::sync::Arc;

use common::{cat_params, create_test_agency, create_test_agency_with, targets, UnreachableBreeds};
use spycat_core::{
    params::{CreateCat, CreateMission, UpdateCat, UpdateMission, UpdateTarget},
    AgencyError, ErrorKind,
};
use uuid::Uuid;

#[tokio::test]
async fn test_create_and_get_cat() {
    let (_temp_dir, agency) = create_test_agency().await;

    let cat = agency
        .cats()
        .create_cat(&cat_params("Tom"))
        .await
        .expect("Failed to create cat");
    assert_eq!(cat.name, "Tom");
    assert_eq!(cat.breed, "Siamese");

    let fetched = agency.cats().get_cat(cat.id).await.expect("Failed to get cat");
    assert_eq!(fetched, cat);

    let all = agency.cats().list_cats().await.expect("Failed to list cats");
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_create_cat_rejects_non_positive_numbers() {
    let (_temp_dir, agency) = create_test_agency().await;

    for (experience, salary) in [(0, 100), (-1, 100), (2, 0), (2, -50)] {
        let err = agency
            .cats()
            .create_cat(&CreateCat {
                experience,
                salary,
                ..cat_params("Tom")
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    let all = agency.cats().list_cats().await.unwrap();
    assert!(all.is_empty(), "No cat should have been persisted");
}

#[tokio::test]
async fn test_create_cat_rejects_unknown_breed() {
    let (_temp_dir, agency) = create_test_agency().await;

    let err = agency
        .cats()
        .create_cat(&CreateCat {
            breed: "Dragon".to_string(),
            ..cat_params("Tom")
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(err.detail(), "Invalid breed provided");
    assert!(agency.cats().list_cats().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_cat_treats_lookup_failure_as_invalid_breed() {
    let (_temp_dir, agency) = create_test_agency_with(Arc::new(UnreachableBreeds)).await;

    let err = agency
        .cats()
        .create_cat(&cat_params("Tom"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(err.detail(), "Invalid breed provided");
    assert!(agency.cats().list_cats().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_missing_cat() {
    let (_temp_dir, agency) = create_test_agency().await;

    let err = agency.cats().get_cat(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, AgencyError::CatNotFound { .. }));
}

#[tokio::test]
async fn test_update_cat_salary() {
    let (_temp_dir, agency) = create_test_agency().await;
    let cat = agency.cats().create_cat(&cat_params("Tom")).await.unwrap();

    let updated = agency
        .cats()
        .update_cat(cat.id, UpdateCat { salary: Some(2500) })
        .await
        .expect("Failed to update cat");
    assert_eq!(updated.salary, 2500);
    assert_eq!(updated.name, cat.name);
    assert_eq!(updated.experience, cat.experience);

    // Empty update leaves the record untouched
    let unchanged = agency
        .cats()
        .update_cat(cat.id, UpdateCat { salary: None })
        .await
        .unwrap();
    assert_eq!(unchanged, updated);

    let err = agency
        .cats()
        .update_cat(cat.id, UpdateCat { salary: Some(0) })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let err = agency
        .cats()
        .update_cat(Uuid::new_v4(), UpdateCat { salary: Some(10) })
        .await
        .unwrap_err();
    assert!(matches!(err, AgencyError::CatNotFound { .. }));
}

#[tokio::test]
async fn test_delete_cat_guarded_by_missions() {
    let (_temp_dir, agency) = create_test_agency().await;
    let cat = agency.cats().create_cat(&cat_params("Tom")).await.unwrap();
    let free_cat = agency.cats().create_cat(&cat_params("Felix")).await.unwrap();

    agency
        .missions()
        .create_mission(&CreateMission {
            targets: targets(&[("A", "X")]),
        })
        .await
        .unwrap();
    let mission = agency.missions().list_missions().await.unwrap().remove(0);
    agency
        .missions()
        .update_mission(
            mission.id,
            &UpdateMission {
                is_completed: None,
                cat_id: Some(cat.id),
            },
        )
        .await
        .unwrap();

    let err = agency.cats().delete_cat(cat.id).await.unwrap_err();
    assert!(matches!(err, AgencyError::CatHasMissions { .. }));
    assert_eq!(err.detail(), "Can't delete cat with missions");
    assert!(agency.cats().get_cat(cat.id).await.is_ok());

    agency
        .cats()
        .delete_cat(free_cat.id)
        .await
        .expect("Unlinked cat should be deletable");
    let err = agency.cats().get_cat(free_cat.id).await.unwrap_err();
    assert!(matches!(err, AgencyError::CatNotFound { .. }));

    let err = agency.cats().delete_cat(free_cat.id).await.unwrap_err();
    assert!(matches!(err, AgencyError::CatNotFound { .. }));
}

#[tokio::test]
async fn test_create_mission_target_bounds() {
    let (_temp_dir, agency) = create_test_agency().await;

    for count in [0usize, 4] {
        let names: Vec<(&str, &str)> = (0..count).map(|_| ("T", "C")).collect();
        let err = agency
            .missions()
            .create_mission(&CreateMission {
                targets: targets(&names),
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.detail(), "Mission targets quantity must be from 1 to 3");
    }
    assert!(agency.missions().list_missions().await.unwrap().is_empty());

    for count in 1..=3usize {
        let names: Vec<(&str, &str)> = (0..count).map(|_| ("T", "C")).collect();
        agency
            .missions()
            .create_mission(&CreateMission {
                targets: targets(&names),
            })
            .await
            .expect("Failed to create mission");
    }

    let missions = agency.missions().list_missions().await.unwrap();
    assert_eq!(missions.len(), 3);
    for (expected, mission) in (1..=3usize).zip(&missions) {
        assert_eq!(mission.targets.len(), expected);
        assert!(mission.targets.iter().all(|t| t.mission_id == mission.id));
        assert!(!mission.is_completed);
        assert!(mission.cat.is_none());
    }
}

#[tokio::test]
async fn test_get_missing_mission() {
    let (_temp_dir, agency) = create_test_agency().await;

    let err = agency
        .missions()
        .get_mission(Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, AgencyError::MissionNotFound { .. }));

    let err = agency
        .missions()
        .update_mission(Uuid::new_v4(), &UpdateMission::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AgencyError::MissionNotFound { .. }));
}

#[tokio::test]
async fn test_mission_lifecycle_scenario() {
    let (_temp_dir, agency) = create_test_agency().await;
    let cat = agency.cats().create_cat(&cat_params("Tom")).await.unwrap();
    let other = agency.cats().create_cat(&cat_params("Felix")).await.unwrap();

    agency
        .missions()
        .create_mission(&CreateMission {
            targets: targets(&[("A", "X"), ("B", "Y")]),
        })
        .await
        .unwrap();

    let mission = agency.missions().list_missions().await.unwrap().remove(0);
    assert_eq!(mission.targets.len(), 2);
    assert_eq!(mission.targets[0].name, "A");
    assert_eq!(mission.targets[1].country, "Y");
    assert!(!mission.is_completed);
    assert!(mission.cat_id.is_none());

    // Link a cat
    let linked = agency
        .missions()
        .update_mission(
            mission.id,
            &UpdateMission {
                is_completed: None,
                cat_id: Some(cat.id),
            },
        )
        .await
        .expect("Failed to link cat");
    assert_eq!(linked.cat_id, Some(cat.id));
    assert_eq!(linked.cat.as_ref().map(|c| c.name.as_str()), Some("Tom"));

    // A second cat is rejected and the first link stays
    let err = agency
        .missions()
        .update_mission(
            mission.id,
            &UpdateMission {
                is_completed: None,
                cat_id: Some(other.id),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AgencyError::MissionCatAssigned { .. }));
    let reloaded = agency.missions().get_mission(mission.id).await.unwrap();
    assert_eq!(reloaded.cat_id, Some(cat.id));

    // Completing the mission completes every target
    let completed = agency
        .missions()
        .update_mission(
            mission.id,
            &UpdateMission {
                is_completed: Some(true),
                cat_id: None,
            },
        )
        .await
        .expect("Failed to complete mission");
    assert!(completed.is_completed);
    assert!(completed.targets.iter().all(|t| t.is_completed));

    // Completion is terminal, whatever value is sent
    for value in [false, true] {
        let err = agency
            .missions()
            .update_mission(
                mission.id,
                &UpdateMission {
                    is_completed: Some(value),
                    cat_id: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AgencyError::MissionAlreadyCompleted { .. }));
    }
}

#[tokio::test]
async fn test_update_mission_with_unknown_cat() {
    let (_temp_dir, agency) = create_test_agency().await;
    agency
        .missions()
        .create_mission(&CreateMission {
            targets: targets(&[("A", "X")]),
        })
        .await
        .unwrap();
    let mission = agency.missions().list_missions().await.unwrap().remove(0);

    let err = agency
        .missions()
        .update_mission(
            mission.id,
            &UpdateMission {
                is_completed: None,
                cat_id: Some(Uuid::new_v4()),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AgencyError::CatNotFound { .. }));

    let reloaded = agency.missions().get_mission(mission.id).await.unwrap();
    assert!(reloaded.cat_id.is_none());
}

#[tokio::test]
async fn test_update_mission_false_is_a_no_op() {
    let (_temp_dir, agency) = create_test_agency().await;
    agency
        .missions()
        .create_mission(&CreateMission {
            targets: targets(&[("A", "X")]),
        })
        .await
        .unwrap();
    let mission = agency.missions().list_missions().await.unwrap().remove(0);

    let updated = agency
        .missions()
        .update_mission(
            mission.id,
            &UpdateMission {
                is_completed: Some(false),
                cat_id: None,
            },
        )
        .await
        .expect("Explicit false on an open mission should be accepted");
    assert!(!updated.is_completed);
    assert!(!updated.targets[0].is_completed);
    assert_eq!(updated.updated_at, mission.updated_at);
}

#[tokio::test]
async fn test_complete_mission_cascades_regardless_of_target_state() {
    let (_temp_dir, agency) = create_test_agency().await;
    agency
        .missions()
        .create_mission(&CreateMission {
            targets: targets(&[("A", "X"), ("B", "Y"), ("C", "Z")]),
        })
        .await
        .unwrap();
    let mission = agency.missions().list_missions().await.unwrap().remove(0);

    agency
        .missions()
        .update_target(
            mission.targets[1].id,
            UpdateTarget {
                notes: None,
                is_completed: Some(true),
            },
        )
        .await
        .unwrap();

    let completed = agency
        .missions()
        .update_mission(
            mission.id,
            &UpdateMission {
                is_completed: Some(true),
                cat_id: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(completed.open_targets(), 0);
}

#[tokio::test]
async fn test_update_target_rules() {
    let (_temp_dir, agency) = create_test_agency().await;
    agency
        .missions()
        .create_mission(&CreateMission {
            targets: targets(&[("A", "X")]),
        })
        .await
        .unwrap();
    let mission = agency.missions().list_missions().await.unwrap().remove(0);
    let target_id = mission.targets[0].id;

    // Open targets accept repeated updates
    let target = agency
        .missions()
        .update_target(
            target_id,
            UpdateTarget {
                notes: Some("Spotted near the harbour".to_string()),
                is_completed: None,
            },
        )
        .await
        .expect("Failed to update notes");
    assert_eq!(target.notes.as_deref(), Some("Spotted near the harbour"));
    assert!(!target.is_completed);

    let target = agency
        .missions()
        .update_target(
            target_id,
            UpdateTarget {
                notes: Some("Moved inland".to_string()),
                is_completed: Some(true),
            },
        )
        .await
        .expect("Failed to complete target");
    assert_eq!(target.notes.as_deref(), Some("Moved inland"));
    assert!(target.is_completed);

    // Completed targets are frozen
    let err = agency
        .missions()
        .update_target(
            target_id,
            UpdateTarget {
                notes: Some("Late note".to_string()),
                is_completed: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AgencyError::TargetAlreadyCompleted { .. }));

    let err = agency
        .missions()
        .update_target(
            target_id,
            UpdateTarget {
                notes: None,
                is_completed: Some(false),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AgencyError::TargetAlreadyCompleted { .. }));

    // Empty notes carry no change and are not written
    let target = agency
        .missions()
        .update_target(
            target_id,
            UpdateTarget {
                notes: Some(String::new()),
                is_completed: None,
            },
        )
        .await
        .expect("Empty notes on a completed target should be ignored");
    assert_eq!(target.notes.as_deref(), Some("Moved inland"));

    let err = agency
        .missions()
        .update_target(Uuid::new_v4(), UpdateTarget::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AgencyError::TargetNotFound { .. }));
}

#[tokio::test]
async fn test_delete_mission_rules() {
    let (_temp_dir, agency) = create_test_agency().await;
    let cat = agency.cats().create_cat(&cat_params("Tom")).await.unwrap();

    for _ in 0..2 {
        agency
            .missions()
            .create_mission(&CreateMission {
                targets: targets(&[("A", "X"), ("B", "Y")]),
            })
            .await
            .unwrap();
    }
    let missions = agency.missions().list_missions().await.unwrap();
    let (assigned, free) = (&missions[0], &missions[1]);

    agency
        .missions()
        .update_mission(
            assigned.id,
            &UpdateMission {
                is_completed: None,
                cat_id: Some(cat.id),
            },
        )
        .await
        .unwrap();

    let err = agency
        .missions()
        .delete_mission(assigned.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AgencyError::MissionCatAssigned { .. }));

    agency
        .missions()
        .delete_mission(free.id)
        .await
        .expect("Unassigned mission should be deletable");
    let err = agency.missions().get_mission(free.id).await.unwrap_err();
    assert!(matches!(err, AgencyError::MissionNotFound { .. }));

    // Targets went with the mission
    let err = agency
        .missions()
        .update_target(free.targets[0].id, UpdateTarget::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AgencyError::TargetNotFound { .. }));

    let err = agency.missions().delete_mission(free.id).await.unwrap_err();
    assert!(matches!(err, AgencyError::MissionNotFound { .. }));
}
