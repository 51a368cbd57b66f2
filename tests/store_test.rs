use gradebook_api::clients::ActorClient;
use gradebook_api::lifecycle::{DemoCounts, RosterSystem, StoreOptions};
use gradebook_api::model::{CourseCreate, CourseId, CourseUpdate, UserCreate, UserId, UserUpdate};
use gradebook_api::user_actor::UserError;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn user(first: &str, last: &str) -> UserCreate {
    UserCreate {
        first_name: first.to_string(),
        last_name: last.to_string(),
        phone: "555".to_string(),
        country: "US".to_string(),
        city: "NYC".to_string(),
        email: format!("{}@x.com", first.to_lowercase()),
    }
}

fn replacement(username: Option<&str>) -> UserUpdate {
    UserUpdate {
        first_name: "Janet".to_string(),
        last_name: "Doe".to_string(),
        username: username.map(str::to_string),
        phone: "777".to_string(),
        country: "CA".to_string(),
        city: "Ottawa".to_string(),
        email: "janet@x.com".to_string(),
    }
}

#[tokio::test]
async fn test_ids_and_usernames_are_unique() {
    let system = RosterSystem::new(StoreOptions::default());

    // Same name every time: uniqueness has to come from the stamp.
    let mut ids = HashSet::new();
    let mut usernames = HashSet::new();
    for _ in 0..50 {
        let created = system.user_client.create_user(user("Jane", "Doe")).await.unwrap();
        assert!(created.username.starts_with("jane.doe."));
        ids.insert(created.id);
        usernames.insert(created.username);
    }
    assert_eq!(ids.len(), 50);
    assert_eq!(usernames.len(), 50);
    assert!(!ids.contains(&UserId(0)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let system = RosterSystem::new(StoreOptions::default());

    let mut handles = vec![];
    for i in 0..20 {
        let client = system.user_client.clone();
        handles.push(tokio::spawn(async move {
            client.create_user(user("Sam", &format!("Lee{i}"))).await
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap().unwrap().id);
    }
    let expected: HashSet<UserId> = (1..=20).map(UserId).collect();
    assert_eq!(ids, expected);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_preserves_id_and_username() {
    let system = RosterSystem::new(StoreOptions::default());
    let created = system.user_client.create_user(user("Jane", "Doe")).await.unwrap();

    let updated = system
        .user_client
        .update_user(created.id, replacement(None))
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.username, created.username);
    // Full replace: every other field comes from the payload.
    assert_eq!(updated.first_name, "Janet");
    assert_eq!(updated.city, "Ottawa");

    let renamed = system
        .user_client
        .update_user(created.id, replacement(Some("jd")))
        .await
        .unwrap();
    assert_eq!(renamed.username, "jd");

    let stored = system.user_client.get(created.id).await.unwrap().unwrap();
    assert_eq!(stored, renamed);

    let missing = system.user_client.update_user(UserId(99), replacement(None)).await;
    assert!(matches!(missing, Err(UserError::NotFound(_))));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_is_idempotent_and_does_not_cascade() {
    let system = RosterSystem::new(StoreOptions::default());
    let jane = system.user_client.create_user(user("Jane", "Doe")).await.unwrap();
    system
        .course_client
        .create_course(CourseCreate::new("Physics II", [91.0, 89.0, 90.0], jane.id))
        .await
        .unwrap();

    assert_eq!(system.user_client.delete(jane.id).await.unwrap(), 1);
    assert_eq!(system.user_client.delete(jane.id).await.unwrap(), 0);
    assert!(system.user_client.get(jane.id).await.unwrap().is_none());

    let orphans = system.course_client.courses_for_user(jane.id).await.unwrap();
    assert_eq!(orphans.len(), 1);

    // New ids keep counting up after a delete.
    let next = system.user_client.create_user(user("Bob", "Roe")).await.unwrap();
    assert_eq!(next.id, UserId(2));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_course_lifecycle_with_dangling_user() {
    let system = RosterSystem::new(StoreOptions::default());

    let course = system
        .course_client
        .create_course(CourseCreate::new("Ghost Studies", [1.0, 2.0, 3.0], UserId(404)))
        .await
        .unwrap();
    assert_eq!(course.id, CourseId(1));
    assert_eq!(course.user_id, UserId(404));

    let update = CourseUpdate {
        name: "Ghost Studies II".to_string(),
        first_grade: 50.0,
        second_grade: 60.0,
        final_grade: 55.0,
        user_id: UserId(405),
    };
    let updated = system.course_client.update_course(course.id, update).await.unwrap();
    assert_eq!(updated.id, CourseId(1));
    assert_eq!(updated.user_id, UserId(405));

    assert!(system.course_client.courses_for_user(UserId(404)).await.unwrap().is_empty());
    assert_eq!(system.course_client.delete(course.id).await.unwrap(), 1);
    assert_eq!(system.course_client.delete(course.id).await.unwrap(), 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_seed_is_guarded_and_reset_is_deterministic() {
    let system = RosterSystem::new(StoreOptions::default());
    let demo = DemoCounts {
        users: 5,
        courses: 20,
    };

    assert_eq!(system.demo.seed().await.unwrap(), demo);
    assert_eq!(system.demo.seed().await.unwrap(), demo);

    let users = system.user_client.list_users(None).await.unwrap();
    let ids: Vec<UserId> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, (1..=5).map(UserId).collect::<Vec<_>>());
    assert_eq!(users[0].first_name, "Alice");
    assert!(users[0].username.starts_with("alice.johnson."));

    // Mess with the data, then reset.
    system.user_client.delete(UserId(1)).await.unwrap();
    system.user_client.create_user(user("Jane", "Doe")).await.unwrap();
    system.course_client.delete(CourseId(3)).await.unwrap();

    assert_eq!(system.demo.reset().await.unwrap(), demo);
    let users = system.user_client.list_users(None).await.unwrap();
    assert_eq!(users[0].id, UserId(1));
    assert_eq!(users[0].first_name, "Alice");
    let courses = system.course_client.list_courses().await.unwrap();
    assert_eq!(courses.first().unwrap().id, CourseId(1));
    assert_eq!(courses.last().unwrap().id, CourseId(20));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_seed_skips_when_only_courses_exist() {
    let system = RosterSystem::new(StoreOptions::default());
    system
        .course_client
        .create_course(CourseCreate::new("Solo", [1.0, 1.0, 1.0], UserId(1)))
        .await
        .unwrap();

    let counts = system.demo.seed().await.unwrap();
    assert_eq!(counts, DemoCounts { users: 0, courses: 1 });

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_search_on_demo_data() {
    let system = RosterSystem::new(StoreOptions::default());
    system.demo.seed().await.unwrap();

    let alice = system.user_client.list_users(Some("ALICE")).await.unwrap();
    assert_eq!(alice.len(), 1);
    assert_eq!(alice[0].last_name, "Johnson");

    // City is not a searched field.
    assert!(system.user_client.list_users(Some("boston")).await.unwrap().is_empty());

    let by_phone = system.user_client.list_users(Some("0103")).await.unwrap();
    assert_eq!(by_phone[0].first_name, "Emma");

    let everyone = system.user_client.list_users(Some("university.edu")).await.unwrap();
    assert_eq!(everyone.len(), 5);

    assert_eq!(system.user_client.list_users(Some("")).await.unwrap().len(), 5);

    system.shutdown().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_reset_excludes_concurrent_creates() {
    let system = RosterSystem::new(StoreOptions::default());
    system.demo.seed().await.unwrap();

    let stop = Arc::new(AtomicBool::new(false));
    let writer = {
        let demo = system.demo.clone();
        let users = system.user_client.clone();
        let stop = stop.clone();
        tokio::spawn(async move {
            while !stop.load(Ordering::Relaxed) {
                let _shared = demo.enter().await;
                users.create_user(user("Sam", "Lee")).await.unwrap();
            }
        })
    };

    for _ in 0..200 {
        let counts = system.demo.reset().await.unwrap();
        assert_eq!(counts, DemoCounts { users: 5, courses: 20 });
    }

    stop.store(true, Ordering::Relaxed);
    writer.await.unwrap();

    // Whatever the writer added after the last reset comes after the demo users.
    let users = system.user_client.list_users(None).await.unwrap();
    assert_eq!(users[0].id, UserId(1));
    assert_eq!(users[4].first_name, "Sofia");

    system.shutdown().await.unwrap();
}
