use chrono::{NaiveDate, NaiveDateTime};
use criminal_registry::domain::admin::NewAdmin;
use criminal_registry::domain::crime::NewCrime;
use criminal_registry::domain::criminal::{NewCriminal, UpdateCriminal};
use criminal_registry::domain::event::NewCriminalEvent;
use criminal_registry::domain::training::NewTraining;
use criminal_registry::domain::types::{
    AdminEmail, AdminUsername, CrimeType, CriminalName, ImageCount, PublicId,
};
use criminal_registry::pagination::PageRequest;
use criminal_registry::query::{
    CriminalField, CriminalQuery, Predicate, QueryRequest, SortKey, TextField,
};
use criminal_registry::repository::errors::RepositoryError;
use criminal_registry::repository::{
    AdminReader, AdminWriter, CriminalReader, CriminalWriter, DashboardReader, DieselRepository,
    EventListQuery, EventReader, EventWriter, TrainingListQuery, TrainingReader, TrainingWriter,
};

mod common;

fn day(d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, d)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn new_criminal(name: &str, crime: Option<&str>, location: Option<&str>, d: u32) -> NewCriminal {
    NewCriminal::new(
        PublicId::new(),
        CriminalName::new(name).unwrap(),
        crime.map(str::to_string),
        location.map(str::to_string),
        day(d),
        "tester",
    )
}

fn crime(kind: &str) -> NewCrime {
    NewCrime::new(CrimeType::new(kind).unwrap(), None)
}

fn names(query: &CriminalQuery, repo: &DieselRepository) -> (usize, Vec<String>) {
    let (total, items) = repo.list_criminals(query).unwrap();
    let names = items
        .into_iter()
        .map(|c| c.criminal_name.unwrap_or_default())
        .collect();
    (total, names)
}

#[test]
fn test_criminal_repository_crud() {
    let test_db = common::TestDb::new("test_criminal_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_criminal(
            &new_criminal("John Doe", Some("Theft"), Some("NY"), 1)
                .with_crimes(vec![crime("Burglary"), crime("Fraud")]),
        )
        .unwrap();
    assert_eq!(created.criminal_name.as_deref(), Some("John Doe"));
    assert_eq!(created.created_by.as_deref(), Some("tester"));

    let loaded = repo.get_criminal_by_guid(created.guid).unwrap().unwrap();
    assert_eq!(loaded, created);
    assert_eq!(repo.list_crimes(&[created.id]).unwrap().len(), 2);

    let updates = UpdateCriminal::new(
        Some("Johnny Doe".to_string()),
        None,
        Some(String::new()),
        None,
        "editor",
    );
    let updated = repo.update_criminal(created.id, &updates).unwrap();
    assert_eq!(updated.criminal_name.as_deref(), Some("Johnny Doe"));
    assert_eq!(updated.crime.as_deref(), Some("Theft"));
    assert_eq!(updated.location, None);
    assert_eq!(updated.date_of_crime, day(1));
    assert_eq!(updated.updated_by.as_deref(), Some("editor"));
    assert!(updated.updated_at.is_some());

    repo.delete_criminal(created.id).unwrap();
    assert!(repo.get_criminal_by_guid(created.guid).unwrap().is_none());
    assert!(repo.list_crimes(&[created.id]).unwrap().is_empty());

    assert!(matches!(
        repo.delete_criminal(created.id),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_update_replaces_or_clears_crimes() {
    let test_db = common::TestDb::new("test_update_replaces_or_clears_crimes.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_criminal(
            &new_criminal("Jane", None, None, 2).with_crimes(vec![crime("Arson"), crime("Theft")]),
        )
        .unwrap();

    // Absent list keeps the existing crimes.
    let untouched = UpdateCriminal::new(None, None, None, None, "editor");
    repo.update_criminal(created.id, &untouched).unwrap();
    assert_eq!(repo.list_crimes(&[created.id]).unwrap().len(), 2);

    let replaced = UpdateCriminal::new(None, None, None, None, "editor")
        .with_crimes(Some(vec![crime("Forgery")]));
    repo.update_criminal(created.id, &replaced).unwrap();
    let crimes = repo.list_crimes(&[created.id]).unwrap();
    assert_eq!(crimes.len(), 1);
    assert_eq!(crimes[0].crime_type.as_deref(), Some("Forgery"));

    let cleared =
        UpdateCriminal::new(None, None, None, None, "editor").with_crimes(Some(Vec::new()));
    repo.update_criminal(created.id, &cleared).unwrap();
    assert!(repo.list_crimes(&[created.id]).unwrap().is_empty());
}

#[test]
fn test_update_missing_criminal_is_not_found() {
    let test_db = common::TestDb::new("test_update_missing_criminal_is_not_found.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_criminal(&new_criminal("Ghost", None, None, 3))
        .unwrap();
    repo.delete_criminal(created.id).unwrap();

    let updates = UpdateCriminal::new(Some("Back".to_string()), None, None, None, "editor");
    assert!(matches!(
        repo.update_criminal(created.id, &updates),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_list_criminals_filters_search_sort_and_pages() {
    let test_db = common::TestDb::new("test_list_criminals_filters_search_sort_and_pages.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_criminal(&new_criminal("Alice", Some("Theft"), Some("Paris"), 1))
        .unwrap();
    repo.create_criminal(&new_criminal("Bob", Some("Fraud"), Some("Berlin"), 3))
        .unwrap();
    repo.create_criminal(&new_criminal("Carol", Some("Theft"), None, 2))
        .unwrap();
    repo.create_criminal(&new_criminal("dave", None, Some("theft street"), 4))
        .unwrap();

    // Default ordering is newest crime first.
    let (total, all) = names(&CriminalQuery::new(), &repo);
    assert_eq!(total, 4);
    assert_eq!(all, vec!["dave", "Bob", "Carol", "Alice"]);

    // Exact match is case-sensitive.
    let exact = CriminalQuery::new().filter(Predicate::Equals(TextField::Crime, "Theft".into()));
    let (total, matched) = names(&exact, &repo);
    assert_eq!(total, 2);
    assert_eq!(matched, vec!["Carol", "Alice"]);

    let lower = CriminalQuery::new().filter(Predicate::Equals(TextField::Crime, "theft".into()));
    assert_eq!(names(&lower, &repo).0, 0);

    // Search scans name, crime and location, also case-sensitively.
    let (total, found) = names(&CriminalQuery::new().search("heft"), &repo);
    assert_eq!(total, 3);
    assert_eq!(found, vec!["dave", "Carol", "Alice"]);

    let (total, found) = names(&CriminalQuery::new().search("Theft"), &repo);
    assert_eq!(total, 2);
    assert_eq!(found, vec!["Carol", "Alice"]);

    // Absent locations sort first when ascending.
    let by_location = CriminalQuery::new().sort_by(SortKey::ascending(CriminalField::Text(
        TextField::Location,
    )));
    assert_eq!(
        names(&by_location, &repo).1,
        vec!["Carol", "Bob", "Alice", "dave"]
    );

    // The total ignores paging.
    let second_page = CriminalQuery::new()
        .sort_by(SortKey::ascending(CriminalField::Text(
            TextField::CriminalName,
        )))
        .paginate(2, 3);
    let (total, page) = names(&second_page, &repo);
    assert_eq!(total, 4);
    assert_eq!(page, vec!["dave"]);

    let past_end = CriminalQuery::new().paginate(5, 10);
    let (total, page) = names(&past_end, &repo);
    assert_eq!(total, 4);
    assert!(page.is_empty());
}

#[test]
fn test_sql_listing_agrees_with_in_memory_query() {
    let test_db = common::TestDb::new("test_sql_listing_agrees_with_in_memory_query.db");
    let repo = DieselRepository::new(test_db.pool());

    for (i, (name, crime, location)) in [
        ("Ann", Some("Theft"), Some("Rome")),
        ("Ben", Some("Theft"), None),
        ("Cid", None, Some("Oslo")),
        ("Dee", Some("Arson"), Some("Rome")),
        ("Eve", Some("Theft"), Some("Rome")),
    ]
    .into_iter()
    .enumerate()
    {
        repo.create_criminal(&new_criminal(name, crime, location, (i % 2) as u32 + 1))
            .unwrap();
    }

    let (_, everything) = repo
        .list_criminals(&CriminalQuery::new().paginate(1, 100))
        .unwrap();

    let request = QueryRequest {
        filters: Some("location==Rome;bogus==x".to_string()),
        sorts: Some("-crime,dateOfCrime,unknown".to_string()),
        page: Some(1),
        page_size: Some(2),
        search: None,
    };
    let query = CriminalQuery::parse(&request);

    let (sql_total, sql_items) = repo.list_criminals(&query).unwrap();
    let (mem_total, mem_items) = query.apply(everything);
    assert_eq!(sql_total, 3);
    assert_eq!(sql_total, mem_total);
    assert_eq!(sql_items, mem_items);
}

#[test]
fn test_admin_repository() {
    let test_db = common::TestDb::new("test_admin_repository.db");
    let repo = DieselRepository::new(test_db.pool());

    let email = AdminEmail::new("root@example.com").unwrap();
    let new_admin = NewAdmin::new(
        AdminUsername::new("root").unwrap(),
        email.clone(),
        "hash".to_string(),
        "seed",
    );
    let created = repo.create_admin(&new_admin).unwrap();
    assert_eq!(created.username, "root");

    let loaded = repo.get_admin_by_email(&email).unwrap().unwrap();
    assert_eq!(loaded.id, created.id);
    assert_eq!(loaded.password_hash, "hash");

    let missing = AdminEmail::new("nobody@example.com").unwrap();
    assert!(repo.get_admin_by_email(&missing).unwrap().is_none());
}

#[test]
fn test_training_repository_lists_newest_first() {
    let test_db = common::TestDb::new("test_training_repository_lists_newest_first.db");
    let repo = DieselRepository::new(test_db.pool());

    for (d, count) in [(1, 10), (3, 30), (2, 20)] {
        let training = NewTraining::new(Some(day(d)), ImageCount::new(count).unwrap(), "engine");
        repo.create_training(&training).unwrap();
    }

    let (total, items) = repo.list_trainings(TrainingListQuery::new()).unwrap();
    assert_eq!(total, 3);
    let counts: Vec<i32> = items
        .iter()
        .map(|t| t.number_of_images_trained.get())
        .collect();
    assert_eq!(counts, vec![30, 20, 10]);

    let (total, page) = repo
        .list_trainings(TrainingListQuery::new().paginate(PageRequest::new(Some(2), Some(2))))
        .unwrap();
    assert_eq!(total, 3);
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].number_of_images_trained.get(), 10);
}

#[test]
fn test_event_repository_scopes_by_guid() {
    let test_db = common::TestDb::new("test_event_repository_scopes_by_guid.db");
    let repo = DieselRepository::new(test_db.pool());

    let tracked = PublicId::new();
    let other = PublicId::new();
    repo.create_event(&NewCriminalEvent::new(tracked, Some(day(1)), Some("Gate 1".into()), "cam"))
        .unwrap();
    repo.create_event(&NewCriminalEvent::new(tracked, Some(day(2)), None, "cam"))
        .unwrap();
    repo.create_event(&NewCriminalEvent::new(other, Some(day(3)), None, "cam"))
        .unwrap();

    let (total, events) = repo.list_events(EventListQuery::new(tracked)).unwrap();
    assert_eq!(total, 2);
    assert_eq!(events[0].event_at, day(2));
    assert_eq!(events[1].location.as_deref(), Some("Gate 1"));
    assert!(events.iter().all(|e| e.criminal_guid == tracked));
}

#[test]
fn test_dashboard_totals_and_ranking() {
    let test_db = common::TestDb::new("test_dashboard_totals_and_ranking.db");
    let repo = DieselRepository::new(test_db.pool());

    let empty = repo.dashboard_totals().unwrap();
    assert_eq!(empty.total_criminals, 0);
    assert_eq!(empty.total_data_trained, 0);
    assert!(empty.top_criminals.is_empty());

    let one = repo
        .create_criminal(&new_criminal("One", None, None, 1).with_crimes(vec![crime("A")]))
        .unwrap();
    let three = repo
        .create_criminal(
            &new_criminal("Three", None, None, 1)
                .with_crimes(vec![crime("A"), crime("B"), crime("C")]),
        )
        .unwrap();
    let removed = repo
        .create_criminal(
            &new_criminal("Removed", None, None, 1)
                .with_crimes(vec![crime("A"), crime("B"), crime("C"), crime("D")]),
        )
        .unwrap();
    repo.create_criminal(&new_criminal("None", None, None, 1))
        .unwrap();
    repo.delete_criminal(removed.id).unwrap();

    repo.create_admin(&NewAdmin::new(
        AdminUsername::new("root").unwrap(),
        AdminEmail::new("root@example.com").unwrap(),
        "hash".to_string(),
        "seed",
    ))
    .unwrap();

    for count in [5, 7] {
        repo.create_training(&NewTraining::new(
            None,
            ImageCount::new(count).unwrap(),
            "engine",
        ))
        .unwrap();
    }

    let totals = repo.dashboard_totals().unwrap();
    assert_eq!(totals.total_criminals, 3);
    assert_eq!(totals.total_admins, 1);
    assert_eq!(totals.total_data_trained, 12);

    let ranked: Vec<(PublicId, i64)> = totals
        .top_criminals
        .iter()
        .map(|t| (t.guid, t.crime_count))
        .collect();
    assert_eq!(ranked, vec![(three.guid, 3), (one.guid, 1)]);
    assert_eq!(totals.top_criminals[0].criminal_name.as_deref(), Some("Three"));
}
