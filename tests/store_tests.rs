use marquee::models::{NewShow, Show, ShowId};
use marquee::store::{InMemoryRepository, ShowRepository};

fn candidate(title: &str, theatre_id: i64, time: &str) -> NewShow {
    NewShow {
        title: title.to_string(),
        theatre_id,
        time: time.to_string(),
    }
}

#[tokio::test]
async fn test_seed_catalogue_contents_and_order() {
    let repo = InMemoryRepository::new();
    let shows = repo.list_shows().await.unwrap();

    let expected = vec![
        Show {
            show_id: 1,
            title: "The Lion King".to_string(),
            theatre_id: 1,
            time: "7:00 PM".to_string(),
        },
        Show {
            show_id: 2,
            title: "Hamilton".to_string(),
            theatre_id: 2,
            time: "8:00 PM".to_string(),
        },
        Show {
            show_id: 3,
            title: "Wicked".to_string(),
            theatre_id: 3,
            time: "9:00 PM".to_string(),
        },
        Show {
            show_id: 4,
            title: "Les Misérables".to_string(),
            theatre_id: 1,
            time: "6:00 PM".to_string(),
        },
    ];
    assert_eq!(shows, expected);
}

#[tokio::test]
async fn test_fetch_show_matches_stored_id() {
    let repo = InMemoryRepository::new();

    for id in 1..=4 {
        let show = repo.fetch_show(ShowId::new(id)).await.unwrap();
        assert_eq!(show.unwrap().show_id, id);
    }

    assert!(repo.fetch_show(ShowId::new(11)).await.unwrap().is_none());
    assert!(repo.fetch_show(ShowId::new(-1)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_add_is_append_only_in_call_order() {
    let repo = InMemoryRepository::new();

    let first = repo
        .add_show(candidate("Phantom of the Opera", 2, "5:00 PM"))
        .await
        .unwrap();
    let second = repo.add_show(candidate("Cats", 3, "2:00 PM")).await.unwrap();

    assert_eq!(first.show_id, 5);
    assert_eq!(second.show_id, 6);

    let shows = repo.list_shows().await.unwrap();
    assert_eq!(shows.len(), 6);
    // Seeds untouched, additions appended in call order.
    assert_eq!(shows[0].title, "The Lion King");
    assert_eq!(shows[4], first);
    assert_eq!(shows[5], second);
}

#[tokio::test]
async fn test_add_returns_submitted_fields_verbatim() {
    let repo = InMemoryRepository::new();
    let added = repo
        .add_show(candidate("Phantom of the Opera", 2, "5:00 PM"))
        .await
        .unwrap();

    assert_eq!(added.title, "Phantom of the Opera");
    assert_eq!(added.theatre_id, 2);
    assert_eq!(added.time, "5:00 PM");
}

#[tokio::test]
async fn test_each_add_grows_list_by_one() {
    let repo = InMemoryRepository::new();

    for n in 1..=3 {
        let before = repo.list_shows().await.unwrap().len();
        let added = repo
            .add_show(candidate(&format!("Show {}", n), n, "1:00 PM"))
            .await
            .unwrap();
        let after = repo.list_shows().await.unwrap().len();

        assert_eq!(after, before + 1);
        assert_eq!(added.show_id, before as i64 + 1);
    }
}
