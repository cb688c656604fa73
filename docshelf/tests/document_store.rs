use chrono::{DateTime, Duration, Utc};
use rstest::{fixture, rstest};
use tracing_subscriber::EnvFilter;

use docshelf::{memory::InMemoryStore, prelude::*};

struct Shelf {
    store: DocumentStore<InMemoryStore>,
    now: DateTime<Utc>,
}

impl Shelf {
    fn at(&self, seconds: i64) -> DateTime<Utc> {
        self.now + Duration::seconds(seconds)
    }
}

fn authors() -> Vec<Author> {
    vec![
        Author::new("1", "Haruki Murakami"),
        Author::new("2", "George Orwell"),
        Author::new("3", "Jane Austen"),
        Author::new("4", "Mark Twain"),
        Author::new("5", "Agatha Christie"),
    ]
}

fn ids(documents: &[Document]) -> Vec<&str> {
    documents
        .iter()
        .filter_map(Document::id)
        .collect()
}

#[fixture]
fn shelf() -> Shelf {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let now = Utc::now();
    let authors = authors();
    let mut store = DocumentStore::builder(InMemoryStore::builder().build().unwrap())
        .id_generator(SequentialIdGenerator::new("doc-"))
        .build();

    let fixtures = [
        ("1", "The Silent Voice", "A compelling story of resilience.", 0, 0),
        ("2", "Winds of Change", "Exploring the depths of human emotion.", 1, 1000),
        ("3", "Shadows and Light", "An unforgettable tale of discovery.", 2, 100),
        ("4", "The Echoes of the Past", "A short and thrilling mystery.", 3, -1000),
        ("5", "Journey Through Time", "An adventure like no other.", 4, -100),
    ];

    for (id, title, content, author, offset) in fixtures {
        store.save(
            Document::builder()
                .title(title)
                .content(content)
                .author(authors[author].clone())
                .created(now + Duration::seconds(offset))
                .id(id)
                .build()
                .unwrap(),
        );
    }

    Shelf { store, now }
}

#[rstest]
fn test_save_without_id(mut shelf: Shelf) {
    let saved = shelf.store.save(Document::new(
        "The Voice",
        "A compelling story of resilience.",
        authors()[1].clone(),
        shelf.now,
    ));

    let id = saved.id().unwrap();
    assert!(!id.trim().is_empty());
    assert_eq!(shelf.store.find_by_id(id), Some(&saved));
}

#[test]
fn test_save_without_id_uses_uuid_by_default() {
    let mut store = DocumentStore::new(InMemoryStore::new());
    let saved = store.save(Document::new("t", "c", authors()[0].clone(), Utc::now()));

    assert_eq!(saved.id().unwrap().len(), 36);
}

#[rstest]
fn test_save_with_id(mut shelf: Shelf) {
    let saved = shelf.store.save(
        Document::new(
            "Beyond the Horizon",
            "A glimpse into the unknown future.",
            authors()[1].clone(),
            shelf.now,
        )
        .with_id("6"),
    );

    assert_eq!(saved.id(), Some("6"));
    assert_eq!(shelf.store.len(), 6);
}

#[rstest]
fn test_save_with_existing_id(mut shelf: Shelf) {
    let saved = shelf.store.save(
        Document::new(
            "JoJo's Bizarre Adventures: Steel Ball Run",
            "Go Johny! Go! Go!",
            authors()[4].clone(),
            shelf.at(-100),
        )
        .with_id("5"),
    );

    assert_ne!(saved.id(), Some("5"));
    assert_eq!(saved.id(), Some("doc-1"));
    assert_eq!(shelf.store.len(), 6);
    assert_eq!(shelf.store.get_by_id("5").unwrap().title, "Journey Through Time");
    assert_eq!(
        ids(&shelf.store.documents()),
        vec!["1", "2", "3", "4", "5", "doc-1"]
    );
}

#[rstest]
fn test_search(shelf: Shelf) {
    let request = SearchRequest::builder()
        .author_ids(["1", "2", "3"])
        .contains_contents(["An", "story", "human"])
        .title_prefixes(["of", "and"])
        .created_from(shelf.now)
        .created_to(shelf.at(5000))
        .build();

    let results = shelf.store.search(&request);

    assert_eq!(results.len(), 2);
    assert_eq!(ids(&results), vec!["2", "3"]);
}

#[rstest]
fn test_search_by_time(shelf: Shelf) {
    let request = SearchRequest::builder()
        .created_to(shelf.at(-5))
        .created_from(shelf.at(-2000))
        .build();

    assert_eq!(ids(&shelf.store.search(&request)), vec!["4", "5"]);
}

#[rstest]
fn test_search_by_title(shelf: Shelf) {
    let request = SearchRequest::builder()
        .title_prefixes(["Silent", "Light", "Journey"])
        .build();

    assert_eq!(ids(&shelf.store.search(&request)), vec!["1", "3", "5"]);
}

#[rstest]
fn test_search_all_fields_empty(shelf: Shelf) {
    let results = shelf.store.search(&SearchRequest::builder().build());

    assert_eq!(ids(&results), vec!["1", "2", "3", "4", "5"]);
}

#[rstest]
#[case(Some(-2000), Some(-5), &["4", "5"])]
#[case(Some(0), None, &["1", "2", "3"])]
#[case(None, Some(0), &["1", "4", "5"])]
#[case(Some(100), Some(100), &["3"])]
#[case(Some(5000), None, &[])]
#[case(Some(10), Some(-10), &[])]
fn test_search_by_time_range(
    shelf: Shelf,
    #[case] from: Option<i64>,
    #[case] to: Option<i64>,
    #[case] expected: &[&str],
) {
    let request = SearchRequest {
        created_from: from.map(|seconds| shelf.at(seconds)),
        created_to: to.map(|seconds| shelf.at(seconds)),
        ..Default::default()
    };

    assert_eq!(ids(&shelf.store.search(&request)), expected);
}

#[rstest]
#[case(&["An"], &["3", "5"])]
#[case(&["story", "human"], &["1", "2"])]
#[case(&["mystery"], &["4"])]
#[case(&["an"], &["2", "4"])]
#[case(&["zzz"], &[])]
fn test_search_by_content(shelf: Shelf, #[case] contents: &[&str], #[case] expected: &[&str]) {
    let request = SearchRequest::builder()
        .contains_contents(contents.iter().copied())
        .build();

    assert_eq!(ids(&shelf.store.search(&request)), expected);
}

#[rstest]
#[case(&["of", "and"], &["2", "3", "4"])]
#[case(&["The"], &["1", "4"])]
#[case(&["he"], &[])]
#[case(&["Shadows and"], &["3"])]
fn test_search_by_title_prefix(shelf: Shelf, #[case] prefixes: &[&str], #[case] expected: &[&str]) {
    let request = SearchRequest::builder()
        .title_prefixes(prefixes.iter().copied())
        .build();

    assert_eq!(ids(&shelf.store.search(&request)), expected);
}

#[rstest]
#[case(&["1", "5"], &["1", "5"])]
#[case(&["5", "1"], &["1", "5"])]
#[case(&["9"], &[])]
#[case(&[], &["1", "2", "3", "4", "5"])]
fn test_search_by_author(shelf: Shelf, #[case] authors: &[&str], #[case] expected: &[&str]) {
    let request = SearchRequest::builder()
        .author_ids(authors.iter().copied())
        .build();

    assert_eq!(ids(&shelf.store.search(&request)), expected);
}

#[rstest]
fn test_search_request_from_json(shelf: Shelf) {
    let request: SearchRequest = serde_json::from_str(
        r#"{ "authorIds": ["1", "2", "3"], "titlePrefixes": ["of", "and"] }"#,
    )
    .unwrap();

    assert_eq!(ids(&shelf.store.search(&request)), vec!["2", "3"]);
}

#[rstest]
fn test_query_with_filter_expression(shelf: Shelf) {
    let filter = Filter::starts_with(DocumentField::AuthorName, "Jane")
        .or(Filter::ends_with(DocumentField::Title, "Time"));

    assert_eq!(ids(&shelf.store.query(&filter)), vec!["3", "5"]);
}

#[rstest]
fn test_find_by_id(shelf: Shelf) {
    let document = shelf.store.find_by_id("5").unwrap();

    assert_eq!(document.title, "Journey Through Time");
    assert_eq!(document.author, authors()[4]);
    assert_eq!(document.created, shelf.at(-100));
}

#[rstest]
fn test_find_by_id_object_is_not_presented(shelf: Shelf) {
    assert!(shelf.store.find_by_id("6").is_none());
    assert_eq!(
        shelf.store.get_by_id("6"),
        Err(DocumentStoreError::DocumentNotFound("6".to_string()))
    );
}

#[rstest]
fn test_delete_keeps_order(mut shelf: Shelf) {
    let deleted = shelf.store.delete("3").unwrap();

    assert_eq!(deleted.title, "Shadows and Light");
    assert_eq!(ids(&shelf.store.documents()), vec!["1", "2", "4", "5"]);

    // freed ids can be reused
    let saved = shelf.store.save(deleted);
    assert_eq!(saved.id(), Some("3"));
    assert_eq!(ids(&shelf.store.documents()), vec!["1", "2", "4", "5", "3"]);
}

#[rstest]
fn test_clear(mut shelf: Shelf) {
    shelf.store.clear();

    assert!(shelf.store.is_empty());
    assert!(shelf.store.search(&SearchRequest::new()).is_empty());

    shelf.store.clear();
    assert!(shelf.store.is_empty());
}
