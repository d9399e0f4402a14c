//! The loaded table is shared read-only across threads without locking.

use std::sync::Arc;
use std::thread;

use unirank::{UniversityQa, load_from_reader};

fn shared_context() -> Arc<UniversityQa> {
    let table = load_from_reader(
        "Institution_Name,RANK_2025,Overall_Score\n\
         University of Cambridge,5,97.2\n\
         Stanford University,6,96.1\n\
         ETH Zurich,7,93.8\n"
            .as_bytes(),
    )
    .expect("fixture loads");
    Arc::new(UniversityQa::from_table(table))
}

#[test]
fn concurrent_lookups_agree() {
    let qa = shared_context();
    let queries = ["cambridge", "stanford university", "ETH Zurich", "nowhere"];

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let qa = Arc::clone(&qa);
            let query = queries[i % queries.len()].to_string();
            thread::spawn(move || {
                let result = qa.details(&query).expect("dataset loaded");
                (query, serde_json::to_string(&result).expect("serialize"))
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    for (query, rendered) in &results {
        let expected = serde_json::to_string(&qa.details(query).expect("dataset loaded"))
            .expect("serialize");
        assert_eq!(rendered, &expected, "thread result differs for {query}");
    }
}

#[test]
fn context_clones_share_one_table() {
    let qa = shared_context();
    let clone = (*qa).clone();
    let a = qa.table().expect("loaded") as *const _;
    let b = clone.table().expect("loaded") as *const _;
    assert_eq!(a, b);
}
