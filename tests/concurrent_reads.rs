use crossbeam_utils::thread;
use radix_lookup::RadixTree;
use std::sync::Arc;

fn command_tree() -> RadixTree {
    RadixTree::build([
        "help", "hello", "version", "verbose", "very", "in", "input", "out", "output",
    ])
}

#[test]
fn test_scoped_threads_share_borrowed_tree() {
    let tree = command_tree();
    let queries = ["help", "input-file", "verbose=2", "output.txt", "xyz", "hel"];

    thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|_| {
                for _ in 0..1_000 {
                    assert!(tree.contains("help"));
                    assert!(!tree.contains("hel"));
                    let found = tree.lookup_prefix("input-file").unwrap();
                    assert_eq!((found.key, found.tail), (&b"input"[..], &b"-file"[..]));
                    for query in &queries {
                        let _ = tree.lookup_prefix(query);
                    }
                }
            });
        }
    })
    .unwrap();
}

#[test]
fn test_arc_tree_moves_across_threads() {
    let tree = Arc::new(command_tree());
    let handles: Vec<_> = ["out", "output", "very", "help"]
        .into_iter()
        .map(|key| {
            let tree = Arc::clone(&tree);
            std::thread::spawn(move || tree.lookup_exact(key).map(<[u8]>::to_vec))
        })
        .collect();

    for (handle, key) in handles.into_iter().zip(["out", "output", "very", "help"]) {
        assert_eq!(handle.join().unwrap(), Some(key.as_bytes().to_vec()));
    }
}

#[test]
fn test_results_agree_across_threads() {
    let tree = command_tree();
    let queries: Vec<String> = (0..64)
        .map(|i| format!("{}{i}", ["in", "out", "ver", "help"][i % 4]))
        .collect();
    let expected: Vec<_> = queries.iter().map(|q| tree.lookup_prefix(q)).collect();

    thread::scope(|s| {
        let workers: Vec<_> = (0..4)
            .map(|_| s.spawn(|_| queries.iter().map(|q| tree.lookup_prefix(q)).collect::<Vec<_>>()))
            .collect();
        for worker in workers {
            assert_eq!(worker.join().unwrap(), expected);
        }
    })
    .unwrap();
}
