use std::sync::Arc;

use quicklink::LinkStore;
use quicklink::services::{HOME_PATH, RedirectService, Route, RouteOutcome};
use quicklink::storage::{KvLinkStorage, MemoryKvStore};

const ORIGIN: &str = "http://localhost:5173";

fn memory_store() -> LinkStore {
    LinkStore::new(
        Arc::new(KvLinkStorage::new(Arc::new(MemoryKvStore::new()), "urls", ORIGIN)),
        ORIGIN,
    )
}

#[cfg(test)]
mod dispatch_tests {
    use super::*;

    #[test]
    fn test_home_route() {
        let store = memory_store();
        let outcome = RedirectService::dispatch(&store, Route::parse("/"), "").unwrap();
        assert_eq!(outcome, RouteOutcome::ShortenForm);
    }

    #[test]
    fn test_stats_route_lists_all() {
        let store = memory_store();
        store.create("https://a.example", 30, Some("a")).unwrap();
        store.create("https://b.example", 30, Some("b")).unwrap();

        let outcome = RedirectService::dispatch(&store, Route::parse("/stats"), "").unwrap();

        match outcome {
            RouteOutcome::Stats(links) => {
                assert_eq!(links.len(), 2);
                assert_eq!(links[0].code, "a");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_stats_route_does_not_count_visits() {
        let store = memory_store();
        store.create("https://a.example", 30, Some("a")).unwrap();

        RedirectService::dispatch(&store, Route::Stats, "").unwrap();

        assert_eq!(store.lookup("a").unwrap().clicks, 0);
    }

    #[test]
    fn test_code_route_redirects_and_counts() {
        let store = memory_store();
        let link = store.create("https://example.com", 30, Some("abc123")).unwrap();

        let outcome =
            RedirectService::dispatch(&store, Route::parse(&link.short), "https://ref.example")
                .unwrap();

        assert_eq!(outcome, RouteOutcome::Redirect("https://example.com".to_string()));
        let link = store.lookup("abc123").unwrap();
        assert_eq!(link.clicks, 1);
        assert_eq!(link.history[0].referrer, "https://ref.example");
    }

    #[test]
    fn test_unknown_code_navigates_home() {
        let store = memory_store();

        let outcome = RedirectService::dispatch(&store, Route::parse("/nope"), "").unwrap();

        assert_eq!(outcome, RouteOutcome::Navigate(HOME_PATH.to_string()));
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn test_unmatched_route() {
        let store = memory_store();
        let outcome = RedirectService::dispatch(&store, Route::parse("/a/b/c"), "").unwrap();
        assert_eq!(outcome, RouteOutcome::Unmatched("/a/b/c".to_string()));
    }

    #[test]
    fn test_code_named_stats_is_shadowed() {
        let store = memory_store();
        store.create("https://example.com", 30, Some("stats")).unwrap();

        let outcome = RedirectService::dispatch(&store, Route::parse("/stats"), "").unwrap();

        assert!(matches!(outcome, RouteOutcome::Stats(_)));
        assert_eq!(store.lookup("stats").unwrap().clicks, 0);
    }
}
