use std::collections::HashMap;

use tokio::sync::RwLock;

pub struct ReportStore {
    reports: RwLock<HashMap<String, String>>,
}

impl ReportStore {
    pub fn new() -> Self {
        Self {
            reports: RwLock::new(HashMap::new()),
        }
    }

    pub async fn put(&self, report_text: String) -> String {
        let session_id = uuid::Uuid::new_v4().to_string();
        self.reports
            .write()
            .await
            .insert(session_id.clone(), report_text);
        session_id
    }

    pub async fn get(&self, session_id: &str) -> Option<String> {
        self.reports.read().await.get(session_id).cloned()
    }
}

impl Default for ReportStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_put_then_get_round_trips() {
        let store = ReportStore::new();
        let session_id = store.put("Week 1: finished module A.".to_string()).await;
        assert_eq!(
            store.get(&session_id).await.as_deref(),
            Some("Week 1: finished module A.")
        );
    }

    #[tokio::test]
    async fn test_each_put_returns_a_distinct_session_id() {
        let store = ReportStore::new();
        let first = store.put("report one".to_string()).await;
        let second = store.put("report one".to_string()).await;
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_get_unknown_session_returns_none() {
        let store = ReportStore::new();
        assert!(store.get("not-a-session").await.is_none());
    }

    #[tokio::test]
    async fn test_concurrent_puts_keep_every_report() {
        let store = Arc::new(ReportStore::new());

        let mut handles = vec![];
        for i in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(
                async move { store.put(format!("report {}", i)).await },
            ));
        }

        let mut session_ids = vec![];
        for handle in handles {
            session_ids.push(handle.await.unwrap());
        }

        session_ids.sort();
        session_ids.dedup();
        assert_eq!(session_ids.len(), 32);
        for session_id in &session_ids {
            assert!(store.get(session_id).await.is_some());
        }
    }
}
