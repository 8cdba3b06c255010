use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::Result;
use crate::normalize::{extract_domains, normalize};
use crate::result::{Classification, RecordResult};
use crate::rules::{Category, RiskLevel, RuleSet};

pub type ProgressCallback = Arc<dyn Fn(usize, String) + Send + Sync>;

/// Applies a rule set to records. Holds no per-request state: the rule set
/// is read-only, so a single classifier can serve any number of records,
/// from any number of workers, without locks.
pub struct Classifier {
    rules: Arc<RuleSet>,
    progress_callback: Option<ProgressCallback>,
}

impl Classifier {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules: Arc::new(rules),
            progress_callback: None,
        }
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Classify one normalized text against its extracted domains.
    ///
    /// Total: returns Neutral/low in the worst case, never fails.
    pub fn classify(&self, text: &str, domains: &[String]) -> Classification {
        // The domain heuristic has absolute priority over text patterns,
        // even for empty text.
        if domains.iter().any(|d| self.rules.is_suspicious_domain(d)) {
            return Classification {
                category: Category::ScamPhishing,
                risk: RiskLevel::High,
            };
        }

        // First matching table wins; the scan order resolves ties.
        for rule in self.rules.rules() {
            if rule.matches(text) {
                return Classification {
                    category: rule.category,
                    risk: rule.risk,
                };
            }
        }

        Classification {
            category: Category::Neutral,
            risk: RiskLevel::Low,
        }
    }

    /// Run the full pipeline for one raw record: normalize, extract
    /// domains, classify.
    pub fn classify_record(&self, index: usize, raw: &str) -> RecordResult {
        let clean_text = normalize(raw);
        let domains = extract_domains(raw);
        let classification = self.classify(&clean_text, &domains);
        RecordResult::new(index, clean_text, domains, classification)
    }

    /// Classify a batch of raw texts across a worker pool. Results come
    /// back in input order.
    pub async fn classify_batch(
        &self,
        texts: Vec<String>,
        workers: usize,
    ) -> Result<Vec<RecordResult>> {
        let workers = workers.max(1);
        info!(
            "Classifying {} records with {} workers",
            texts.len(),
            workers
        );

        // Worker-owned queues, seeded round-robin up front. Classification
        // never produces new work, so each worker just drains its own queue.
        let worker_queues: Arc<Vec<Mutex<VecDeque<(usize, String)>>>> =
            Arc::new((0..workers).map(|_| Mutex::new(VecDeque::new())).collect());

        for (index, text) in texts.into_iter().enumerate() {
            let mut queue = worker_queues[index % workers].lock().await;
            queue.push_back((index, text));
        }

        let results: Arc<Mutex<Vec<RecordResult>>> = Arc::new(Mutex::new(Vec::new()));
        let mut worker_handles = Vec::new();

        for worker_id in 0..workers {
            let rules = self.rules.clone();
            let progress_cb = self.progress_callback.clone();
            let worker_queues = worker_queues.clone();
            let results = results.clone();

            let handle = tokio::spawn(async move {
                debug!("Worker {} started", worker_id);
                let classifier = Classifier {
                    rules,
                    progress_callback: None,
                };

                loop {
                    let work_item = {
                        let mut queue = worker_queues[worker_id].lock().await;
                        queue.pop_front()
                    };

                    let Some((index, text)) = work_item else {
                        break;
                    };

                    if let Some(ref callback) = progress_cb {
                        callback(worker_id, text.clone());
                    }

                    let result = classifier.classify_record(index, &text);

                    let mut results_lock = results.lock().await;
                    results_lock.push(result);
                }

                debug!("Worker {} finished", worker_id);
            });

            worker_handles.push(handle);
        }

        for handle in worker_handles {
            handle.await?;
        }

        let mut all_results = results.lock().await.clone();
        all_results.sort_by_key(|r| r.index);
        info!("Batch complete. {} records classified", all_results.len());
        Ok(all_results)
    }
}
