//! Batch statistics
//!
//! Summarizes the results of a batch for the operator.

use crate::output::FinalResult;
use chrono::{DateTime, Utc};

/// Batch statistics summary
#[derive(Debug, Clone, PartialEq)]
pub struct BatchStatistics {
    /// Number of sites with a result
    pub total_sites: usize,

    /// Sites with at least one email
    pub sites_with_emails: usize,

    /// Sites with at least one phone number
    pub sites_with_phones: usize,

    /// Sites with an email or a phone number
    pub sites_with_contacts: usize,

    /// Sites whose run failed
    pub error_results: usize,

    /// Emails across all sites
    pub total_emails: usize,

    /// Phone numbers across all sites
    pub total_phones: usize,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl BatchStatistics {
    /// Computes statistics over the results of one batch
    pub fn from_results(
        results: &[FinalResult],
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        Self {
            total_sites: results.len(),
            sites_with_emails: results.iter().filter(|r| r.emails.is_found()).count(),
            sites_with_phones: results.iter().filter(|r| r.numbers.is_found()).count(),
            sites_with_contacts: results
                .iter()
                .filter(|r| r.emails.is_found() || r.numbers.is_found())
                .count(),
            error_results: results.iter().filter(|r| r.is_error()).count(),
            total_emails: results.iter().map(|r| r.emails.values().len()).sum(),
            total_phones: results.iter().map(|r| r.numbers.values().len()).sum(),
            started_at,
            finished_at,
        }
    }

    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }

    /// Share of sites that yielded any contact, in percent
    pub fn hit_rate(&self) -> f64 {
        if self.total_sites == 0 {
            return 0.0;
        }
        (self.sites_with_contacts as f64 / self.total_sites as f64) * 100.0
    }
}

/// Prints statistics to stderr in a formatted manner
///
/// Stdout is reserved for the JSON results.
pub fn print_statistics(stats: &BatchStatistics) {
    eprintln!("=== Batch Statistics ===\n");

    eprintln!("Overview:");
    eprintln!("  Sites processed: {}", stats.total_sites);
    eprintln!("  Sites with emails: {}", stats.sites_with_emails);
    eprintln!("  Sites with phone numbers: {}", stats.sites_with_phones);
    eprintln!("  Failed runs: {}", stats.error_results);
    eprintln!();

    eprintln!("Contacts:");
    eprintln!("  Emails: {}", stats.total_emails);
    eprintln!("  Phone numbers: {}", stats.total_phones);
    eprintln!();

    eprintln!("Started: {}", stats.started_at.to_rfc3339());
    eprintln!("Finished: {}", stats.finished_at.to_rfc3339());
    eprintln!("Duration: {}s", stats.duration_seconds());
    eprintln!("Hit Rate: {:.1}%", stats.hit_rate());
}
