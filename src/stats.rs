use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainRecord {
    pub name: String,
    pub count: u64,
}

impl DomainRecord {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Domains ordered by descending count. Equal counts keep first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainReport {
    pub domains: Vec<DomainRecord>,
    pub rows_read: u64,
    pub rows_invalid: u64,
}

impl DomainReport {
    pub fn total_occurrences(&self) -> u64 {
        self.domains.iter().map(|d| d.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

/// Per-domain counts in the order domains were first seen.
#[derive(Debug, Default)]
pub struct DomainTally {
    index: HashMap<String, usize>,
    domains: Vec<DomainRecord>,
    rows_read: u64,
    rows_invalid: u64,
}

impl DomainTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_invalid(&mut self) {
        self.rows_read += 1;
        self.rows_invalid += 1;
    }

    pub fn record_valid(&mut self, domain: &str) {
        self.rows_read += 1;
        self.add(domain, 1);
    }

    fn add(&mut self, domain: &str, count: u64) {
        match self.index.get(domain) {
            Some(&slot) => self.domains[slot].count += count,
            None => {
                self.index.insert(domain.to_string(), self.domains.len());
                self.domains.push(DomainRecord::new(domain, count));
            }
        }
    }

    /// Folds `other` into `self`. Domains new to `self` are appended in `other`'s order.
    pub fn merge(&mut self, other: DomainTally) {
        for record in other.domains {
            self.add(&record.name, record.count);
        }
        self.rows_read += other.rows_read;
        self.rows_invalid += other.rows_invalid;
    }

    pub fn into_report(self) -> DomainReport {
        let mut domains = self.domains;
        // sort_by is stable
        domains.sort_by(|a, b| b.count.cmp(&a.count));
        DomainReport {
            domains,
            rows_read: self.rows_read,
            rows_invalid: self.rows_invalid,
        }
    }
}
