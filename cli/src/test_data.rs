use anyhow::Context;
use rand::Rng;
use serde::Deserialize;
use std::path::Path;

/// One cardholder used to fill in demo requests.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cardholder {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub phone: String,
    pub cvv: String,
    pub expiration_date: String,
    #[serde(default)]
    pub email: String,
    pub amount: f64,
    pub card_pan: String,
}

/// Cardholder records with a sequential cursor.
///
/// `next` and `previous` wrap around. `random` picks any record without moving the
/// sequential cursor, but it does change what `current` returns.
#[derive(Debug)]
pub struct TestData {
    records: Vec<Cardholder>,
    current: usize,
    cursor: usize,
}

impl TestData {
    pub fn new(records: Vec<Cardholder>) -> anyhow::Result<Self> {
        if records.is_empty() {
            anyhow::bail!("Test data must contain at least one cardholder");
        }

        Ok(Self {
            records,
            current: 0,
            cursor: 0,
        })
    }

    /// Loads the records from a JSON array.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read test data from {}", path.display()))?;
        let records: Vec<Cardholder> = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid test data in {}", path.display()))?;

        Self::new(records)
    }

    pub fn builtin() -> Self {
        Self {
            records: builtin_records(),
            current: 0,
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn next(&mut self) -> &Cardholder {
        self.cursor = (self.cursor + 1) % self.records.len();
        self.current = self.cursor;
        tracing::debug!("Next test record ({})", self.current);
        &self.records[self.current]
    }

    pub fn previous(&mut self) -> &Cardholder {
        self.cursor = self.cursor.checked_sub(1).unwrap_or(self.records.len() - 1);
        self.current = self.cursor;
        tracing::debug!("Previous test record ({})", self.current);
        &self.records[self.current]
    }

    pub fn random(&mut self) -> &Cardholder {
        self.current = rand::thread_rng().gen_range(0..self.records.len());
        tracing::debug!("Random test record ({})", self.current);
        &self.records[self.current]
    }

    pub fn current(&self) -> &Cardholder {
        &self.records[self.current]
    }
}

fn builtin_records() -> Vec<Cardholder> {
    let record = |first: &str, last: &str, city: &str, state: &str, zip: &str, pan: &str, amount: f64| {
        Cardholder {
            first_name: first.to_string(),
            last_name: last.to_string(),
            address: "123 Main St.".to_string(),
            city: city.to_string(),
            state: state.to_string(),
            zip: zip.to_string(),
            country: "US".to_string(),
            company: "Worldpay".to_string(),
            phone: "512-250-7865".to_string(),
            cvv: "999".to_string(),
            expiration_date: "04/28".to_string(),
            email: format!("{}.{}@example.com", first, last).to_lowercase(),
            amount,
            card_pan: pan.to_string(),
        }
    };

    vec![
        record("Jane", "Doe", "Austin", "TX", "78759", "4444333322221111", 10.00),
        record("John", "Smith", "Denver", "CO", "80202", "5500000000000004", 11.50),
        record("Maria", "Garcia", "Miami", "FL", "33101", "4111111111111111", 7.25),
        record("Wei", "Chen", "Seattle", "WA", "98101", "370000000000002", 23.99),
    ]
}
