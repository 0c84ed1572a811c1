use anyhow::{Context, Result, bail};
use ccs_types::{INQUIRIES_KEY, Inquiry};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use tracing::{debug, warn};

/// String key-value persistence, shaped after browser `localStorage`.
///
/// Everything runs on the browser main thread, so implementations take `&self`
/// and use interior mutability rather than locks.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Store used when the browser refuses storage access (private mode, sandboxed frames).
#[derive(Default)]
pub struct NoopStore;

impl KeyValueStore for NoopStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Read a scalar preference. Backend failures read as "nothing saved".
pub fn load_preference<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value.filter(|v| !v.is_empty()),
        Err(err) => {
            warn!(key, error = %err, "preference read failed");
            None
        }
    }
}

pub fn save_preference<S: KeyValueStore + ?Sized>(store: &S, key: &str, value: &str) -> Result<()> {
    store
        .set(key, value)
        .with_context(|| format!("failed to save preference {key}"))?;
    debug!(key, value, "preference saved");
    Ok(())
}

/// Append-only log of contact inquiries, stored as one JSON array.
///
/// Records already in the array are carried over verbatim, whatever their
/// shape; only the new inquiry is serialised from [`Inquiry`].
pub struct InquiryLog<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> InquiryLog<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Stored records as raw JSON. Absent or `null` is an empty log; anything
    /// that is not a JSON array is an error.
    fn records(&self) -> Result<Vec<Value>> {
        let Some(raw) = self
            .store
            .get(INQUIRIES_KEY)
            .context("failed to read inquiry log")?
        else {
            return Ok(Vec::new());
        };

        let parsed: Value =
            serde_json::from_str(&raw).context("stored inquiry log is not valid JSON")?;
        match parsed {
            Value::Null => Ok(Vec::new()),
            Value::Array(records) => Ok(records),
            other => bail!("stored inquiry log is not an array (found {})", kind(&other)),
        }
    }

    /// Load every recorded inquiry, oldest first.
    pub fn load(&self) -> Result<Vec<Inquiry>> {
        self.records()?
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                serde_json::from_value(record)
                    .with_context(|| format!("inquiry record {index} has an unexpected shape"))
            })
            .collect()
    }

    /// Append one inquiry and return the log length afterwards.
    ///
    /// Nothing is written when the stored log cannot be read as an array.
    pub fn append(&self, inquiry: Inquiry) -> Result<usize> {
        let mut records = self.records().inspect_err(|err| {
            warn!(error = %err, "inquiry log left untouched");
        })?;
        records.push(serde_json::to_value(&inquiry).context("failed to encode inquiry")?);
        let encoded = serde_json::to_string(&records).context("failed to encode inquiry log")?;
        self.store
            .set(INQUIRIES_KEY, &encoded)
            .context("failed to write inquiry log")?;
        debug!(count = records.len(), "inquiry recorded");
        Ok(records.len())
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
