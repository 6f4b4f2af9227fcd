//! Process-wide reference tables.
//!
//! The tables are built once, either explicitly through [`initialize`] or on
//! first use through [`current`]. Afterwards readers get an `Arc` snapshot
//! through a lock-free atomic load. [`reload`] and [`install`] build a
//! complete replacement off to the side and swap the pointer; a reader never
//! sees a mix of old and new definitions.

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use arc_swap::ArcSwap;
use serde::Serialize;

use crate::config::DataConfig;
use crate::currency::CurrencyRegistry;
use crate::error::Result;
use crate::hash::sha256_hex;
use crate::iban::IbanRegistry;

/// Provenance of one loaded table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSource {
    /// Embedded name or file path.
    pub name: String,
    /// SHA-256 of the raw table text.
    pub sha256: String,
}

impl TableSource {
    fn new(name: &str, content: &str) -> Self {
        Self {
            name: name.to_string(),
            sha256: sha256_hex(content.as_bytes()),
        }
    }
}

/// The complete set of reference tables.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    iban: Arc<IbanRegistry>,
    currencies: Arc<CurrencyRegistry>,
    iban_source: TableSource,
    currency_source: TableSource,
}

impl ReferenceTables {
    /// Build every table from the configured source.
    ///
    /// # Errors
    ///
    /// Returns the first load error. No tables are produced in that case.
    pub fn load(config: &DataConfig) -> Result<Self> {
        let (iban_name, iban_text) = config.iban_formats()?;
        let (currency_name, currency_text) = config.currencies()?;
        Self::from_tables(&iban_name, &iban_text, &currency_name, &currency_text)
    }

    /// Build every table from the embedded copies.
    pub fn load_embedded() -> Result<Self> {
        Self::load(&DataConfig::embedded())
    }

    /// Build the tables from in-memory text.
    pub fn from_tables(
        iban_name: &str,
        iban_text: &str,
        currency_name: &str,
        currency_text: &str,
    ) -> Result<Self> {
        let iban = IbanRegistry::load_from_str(iban_text, iban_name)?;
        let currencies = CurrencyRegistry::load_from_str(currency_text, currency_name)?;

        Ok(Self {
            iban: Arc::new(iban),
            currencies: Arc::new(currencies),
            iban_source: TableSource::new(iban_name, iban_text),
            currency_source: TableSource::new(currency_name, currency_text),
        })
    }

    /// IBAN format registry.
    pub fn iban(&self) -> &Arc<IbanRegistry> {
        &self.iban
    }

    /// ISO 4217 currency registry.
    pub fn currencies(&self) -> &Arc<CurrencyRegistry> {
        &self.currencies
    }

    /// Where the IBAN table came from.
    pub fn iban_source(&self) -> &TableSource {
        &self.iban_source
    }

    /// Where the currency table came from.
    pub fn currency_source(&self) -> &TableSource {
        &self.currency_source
    }
}

static ACTIVE: OnceLock<ArcSwap<ReferenceTables>> = OnceLock::new();
static BUILD: Mutex<()> = Mutex::new(());

/// Build the process-wide tables if they have not been built yet.
///
/// Concurrent first calls build exactly once; later calls return the active
/// tables without touching `config`.
///
/// # Errors
///
/// Returns the load error of the first build. Nothing is installed in that
/// case, so a later call may retry with a corrected configuration.
pub fn initialize(config: &DataConfig) -> Result<Arc<ReferenceTables>> {
    if let Some(active) = ACTIVE.get() {
        return Ok(active.load_full());
    }

    let _guard = BUILD.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(active) = ACTIVE.get() {
        return Ok(active.load_full());
    }

    let tables = ReferenceTables::load(config)?;
    log_installed(&tables);
    let active = ACTIVE.get_or_init(|| ArcSwap::from_pointee(tables));
    Ok(active.load_full())
}

/// Snapshot of the active tables, building them from the environment on
/// first use.
///
/// # Panics
///
/// Panics if the first build fails. A process must not validate against a
/// missing or partially loaded table; call [`initialize`] at startup to
/// handle the error instead.
pub fn current() -> Arc<ReferenceTables> {
    if let Some(active) = ACTIVE.get() {
        return active.load_full();
    }
    match initialize(&DataConfig::from_env()) {
        Ok(tables) => tables,
        Err(err) => panic!("reference tables failed to load: {err}"),
    }
}

/// Rebuild the tables from `config` and swap them in atomically.
///
/// # Errors
///
/// On error the active tables stay in place.
pub fn reload(config: &DataConfig) -> Result<Arc<ReferenceTables>> {
    let tables = ReferenceTables::load(config)?;
    Ok(install(tables))
}

/// Make `tables` the active tables.
pub fn install(tables: ReferenceTables) -> Arc<ReferenceTables> {
    log_installed(&tables);
    let tables = Arc::new(tables);
    let active = ACTIVE.get_or_init(|| ArcSwap::new(Arc::clone(&tables)));
    active.store(Arc::clone(&tables));
    tables
}

fn log_installed(tables: &ReferenceTables) {
    tracing::info!(
        iban_source = %tables.iban_source.name,
        iban_sha256 = %tables.iban_source.sha256,
        iban_formats = tables.iban.len(),
        currency_source = %tables.currency_source.name,
        currency_sha256 = %tables.currency_source.sha256,
        currencies = tables.currencies.len(),
        "Installed reference tables"
    );
}
