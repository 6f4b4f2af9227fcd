//! Validators and table swaps. Kept in its own binary because it replaces
//! the process-wide tables.

use std::sync::Arc;

use idcheck_standards::{ReferenceTables, embedded, tables};
use idcheck_validate::{CurrencyPredicate, IbanPredicate, Validator};

#[test]
fn default_validators_follow_installed_tables() {
    let before = tables::current();
    let pinned = IbanPredicate::with_registry(Arc::clone(before.iban()));
    let following = IbanPredicate::new();
    assert!(following.validate("BE68539007547034"));

    let dutch_only = ReferenceTables::from_tables(
        "test:iban",
        "Netherlands\t18\t4a,10n\tNLkk bbbb cccc cccc cc\n",
        "test:currencies",
        "EUR\t978\tEuro\tNetherlands\n",
    )
    .unwrap();
    tables::install(dutch_only);

    assert!(following.validate("NL91ABNA0417164300"));
    assert!(!following.validate("BE68539007547034"));
    assert!(pinned.validate("BE68539007547034"));

    let currency = CurrencyPredicate::new();
    assert!(currency.validate("EUR"));
    assert!(!currency.validate("USD"));

    tables::install(ReferenceTables::load_embedded().unwrap());
    assert!(following.validate("BE68539007547034"));
    assert!(currency.validate("USD"));
    assert_eq!(
        tables::current().iban_source().name,
        format!("embedded:{}", embedded::IBAN_FORMATS_FILE)
    );
}
