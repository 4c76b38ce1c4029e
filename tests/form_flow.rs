use abvledger::{
    core::ledger::Ledger,
    form::IngredientForm,
    ingredient::Rejection,
    view::Summary,
};

#[test]
fn default_form_is_not_submittable() {
    let ledger = Ledger::new();
    let form = IngredientForm::new();
    assert!(!form.is_valid(&ledger));
    assert_eq!(form.rejection(&ledger), Some(Rejection::EmptyName));
}

#[test]
fn submit_adds_and_resets_fields() {
    let mut ledger = Ledger::new();
    let mut form = IngredientForm::new().name("Vodka").amount(50.0).abv(40.0);

    assert!(form.is_valid(&ledger));
    form.submit(&mut ledger).expect("accepted");

    assert_eq!(form, IngredientForm::default());
    assert!(ledger.contains("Vodka"));
}

#[test]
fn duplicate_submit_keeps_typed_values() {
    let mut ledger = Ledger::new();
    IngredientForm::new()
        .name("Vodka")
        .amount(50.0)
        .abv(40.0)
        .submit(&mut ledger)
        .expect("first");

    let mut again = IngredientForm::new().name("Vodka").amount(25.0).abv(37.5);
    assert!(!again.is_valid(&ledger));
    assert!(again.submit(&mut ledger).is_none());
    assert_eq!(again.name, "Vodka");
    assert_eq!(again.amount, 25.0);
    assert_eq!(ledger.len(), 1);
}

#[test]
fn validity_follows_ledger_contents() {
    let mut ledger = Ledger::new();
    let form = IngredientForm::new().name("Gin").amount(45.0).abv(41.0);

    ledger.add(form.candidate());
    assert!(!form.is_valid(&ledger));

    ledger.remove("Gin");
    assert!(form.is_valid(&ledger));
}

#[test]
fn summary_lists_entries_and_totals() {
    let mut ledger = Ledger::new();
    for (name, amount, abv) in [("Vodka", 50.0, 40.0), ("Juice", 100.0, 0.0)] {
        IngredientForm::new()
            .name(name)
            .amount(amount)
            .abv(abv)
            .submit(&mut ledger)
            .expect("accepted");
    }

    assert_eq!(
        Summary::of(&ledger).to_string(),
        "Ingredients\n  Vodka (50ml @ 40%)\n  Juice (100ml)\nCalculated\nTotal Vol: 150ml\nTotal ABV: 13.33%"
    );
}
