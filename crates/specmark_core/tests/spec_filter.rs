use specmark_core::spec::{filter, from_fn};
use specmark_core::{
    And, Color, ColorIs, FieldEquals, Or, Product, Record, Size, SizeIs, SpecError,
    Specification, SpecificationExt, Xor,
};
use std::sync::Arc;

fn catalog() -> Vec<Product> {
    vec![
        Product::new("Apple", Color::Green, Size::Small).unwrap(),
        Product::new("Tree", Color::Green, Size::Large).unwrap(),
        Product::new("House", Color::Blue, Size::Large).unwrap(),
    ]
}

#[test]
fn green_and_large_selects_only_the_tree() {
    let products = catalog();
    let spec = ColorIs(Color::Green).and(SizeIs(Size::Large));

    let matched = filter(&products, &spec).unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0], &products[1]);
}

#[test]
fn field_equals_matches_typed_leaves_on_products() {
    let products = catalog();
    let by_field: And<Product> = And::empty()
        .with(FieldEquals::new("color", "green"))
        .with(FieldEquals::new("size", "large"));
    let by_type = ColorIs(Color::Green).and(SizeIs(Size::Large));

    assert_eq!(
        filter(&products, &by_field).unwrap(),
        filter(&products, &by_type).unwrap()
    );
}

#[test]
fn single_operand_and_behaves_like_its_operand() {
    let products = catalog();
    let alone = ColorIs(Color::Blue);
    let wrapped = And::empty().with(ColorIs(Color::Blue));

    for product in &products {
        assert_eq!(
            wrapped.is_satisfied(product).unwrap(),
            alone.is_satisfied(product).unwrap()
        );
    }
}

#[test]
fn binary_combinators_match_boolean_operators() {
    let products = catalog();
    let a = Arc::new(ColorIs(Color::Green));
    let b = Arc::new(SizeIs(Size::Large));

    let and = Arc::clone(&a).and(Arc::clone(&b));
    let or = Arc::clone(&a).or(Arc::clone(&b));
    let xor = Arc::clone(&a).xor(Arc::clone(&b));
    let not = Arc::clone(&a).not();

    for product in &products {
        let va = a.is_satisfied(product).unwrap();
        let vb = b.is_satisfied(product).unwrap();
        assert_eq!(and.is_satisfied(product).unwrap(), va && vb);
        assert_eq!(or.is_satisfied(product).unwrap(), va || vb);
        assert_eq!(xor.is_satisfied(product).unwrap(), va ^ vb);
        assert_eq!(not.is_satisfied(product).unwrap(), !va);
    }
}

#[test]
fn filtering_is_the_exact_image_of_the_predicate() {
    let products = catalog();
    let spec = Or::empty()
        .with(SizeIs(Size::Small))
        .with(ColorIs(Color::Blue));

    let expected: Vec<&Product> = products
        .iter()
        .filter(|p| spec.is_satisfied(p).unwrap())
        .collect();
    assert_eq!(filter(&products, &spec).unwrap(), expected);
    assert_eq!(
        expected.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
        vec!["Apple", "House"]
    );
}

#[test]
fn empty_collection_filters_to_empty() {
    let products: Vec<Product> = Vec::new();
    assert!(filter(&products, &ColorIs(Color::Red)).unwrap().is_empty());
}

#[test]
fn evaluation_is_idempotent() {
    let products = catalog();
    let spec = Xor::empty()
        .with(ColorIs(Color::Green))
        .with(SizeIs(Size::Large))
        .with(from_fn(|p: &Product| p.name.len() > 4));

    let first = filter(&products, &spec).unwrap();
    let second = filter(&products, &spec).unwrap();
    assert_eq!(first, second);
}

#[test]
fn record_missing_field_is_reported_not_skipped() {
    let records = vec![
        Record::new().with("color", "green").with("size", "large"),
        Record::new().with("color", "green"),
    ];
    let spec: And<Record> =
        FieldEquals::new("color", "green").and(FieldEquals::new("size", "large"));

    let err = filter(&records, &spec).unwrap_err();
    assert_eq!(err, SpecError::MissingField("size".to_string()));
}

#[test]
fn short_circuit_hides_errors_behind_deciding_operand() {
    let records = vec![Record::new().with("color", "red")];
    let spec: And<Record> =
        FieldEquals::new("color", "green").and(FieldEquals::new("size", "large"));

    assert!(filter(&records, &spec).unwrap().is_empty());
}

#[test]
fn specifications_are_shareable_across_threads() {
    let spec: Arc<dyn Specification<Product>> =
        Arc::new(ColorIs(Color::Green).and(SizeIs(Size::Large)));
    let products = Arc::new(catalog());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let spec = Arc::clone(&spec);
            let products = Arc::clone(&products);
            std::thread::spawn(move || {
                filter(products.as_slice(), spec.as_ref())
                    .unwrap()
                    .len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 1);
    }
}
