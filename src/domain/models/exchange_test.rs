use super::Exchange;
use super::History;

#[test]
fn it_starts_empty() {
    let history = History::default();

    assert!(history.is_empty());
    assert_eq!(history.len(), 0);
    assert_eq!(history.exchanges().len(), 0);
}

#[test]
fn it_records_exchanges_in_order() {
    let mut history = History::default();
    history.record(Exchange::new("hi", "hello"));
    history.record(Exchange::new("how are you", "good"));

    assert_eq!(history.len(), 2);
    assert!(!history.is_empty());
    assert_eq!(history.exchanges()[0], Exchange::new("hi", "hello"));
    assert_eq!(history.exchanges()[1], Exchange::new("how are you", "good"));
}
