use super::MemoryWindow;
use crate::domain::models::Exchange;
use crate::domain::models::History;

fn history_of(pairs: Vec<(&str, &str)>) -> History {
    let mut history = History::default();
    for (human, ai) in pairs {
        history.record(Exchange::new(human, ai));
    }
    return history;
}

#[test]
fn it_returns_full_history_when_shorter_than_window() {
    let history = history_of(vec![("hi", "hello"), ("how are you", "good")]);
    let window = MemoryWindow::build(&history, 5);

    assert_eq!(window.len(), 2);
    assert_eq!(window[0], Exchange::new("hi", "hello"));
    assert_eq!(window[1], Exchange::new("how are you", "good"));
}

#[test]
fn it_returns_full_history_at_exact_window_size() {
    let history = history_of(vec![("a", "1"), ("b", "2"), ("c", "3")]);
    let window = MemoryWindow::build(&history, 3);

    assert_eq!(window, history.exchanges());
}

#[test]
fn it_keeps_only_the_most_recent_exchanges() {
    let history = history_of(vec![("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")]);
    let window = MemoryWindow::build(&history, 2);

    assert_eq!(window.len(), 2);
    assert_eq!(window[0], Exchange::new("c", "3"));
    assert_eq!(window[1], Exchange::new("d", "4"));
}

#[test]
fn it_windows_down_to_a_single_exchange() {
    let history = history_of(vec![("hi", "hello"), ("how are you", "good")]);
    let window = MemoryWindow::build(&history, 1);

    assert_eq!(window, [Exchange::new("how are you", "good")]);
}

#[test]
fn it_returns_empty_for_empty_history() {
    let history = History::default();
    let window = MemoryWindow::build(&history, 5);

    assert!(window.is_empty());
}

#[test]
fn it_returns_empty_for_zero_window() {
    let history = history_of(vec![("hi", "hello")]);
    let window = MemoryWindow::build(&history, 0);

    assert!(window.is_empty());
}

#[test]
fn it_does_not_mutate_history() {
    let history = history_of(vec![("a", "1"), ("b", "2"), ("c", "3")]);
    let before = history.exchanges().to_vec();

    let first = MemoryWindow::build(&history, 2).to_vec();
    let second = MemoryWindow::build(&history, 2).to_vec();

    assert_eq!(first, second);
    assert_eq!(history.exchanges(), before);
}
