use pokerdrill_engine::cards::{parse_cards, Card};
use pokerdrill_engine::errors::EvalError;
use pokerdrill_engine::hand::evaluate;

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).unwrap()
}

#[test]
fn rejects_wrong_hole_count() {
    let board = cards("Qs Js Ts 3h 2d");
    assert_eq!(
        evaluate(&cards("As"), &board),
        Err(EvalError::HoleCardCount { actual: 1 })
    );
    assert_eq!(
        evaluate(&cards("As Ks Kd"), &board),
        Err(EvalError::HoleCardCount { actual: 3 })
    );
}

#[test]
fn rejects_partial_board() {
    for board in ["Qs", "Qs Js Ts", "Qs Js Ts 3h", "Qs Js Ts 3h 2d 9c"] {
        let board = cards(board);
        assert_eq!(
            evaluate(&cards("As Ks"), &board),
            Err(EvalError::BoardCardCount {
                actual: board.len()
            })
        );
    }
}

#[test]
fn rejects_duplicate_cards() {
    let dup: Card = "Qs".parse().unwrap();
    assert_eq!(
        evaluate(&cards("As Qs"), &cards("Qs Js Ts 3h 2d")),
        Err(EvalError::DuplicateCard { card: dup })
    );
    assert_eq!(
        evaluate(&cards("As As"), &[]),
        Err(EvalError::DuplicateCard {
            card: "As".parse().unwrap()
        })
    );
}

#[test]
fn error_messages_name_the_problem() {
    let err = evaluate(&cards("As"), &[]).unwrap_err();
    assert_eq!(err.to_string(), "Expected 2 hole cards, got 1");
    let err = evaluate(&cards("As Ks"), &cards("2c")).unwrap_err();
    assert_eq!(err.to_string(), "Expected 0 or 5 community cards, got 1");
    let err = evaluate(&cards("As As"), &[]).unwrap_err();
    assert_eq!(err.to_string(), "Card As appears more than once");
}
