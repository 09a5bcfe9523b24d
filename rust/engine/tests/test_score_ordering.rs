use std::cmp::Ordering;

use pokerdrill_engine::cards::Card;
use pokerdrill_engine::deck::Deck;
use pokerdrill_engine::hand::{compare, evaluate, HandEvaluation};

// Brute-force reference: best of the 21 five-card subsets, compared as
// (category, tiebreak values).
fn rank5(cards: &[Card]) -> (u8, Vec<u8>) {
    let mut values: Vec<u8> = cards.iter().map(Card::value).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));

    let mut groups: Vec<(usize, u8)> = Vec::new();
    for &v in &values {
        match groups.iter_mut().find(|g| g.1 == v) {
            Some(g) => g.0 += 1,
            None => groups.push((1, v)),
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = if groups.len() == 5 && values[0] - values[4] == 4 {
        Some(values[0])
    } else if values == [14, 5, 4, 3, 2] {
        Some(5)
    } else {
        None
    };
    let by_group: Vec<u8> = groups.iter().map(|g| g.1).collect();
    let counts: Vec<usize> = groups.iter().map(|g| g.0).collect();

    match (straight_high, flush, counts.as_slice()) {
        (Some(h), true, _) => (9, vec![h]),
        (_, _, [4, 1]) => (8, by_group),
        (_, _, [3, 2]) => (7, by_group),
        (_, true, _) => (6, values),
        (Some(h), _, _) => (5, vec![h]),
        (_, _, [3, 1, 1]) => (4, by_group),
        (_, _, [2, 2, 1]) => (3, by_group),
        (_, _, [2, 1, 1, 1]) => (2, by_group),
        _ => (1, values),
    }
}

fn best_of_seven(cards: &[Card]) -> (u8, Vec<u8>) {
    let mut best = (0, Vec::new());
    for skip_a in 0..7 {
        for skip_b in skip_a + 1..7 {
            let five: Vec<Card> = cards
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip_a && *i != skip_b)
                .map(|(_, c)| *c)
                .collect();
            best = best.max(rank5(&five));
        }
    }
    best
}

fn deal_pair(deck: &mut Deck) -> (Vec<Card>, Vec<Card>, Vec<Card>) {
    deck.shuffle();
    let board = deck.deal(5).unwrap();
    let a = deck.deal(2).unwrap();
    let b = deck.deal(2).unwrap();
    (board, a, b)
}

fn seven(hole: &[Card], board: &[Card]) -> Vec<Card> {
    hole.iter().chain(board).copied().collect()
}

#[test]
fn score_agrees_with_brute_force_showdown() {
    let mut deck = Deck::new_with_seed(0xC0FFEE);
    for _ in 0..2000 {
        let (board, a, b) = deal_pair(&mut deck);
        let ea = evaluate(&a, &board).unwrap();
        let eb = evaluate(&b, &board).unwrap();
        let ra = best_of_seven(&seven(&a, &board));
        let rb = best_of_seven(&seven(&b, &board));
        assert_eq!(
            compare(&ea, &eb),
            ra.cmp(&rb),
            "board {:?} a {:?} b {:?}",
            board,
            a,
            b
        );
    }
}

#[test]
fn higher_rank_always_scores_higher() {
    let mut deck = Deck::new_with_seed(17);
    let mut evals: Vec<HandEvaluation> = Vec::new();
    for _ in 0..400 {
        let (board, a, b) = deal_pair(&mut deck);
        evals.push(evaluate(&a, &board).unwrap());
        evals.push(evaluate(&b, &[]).unwrap());
    }
    for x in &evals {
        for y in &evals {
            if x.rank > y.rank {
                assert!(x.score > y.score, "{:?} vs {:?}", x, y);
            }
        }
    }
}

#[test]
fn winning_cards_come_from_the_seven() {
    let mut deck = Deck::new_with_seed(5150);
    for _ in 0..500 {
        let (board, a, _) = deal_pair(&mut deck);
        let all = seven(&a, &board);
        let e = evaluate(&a, &board).unwrap();
        assert_eq!(e.winning_cards.len(), 5);
        assert!(e.winning_cards.iter().all(|c| all.contains(c)));
        assert!(e.core_cards.iter().all(|c| e.winning_cards.contains(c)));
        assert_eq!(compare(&e, &e), Ordering::Equal);
    }
}
